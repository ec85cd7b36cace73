use std::{cell::Cell, collections::HashMap};

use crate::indicators::{StageDescriptor, StageTotals};

use super::{IndicatorSource, StoreError, UserProfile};

/// In-memory source that counts every call made against it.
#[derive(Default)]
pub(crate) struct RecordingSource {
    totals: HashMap<&'static str, StageTotals>,
    profile: Option<UserProfile>,
    failing: bool,
    calls: Cell<usize>,
}

impl RecordingSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_totals(mut self, stage: &'static str, totals: StageTotals) -> Self {
        self.totals.insert(stage, totals);
        self
    }

    pub(crate) fn with_profile(mut self, name: &str, company: &str) -> Self {
        self.profile = Some(UserProfile {
            name: Some(name.to_string()),
            company: Some(company.to_string()),
        });
        self
    }

    pub(crate) fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record_call(&self) -> Result<(), StoreError> {
        self.calls.set(self.calls.get() + 1);
        if self.failing {
            return Err(StoreError::Query {
                table: "Etapa_1",
                user_id: 0,
                source: rusqlite::Error::QueryReturnedNoRows,
            });
        }
        Ok(())
    }
}

impl IndicatorSource for RecordingSource {
    fn stage_totals(
        &self,
        stages: &[StageDescriptor],
        _user_id: i64,
    ) -> Result<Vec<StageTotals>, StoreError> {
        self.record_call()?;
        Ok(stages
            .iter()
            .map(|stage| self.totals.get(stage.name).copied().unwrap_or_default())
            .collect())
    }

    fn user_profile(&self, _user_id: i64) -> Result<Option<UserProfile>, StoreError> {
        self.record_call()?;
        Ok(self.profile.clone())
    }
}
