use thiserror::Error;

use crate::indicators::{StageDescriptor, StageTotals};

mod sqlite;

#[cfg(test)]
pub(crate) mod fixture;

pub use sqlite::SqliteStore;

/// Display name and company as stored for a user. Either column may be NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open data store {path}: {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },
    #[error("failed to read {table} for user {user_id}: {source}")]
    Query {
        table: &'static str,
        user_id: i64,
        source: rusqlite::Error,
    },
}

/// Read side of the data store. Every method is one logical operation.
pub trait IndicatorSource {
    /// One entry per descriptor, in the same order.
    fn stage_totals(
        &self,
        stages: &[StageDescriptor],
        user_id: i64,
    ) -> Result<Vec<StageTotals>, StoreError>;

    fn user_profile(&self, user_id: i64) -> Result<Option<UserProfile>, StoreError>;
}
