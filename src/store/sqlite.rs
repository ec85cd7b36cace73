use std::path::PathBuf;

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use crate::indicators::{StageDescriptor, StageTotals};

use super::{IndicatorSource, StoreError, UserProfile};

const USERS_TABLE: &str = "Usuarios";
const PROFILE_QUERY: &str = "SELECT nome_usuario, empresa FROM Usuarios WHERE ID_User = ?1";

/// SQLite-backed store. Holds only the path; each operation opens its own
/// read-only connection and drops it before returning.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| StoreError::Open {
            path: self.path.display().to_string(),
            source,
        })
    }
}

fn query_stage_totals(
    connection: &Connection,
    stage: &StageDescriptor,
    user_id: i64,
) -> Result<StageTotals, StoreError> {
    connection
        .query_row(&stage.totals_query(), params![user_id], |row| {
            Ok(StageTotals {
                energy: row.get(0)?,
                water: row.get(1)?,
                co2: row.get(2)?,
            })
        })
        .map_err(|source| StoreError::Query {
            table: stage.table,
            user_id,
            source,
        })
}

impl IndicatorSource for SqliteStore {
    fn stage_totals(
        &self,
        stages: &[StageDescriptor],
        user_id: i64,
    ) -> Result<Vec<StageTotals>, StoreError> {
        let connection = self.connect()?;
        stages
            .iter()
            .map(|stage| query_stage_totals(&connection, stage, user_id))
            .collect()
    }

    fn user_profile(&self, user_id: i64) -> Result<Option<UserProfile>, StoreError> {
        let connection = self.connect()?;
        connection
            .query_row(PROFILE_QUERY, params![user_id], |row| {
                Ok(UserProfile {
                    name: row.get(0)?,
                    company: row.get(1)?,
                })
            })
            .optional()
            .map_err(|source| StoreError::Query {
                table: USERS_TABLE,
                user_id,
                source,
            })
    }
}
