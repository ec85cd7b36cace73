use std::collections::HashSet;

use thiserror::Error;

use super::schema::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bot_token must not be empty".to_string(),
            ));
        }
        if self.database_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database_path must not be empty".to_string(),
            ));
        }
        if self.report_concurrency == 0 {
            return Err(ConfigError::Validation(
                "report_concurrency must be greater than 0".to_string(),
            ));
        }
        if self.chart.width_px == 0 || self.chart.height_px == 0 {
            return Err(ConfigError::Validation(
                "chart.width_px and chart.height_px must be greater than 0".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for binding in &self.users {
            if binding.telegram_id == 0 {
                return Err(ConfigError::Validation(
                    "users.telegram_id must be a positive integer".to_string(),
                ));
            }
            if !seen.insert(binding.telegram_id) {
                return Err(ConfigError::Validation(format!(
                    "users.telegram_id {} is bound more than once",
                    binding.telegram_id
                )));
            }
            // Any non-blank profile is accepted here; permission is decided per request.
            if binding.profile.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "users.profile must not be empty (telegram_id {})",
                    binding.telegram_id
                )));
            }
        }

        Ok(())
    }
}
