use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bot_token: String,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_report_concurrency")]
    pub report_concurrency: usize,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub users: Vec<UserBinding>,
}

impl Config {
    pub fn binding_for(&self, telegram_id: u64) -> Option<&UserBinding> {
        self.users
            .iter()
            .find(|binding| binding.telegram_id == telegram_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width_px")]
    pub width_px: u32,
    #[serde(default = "default_chart_height_px")]
    pub height_px: u32,
}

/// Links a Telegram account to a platform user and the profile stored for it
/// by the session layer.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBinding {
    pub telegram_id: u64,
    pub user_id: i64,
    pub profile: String,
}
