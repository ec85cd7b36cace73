mod access;
mod app_context;
mod chart;
mod commands;
mod config;
mod identity;
mod indicators;
mod page;
mod report;
mod store;

use std::sync::Arc;

use teloxide::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::app_context::AppContext;
use crate::commands::{answer, answer_callback, MyCommands};
use crate::config::{load_config, Config};

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    init_json_logging();

    let config: Config = match load_config(CONFIG_PATH) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return;
        }
    };

    log::info!(
        "Pegada bot is starting database={} bound_users={} report_concurrency={}",
        config.database_path,
        config.users.len(),
        config.report_concurrency
    );

    let bot = Bot::new(&config.bot_token);
    let app_context = Arc::new(AppContext::new(config));

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<MyCommands>()
                .endpoint(answer),
        )
        .branch(Update::filter_callback_query().endpoint(answer_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![app_context])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
