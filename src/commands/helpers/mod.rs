mod auth;
mod control;
mod formatting;

pub(super) use auth::request_context;
pub(super) use control::{acquire_report_slot, run_blocking, JobError};
pub(super) use formatting::{as_html_block, stage_table_block};
