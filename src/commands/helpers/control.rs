use std::sync::Arc;

use teloxide::{prelude::*, types::ParseMode};
use thiserror::Error;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use super::formatting::as_html_block;
use crate::page::PageError;

#[derive(Debug, Error)]
pub(crate) enum JobError {
    #[error(transparent)]
    Page(#[from] PageError),
    #[error("blocking task failed: {0}")]
    Join(String),
}

impl JobError {
    pub(crate) fn user_message(&self) -> &'static str {
        match self {
            Self::Page(error) => error.user_message(),
            Self::Join(_) => "Não foi possível concluir o pedido agora. Tente novamente.",
        }
    }
}

pub(crate) async fn acquire_report_slot(
    report_slots: &Arc<Semaphore>,
    msg: &Message,
    bot: &Bot,
) -> ResponseResult<Option<OwnedSemaphorePermit>> {
    match report_slots.clone().acquire_owned().await {
        Ok(permit) => Ok(Some(permit)),
        Err(error) => {
            log::error!("failed to acquire report semaphore: {}", error);
            bot.send_message(
                msg.chat.id,
                as_html_block(
                    "Fila ocupada",
                    "Não foi possível iniciar o processamento. Tente novamente.",
                ),
            )
            .parse_mode(ParseMode::Html)
            .await?;
            Ok(None)
        }
    }
}

/// Runs store reads and rendering off the async workers. The slot is held
/// until the job finishes.
pub(crate) async fn run_blocking<T, F>(slot: OwnedSemaphorePermit, job: F) -> Result<T, JobError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, PageError> + Send + 'static,
{
    let handle = tokio::task::spawn_blocking(move || {
        let _slot = slot;
        job()
    });

    match handle.await {
        Ok(result) => result.map_err(JobError::Page),
        Err(join_error) => Err(JobError::Join(join_error.to_string())),
    }
}
