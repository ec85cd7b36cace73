use std::time::Instant;

use teloxide::{
    prelude::*,
    types::{InputFile, ParseMode},
};

use crate::{
    access::RequestContext,
    app_context::AppContext,
    page::{prepare_download, PageError},
};

use super::super::helpers::{acquire_report_slot, as_html_block, run_blocking, JobError};

pub(crate) async fn handle_report_download(
    bot: &Bot,
    msg: &Message,
    app_context: &AppContext,
    context: RequestContext,
) -> ResponseResult<()> {
    let started_at = Instant::now();
    let user_id = context.user_id;
    let Some(slot) = acquire_report_slot(&app_context.report_slots, msg, bot).await? else {
        return Ok(());
    };

    let store = app_context.store.clone();
    let renderer = app_context.chart_renderer;
    let download =
        match run_blocking(slot, move || prepare_download(&context, &store, &renderer)).await {
            Ok(download) => download,
            Err(error) => return send_failure(bot, msg, "Relatório PDF", &error).await,
        };

    let size_bytes = download.bytes.len();
    let mime_type = download.mime_type;
    bot.send_document(
        msg.chat.id,
        InputFile::memory(download.bytes).file_name(download.file_name),
    )
    .caption("Relatório de Indicadores - Pegada de Carbono")
    .await?;

    log::info!(
        "report_download_completed user_id={} mime={} bytes={} elapsed_ms={}",
        user_id,
        mime_type,
        size_bytes,
        started_at.elapsed().as_millis()
    );

    Ok(())
}

pub(super) async fn send_failure(
    bot: &Bot,
    msg: &Message,
    title: &str,
    error: &JobError,
) -> ResponseResult<()> {
    match error {
        // Already logged as a security event by the access check.
        JobError::Page(PageError::Unauthorized(_)) => {}
        JobError::Page(page_error) => log::error!(
            "page request failed code={} error={}",
            page_error.code(),
            page_error
        ),
        JobError::Join(_) => log::error!("page task failed: {}", error),
    }

    bot.send_message(msg.chat.id, as_html_block(title, error.user_message()))
        .parse_mode(ParseMode::Html)
        .await?;

    Ok(())
}
