use std::time::Instant;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ParseMode},
};

use crate::{access::RequestContext, app_context::AppContext, page::load_page};

use super::super::helpers::{acquire_report_slot, as_html_block, run_blocking, stage_table_block};
use super::report::send_failure;

pub(crate) async fn handle_indicators(
    bot: &Bot,
    msg: &Message,
    app_context: &AppContext,
    context: RequestContext,
) -> ResponseResult<()> {
    let started_at = Instant::now();
    let Some(slot) = acquire_report_slot(&app_context.report_slots, msg, bot).await? else {
        return Ok(());
    };

    let store = app_context.store.clone();
    let renderer = app_context.chart_renderer;
    let page = match run_blocking(slot, move || load_page(&context, &store, &renderer)).await {
        Ok(page) => page,
        Err(error) => return send_failure(bot, msg, "Indicadores", &error).await,
    };

    bot.send_message(
        msg.chat.id,
        format!(
            "<b>{}</b>\nUsuário: {}\nEmpresa: {}",
            html_escape::encode_text(page.title),
            html_escape::encode_text(&page.identity.user_name),
            html_escape::encode_text(&page.identity.company_name)
        ),
    )
    .parse_mode(ParseMode::Html)
    .await?;

    for section in &page.sections {
        bot.send_message(
            msg.chat.id,
            stage_table_block(&section.heading, &section.rows),
        )
        .parse_mode(ParseMode::Html)
        .await?;

        bot.send_photo(
            msg.chat.id,
            InputFile::memory(section.chart_png.clone())
                .file_name(format!("{}.png", section.heading.replace(' ', "_"))),
        )
        .caption(section.caption.clone())
        .await?;
    }

    let download_action = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "📄 Gerar PDF",
        "cmd:pdf",
    )]]);
    bot.send_message(
        msg.chat.id,
        as_html_block("Relatório", "Baixe os indicadores em PDF."),
    )
    .reply_markup(download_action)
    .parse_mode(ParseMode::Html)
    .await?;

    log::info!(
        "indicators_command_completed user_id={} stages={} elapsed_ms={}",
        page.identity.user_id,
        page.sections.len(),
        started_at.elapsed().as_millis()
    );

    Ok(())
}
