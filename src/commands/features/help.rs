use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
    utils::command::BotCommands,
};

use super::super::{command_def::MyCommands, helpers::as_html_block};

pub(crate) async fn handle_help(bot: &Bot, msg: &Message) -> ResponseResult<()> {
    let quick_actions = InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback("📊 Indicadores", "cmd:indicadores"),
        InlineKeyboardButton::callback("📄 Gerar PDF", "cmd:pdf"),
    ]]);

    bot.send_message(
        msg.chat.id,
        as_html_block("Comandos disponíveis", &MyCommands::descriptions().to_string()),
    )
    .reply_markup(quick_actions)
    .parse_mode(ParseMode::Html)
    .await?;

    Ok(())
}
