use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::command_def::MyCommands;
use super::router::route_command;
use crate::app_context::AppContext;

const BOT_NAME: &str = "pegada_bot";

pub async fn answer(
    bot: Bot,
    msg: Message,
    cmd: MyCommands,
    app_context: Arc<AppContext>,
) -> ResponseResult<()> {
    let caller = msg.from().cloned();
    route_command(bot, msg, caller.as_ref(), cmd, &app_context).await
}

pub async fn answer_callback(
    bot: Bot,
    q: CallbackQuery,
    app_context: Arc<AppContext>,
) -> ResponseResult<()> {
    bot.answer_callback_query(&q.id).await?;

    let msg = match q.message {
        Some(msg) => msg,
        None => return Ok(()),
    };

    let data = match q.data {
        Some(data) => data,
        None => return Ok(()),
    };

    // "cmd:pdf" → "/pdf"
    let Some(command_str) = callback_command(&data) else {
        log::warn!("callback_ignored data={:?}", data);
        return Ok(());
    };

    let cmd = match MyCommands::parse(&command_str, BOT_NAME) {
        Ok(cmd) => cmd,
        Err(_) => return Ok(()),
    };

    // The message belongs to the bot; the caller is whoever pressed the button.
    route_command(bot, msg, Some(&q.from), cmd, &app_context).await
}

fn callback_command(data: &str) -> Option<String> {
    let parts: Vec<&str> = data.splitn(3, ':').collect();
    if parts.first() != Some(&"cmd") || parts.len() < 2 || parts[1].is_empty() {
        return None;
    }

    Some(if parts.len() == 3 {
        format!("/{} {}", parts[1], parts[2])
    } else {
        format!("/{}", parts[1])
    })
}
