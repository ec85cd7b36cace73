use teloxide::{prelude::*, types::User};

use crate::app_context::AppContext;

use super::command_def::MyCommands;
use super::features::{
    help::handle_help, indicators::handle_indicators, report::handle_report_download,
};
use super::helpers::request_context;

pub(super) async fn route_command(
    bot: Bot,
    msg: Message,
    caller: Option<&User>,
    cmd: MyCommands,
    app_context: &AppContext,
) -> ResponseResult<()> {
    match cmd {
        MyCommands::Help | MyCommands::Start => handle_help(&bot, &msg).await?,
        MyCommands::Indicadores => {
            let context = request_context(caller.map(|user| user.id.0), &app_context.config);
            handle_indicators(&bot, &msg, app_context, context).await?
        }
        MyCommands::Pdf => {
            let context = request_context(caller.map(|user| user.id.0), &app_context.config);
            handle_report_download(&bot, &msg, app_context, context).await?
        }
    }

    Ok(())
}
