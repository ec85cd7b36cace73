use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Comandos disponíveis:")]
pub enum MyCommands {
    #[command(description = "Mostra esta ajuda.")]
    Help,
    #[command(description = "Mostra esta ajuda.")]
    Start,
    #[command(description = "Mostra os indicadores de energia, água e CO2 por etapa.")]
    Indicadores,
    #[command(description = "Gera o relatório em PDF.")]
    Pdf,
}
