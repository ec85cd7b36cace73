use crate::page::TableRow;

const TELEGRAM_TEXT_HARD_LIMIT: usize = 4096;
const TABLE_HEADER: [&str; 2] = ["Indicador", "Valor"];

pub(crate) fn as_html_block(title: &str, body: &str) -> String {
    let message = format!(
        "<b>{}</b>\n<pre>{}</pre>",
        html_escape::encode_text(title),
        html_escape::encode_text(body)
    );
    if message.len() > TELEGRAM_TEXT_HARD_LIMIT {
        log::warn!("formatted Telegram message exceeds hard limit");
    }
    message
}

/// Two-column monospace table, first column padded to its widest cell.
pub(crate) fn stage_table_block(heading: &str, rows: &[TableRow]) -> String {
    let label_width = rows
        .iter()
        .map(|row| row.indicator.chars().count())
        .chain(std::iter::once(TABLE_HEADER[0].chars().count()))
        .max()
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{:<width$} | {}",
        TABLE_HEADER[0],
        TABLE_HEADER[1],
        width = label_width
    ));
    lines.push(format!("{}-+-{}", "-".repeat(label_width), "-".repeat(5)));
    for row in rows {
        lines.push(format!(
            "{:<width$} | {}",
            row.indicator,
            row.value,
            width = label_width
        ));
    }

    as_html_block(heading, &lines.join("\n"))
}
