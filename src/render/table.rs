use serde::Serialize;

use crate::pages::{PageState, RenderedPage};
use crate::view_model::Column;

const COLUMN_GAP: &str = "  ";

/// Lays `rows` out under `columns`, left-aligned, one line per row.
pub fn render_table<R: Serialize>(columns: &[Column<R>], rows: &[R]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|column| column.cell(row)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<&str> = columns.iter().map(|column| column.label).collect();
    push_line(&mut out, header.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

/// A full render pass: title, then the loading line, the error, or the table
/// with its pager.
pub fn render_page<R: Serialize>(title: &str, page: &RenderedPage<R>, columns: &[Column<R>]) -> String {
    let body = match &page.state {
        PageState::Loading => "Loading...\n".to_string(),
        PageState::Failed(message) => format!("Error: {message}\n"),
        PageState::Ready(rows) => format!(
            "{}\nPage {} of {} ({} total)\n",
            render_table(columns, rows),
            page.pagination.page(),
            page.page_count(),
            page.total
        ),
    };
    format!("{title}\n\n{body}")
}
