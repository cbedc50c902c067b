//! Markdown table formatter.
//!
//! Every line opens with `"| "` and each cell is followed by `" | "`, so table
//! lines end in a trailing space. The separator goes right after the first row.
use std::borrow::Cow;

use tracing::debug;

use crate::core::params::ConvertOptions;
use crate::types::{Row, Table};

/// Minimum dash run for a separator cell.
pub const MIN_SEPARATOR_WIDTH: usize = 3;

/// Widest cell per column index, sized to the widest row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    /// Single pass over the table. Lengths count Unicode scalar values.
    pub fn compute(table: &Table, escape_pipes: bool) -> Self {
        let mut widths = vec![0usize; table.max_columns()];
        for row in table.rows() {
            for (idx, cell) in row.iter().enumerate() {
                let len = cell_text(cell, escape_pipes).chars().count();
                widths[idx] = widths[idx].max(len);
            }
        }
        Self(widths)
    }

    pub fn get(&self, column: usize) -> usize {
        self.0.get(column).copied().unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

fn cell_text(cell: &str, escape_pipes: bool) -> Cow<'_, str> {
    if escape_pipes && cell.contains('|') {
        Cow::Owned(cell.replace('|', "\\|"))
    } else {
        Cow::Borrowed(cell)
    }
}

fn format_row(row: &Row, widths: Option<&ColumnWidths>, escape_pipes: bool) -> String {
    let mut line = String::from("| ");
    for (idx, cell) in row.iter().enumerate() {
        let text = cell_text(cell, escape_pipes);
        match widths {
            Some(widths) => {
                let width = widths.get(idx);
                line.push_str(&format!("{text:<width$}"));
            }
            None => line.push_str(&text),
        }
        line.push_str(" | ");
    }
    line
}

fn format_separator(columns: usize, widths: Option<&ColumnWidths>) -> String {
    let mut line = String::from("| ");
    for idx in 0..columns {
        let dashes = match widths {
            Some(widths) => widths.get(idx).max(MIN_SEPARATOR_WIDTH),
            None => MIN_SEPARATOR_WIDTH,
        };
        line.push_str(&"-".repeat(dashes));
        line.push_str(" | ");
    }
    line
}

/// Render `table` as Markdown lines. An empty table yields no lines, even
/// when a heading is configured.
pub fn to_markdown(table: &Table, options: &ConvertOptions) -> Vec<String> {
    let Some(first) = table.rows().first() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(table.len() + 3);
    if let Some(heading) = options.heading() {
        lines.push(format!("# {heading}"));
        lines.push(String::new());
    }

    let widths = options
        .aligned
        .then(|| ColumnWidths::compute(table, options.escape_pipes));
    if let Some(widths) = &widths {
        debug!("Column widths: {:?}", widths.as_slice());
    }

    for (idx, row) in table.rows().iter().enumerate() {
        lines.push(format_row(row, widths.as_ref(), options.escape_pipes));
        if idx == 0 {
            lines.push(format_separator(first.len(), widths.as_ref()));
        }
    }

    lines
}
