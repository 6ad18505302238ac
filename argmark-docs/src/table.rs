//! Markdown table rendering.
//!
//! Tables are built from an explicit, ordered column list. Rows are written
//! as `| a | b |`; an empty cell is written as `| |`.

use argmark_core::config::Record;

use crate::markup::convert;

/// A markdown table with a fixed column list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    /// Create an empty table with the given column headers.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row of already-rendered markdown cells.
    ///
    /// Missing trailing cells render empty; extra cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    /// Column headers in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of body rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render header row, separator row and body rows joined by newlines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_row(&self.columns));
        lines.push(format!("|{}|", vec!["-"; self.columns.len()].join("|")));
        lines.extend(self.rows.iter().map(|row| format_row(row)));
        lines.join("\n")
    }
}

fn format_row(cells: &[String]) -> String {
    let mut line = String::from("|");
    for cell in cells {
        if cell.is_empty() {
            line.push_str(" |");
        } else {
            line.push(' ');
            line.push_str(cell);
            line.push_str(" |");
        }
    }
    line
}

/// Render a sequence of records as a table.
///
/// The first record's keys define the columns, in insertion order, and are
/// written literally; every cell is converted from markup. Returns an empty
/// string for no records, or when any record's fields differ from the first.
#[must_use]
pub fn render_records(records: &[Record]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let uniform = records
        .iter()
        .all(|record| record.len() == first.len() && first.keys().all(|k| record.contains_key(k)));
    if !uniform {
        return String::new();
    }

    let mut table = MarkdownTable::new(first.keys().cloned());
    for record in records {
        table.push_row(
            first
                .keys()
                .map(|key| record.get(key).map(String::as_str).map(convert).unwrap_or_default())
                .collect(),
        );
    }
    table.render()
}
