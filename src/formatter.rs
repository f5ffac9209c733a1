//! Terminal and CSV output for result tables
//!
//! Console rendering is a simple aligned-text table (header row, one row per
//! record, a leading row-index column). CSV output preserves the distinction
//! between a missing match and an empty match by rendering missing values as
//! empty fields while keeping the column present for every row.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::models::ResultTable;

/// Maximum display width of a console cell before truncation.
/// Applies to console rendering only; CSV output is never truncated.
const MAX_CELL_WIDTH: usize = 100;

/// Output formatter configuration
pub struct OutputFormatter {
    /// Whether to use colors in console output
    pub use_colors: bool,
}

impl OutputFormatter {
    /// Create a new formatter with automatic TTY detection
    pub fn new(plain: bool) -> Self {
        let is_tty = io::stdout().is_tty();
        let no_color = std::env::var("NO_COLOR").is_ok();

        Self {
            use_colors: !plain && !no_color && is_tty,
        }
    }

    /// Print a result table to stdout as aligned text
    ///
    /// Missing values render as blank cells. Long cells are truncated with a
    /// trailing ellipsis to keep rows readable.
    pub fn print_table(&self, table: &ResultTable) {
        // Row-index column plus one column per active rule
        let mut headers = vec![String::new()];
        headers.extend(table.columns.iter().map(|c| c.header().to_string()));

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());
        for (idx, record) in table.rows.iter().enumerate() {
            let mut cells = vec![idx.to_string()];
            for column in &table.columns {
                let value = record.field(*column).unwrap_or("");
                cells.push(truncate_cell(value, MAX_CELL_WIDTH));
            }
            rows.push(cells);
        }

        let widths = column_widths(&headers, &rows);

        println!("{}", self.render_row(&headers, &widths, true));
        for cells in &rows {
            println!("{}", self.render_row(cells, &widths, false));
        }
    }

    /// Render one row with cells padded to the column widths
    fn render_row(&self, cells: &[String], widths: &[usize], is_header: bool) -> String {
        let mut out = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            let padding = widths[i].saturating_sub(cell.width());
            if is_header && self.use_colors {
                out.push_str(&cell.bold().to_string());
            } else {
                out.push_str(cell);
            }
            out.push_str(&" ".repeat(padding));
        }
        out.trim_end().to_string()
    }
}

/// Serialize a result table to a CSV file
///
/// Header row = active column set in fixed order, one data row per record in
/// table order, missing values as empty fields.
pub fn write_csv(table: &ResultTable, destination: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(destination)
        .with_context(|| format!("failed to create {}", destination.display()))?;

    writer.write_record(table.columns.iter().map(|c| c.header()))?;

    for record in &table.rows {
        writer.write_record(
            table
                .columns
                .iter()
                .map(|column| record.field(*column).unwrap_or("")),
        )?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", destination.display()))?;

    Ok(())
}

/// Width of each column: max of header and all cells, display-width aware
fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for cells in rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}

/// Truncate a cell to a maximum display width, appending an ellipsis
fn truncate_cell(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
