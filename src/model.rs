// Core structs: SheetTable, RunSummary + boundary error enums
use chrono::{DateTime, Utc};
use thiserror::Error;

/// In-memory view of one worksheet: a header row plus string cell rows.
/// Columns are addressed by name, never by position; blank cells are empty
/// strings.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Position of a column by its header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Appends a row, padded with blank cells up to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    /// Renders the header row and the first `n` data rows as text, for the
    /// read-only preview surface.
    pub fn preview(&self, n: usize) -> String {
        let mut out = self.headers.join(" | ");
        for row in self.rows.iter().take(n) {
            out.push('\n');
            out.push_str(&row.join(" | "));
        }
        out
    }
}

/// Totals reported after one harmonization pass.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub rows_processed: usize,
    pub clusters_created: usize,
    pub blank_models: usize,
    pub completed_at: DateTime<Utc>,
}

/// Failures while reading the input workbook.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open workbook: {0}")]
    Workbook(String),
    #[error("workbook has no worksheet")]
    NoSheet,
    #[error("worksheet has no header row")]
    MissingHeader,
    #[error("column not found: {0}")]
    ColumnNotFound(String),
}

/// Failures while serializing the harmonized workbook.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("required column missing from output: {0}")]
    MissingColumn(String),
    #[error("workbook serialization failed: {0}")]
    Workbook(String),
    #[error("failed to write output file: {0}")]
    Io(String),
}
