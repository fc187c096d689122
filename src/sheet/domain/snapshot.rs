//! Worksheet snapshot model and cell timestamp parsing.

use super::SheetDomainError;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format the external job writes into the last-processed column.
pub const WORKSHEET_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a worksheet timestamp cell.
///
/// The external job writes naive local-free timestamps in
/// [`WORKSHEET_TIMESTAMP_FORMAT`]; they are interpreted as UTC. Empty or
/// malformed cells yield `None`.
#[must_use]
pub fn parse_worksheet_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, WORKSHEET_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Column roles within the worksheet.
///
/// The worksheet is owned by the external job; this crate only reads it.
/// Defaults follow the job's layout: column A holds the input URL, column K
/// the last-processed timestamp, column L the result text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    url_column: usize,
    timestamp_column: usize,
    result_column: usize,
}

impl ColumnLayout {
    /// Creates a layout with distinct column roles.
    ///
    /// # Errors
    ///
    /// Returns [`SheetDomainError::DuplicateColumn`] when two roles share an
    /// index.
    pub const fn new(
        url_column: usize,
        timestamp_column: usize,
        result_column: usize,
    ) -> Result<Self, SheetDomainError> {
        if url_column == timestamp_column || url_column == result_column {
            return Err(SheetDomainError::DuplicateColumn(url_column));
        }
        if timestamp_column == result_column {
            return Err(SheetDomainError::DuplicateColumn(timestamp_column));
        }
        Ok(Self {
            url_column,
            timestamp_column,
            result_column,
        })
    }

    /// Returns the input URL column index.
    #[must_use]
    pub const fn url_column(self) -> usize {
        self.url_column
    }

    /// Returns the last-processed timestamp column index.
    #[must_use]
    pub const fn timestamp_column(self) -> usize {
        self.timestamp_column
    }

    /// Returns the result text column index.
    #[must_use]
    pub const fn result_column(self) -> usize {
        self.result_column
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            url_column: 0,
            timestamp_column: 10,
            result_column: 11,
        }
    }
}

/// Immutable snapshot of the worksheet at one read.
///
/// Row 0 is the header; [`SheetSnapshot::data_rows`] skips it. Rows may be
/// ragged: short rows simply have no value in the missing columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetSnapshot {
    rows: Vec<Vec<String>>,
}

impl SheetSnapshot {
    /// Creates a snapshot from raw rows, header included.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Returns all rows, header included.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Iterates over data rows, excluding the header.
    pub fn data_rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }

    /// Returns the trimmed cell value at the given column of a data row.
    ///
    /// Missing cells and cells containing only whitespace yield `None`.
    #[must_use]
    pub fn cell(row: &[String], column: usize) -> Option<&str> {
        row.get(column)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}
