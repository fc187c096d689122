//! Host edit notifications and the rule deciding which ones refresh.

use crate::sheet::domain::{ColumnLayout, RowMarkers};

/// 1-based worksheet row holding the column headers.
pub const HEADER_ROW: u32 = 1;

/// One cell edit reported by the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    row: u32,
    column: usize,
    value: String,
}

impl EditEvent {
    /// Creates an edit event for a 1-based row and 0-based column.
    #[must_use]
    pub fn new(row: u32, column: usize, value: impl Into<String>) -> Self {
        Self {
            row,
            column,
            value: value.into(),
        }
    }

    /// Returns the 1-based row.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Returns the 0-based column.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the new cell value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether this edit should start a refresh cycle.
    ///
    /// Only edits in the URL column, below the header row, whose new value
    /// carries the URL marker qualify. Rapid successive qualifying edits each
    /// trigger independently; there is no debouncing.
    #[must_use]
    pub fn triggers_refresh(&self, layout: &ColumnLayout, markers: &RowMarkers) -> bool {
        self.column == layout.url_column()
            && self.row > HEADER_ROW
            && self.value.contains(markers.url_marker())
    }
}
