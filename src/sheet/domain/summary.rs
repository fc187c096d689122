//! Pure summarization of worksheet processing state.

use super::{ColumnLayout, SheetDomainError, SheetSnapshot, parse_worksheet_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Substrings identifying tracked and processed rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMarkers {
    url_marker: String,
    success_marker: String,
}

impl RowMarkers {
    /// Creates validated markers.
    ///
    /// # Errors
    ///
    /// Returns [`SheetDomainError::EmptyMarker`] when either marker is empty
    /// after trimming.
    pub fn new(
        url_marker: impl Into<String>,
        success_marker: impl Into<String>,
    ) -> Result<Self, SheetDomainError> {
        let url = url_marker.into().trim().to_owned();
        let success = success_marker.into().trim().to_owned();
        if url.is_empty() || success.is_empty() {
            return Err(SheetDomainError::EmptyMarker);
        }
        Ok(Self {
            url_marker: url,
            success_marker: success,
        })
    }

    /// Returns the URL marker substring.
    #[must_use]
    pub fn url_marker(&self) -> &str {
        &self.url_marker
    }

    /// Returns the success marker substring.
    #[must_use]
    pub fn success_marker(&self) -> &str {
        &self.success_marker
    }
}

impl Default for RowMarkers {
    /// Markers matching what the external job writes: Instagram URLs in the
    /// input column, `Fresh Data` in the result column.
    fn default() -> Self {
        Self {
            url_marker: "instagram.com".to_owned(),
            success_marker: "Fresh Data".to_owned(),
        }
    }
}

/// Aggregated processing state of one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    /// Rows whose URL column carries the URL marker.
    pub total: usize,
    /// Rows whose result column carries the success marker.
    pub processed: usize,
    /// Rows with a non-empty URL column that are not processed.
    pub pending: usize,
    /// Latest timestamp among processed rows, when any parses.
    pub last_update: Option<DateTime<Utc>>,
}

/// Summarizes a snapshot.
///
/// Pure over the snapshot passed in: no I/O, deterministic, and safe to call
/// repeatedly. A row counts toward `total` when its URL column contains the
/// URL marker, toward `processed` when its result column contains the success
/// marker (also advancing `last_update` when its timestamp parses), and
/// otherwise toward `pending` when its URL column is non-empty.
#[must_use]
pub fn summarize(
    snapshot: &SheetSnapshot,
    layout: &ColumnLayout,
    markers: &RowMarkers,
) -> SheetSummary {
    let mut summary = SheetSummary::default();

    for row in snapshot.data_rows() {
        let url = SheetSnapshot::cell(row, layout.url_column());
        if url.is_some_and(|value| value.contains(markers.url_marker())) {
            summary.total += 1;
        }

        let result = SheetSnapshot::cell(row, layout.result_column());
        if result.is_some_and(|value| value.contains(markers.success_marker())) {
            summary.processed += 1;
            let timestamp = SheetSnapshot::cell(row, layout.timestamp_column())
                .and_then(parse_worksheet_timestamp);
            if let Some(parsed) = timestamp {
                summary.last_update = Some(summary.last_update.map_or(parsed, |seen| seen.max(parsed)));
            }
        } else if url.is_some() {
            summary.pending += 1;
        }
    }

    summary
}
