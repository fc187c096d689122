//! Domain model for the external worksheet.
//!
//! Models the read-only snapshot of the tabular data source the external job
//! writes, the column layout it uses, and the pure summarization of its
//! processing state.

mod error;
mod snapshot;
mod summary;

pub use error::SheetDomainError;
pub use snapshot::{
    ColumnLayout, SheetSnapshot, WORKSHEET_TIMESTAMP_FORMAT, parse_worksheet_timestamp,
};
pub use summary::{RowMarkers, SheetSummary, summarize};
