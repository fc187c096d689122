//! Domain model for refresh orchestration.
//!
//! Models the persisted auto-refresh toggle, the rule deciding which host
//! edits start a cycle, the status reports and notices rendered through the
//! presentation ports, and the per-cycle identifiers.

mod edit;
mod error;
mod flag;
mod report;
mod run;

pub use edit::{EditEvent, HEADER_ROW};
pub use error::ParseAutoRefreshFlagError;
pub use flag::AutoRefreshFlag;
pub use report::{Notice, StatusKind, StatusReport, StatusStyle};
pub use run::{ObserverId, RefreshReport, RunId};
