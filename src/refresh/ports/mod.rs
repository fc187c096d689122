//! Port contracts for presentation and persisted toggle state.

mod notifier;
mod state;
mod status_sink;

pub use notifier::{Notifier, NotifyError, NotifyResult};
pub use state::{EditTriggerRegistry, FlagStore, StateStoreError, StateStoreResult};
pub use status_sink::{ReportError, ReportResult, StatusSink};
