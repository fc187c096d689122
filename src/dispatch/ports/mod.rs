//! Port contracts for issuing workflow dispatch requests.

mod dispatcher;

pub use dispatcher::{DispatchError, DispatchResult, WorkflowDispatcher};
