//! Orchestration services for refresh cycles and the auto-refresh toggle.

mod auto_refresh;
mod refresh;

pub use auto_refresh::{AutoRefreshError, AutoRefreshResult, AutoRefreshService, EDIT_HANDLER};
pub use refresh::{RefreshResult, RefreshService, RefreshServiceError, RefreshSettings};
