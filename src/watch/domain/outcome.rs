//! Terminal outcomes of one watch invocation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a watch invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchOutcome {
    /// A data row carried a timestamp inside the freshness window.
    Complete,
    /// The attempt budget ran out (or a read failed) with no fresh row seen.
    StillPending,
    /// The invocation was cancelled while waiting between attempts.
    Cancelled,
}

impl WatchOutcome {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::StillPending => "still_pending",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the external job showed evidence of recent completion.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for WatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
