//! Identifier and outcome types for refresh cycles.

use crate::dispatch::domain::DispatchOutcome;
use crate::watch::domain::WatchOutcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier correlating the log records of one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Creates a new random run identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle of an installed edit observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObserverId(Uuid);

impl ObserverId {
    /// Creates a new random observer identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an observer identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal record of one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshReport {
    run_id: RunId,
    dispatch: DispatchOutcome,
    watch: WatchOutcome,
}

impl RefreshReport {
    /// Creates a report.
    #[must_use]
    pub const fn new(run_id: RunId, dispatch: DispatchOutcome, watch: WatchOutcome) -> Self {
        Self {
            run_id,
            dispatch,
            watch,
        }
    }

    /// Returns the cycle identifier.
    #[must_use]
    pub const fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Returns how the dispatch phase ended.
    #[must_use]
    pub const fn dispatch(&self) -> DispatchOutcome {
        self.dispatch
    }

    /// Returns how the watch phase ended.
    #[must_use]
    pub const fn watch(&self) -> WatchOutcome {
        self.watch
    }
}
