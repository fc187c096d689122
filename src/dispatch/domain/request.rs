//! Dispatch request payload and trigger provenance types.

use super::{DispatchDomainError, DispatchTarget};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a refresh cycle originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// Operator-initiated refresh (the "Refresh" menu command).
    Manual,
    /// Refresh started by the edit observer reacting to a new URL.
    EditObserver,
}

impl TriggerSource {
    /// Returns the value sent as the `trigger_source` workflow input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::EditObserver => "edit",
        }
    }

    /// Whether the external job should reprocess rows it already marked done.
    ///
    /// Manual refreshes ask for a full pass; edit-driven refreshes only need
    /// the newly added row picked up.
    #[must_use]
    pub const fn forces_full_refresh(self) -> bool {
        matches!(self, Self::Manual)
    }
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound `workflow_dispatch` request.
///
/// Constructed per trigger and never persisted. Input ordering is preserved
/// so the wire payload is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRequest {
    target: DispatchTarget,
    inputs: Vec<(String, String)>,
}

impl DispatchRequest {
    /// Creates a request with no inputs.
    #[must_use]
    pub const fn new(target: DispatchTarget) -> Self {
        Self {
            target,
            inputs: Vec::new(),
        }
    }

    /// Appends a key/value workflow input.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchDomainError::EmptyInputKey`] when the key is empty
    /// after trimming.
    pub fn with_input(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DispatchDomainError> {
        let normalized = key.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(DispatchDomainError::EmptyInputKey);
        }
        self.inputs.push((normalized, value.into()));
        Ok(self)
    }

    /// Returns the dispatch target.
    #[must_use]
    pub const fn target(&self) -> &DispatchTarget {
        &self.target
    }

    /// Returns the workflow inputs in insertion order.
    #[must_use]
    pub fn inputs(&self) -> &[(String, String)] {
        &self.inputs
    }
}

/// Terminal result of one trigger attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The external workflow run was started.
    Dispatched,
    /// No credential is configured; nothing was dispatched and the cycle
    /// relies on the external job's own schedule.
    Untriggered,
}

impl DispatchOutcome {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dispatched => "dispatched",
            Self::Untriggered => "untriggered",
        }
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
