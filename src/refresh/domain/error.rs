//! Error types for refresh domain parsing.

use thiserror::Error;

/// Error returned while parsing the persisted auto-refresh flag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown auto-refresh flag value: {0}")]
pub struct ParseAutoRefreshFlagError(pub String);
