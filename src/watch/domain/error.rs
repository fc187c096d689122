//! Error types for watch domain validation.

use thiserror::Error;

/// Errors returned while constructing watch domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WatchDomainError {
    /// The poll budget would allow zero attempts.
    #[error("poll budget must allow at least one attempt")]
    ZeroAttempts,

    /// The poll interval is zero.
    #[error("poll interval must be positive")]
    ZeroInterval,

    /// The freshness window cannot be represented as a signed duration.
    #[error("freshness window out of range")]
    WindowOutOfRange,
}
