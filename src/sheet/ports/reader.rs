//! Snapshot read contract.

use crate::sheet::domain::SheetSnapshot;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sheet read operations.
pub type SheetReadResult<T> = Result<T, SheetReadError>;

/// Contract for reading a full snapshot of the worksheet.
///
/// The worksheet is owned and mutated exclusively by the external job;
/// implementations only read.
#[async_trait]
pub trait SheetReader: Send + Sync {
    /// Reads the worksheet, header row included.
    ///
    /// # Errors
    ///
    /// Returns [`SheetReadError`] when the source is unreachable or answers
    /// with something that is not a row table.
    async fn snapshot(&self) -> SheetReadResult<SheetSnapshot>;
}

/// Errors returned by sheet reader implementations.
#[derive(Debug, Clone, Error)]
pub enum SheetReadError {
    /// The source answered with an unexpected HTTP status.
    #[error("sheet source answered HTTP {0}")]
    UnexpectedStatus(u16),

    /// The response body could not be decoded into rows.
    #[error("malformed sheet response: {0}")]
    MalformedResponse(String),

    /// The request failed before an HTTP status was received.
    #[error("sheet transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The source is temporarily unavailable.
    #[error("sheet source unavailable: {0}")]
    Unavailable(String),
}

impl SheetReadError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
