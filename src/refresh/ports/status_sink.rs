//! Status cell rendering contract.

use crate::refresh::domain::StatusReport;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for status sink operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Contract for rendering status transitions.
///
/// Keeps the dispatch and watch cores free of presentation concerns; a host
/// binding paints cells, the CLI logs, tests record.
#[async_trait]
pub trait StatusSink: Send + Sync {
    /// Renders one status transition.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Sink`] when the rendering surface rejects the
    /// report.
    async fn publish(&self, report: &StatusReport) -> ReportResult<()>;
}

/// Errors returned by status sink implementations.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    /// The rendering surface failed.
    #[error("status sink failure: {0}")]
    Sink(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReportError {
    /// Wraps a sink failure.
    pub fn sink(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Sink(Arc::new(err))
    }
}
