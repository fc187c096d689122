//! Outbound dispatch contract.

use crate::dispatch::domain::DispatchRequest;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for dispatcher operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Contract for starting the external batch job.
///
/// Implementations issue exactly one outbound request per call and never
/// retry; retry policy belongs to the caller (and the caller's policy is to
/// not have one).
#[async_trait]
pub trait WorkflowDispatcher: Send + Sync {
    /// Requests a run of the external workflow.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnexpectedStatus`] when the endpoint answers
    /// with anything but the accepted-status code, or
    /// [`DispatchError::Transport`] when the request never completes.
    async fn dispatch(&self, request: &DispatchRequest) -> DispatchResult<()>;
}

/// Errors returned by dispatcher implementations.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// The endpoint answered with an unexpected HTTP status.
    #[error("dispatch endpoint answered HTTP {0}, expected 204")]
    UnexpectedStatus(u16),

    /// The request failed before an HTTP status was received.
    #[error("dispatch transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DispatchError {
    /// Wraps a transport-level failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
