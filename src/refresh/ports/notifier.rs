//! Operator dialog contract.

use crate::refresh::domain::Notice;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notifier operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Contract for operator-facing messages (the original modal dialogs).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one notice.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Delivery`] when the message cannot be shown.
    async fn notify(&self, notice: &Notice) -> NotifyResult<()>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    /// The message could not be delivered.
    #[error("notice delivery failure: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotifyError {
    /// Wraps a delivery failure.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
