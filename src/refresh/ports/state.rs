//! Persistent toggle state and edit-observer registration contracts.

use crate::refresh::domain::{AutoRefreshFlag, ObserverId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for state store operations.
pub type StateStoreResult<T> = Result<T, StateStoreError>;

/// Contract for the persisted auto-refresh flag.
///
/// The flag survives across invocations; a missing value reads as
/// [`AutoRefreshFlag::Disabled`].
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Loads the current flag.
    async fn load(&self) -> StateStoreResult<AutoRefreshFlag>;

    /// Persists a new flag value.
    async fn store(&self, flag: AutoRefreshFlag) -> StateStoreResult<()>;
}

/// Contract for the host's event-trigger mechanism.
///
/// Observers are addressed by handler name so an installation made in one
/// invocation can be found and removed in a later one.
#[async_trait]
pub trait EditTriggerRegistry: Send + Sync {
    /// Registers an edit observer for the given handler.
    async fn install(&self, handler: &str) -> StateStoreResult<ObserverId>;

    /// Finds the observer previously registered for the handler, if any.
    async fn find(&self, handler: &str) -> StateStoreResult<Option<ObserverId>>;

    /// Unregisters exactly the given observer.
    ///
    /// # Errors
    ///
    /// Returns [`StateStoreError::UnknownObserver`] when no such observer is
    /// registered.
    async fn remove(&self, id: ObserverId) -> StateStoreResult<()>;
}

/// Errors returned by state store and registry implementations.
#[derive(Debug, Clone, Error)]
pub enum StateStoreError {
    /// The observer handle is not registered.
    #[error("unknown observer: {0}")]
    UnknownObserver(ObserverId),

    /// Persistence-layer failure.
    #[error("state persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StateStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
