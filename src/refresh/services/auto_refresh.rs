//! Auto-refresh toggle state machine and edit handling.

use crate::dispatch::{domain::TriggerSource, ports::WorkflowDispatcher};
use crate::refresh::{
    domain::{AutoRefreshFlag, EditEvent, RefreshReport},
    ports::{EditTriggerRegistry, FlagStore, Notifier, StateStoreError, StatusSink},
    services::{RefreshService, RefreshServiceError},
};
use crate::sheet::{
    domain::{ColumnLayout, RowMarkers},
    ports::SheetReader,
};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Handler name the edit observer is registered under.
pub const EDIT_HANDLER: &str = "sheetwatch_on_edit";

/// Service-level errors for auto-refresh operations.
#[derive(Debug, Clone, Error)]
pub enum AutoRefreshError {
    /// Flag or observer state could not be read or written.
    #[error(transparent)]
    State(#[from] StateStoreError),
    /// The triggered refresh cycle failed.
    #[error(transparent)]
    Refresh(#[from] RefreshServiceError),
}

/// Result type for auto-refresh operations.
pub type AutoRefreshResult<T> = Result<T, AutoRefreshError>;

/// Maintains the auto-refresh toggle and reacts to host edits.
#[derive(Clone)]
pub struct AutoRefreshService<D, R, C, S, N, F, T>
where
    D: WorkflowDispatcher,
    R: SheetReader,
    C: Clock + Send + Sync,
    S: StatusSink,
    N: Notifier,
    F: FlagStore,
    T: EditTriggerRegistry,
{
    refresh: Arc<RefreshService<D, R, C, S, N>>,
    flags: Arc<F>,
    registry: Arc<T>,
    layout: ColumnLayout,
    markers: RowMarkers,
    trigger_delay: Duration,
}

impl<D, R, C, S, N, F, T> AutoRefreshService<D, R, C, S, N, F, T>
where
    D: WorkflowDispatcher,
    R: SheetReader,
    C: Clock + Send + Sync,
    S: StatusSink,
    N: Notifier,
    F: FlagStore,
    T: EditTriggerRegistry,
{
    /// Creates an auto-refresh service.
    #[must_use]
    pub const fn new(
        refresh: Arc<RefreshService<D, R, C, S, N>>,
        flags: Arc<F>,
        registry: Arc<T>,
        layout: ColumnLayout,
        markers: RowMarkers,
        trigger_delay: Duration,
    ) -> Self {
        Self {
            refresh,
            flags,
            registry,
            layout,
            markers,
            trigger_delay,
        }
    }

    /// Flips the toggle and returns the new state.
    ///
    /// Disabled→Enabled installs the edit observer and persists `"true"`;
    /// Enabled→Disabled removes exactly the observer previously installed
    /// under [`EDIT_HANDLER`] and persists `"false"`. Observers registered
    /// by anyone else are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AutoRefreshError::State`] when the flag or the observer
    /// registration cannot be updated.
    pub async fn toggle(&self) -> AutoRefreshResult<AutoRefreshFlag> {
        let current = self.flags.load().await?;
        let next = match current {
            AutoRefreshFlag::Disabled => {
                let id = self.registry.install(EDIT_HANDLER).await?;
                tracing::info!(%id, "edit observer installed");
                AutoRefreshFlag::Enabled
            }
            AutoRefreshFlag::Enabled => {
                if let Some(id) = self.registry.find(EDIT_HANDLER).await? {
                    self.registry.remove(id).await?;
                    tracing::info!(%id, "edit observer removed");
                }
                AutoRefreshFlag::Disabled
            }
        };
        self.flags.store(next).await?;
        Ok(next)
    }

    /// Reacts to one host edit notification.
    ///
    /// A qualifying edit (URL column, below the header, value carrying the
    /// URL marker) waits the fixed trigger delay so the host finishes
    /// committing the edit, then runs one full refresh cycle synchronously.
    /// Non-qualifying edits return `None`. Rapid successive qualifying edits
    /// each run their own cycle.
    ///
    /// # Errors
    ///
    /// Returns [`AutoRefreshError::Refresh`] when the triggered cycle fails.
    pub async fn handle_edit(
        &self,
        event: &EditEvent,
        cancel: &CancellationToken,
    ) -> AutoRefreshResult<Option<RefreshReport>> {
        if !event.triggers_refresh(&self.layout, &self.markers) {
            tracing::debug!(
                row = event.row(),
                column = event.column(),
                "edit does not qualify for refresh"
            );
            return Ok(None);
        }

        tracing::info!(row = event.row(), "tracked URL added, starting refresh");
        tokio::time::sleep(self.trigger_delay).await;
        let report = self.refresh.refresh(TriggerSource::EditObserver, cancel).await?;
        Ok(Some(report))
    }
}
