//! Service layer for credential-gated workflow triggering.

use crate::dispatch::{
    domain::{DispatchDomainError, DispatchOutcome, DispatchRequest, DispatchTarget, TriggerSource},
    ports::{DispatchError, WorkflowDispatcher},
};
use std::sync::Arc;
use thiserror::Error;

/// Workflow input naming the trigger origin.
const TRIGGER_SOURCE_INPUT: &str = "trigger_source";

/// Workflow input asking the job to reprocess already-done rows.
const FORCE_REFRESH_INPUT: &str = "force_refresh";

/// Service-level errors for trigger operations.
#[derive(Debug, Clone, Error)]
pub enum DispatchServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DispatchDomainError),
    /// The outbound dispatch failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Result type for trigger operations.
pub type DispatchServiceResult<T> = Result<T, DispatchServiceError>;

/// Triggers the external workflow when a credential is configured.
///
/// Without a dispatcher the service performs no network call and reports
/// [`DispatchOutcome::Untriggered`]; the external job also runs on its own
/// schedule, so a refresh cycle still proceeds to the watch phase.
#[derive(Clone)]
pub struct DispatchService<D>
where
    D: WorkflowDispatcher,
{
    dispatcher: Option<Arc<D>>,
    target: DispatchTarget,
}

impl<D> DispatchService<D>
where
    D: WorkflowDispatcher,
{
    /// Creates a service with no dispatcher configured.
    #[must_use]
    pub const fn untriggered(target: DispatchTarget) -> Self {
        Self {
            dispatcher: None,
            target,
        }
    }

    /// Creates a service that dispatches through the given adapter.
    #[must_use]
    pub const fn new(dispatcher: Arc<D>, target: DispatchTarget) -> Self {
        Self {
            dispatcher: Some(dispatcher),
            target,
        }
    }

    /// Requests one run of the external workflow.
    ///
    /// Issues at most one outbound call; failures are returned to the caller
    /// without retry.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchServiceError::Dispatch`] when the endpoint rejects
    /// the request or the transport fails.
    pub async fn trigger(&self, source: TriggerSource) -> DispatchServiceResult<DispatchOutcome> {
        let Some(dispatcher) = &self.dispatcher else {
            tracing::info!(%source, "no dispatch credential configured; skipping trigger");
            return Ok(DispatchOutcome::Untriggered);
        };

        let mut request = DispatchRequest::new(self.target.clone())
            .with_input(TRIGGER_SOURCE_INPUT, source.as_str())?;
        if source.forces_full_refresh() {
            request = request.with_input(FORCE_REFRESH_INPUT, "true")?;
        }

        dispatcher.dispatch(&request).await?;
        tracing::info!(%source, target = %self.target.repository(), "workflow dispatched");
        Ok(DispatchOutcome::Dispatched)
    }
}
