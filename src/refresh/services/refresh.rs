//! Orchestration of the full trigger-and-watch cycle.

use crate::dispatch::{
    domain::{DispatchOutcome, TriggerSource},
    ports::WorkflowDispatcher,
    services::{DispatchService, DispatchServiceError},
};
use crate::refresh::{
    domain::{Notice, RefreshReport, RunId, StatusKind, StatusReport},
    ports::{Notifier, NotifyError, ReportError, StatusSink},
};
use crate::sheet::{
    domain::{
        ColumnLayout, RowMarkers, SheetSummary, WORKSHEET_TIMESTAMP_FORMAT, summarize,
    },
    ports::{SheetReadError, SheetReader},
};
use crate::watch::{
    domain::{PollBudget, WatchOutcome},
    services::WatchService,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Service-level errors for refresh operations.
#[derive(Debug, Clone, Error)]
pub enum RefreshServiceError {
    /// The dispatch phase failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchServiceError),
    /// The status read failed.
    #[error(transparent)]
    Read(#[from] SheetReadError),
    /// A status report could not be rendered.
    #[error(transparent)]
    Report(#[from] ReportError),
    /// A notice could not be delivered.
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Result type for refresh operations.
pub type RefreshResult<T> = Result<T, RefreshServiceError>;

/// Worksheet interpretation and poll settings shared by one wiring.
#[derive(Debug, Clone)]
pub struct RefreshSettings {
    /// Column roles of the worksheet.
    pub layout: ColumnLayout,
    /// Marker substrings identifying tracked and processed rows.
    pub markers: RowMarkers,
    /// Attempt ceiling and interval for the watch phase.
    pub budget: PollBudget,
}

/// Runs full refresh cycles and status checks.
///
/// Every host-visible effect flows through the [`StatusSink`] and
/// [`Notifier`] ports; the service itself never touches a presentation
/// surface.
#[derive(Clone)]
pub struct RefreshService<D, R, C, S, N>
where
    D: WorkflowDispatcher,
    R: SheetReader,
    C: Clock + Send + Sync,
    S: StatusSink,
    N: Notifier,
{
    dispatch: DispatchService<D>,
    watch: WatchService<R, C>,
    reader: Arc<R>,
    sink: Arc<S>,
    notifier: Arc<N>,
    settings: RefreshSettings,
}

impl<D, R, C, S, N> RefreshService<D, R, C, S, N>
where
    D: WorkflowDispatcher,
    R: SheetReader,
    C: Clock + Send + Sync,
    S: StatusSink,
    N: Notifier,
{
    /// Creates a refresh service.
    #[must_use]
    pub const fn new(
        dispatch: DispatchService<D>,
        watch: WatchService<R, C>,
        reader: Arc<R>,
        sink: Arc<S>,
        notifier: Arc<N>,
        settings: RefreshSettings,
    ) -> Self {
        Self {
            dispatch,
            watch,
            reader,
            sink,
            notifier,
            settings,
        }
    }

    /// Runs one full trigger-and-watch cycle.
    ///
    /// Publishes `Refreshing` first, then either `Failed` (dispatch error,
    /// returned to the caller, no retry) or the watch phase's terminal
    /// status. An untriggered dispatch is published as its own status before
    /// the watch phase begins.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshServiceError::Dispatch`] when the workflow could not
    /// be started, or a presentation error when a port rejects its output.
    pub async fn refresh(
        &self,
        source: TriggerSource,
        cancel: &CancellationToken,
    ) -> RefreshResult<RefreshReport> {
        let run_id = RunId::new();
        tracing::info!(%run_id, %source, "refresh cycle started");

        self.sink
            .publish(&StatusReport::of(StatusKind::Refreshing))
            .await?;
        self.notifier
            .notify(&Notice::new(
                "Refresh started",
                "Requesting fresh data from the scraping workflow.",
            ))
            .await?;

        let dispatch = match self.dispatch.trigger(source).await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::error!(%run_id, %error, "dispatch failed");
                self.sink
                    .publish(&StatusReport::of(StatusKind::Failed).with_detail(error.to_string()))
                    .await?;
                self.notifier
                    .notify(&Notice::new(
                        "Refresh failed",
                        format!("Could not start the scraping workflow: {error}"),
                    ))
                    .await?;
                return Err(error.into());
            }
        };

        if dispatch == DispatchOutcome::Untriggered {
            self.sink
                .publish(
                    &StatusReport::of(StatusKind::Untriggered)
                        .with_detail("no dispatch credential configured"),
                )
                .await?;
        }

        let watch = self.watch.watch(&self.settings.budget, cancel).await;
        self.publish_watch_outcome(watch).await?;
        tracing::info!(%run_id, outcome = %watch, "refresh cycle finished");
        Ok(RefreshReport::new(run_id, dispatch, watch))
    }

    /// Reads one snapshot and reports the processing summary.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshServiceError::Read`] when the snapshot read fails;
    /// the failure is also surfaced as an error notice.
    pub async fn check_status(&self) -> RefreshResult<SheetSummary> {
        let snapshot = match self.reader.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(error) => {
                tracing::warn!(%error, "status read failed");
                self.notifier
                    .notify(&Notice::new(
                        "Status unavailable",
                        format!("Could not read the worksheet: {error}"),
                    ))
                    .await?;
                return Err(error.into());
            }
        };

        let summary = summarize(&snapshot, &self.settings.layout, &self.settings.markers);
        self.notifier
            .notify(&Notice::new("Processing status", render_summary(&summary)))
            .await?;
        Ok(summary)
    }

    async fn publish_watch_outcome(&self, outcome: WatchOutcome) -> RefreshResult<()> {
        let (report, notice) = match outcome {
            WatchOutcome::Complete => (
                StatusReport::of(StatusKind::Complete).with_detail("fresh data detected"),
                Notice::new(
                    "Refresh complete",
                    "The scraping workflow wrote fresh data to the worksheet.",
                ),
            ),
            WatchOutcome::StillPending => (
                StatusReport::of(StatusKind::StillPending)
                    .with_detail("no fresh rows before the wait ceiling"),
                Notice::new(
                    "Refresh still pending",
                    "No fresh data appeared yet; the workflow may still be running.",
                ),
            ),
            WatchOutcome::Cancelled => (
                StatusReport::of(StatusKind::StillPending).with_detail("watch cancelled"),
                Notice::new(
                    "Refresh cancelled",
                    "The watch was cancelled before fresh data appeared.",
                ),
            ),
        };
        self.sink.publish(&report).await?;
        self.notifier.notify(&notice).await?;
        Ok(())
    }
}

/// Renders a summary as dialog text.
fn render_summary(summary: &SheetSummary) -> String {
    let last_update = summary.last_update.map_or_else(
        || "never".to_owned(),
        |timestamp| timestamp.format(WORKSHEET_TIMESTAMP_FORMAT).to_string(),
    );
    format!(
        "{} tracked URLs: {} processed, {} pending. Last update: {last_update}.",
        summary.total, summary.processed, summary.pending
    )
}
