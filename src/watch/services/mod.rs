//! Service layer running the bounded status-polling loop.

use crate::sheet::{
    domain::{ColumnLayout, SheetSnapshot, parse_worksheet_timestamp},
    ports::SheetReader,
};
use crate::watch::domain::{FreshnessWindow, PollBudget, WatchOutcome};
use mockable::Clock;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Polls the worksheet until a fresh row appears or the budget runs out.
///
/// Performs no presentation; terminal status rendering belongs to the
/// caller.
#[derive(Clone)]
pub struct WatchService<R, C>
where
    R: SheetReader,
    C: Clock + Send + Sync,
{
    reader: Arc<R>,
    clock: Arc<C>,
    layout: ColumnLayout,
    window: FreshnessWindow,
}

impl<R, C> WatchService<R, C>
where
    R: SheetReader,
    C: Clock + Send + Sync,
{
    /// Creates a watch service.
    #[must_use]
    pub const fn new(
        reader: Arc<R>,
        clock: Arc<C>,
        layout: ColumnLayout,
        window: FreshnessWindow,
    ) -> Self {
        Self {
            reader,
            clock,
            layout,
            window,
        }
    }

    /// Runs one watch invocation.
    ///
    /// Reads at most `budget.max_attempts()` snapshots. The first fresh row
    /// ends the loop immediately with [`WatchOutcome::Complete`]; exhausting
    /// the budget yields [`WatchOutcome::StillPending`]. The sleep between
    /// attempts races the cancellation token, so a cancelled invocation
    /// returns [`WatchOutcome::Cancelled`] without further reads.
    ///
    /// A snapshot read failure is logged and ends the invocation early with
    /// [`WatchOutcome::StillPending`]; the external job is assumed to finish
    /// on its own schedule regardless.
    pub async fn watch(&self, budget: &PollBudget, cancel: &CancellationToken) -> WatchOutcome {
        for attempt in 1..=budget.max_attempts() {
            let snapshot = match self.reader.snapshot().await {
                Ok(snapshot) => snapshot,
                Err(error) => {
                    tracing::warn!(%error, attempt, "snapshot read failed, ending watch early");
                    return WatchOutcome::StillPending;
                }
            };

            if self.has_fresh_row(&snapshot) {
                tracing::info!(attempt, "fresh row detected");
                return WatchOutcome::Complete;
            }

            if attempt < budget.max_attempts() {
                tokio::select! {
                    () = cancel.cancelled() => {
                        tracing::info!(attempt, "watch cancelled");
                        return WatchOutcome::Cancelled;
                    }
                    () = tokio::time::sleep(budget.interval()) => {}
                }
            }
        }

        tracing::info!(
            max_attempts = budget.max_attempts(),
            "attempt budget exhausted with no fresh row"
        );
        WatchOutcome::StillPending
    }

    /// Whether any data row carries a timestamp inside the freshness window.
    fn has_fresh_row(&self, snapshot: &SheetSnapshot) -> bool {
        let now = self.clock.utc();
        snapshot.data_rows().any(|row| {
            SheetSnapshot::cell(row, self.layout.timestamp_column())
                .and_then(parse_worksheet_timestamp)
                .is_some_and(|timestamp| self.window.is_fresh(timestamp, now))
        })
    }
}
