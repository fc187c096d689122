//! Tracing-backed presentation adapters for headless runs.

use crate::refresh::{
    domain::{Notice, StatusReport},
    ports::{Notifier, NotifyResult, ReportResult, StatusSink},
};
use async_trait::async_trait;

/// Status sink rendering reports as log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStatusSink;

#[async_trait]
impl StatusSink for LogStatusSink {
    async fn publish(&self, report: &StatusReport) -> ReportResult<()> {
        tracing::info!(
            kind = %report.kind(),
            headline = report.headline(),
            detail = report.detail().unwrap_or_default(),
            "status"
        );
        Ok(())
    }
}

/// Notifier rendering notices as log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, notice: &Notice) -> NotifyResult<()> {
        tracing::info!(title = notice.title(), body = notice.body(), "notice");
        Ok(())
    }
}
