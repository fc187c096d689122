//! Refresh cycle orchestration tests.

use std::sync::Arc;
use std::time::Duration;

use crate::dispatch::{
    adapters::memory::RecordingDispatcher,
    domain::{DispatchOutcome, DispatchTarget, TriggerSource},
    ports::DispatchError,
    services::DispatchService,
};
use crate::refresh::{
    adapters::memory::{RecordingNotifier, RecordingStatusSink},
    domain::StatusKind,
    services::{RefreshService, RefreshServiceError, RefreshSettings},
};
use crate::sheet::{
    adapters::memory::InMemorySheetReader,
    domain::{ColumnLayout, RowMarkers, SheetSnapshot, WORKSHEET_TIMESTAMP_FORMAT},
    ports::SheetReadError,
};
use crate::watch::{
    domain::{FreshnessWindow, PollBudget, WatchOutcome},
    services::WatchService,
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::DefaultClock;
use tokio_util::sync::CancellationToken;

type TestRefresh = RefreshService<
    RecordingDispatcher,
    InMemorySheetReader,
    DefaultClock,
    RecordingStatusSink,
    RecordingNotifier,
>;

fn snapshot_with_timestamp(timestamp: DateTime<Utc>) -> SheetSnapshot {
    let mut cells = vec![String::new(); 12];
    if let Some(cell) = cells.get_mut(0) {
        *cell = "https://instagram.com/p/a".to_owned();
    }
    if let Some(cell) = cells.get_mut(10) {
        *cell = timestamp.format(WORKSHEET_TIMESTAMP_FORMAT).to_string();
    }
    if let Some(cell) = cells.get_mut(11) {
        *cell = "⚡ Fresh Data".to_owned();
    }
    SheetSnapshot::from_rows(vec![vec!["Instagram URL".to_owned()], cells])
}

fn settings() -> RefreshSettings {
    RefreshSettings {
        layout: ColumnLayout::default(),
        markers: RowMarkers::default(),
        budget: PollBudget::new(2, Duration::from_secs(10)).expect("valid budget"),
    }
}

fn build(
    dispatch: DispatchService<RecordingDispatcher>,
    reader: &InMemorySheetReader,
) -> (TestRefresh, RecordingStatusSink, RecordingNotifier) {
    let sink = RecordingStatusSink::new();
    let notifier = RecordingNotifier::new();
    let watch = WatchService::new(
        Arc::new(reader.clone()),
        Arc::new(DefaultClock),
        ColumnLayout::default(),
        FreshnessWindow::default(),
    );
    let service = RefreshService::new(
        dispatch,
        watch,
        Arc::new(reader.clone()),
        Arc::new(sink.clone()),
        Arc::new(notifier.clone()),
        settings(),
    );
    (service, sink, notifier)
}

fn target() -> DispatchTarget {
    DispatchTarget::from_parts("acme/scraper", "scrape.yml", "main").expect("valid target")
}

#[tokio::test(start_paused = true)]
async fn successful_cycle_publishes_refreshing_then_complete() {
    let dispatcher = RecordingDispatcher::new();
    let reader = InMemorySheetReader::new(snapshot_with_timestamp(Utc::now()));
    let (service, sink, _notifier) = build(
        DispatchService::new(Arc::new(dispatcher.clone()), target()),
        &reader,
    );

    let report = service
        .refresh(TriggerSource::Manual, &CancellationToken::new())
        .await
        .expect("cycle should succeed");

    assert_eq!(report.dispatch(), DispatchOutcome::Dispatched);
    assert_eq!(report.watch(), WatchOutcome::Complete);
    assert_eq!(dispatcher.recorded().len(), 1);
    let kinds: Vec<StatusKind> = sink.published().iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![StatusKind::Refreshing, StatusKind::Complete]);
}

#[tokio::test(start_paused = true)]
async fn dispatch_failure_publishes_failed_and_skips_the_watch() {
    let dispatcher = RecordingDispatcher::new();
    dispatcher.fail_with(DispatchError::UnexpectedStatus(500));
    let reader = InMemorySheetReader::new(snapshot_with_timestamp(Utc::now()));
    let (service, sink, notifier) = build(
        DispatchService::new(Arc::new(dispatcher), target()),
        &reader,
    );

    let result = service
        .refresh(TriggerSource::Manual, &CancellationToken::new())
        .await;

    assert!(matches!(result, Err(RefreshServiceError::Dispatch(_))));
    assert_eq!(reader.read_count(), 0);
    let kinds: Vec<StatusKind> = sink.published().iter().map(|r| r.kind()).collect();
    assert_eq!(kinds, vec![StatusKind::Refreshing, StatusKind::Failed]);
    assert!(
        notifier
            .notices()
            .iter()
            .any(|notice| notice.title() == "Refresh failed")
    );
}

#[tokio::test(start_paused = true)]
async fn untriggered_dispatch_is_published_before_the_watch() {
    let reader = InMemorySheetReader::new(snapshot_with_timestamp(Utc::now()));
    let (service, sink, _notifier) = build(DispatchService::untriggered(target()), &reader);

    let report = service
        .refresh(TriggerSource::Manual, &CancellationToken::new())
        .await
        .expect("cycle should succeed");

    assert_eq!(report.dispatch(), DispatchOutcome::Untriggered);
    let kinds: Vec<StatusKind> = sink.published().iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            StatusKind::Refreshing,
            StatusKind::Untriggered,
            StatusKind::Complete
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn stale_sheet_ends_still_pending() {
    let stale = Utc::now() - TimeDelta::minutes(45);
    let reader = InMemorySheetReader::new(snapshot_with_timestamp(stale));
    let dispatcher = RecordingDispatcher::new();
    let (service, sink, notifier) = build(
        DispatchService::new(Arc::new(dispatcher), target()),
        &reader,
    );

    let report = service
        .refresh(TriggerSource::Manual, &CancellationToken::new())
        .await
        .expect("cycle should succeed");

    assert_eq!(report.watch(), WatchOutcome::StillPending);
    assert_eq!(reader.read_count(), 2);
    let last = sink.published().last().cloned().expect("terminal report");
    assert_eq!(last.kind(), StatusKind::StillPending);
    assert!(
        notifier
            .notices()
            .iter()
            .any(|notice| notice.title() == "Refresh still pending")
    );
}

#[tokio::test]
async fn check_status_reports_the_summary() {
    let reader = InMemorySheetReader::new(snapshot_with_timestamp(
        Utc::now() - TimeDelta::minutes(10),
    ));
    let (service, _sink, notifier) = build(DispatchService::untriggered(target()), &reader);

    let summary = service.check_status().await.expect("status should succeed");

    assert_eq!(summary.total, 1);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.pending, 0);
    assert!(
        notifier
            .notices()
            .iter()
            .any(|notice| notice.title() == "Processing status"
                && notice.body().contains("1 processed"))
    );
}

#[tokio::test]
async fn check_status_surfaces_read_failures() {
    let reader = InMemorySheetReader::new(SheetSnapshot::default());
    reader.fail_next(SheetReadError::UnexpectedStatus(429));
    let (service, _sink, notifier) = build(DispatchService::untriggered(target()), &reader);

    let result = service.check_status().await;

    assert!(matches!(result, Err(RefreshServiceError::Read(_))));
    assert!(
        notifier
            .notices()
            .iter()
            .any(|notice| notice.title() == "Status unavailable")
    );
}
