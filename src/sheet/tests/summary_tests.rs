//! Summarizer behaviour tests.

use crate::sheet::domain::{ColumnLayout, RowMarkers, SheetSnapshot, summarize};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

fn row(url: &str, timestamp: &str, result: &str) -> Vec<String> {
    let mut cells = vec![String::new(); 12];
    if let Some(cell) = cells.get_mut(0) {
        *cell = url.to_owned();
    }
    if let Some(cell) = cells.get_mut(10) {
        *cell = timestamp.to_owned();
    }
    if let Some(cell) = cells.get_mut(11) {
        *cell = result.to_owned();
    }
    cells
}

fn header() -> Vec<String> {
    row("Instagram URL", "Last Updated", "Status")
}

#[fixture]
fn layout() -> ColumnLayout {
    ColumnLayout::default()
}

#[rstest]
fn counts_processed_and_pending_rows(layout: ColumnLayout) {
    let markers = RowMarkers::new("instagram.com", "Success").expect("valid markers");
    let snapshot = SheetSnapshot::from_rows(vec![
        header(),
        row(
            "https://instagram.com/p/a",
            "2026-08-04 09:50:00",
            "Success",
        ),
        row("https://instagram.com/p/b", "", ""),
    ]);

    let summary = summarize(&snapshot, &layout, &markers);

    assert_eq!(summary.total, 2);
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.pending, 1);
    let expected = Utc
        .with_ymd_and_hms(2026, 8, 4, 9, 50, 0)
        .single()
        .expect("unambiguous timestamp");
    assert_eq!(summary.last_update, Some(expected));
}

#[rstest]
fn is_idempotent_over_the_same_snapshot(layout: ColumnLayout) {
    let markers = RowMarkers::default();
    let snapshot = SheetSnapshot::from_rows(vec![
        header(),
        row(
            "https://instagram.com/reel/c",
            "2026-08-04 08:00:00",
            "⚡ Fresh Data",
        ),
        row("https://instagram.com/p/d", "", "❌ Error"),
    ]);

    let first = summarize(&snapshot, &layout, &markers);
    let second = summarize(&snapshot, &layout, &markers);
    assert_eq!(first, second);
    assert_eq!(first.processed, 1);
    assert_eq!(first.pending, 1);
}

#[rstest]
fn last_update_keeps_the_latest_processed_timestamp(layout: ColumnLayout) {
    let markers = RowMarkers::default();
    let snapshot = SheetSnapshot::from_rows(vec![
        header(),
        row(
            "https://instagram.com/p/a",
            "2026-08-04 07:00:00",
            "⚡ Fresh Data",
        ),
        row(
            "https://instagram.com/p/b",
            "2026-08-04 09:30:00",
            "⚡ Fresh Data",
        ),
        row(
            "https://instagram.com/p/c",
            "2026-08-04 08:15:00",
            "⚡ Fresh Data",
        ),
    ]);

    let summary = summarize(&snapshot, &layout, &markers);

    let expected = Utc
        .with_ymd_and_hms(2026, 8, 4, 9, 30, 0)
        .single()
        .expect("unambiguous timestamp");
    assert_eq!(summary.last_update, Some(expected));
}

#[rstest]
fn unparseable_timestamps_never_set_last_update(layout: ColumnLayout) {
    let markers = RowMarkers::default();
    let snapshot = SheetSnapshot::from_rows(vec![
        header(),
        row("https://instagram.com/p/a", "soon", "⚡ Fresh Data"),
    ]);

    let summary = summarize(&snapshot, &layout, &markers);

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.last_update, None);
}

#[rstest]
fn rows_without_the_url_marker_still_count_as_pending(layout: ColumnLayout) {
    let markers = RowMarkers::default();
    let snapshot = SheetSnapshot::from_rows(vec![
        header(),
        row("https://example.com/not-tracked", "", ""),
    ]);

    let summary = summarize(&snapshot, &layout, &markers);

    assert_eq!(summary.total, 0);
    assert_eq!(summary.pending, 1);
}

#[rstest]
fn empty_snapshot_summarizes_to_zero(layout: ColumnLayout) {
    let markers = RowMarkers::default();
    let summary = summarize(&SheetSnapshot::default(), &layout, &markers);
    assert_eq!(summary, crate::sheet::domain::SheetSummary::default());
}
