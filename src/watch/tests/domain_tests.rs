//! Budget and freshness window tests.

use crate::watch::domain::{FreshnessWindow, PollBudget, WatchDomainError, WatchOutcome};
use chrono::{TimeDelta, Utc};
use rstest::rstest;
use std::time::Duration;

#[rstest]
#[case(Duration::from_secs(60), Duration::from_secs(10), 6)]
#[case(Duration::from_secs(65), Duration::from_secs(10), 6)]
#[case(Duration::from_secs(9), Duration::from_secs(10), 1)]
#[case(Duration::ZERO, Duration::from_secs(10), 1)]
fn from_window_drops_the_remainder_but_keeps_one_attempt(
    #[case] max_wait: Duration,
    #[case] interval: Duration,
    #[case] expected: u32,
) {
    let budget = PollBudget::from_window(max_wait, interval).expect("valid budget");
    assert_eq!(budget.max_attempts(), expected);
    assert_eq!(budget.interval(), interval);
}

#[test]
fn from_window_rejects_zero_interval() {
    assert!(matches!(
        PollBudget::from_window(Duration::from_secs(60), Duration::ZERO),
        Err(WatchDomainError::ZeroInterval)
    ));
}

#[test]
fn new_rejects_zero_attempts() {
    assert!(matches!(
        PollBudget::new(0, Duration::from_secs(10)),
        Err(WatchDomainError::ZeroAttempts)
    ));
}

#[test]
fn window_edge_is_still_fresh() {
    let window = FreshnessWindow::new(Duration::from_secs(300)).expect("valid window");
    let now = Utc::now();
    assert!(window.is_fresh(now - TimeDelta::seconds(300), now));
    assert!(!window.is_fresh(now - TimeDelta::seconds(301), now));
}

#[test]
fn timestamps_ahead_of_the_observer_count_as_fresh() {
    let window = FreshnessWindow::default();
    let now = Utc::now();
    assert!(window.is_fresh(now + TimeDelta::seconds(90), now));
}

#[test]
fn outcome_exposes_completion() {
    assert!(WatchOutcome::Complete.is_complete());
    assert!(!WatchOutcome::StillPending.is_complete());
    assert!(!WatchOutcome::Cancelled.is_complete());
    assert_eq!(WatchOutcome::StillPending.as_str(), "still_pending");
}
