//! Freshness window used to infer recent job completion.

use super::WatchDomainError;
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Lookback window classifying a row timestamp as recent.
///
/// A timestamp at or after `now - window` is fresh. Timestamps ahead of the
/// observer's clock are treated as fresh rather than discarded; the
/// worksheet writer and this crate do not share a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessWindow(TimeDelta);

impl FreshnessWindow {
    /// Creates a window from a standard duration.
    ///
    /// # Errors
    ///
    /// Returns [`WatchDomainError::WindowOutOfRange`] when the duration does
    /// not fit a signed delta.
    pub fn new(window: Duration) -> Result<Self, WatchDomainError> {
        TimeDelta::from_std(window)
            .map(Self)
            .map_err(|_| WatchDomainError::WindowOutOfRange)
    }

    /// Whether `timestamp` falls inside the window ending at `now`.
    #[must_use]
    pub fn is_fresh(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(timestamp) <= self.0
    }
}

impl Default for FreshnessWindow {
    /// Five minutes, matching the cadence of the external job's runs.
    fn default() -> Self {
        Self(TimeDelta::minutes(5))
    }
}
