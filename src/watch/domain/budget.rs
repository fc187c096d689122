//! Bounded poll budget for one watch invocation.

use super::WatchDomainError;
use std::time::Duration;

/// Attempt ceiling and interval for one watch invocation.
///
/// Lives only for the duration of one invocation; there is no
/// cross-invocation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollBudget {
    max_attempts: u32,
    interval: Duration,
}

impl PollBudget {
    /// Creates a budget with an explicit attempt ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`WatchDomainError::ZeroAttempts`] when `max_attempts` is
    /// zero.
    pub const fn new(max_attempts: u32, interval: Duration) -> Result<Self, WatchDomainError> {
        if max_attempts == 0 {
            return Err(WatchDomainError::ZeroAttempts);
        }
        Ok(Self {
            max_attempts,
            interval,
        })
    }

    /// Derives the attempt ceiling from a wait-time ceiling.
    ///
    /// `max_attempts` is `max_wait / interval` with any fractional remainder
    /// dropped, so the actual maximum wait may fall slightly under the
    /// configured ceiling. A window shorter than one interval still yields
    /// one attempt.
    ///
    /// # Errors
    ///
    /// Returns [`WatchDomainError::ZeroInterval`] when the interval is zero.
    pub fn from_window(max_wait: Duration, interval: Duration) -> Result<Self, WatchDomainError> {
        if interval.is_zero() {
            return Err(WatchDomainError::ZeroInterval);
        }
        let attempts = max_wait
            .as_millis()
            .checked_div(interval.as_millis())
            .unwrap_or(0);
        let capped = u32::try_from(attempts).unwrap_or(u32::MAX).max(1);
        Self::new(capped, interval)
    }

    /// Returns the attempt ceiling.
    #[must_use]
    pub const fn max_attempts(self) -> u32 {
        self.max_attempts
    }

    /// Returns the sleep interval between attempts.
    #[must_use]
    pub const fn interval(self) -> Duration {
        self.interval
    }
}
