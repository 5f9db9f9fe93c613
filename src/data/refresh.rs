use std::time::Duration;

use crate::utils::AppInstant;

/// Fixed-period timer polled from the frame loop.
///
/// Holds no thread or callback: it only fires while its owner keeps calling
/// [`RefreshTimer::poll`], so dropping the owner stops it.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    period: Duration,
    next_due: AppInstant,
}

impl RefreshTimer {
    /// First firing is one `period` after `now`.
    pub fn new(period: Duration, now: AppInstant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// True once per elapsed period. Missed periods collapse into one firing.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period;
        true
    }

    /// Time until the next firing, for scheduling a repaint.
    pub fn remaining(&self, now: AppInstant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
