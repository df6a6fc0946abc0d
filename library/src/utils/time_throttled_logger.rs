use log::{log, Level};
use std::time::{Duration, Instant};

/// Writes at most one message per interval; messages in between are dropped.
pub(crate) struct TimeThrottledLogger {
    interval: Duration,
    level: Level,
    last_log_action: Instant,
}

impl TimeThrottledLogger {
    #[must_use]
    pub(crate) fn new(interval: Duration, level: Level) -> Self {
        Self::starting_at(interval, level, Instant::now())
    }

    #[must_use]
    fn starting_at(interval: Duration, level: Level, start: Instant) -> Self {
        Self { interval, level, last_log_action: start }
    }

    pub(crate) fn do_write(&mut self, message: impl FnOnce() -> String) {
        if self.is_due(Instant::now()) {
            log!(self.level, "{}", message());
        }
    }

    /// Keeps the cadence stable: the overshoot past the interval counts
    /// towards the next one.
    #[must_use]
    fn is_due(&mut self, now: Instant) -> bool {
        let delta = now.saturating_duration_since(self.last_log_action);
        if delta <= self.interval {
            return false;
        }
        self.last_log_action = now - (delta - self.interval);
        true
    }
}
