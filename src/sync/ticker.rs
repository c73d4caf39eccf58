use std::time::{Duration, Instant};

/// Fixed-period tick schedule driven by the event loop.
///
/// Ticks that were missed while the loop was busy collapse into one.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Ticker {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// If due, schedule the next tick one period from `now` and return true
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_due = now + self.period;
        true
    }

    /// Restart the schedule, e.g. when a dormant tab becomes visible again
    pub fn restart(&mut self, now: Instant) {
        self.next_due = now + self.period;
    }
}
