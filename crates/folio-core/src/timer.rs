//! Cancellable fixed-period timer polled from the event loop.

use std::time::{Duration, Instant};

/// Shortest period an [`Interval`] will run at.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A repeating timer. It never fires on its own: the owner calls
/// [`Interval::poll`] from the event loop and applies the returned number
/// of due ticks. Once cancelled it never fires again.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
    cancelled: bool,
}

impl Interval {
    /// Schedule an interval whose first tick is due one period after `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now + period,
            cancelled: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks that became due since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        if self.cancelled || now < self.next_due {
            return 0;
        }
        let behind = now.duration_since(self.next_due).as_nanos();
        let period = self.period.as_nanos();
        let due = 1 + behind / period;
        let into_current = Duration::from_nanos((behind % period) as u64);
        self.next_due = now + (self.period - into_current);
        u32::try_from(due).unwrap_or(u32::MAX)
    }

    /// Stop the interval. Further polls return zero.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
