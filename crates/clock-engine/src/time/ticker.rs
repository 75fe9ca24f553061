use std::time::{Duration, Instant};

/// A single fired timer tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Monotonic tick counter, starting at 0.
    pub index: u64,

    /// Time at which the tick was observed (not the scheduled deadline).
    pub now: Instant,

    /// Number of whole intervals skipped since the previous tick.
    ///
    /// Non-zero after the loop was stalled (debugger, minimized window, slow frame).
    pub missed: u32,
}

/// Fixed-interval, self re-arming timer.
///
/// The runtime parks the event loop until [`deadline`](Self::deadline) and then
/// calls [`poll`](Self::poll). Each fired tick schedules the next deadline one
/// interval later. After a stall the ticker fires once and realigns to the
/// interval grid instead of replaying every missed tick.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Instant,
    index: u64,
}

impl Ticker {
    /// Creates a ticker whose first tick is due one interval after `start`.
    ///
    /// Intervals shorter than one millisecond are raised to one millisecond.
    pub fn new(interval: Duration, start: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next: start + interval,
            index: 0,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant at which the next tick is due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Fires a tick if the deadline has passed, re-arming for the next interval.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        if now < self.next {
            return None;
        }

        let late = now.saturating_duration_since(self.next);
        let missed = (late.as_nanos() / self.interval.as_nanos()) as u32;

        // Realign to the grid: skip every interval that already elapsed.
        self.next += self.interval * (missed + 1);

        let tick = Tick {
            index: self.index,
            now,
            missed,
        };
        self.index = self.index.wrapping_add(1);

        Some(tick)
    }

    /// Moves the next deadline to one interval after `now`.
    ///
    /// Useful when resuming from suspension.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn does_not_fire_before_deadline() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(100 * MS, t0);
        assert!(ticker.poll(t0 + 99 * MS).is_none());
    }

    #[test]
    fn fires_and_rearms() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(100 * MS, t0);

        let first = ticker.poll(t0 + 100 * MS).expect("first tick due");
        assert_eq!(first.index, 0);
        assert_eq!(first.missed, 0);
        assert_eq!(ticker.deadline(), t0 + 200 * MS);

        assert!(ticker.poll(t0 + 150 * MS).is_none());

        let second = ticker.poll(t0 + 205 * MS).expect("second tick due");
        assert_eq!(second.index, 1);
        assert_eq!(ticker.deadline(), t0 + 300 * MS);
    }

    #[test]
    fn stall_fires_once_and_realigns() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(100 * MS, t0);

        let tick = ticker.poll(t0 + 450 * MS).expect("tick due after stall");
        assert_eq!(tick.missed, 3);
        assert_eq!(ticker.deadline(), t0 + 500 * MS);
        assert!(ticker.poll(t0 + 460 * MS).is_none());
    }

    #[test]
    fn zero_interval_is_raised() {
        let ticker = Ticker::new(Duration::ZERO, Instant::now());
        assert_eq!(ticker.interval(), MS);
    }

    #[test]
    fn reset_pushes_deadline() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(100 * MS, t0);
        ticker.reset(t0 + 1000 * MS);
        assert_eq!(ticker.deadline(), t0 + 1100 * MS);
    }
}
