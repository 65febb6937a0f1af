use std::cell::Cell;
use std::time::Instant;

/// Source of monotonic millisecond timestamps.
///
/// The epoch is arbitrary but fixed for the lifetime of the clock.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Timing snapshot of one executed frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Timestamp the frame was executed at, in milliseconds.
    pub now_ms: f64,

    /// Milliseconds since the pacer was started; forwarded to the client.
    pub elapsed_ms: f64,

    /// Monotonic executed-frame counter, starting at 0.
    pub frame_index: u64,

    /// Whether the surface was reconciled to a new size during this frame.
    pub resized: bool,
}

/// Wall clock backed by `Instant`, with its epoch at construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Converts a timestamp produced by this clock back into an `Instant`.
    ///
    /// Used by the runtime to turn pacer deadlines into event-loop wake times.
    pub fn instant_at(&self, ms: f64) -> Instant {
        self.epoch + std::time::Duration::from_secs_f64(ms.max(0.0) / 1000.0)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock whose time only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Jumps to `ms`. Going backwards is a caller bug.
    pub fn set(&self, ms: f64) {
        debug_assert!(ms >= self.now.get(), "ManualClock must not run backwards");
        self.now.set(ms);
    }

    pub fn advance(&self, delta_ms: f64) {
        self.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_told() {
        let clock = ManualClock::new(5.0);
        assert_eq!(clock.now_ms(), 5.0);
        clock.advance(10.0);
        assert_eq!(clock.now_ms(), 15.0);
        clock.set(40.0);
        assert_eq!(clock.now_ms(), 40.0);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }

    #[test]
    fn instant_at_round_trips_epoch() {
        let clock = SystemClock::new();
        assert_eq!(clock.instant_at(0.0), clock.epoch);
        assert!(clock.instant_at(16.0) > clock.epoch);
    }
}
