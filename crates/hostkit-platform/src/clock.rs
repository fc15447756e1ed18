//! Monotonic high-resolution clock.
//!
//! Readings count nanoseconds from an unspecified epoch (boot, process start,
//! ...). They are only comparable within one process on one machine and must
//! never be persisted.

use std::time::Instant;

use once_cell::sync::Lazy;

use crate::{Backend, Native};

/// Nanoseconds from the highest-resolution monotonic source the platform
/// offers. Two calls on the same thread never go backwards.
pub fn nanoseconds_monotonic() -> i64 { Native::nanoseconds_monotonic() }

static ANCHOR: Lazy<Instant> = Lazy::new(Instant::now);

/// Process-relative reading used when the native source is unavailable.
pub(crate) fn fallback_nanoseconds() -> i64 {
    i64::try_from(ANCHOR.elapsed().as_nanos()).unwrap_or(i64::MAX)
}

/// Measures elapsed time against [`nanoseconds_monotonic`].
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: i64,
}

impl Default for Stopwatch {
    fn default() -> Self { Self::start() }
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: nanoseconds_monotonic(),
        }
    }

    pub fn elapsed_ns(&self) -> i64 { nanoseconds_monotonic().saturating_sub(self.start) }

    /// Returns the elapsed time and starts over from now.
    pub fn restart(&mut self) -> i64 {
        let now = nanoseconds_monotonic();
        let elapsed = now.saturating_sub(self.start);
        self.start = now;
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_monotonic_non_decreasing() {
        let mut previous = nanoseconds_monotonic();
        for _ in 0..10_000 {
            let next = nanoseconds_monotonic();
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn test_monotonic_tracks_sleep() {
        let before = nanoseconds_monotonic();
        std::thread::sleep(Duration::from_millis(20));
        let after = nanoseconds_monotonic();
        assert!(after - before >= 15_000_000);
    }

    #[test]
    fn test_stopwatch_restart() {
        let mut watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(5));
        let first = watch.restart();
        assert!(first >= 4_000_000);
        assert!(watch.elapsed_ns() < first + 1_000_000_000);
    }

    #[test]
    fn test_fallback_non_decreasing() {
        let a = fallback_nanoseconds();
        let b = fallback_nanoseconds();
        assert!(b >= a);
    }
}
