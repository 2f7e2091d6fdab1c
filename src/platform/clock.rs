//! Millisecond clock readings
//!
//! Readings carry only the millisecond-in-second field (0..=999), so durations
//! are recovered with modular arithmetic. Any interval of a full second or more
//! aliases; callers must keep their intervals shorter than that.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::MILLIS_PER_SECOND;

/// Source of millisecond-in-second readings
pub trait Clock {
    /// Current reading in `0..1000`
    fn millis(&self) -> u16;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn millis(&self) -> u16 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_millis() as u16)
            .unwrap_or(0)
    }
}

/// Milliseconds from `earlier` to `later`, across the wrap at 1000
///
/// Precondition: the true interval is below one second.
#[inline]
pub fn millis_between(earlier: u16, later: u16) -> u16 {
    let diff = i32::from(later) - i32::from(earlier);
    diff.rem_euclid(i32::from(MILLIS_PER_SECOND)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_difference() {
        assert_eq!(millis_between(100, 120), 20);
        assert_eq!(millis_between(500, 500), 0);
    }

    #[test]
    fn test_wraps_at_second_boundary() {
        assert_eq!(millis_between(950, 50), 100);
        assert_eq!(millis_between(999, 0), 1);
        assert_eq!(millis_between(1, 0), 999);
    }

    #[test]
    fn test_system_clock_in_range() {
        assert!(SystemClock.millis() < MILLIS_PER_SECOND);
    }
}
