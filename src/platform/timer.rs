//! One-shot timers
//!
//! The update step is never driven by a free-running interval: each tick arms
//! the next one. Dropping or cancelling the handle halts the loop.

use std::time::{Duration, Instant};

use thiserror::Error;

/// Identifies one armed timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("cannot arm a timer {delay_ms} ms from now: deadline out of range")]
    DeadlineOverflow { delay_ms: u16 },
    #[error("timer scheduler has shut down")]
    Closed,
}

/// Arms one-shot timers
pub trait Scheduler {
    /// Fire once after at least `delay_ms` milliseconds
    fn schedule_once(&mut self, delay_ms: u16) -> Result<TimerHandle, SchedulerError>;

    /// Disarm a pending timer; returns false if it already fired or never existed
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}

/// Single-threaded timer queue polled by the host loop
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(TimerHandle, Instant)>,
    next_id: u64,
    closed: bool,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer relative to `now`
    pub fn schedule_from(
        &mut self,
        now: Instant,
        delay_ms: u16,
    ) -> Result<TimerHandle, SchedulerError> {
        if self.closed {
            return Err(SchedulerError::Closed);
        }
        let deadline = now
            .checked_add(Duration::from_millis(u64::from(delay_ms)))
            .ok_or(SchedulerError::DeadlineOverflow { delay_ms })?;

        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        self.pending.push((handle, deadline));
        log::trace!("Armed timer {} for {} ms", handle.id(), delay_ms);
        Ok(handle)
    }

    /// Time left until the earliest deadline (zero if overdue)
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.pending
            .iter()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
            .min()
    }

    /// Remove and return the earliest timer whose deadline has passed
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerHandle> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (_, deadline))| *deadline <= now)
            .min_by_key(|(_, (_, deadline))| *deadline)
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index).0)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop all timers and refuse new ones
    pub fn close(&mut self) {
        self.pending.clear();
        self.closed = true;
    }
}

impl Scheduler for TimerQueue {
    fn schedule_once(&mut self, delay_ms: u16) -> Result<TimerHandle, SchedulerError> {
        self.schedule_from(Instant::now(), delay_ms)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(h, _)| *h != handle);
        self.pending.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let mut timers = TimerQueue::new();
        let now = Instant::now();
        let handle = timers.schedule_from(now, 20).unwrap();

        assert_eq!(timers.pop_due(now), None);
        assert_eq!(timers.time_until_next(now), Some(Duration::from_millis(20)));

        let later = now + Duration::from_millis(20);
        assert_eq!(timers.pop_due(later), Some(handle));
        assert_eq!(timers.pop_due(later), None);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let mut timers = TimerQueue::new();
        let now = Instant::now();
        let handle = timers.schedule_from(now, 0).unwrap();
        assert_eq!(timers.time_until_next(now), Some(Duration::ZERO));
        assert_eq!(timers.pop_due(now), Some(handle));
    }

    #[test]
    fn test_earliest_deadline_first() {
        let mut timers = TimerQueue::new();
        let now = Instant::now();
        let slow = timers.schedule_from(now, 30).unwrap();
        let fast = timers.schedule_from(now, 10).unwrap();

        let later = now + Duration::from_millis(40);
        assert_eq!(timers.pop_due(later), Some(fast));
        assert_eq!(timers.pop_due(later), Some(slow));
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule_once(5).unwrap();
        assert!(timers.cancel(handle));
        assert!(!timers.cancel(handle));
        assert!(timers.is_empty());
        assert_eq!(timers.time_until_next(Instant::now()), None);
    }

    #[test]
    fn test_closed_queue_refuses_timers() {
        let mut timers = TimerQueue::new();
        timers.schedule_once(5).unwrap();
        timers.close();
        assert!(timers.is_empty());
        assert!(matches!(
            timers.schedule_once(5),
            Err(SchedulerError::Closed)
        ));
    }
}
