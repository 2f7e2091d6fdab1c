//! Platform abstraction layer
//!
//! Seams between the simulation and the host:
//! - Time: millisecond-in-second clock readings
//! - Timers: one-shot, cancellable, re-armed by the update step itself

pub mod clock;
pub mod timer;

pub use clock::{Clock, SystemClock, millis_between};
pub use timer::{Scheduler, SchedulerError, TimerHandle, TimerQueue};
