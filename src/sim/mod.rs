//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time arrives as an elapsed millisecond count, never read from a clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod math;
pub mod state;
pub mod tick;

pub use collision::{BoundaryHits, PaddleContact, clamp_to_bounds, deflect, paddle_contact};
pub use math::{magnitude, newton_sqrt};
pub use state::{Ball, GameState};
pub use tick::{PaddleHit, TickOutcome, tick};
