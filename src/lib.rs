//! Bounce Pong - a bouncing ball kept alive by a single paddle on a tiny display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, deflection, game state)
//! - `config`: Immutable simulation configuration
//! - `input`: Paddle commands
//! - `platform`: Clock and one-shot timer seams
//! - `render`: Render sink contract and the terminal implementation
//! - `game`: The self-re-arming update step tying it all together

pub mod config;
pub mod game;
pub mod input;
pub mod platform;
pub mod render;
pub mod sim;

pub use config::{ConfigError, SimulationConfig};
pub use game::{Game, TickStats};
pub use input::Command;

/// Built-in configuration defaults
pub mod consts {
    /// Display dimensions (display units)
    pub const SCREEN_WIDTH: f32 = 144.0;
    pub const SCREEN_HEIGHT: f32 = 168.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_INITIAL_X: f32 = 10.0;
    pub const BALL_INITIAL_Y: f32 = 84.0;
    /// Initial velocity in display units per millisecond
    pub const BALL_INITIAL_VX: f32 = 2.0 / 40.0;
    pub const BALL_INITIAL_VY: f32 = 0.3 / 40.0;

    /// Paddle defaults - pinned to the left wall
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    pub const PADDLE_INITIAL_Y: f32 = 84.0;
    /// Distance moved per button press
    pub const PADDLE_STEP: f32 = 15.0;

    /// Target tick period in milliseconds (50 Hz)
    pub const TICK_PERIOD_MS: u16 = 20;
    /// Speed multiplier applied on every wall bounce
    pub const SPEED_RAMP: f32 = 1.03;

    /// Clock readings wrap at this many milliseconds
    pub const MILLIS_PER_SECOND: u16 = 1000;
}
