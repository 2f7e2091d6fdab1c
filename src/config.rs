//! Simulation configuration
//!
//! Set once at startup, optionally from a JSON file, then shared read-only.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration cannot be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Process-wide simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical distance per paddle command
    pub paddle_step: f32,
    /// Top-left corner of the ball's bounding box at (re)initialization
    pub ball_initial_position: Vec2,
    /// Displacement per millisecond at (re)initialization
    pub ball_initial_velocity: Vec2,
    /// Top edge of the paddle at (re)initialization
    pub paddle_initial_position: f32,
    pub tick_period_ms: u16,
    /// Multiplier applied to speed on every boundary clamp
    pub speed_ramp: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ball_radius: BALL_RADIUS,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            ball_initial_position: Vec2::new(BALL_INITIAL_X, BALL_INITIAL_Y),
            ball_initial_velocity: Vec2::new(BALL_INITIAL_VX, BALL_INITIAL_VY),
            paddle_initial_position: PADDLE_INITIAL_Y,
            tick_period_ms: TICK_PERIOD_MS,
            speed_ramp: SPEED_RAMP,
        }
    }
}

impl SimulationConfig {
    /// Load and validate a JSON config; missing fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Largest top-left coordinate that keeps the ball on screen
    #[inline]
    pub fn max_ball_position(&self) -> Vec2 {
        let diameter = 2.0 * self.ball_radius;
        Vec2::new(self.screen_width - diameter, self.screen_height - diameter)
    }

    /// Check that the configuration upholds the simulation invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.screen_width,
            self.screen_height,
            self.ball_radius,
            self.paddle_width,
            self.paddle_height,
            self.paddle_step,
            self.paddle_initial_position,
            self.speed_ramp,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.ball_initial_position.is_finite()
            && self.ball_initial_velocity.is_finite();
        if !finite {
            return Err(invalid("config", "all values must be finite"));
        }

        if self.ball_radius <= 0.0 {
            return Err(invalid("ball_radius", "must be positive"));
        }
        if self.paddle_width <= 0.0 {
            return Err(invalid("paddle_width", "must be positive"));
        }
        if self.paddle_height <= 0.0 {
            return Err(invalid("paddle_height", "must be positive"));
        }

        let max = self.max_ball_position();
        if max.x <= 0.0 {
            return Err(invalid("screen_width", "must exceed the ball diameter"));
        }
        if max.y <= 0.0 {
            return Err(invalid("screen_height", "must exceed the ball diameter"));
        }

        let start = self.ball_initial_position;
        if start.x < 0.0 || start.y < 0.0 || start.x > max.x || start.y > max.y {
            return Err(invalid("ball_initial_position", "must keep the ball on screen"));
        }

        if self.speed_ramp < 1.0 {
            return Err(invalid("speed_ramp", "must be at least 1.0"));
        }
        // Elapsed time is derived from millisecond-in-second readings
        if self.tick_period_ms == 0 || self.tick_period_ms >= MILLIS_PER_SECOND {
            return Err(invalid("tick_period_ms", "must be between 1 and 999"));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
