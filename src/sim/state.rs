//! Game state and core simulation types
//!
//! A single explicit `GameState` value is owned by the game driver; the update
//! step and paddle commands borrow it mutably in turn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Displacement per millisecond, before speed scaling
    pub vel: Vec2,
}

impl Ball {
    /// Ball at its configured starting position and velocity
    pub fn initial(config: &SimulationConfig) -> Self {
        Self {
            pos: config.ball_initial_position,
            vel: config.ball_initial_velocity,
        }
    }

    /// Center of the ball
    #[inline]
    pub fn center(&self, radius: f32) -> Vec2 {
        self.pos + Vec2::splat(radius)
    }
}

/// Complete mutable simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Physics is active; false before the first tick and right after a miss
    pub started: bool,
    pub ball: Ball,
    /// Multiplier on velocity, only ever ramps up
    pub speed: f32,
    /// Top edge of the paddle (never clamped to the screen)
    pub paddle_y: f32,
    /// Successful deflections since the last reset
    pub hits: u32,
    /// Millisecond-in-second clock reading at the end of the previous tick
    pub last_tick_millis: u16,
}

impl GameState {
    /// Fresh state waiting for its first tick
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            started: false,
            ball: Ball::initial(config),
            speed: 1.0,
            paddle_y: config.paddle_initial_position,
            hits: 0,
            last_tick_millis: 0,
        }
    }

    /// Restore every gameplay field to its configured initial value
    ///
    /// Leaves `started` and `last_tick_millis` alone.
    pub fn init(&mut self, config: &SimulationConfig) {
        self.ball = Ball::initial(config);
        self.speed = 1.0;
        self.hits = 0;
        self.paddle_y = config.paddle_initial_position;
    }

    /// Reset after a missed paddle; the next tick re-initializes
    pub fn reset(&mut self, config: &SimulationConfig) {
        self.started = false;
        self.init(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_not_started() {
        let config = SimulationConfig::default();
        let state = GameState::new(&config);
        assert!(!state.started);
        assert_eq!(state.speed, 1.0);
        assert_eq!(state.hits, 0);
        assert_eq!(state.ball.pos, Vec2::new(10.0, 84.0));
        assert_eq!(state.paddle_y, 84.0);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let config = SimulationConfig::default();
        let mut state = GameState::new(&config);
        state.started = true;
        state.speed = 1.5;
        state.hits = 7;
        state.paddle_y = -30.0;
        state.ball.pos = Vec2::new(0.0, 3.0);
        state.ball.vel = Vec2::new(-0.1, 0.2);
        state.last_tick_millis = 412;

        state.reset(&config);

        assert!(!state.started);
        assert_eq!(state.last_tick_millis, 412);
        let mut expected = GameState::new(&config);
        expected.last_tick_millis = 412;
        assert_eq!(state, expected);
    }

    #[test]
    fn test_ball_center() {
        let ball = Ball {
            pos: Vec2::new(0.0, 20.0),
            vel: Vec2::ZERO,
        };
        assert_eq!(ball.center(10.0), Vec2::new(10.0, 30.0));
    }
}
