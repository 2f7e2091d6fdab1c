//! Paddle commands
//!
//! Three buttons map to discrete commands. Commands mutate only the paddle and
//! take effect for the next tick's paddle check.

use crate::config::SimulationConfig;
use crate::sim::GameState;

/// A discrete button command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PaddleUp,
    PaddleDown,
    /// Reserved; does nothing
    Select,
}

impl Command {
    /// Apply the command; returns true if the paddle moved
    ///
    /// The paddle is not clamped and may leave the screen.
    pub fn apply(self, state: &mut GameState, config: &SimulationConfig) -> bool {
        match self {
            Command::PaddleUp => {
                state.paddle_y -= config.paddle_step;
                true
            }
            Command::PaddleDown => {
                state.paddle_y += config.paddle_step;
                true
            }
            Command::Select => false,
        }
    }
}
