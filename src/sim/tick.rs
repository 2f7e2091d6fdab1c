//! One simulation step
//!
//! Advances the game state by an elapsed time in milliseconds. The caller owns
//! the clock; this module only sees the elapsed value, so it stays deterministic.

use glam::Vec2;

use super::collision::{BoundaryHits, PaddleContact, clamp_to_bounds, deflect, paddle_contact};
use super::state::GameState;
use crate::config::SimulationConfig;

/// A successful paddle deflection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// Hit count including this one
    pub hits: u32,
    /// Distance the ball's center sat past a paddle edge, if any
    pub overshoot: Option<f32>,
    pub vel_before: Vec2,
    pub vel_after: Vec2,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// State was (re)initialized; no physics ran
    Initialized,
    /// Physics advanced
    Advanced {
        bounces: BoundaryHits,
        hit: Option<PaddleHit>,
    },
    /// Ball got past the paddle; state was reset
    Missed {
        /// Hit count reached before the miss
        hits: u32,
    },
}

/// Advance the game by `elapsed_ms` milliseconds
///
/// Elapsed time is ignored on the tick that initializes the state.
pub fn tick(state: &mut GameState, config: &SimulationConfig, elapsed_ms: u16) -> TickOutcome {
    if !state.started {
        state.init(config);
        state.started = true;
        log::info!(
            "Game initialized: ball at ({}, {}), paddle at {}",
            state.ball.pos.x,
            state.ball.pos.y,
            state.paddle_y
        );
        return TickOutcome::Initialized;
    }

    // Walls
    let bounces = clamp_to_bounds(&mut state.ball, config.max_ball_position());
    for _ in 0..bounces.count() {
        // Saturate so speed stays finite and the Euler step never sees inf
        state.speed = (state.speed * config.speed_ramp).min(f32::MAX);
    }

    // Paddle
    let hit = match paddle_contact(&state.ball, state.paddle_y, config) {
        PaddleContact::Clear => None,
        PaddleContact::Hit { overshoot } => {
            log::debug!("Ball has hit paddle");
            state.hits += 1;
            let vel_before = state.ball.vel;
            if let Some(over) = overshoot {
                state.ball.vel = deflect(vel_before, over, config.ball_radius);
                log::debug!(
                    "Deflected: over {} from {:?} to {:?}",
                    over,
                    vel_before,
                    state.ball.vel
                );
            }
            Some(PaddleHit {
                hits: state.hits,
                overshoot,
                vel_before,
                vel_after: state.ball.vel,
            })
        }
        PaddleContact::Miss => {
            let hits = state.hits;
            log::info!(
                "Missed paddle at y {} (paddle at {}) after {} hits",
                state.ball.pos.y,
                state.paddle_y,
                hits
            );
            state.reset(config);
            return TickOutcome::Missed { hits };
        }
    };

    // Explicit Euler step
    let scale = (f32::from(elapsed_ms) * state.speed).min(f32::MAX);
    let step = (state.ball.vel * scale).clamp(Vec2::splat(-f32::MAX), Vec2::splat(f32::MAX));
    state.ball.pos += step;

    TickOutcome::Advanced { bounces, hit }
}
