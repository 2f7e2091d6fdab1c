//! Collision detection and response
//!
//! Walls clamp and reflect the ball. The paddle lives on the left wall, so it is
//! only consulted when the ball sits flush against that wall. Off-center hits
//! bend the velocity while keeping its magnitude.

use glam::Vec2;

use super::math::magnitude;
use super::state::Ball;
use crate::config::SimulationConfig;

/// Vertical nudge per unit of overshoot, scaled by ball speed and radius
pub const DEFLECTION_GAIN: f32 = 50.0;

/// Axes on which the ball was clamped back inside the display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryHits {
    pub x: bool,
    pub y: bool,
}

impl BoundaryHits {
    /// Number of clamped axes (each one ramps the speed)
    pub fn count(&self) -> u32 {
        u32::from(self.x) + u32::from(self.y)
    }
}

/// Where the ball stands relative to the paddle this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleContact {
    /// Ball is not flush against the left wall
    Clear,
    /// Ball is within the paddle's reach; `overshoot` is set when its center
    /// lies past one of the paddle's edges
    Hit { overshoot: Option<f32> },
    /// Ball reached the left wall outside the paddle's reach
    Miss,
}

/// Clamp a single axis to `[0, max]`, turning velocity back inward
fn clamp_axis(pos: &mut f32, vel: &mut f32, max: f32) -> bool {
    if *pos > max {
        *pos = max;
        if *vel > 0.0 {
            *vel = -*vel;
        }
        true
    } else if *pos < 0.0 {
        *pos = 0.0;
        if *vel < 0.0 {
            *vel = -*vel;
        }
        true
    } else {
        false
    }
}

/// Keep the ball's bounding box on screen
///
/// `max` is the largest allowed top-left corner.
pub fn clamp_to_bounds(ball: &mut Ball, max: Vec2) -> BoundaryHits {
    BoundaryHits {
        x: clamp_axis(&mut ball.pos.x, &mut ball.vel.x, max.x),
        y: clamp_axis(&mut ball.pos.y, &mut ball.vel.y, max.y),
    }
}

/// Classify the ball against the paddle
pub fn paddle_contact(ball: &Ball, paddle_y: f32, config: &SimulationConfig) -> PaddleContact {
    if ball.pos.x != 0.0 {
        return PaddleContact::Clear;
    }

    let radius = config.ball_radius;
    let center_y = ball.center(radius).y;
    let paddle_bottom = paddle_y + config.paddle_height;
    if center_y <= paddle_y - radius || center_y >= paddle_bottom + radius {
        return PaddleContact::Miss;
    }

    let distance_top = center_y - paddle_y;
    let distance_bottom = paddle_bottom - center_y;
    let overshoot = if distance_top < 0.0 {
        Some(distance_top)
    } else if distance_bottom < 0.0 {
        Some(-distance_bottom)
    } else {
        None
    };
    PaddleContact::Hit { overshoot }
}

/// Bend the velocity by `over` units of overshoot, keeping its magnitude
///
/// Negative overshoot (above the paddle) sends the ball up, positive sends it down.
pub fn deflect(vel: Vec2, over: f32, radius: f32) -> Vec2 {
    let speed = magnitude(vel);
    let mut bent = vel;
    bent.y += DEFLECTION_GAIN * speed * over / radius;

    let bent_speed = magnitude(bent);
    if bent_speed == 0.0 {
        return bent;
    }
    bent * (speed / bent_speed)
}
