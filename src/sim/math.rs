//! Numeric helpers for velocity normalization
//!
//! The square root is a bounded Newton iteration so a tick always finishes in a
//! fixed number of steps regardless of the input.

use glam::Vec2;

/// Relative tolerance on the squared result: stop once `x² - n < SQRT_TOLERANCE * n`
pub const SQRT_TOLERANCE: f32 = 0.01;

/// Upper bound on Newton iterations (enough to descend from `f32::MAX`)
pub const SQRT_MAX_ITERATIONS: u32 = 96;

/// Non-negative square root by Newton's method
///
/// Zero, negative and non-finite inputs yield `0.0` so callers never divide by zero.
pub fn newton_sqrt(n: f32) -> f32 {
    if !n.is_finite() || n <= 0.0 {
        return 0.0;
    }

    // Any guess >= √n makes the iteration descend monotonically
    let mut x = n.max(1.0);
    let tolerance = SQRT_TOLERANCE * n;
    for _ in 0..SQRT_MAX_ITERATIONS {
        if x * x - n < tolerance {
            break;
        }
        x = 0.5 * (x + n / x);
    }
    x
}

/// Euclidean length of `v` using [`newton_sqrt`]
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    newton_sqrt(v.length_squared())
}
