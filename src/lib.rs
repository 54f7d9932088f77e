//! Kickboard - kick a ball into the keyboard lining the arena walls
//!
//! Core modules:
//! - `sim`: Ball physics, combo scoring, key colliders and the per-frame tick
//! - `renderer`: Draw calls against a 2D surface (Canvas 2D on the web)
//! - `platform`: Browser/native platform abstraction (clocks)
//! - `settings`: Gameplay tuning and view preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Physics, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default arena size (canvas width is capped at this on the web)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Vertical space kept free for the text box above the canvas
    pub const TEXT_BOX_MARGIN: f32 = 100.0;

    /// Ball radius as a fraction of the smaller arena dimension
    pub const BALL_RADIUS_FRACTION: f32 = 0.033;
    /// Shoe (pointer) radius as a fraction of the smaller arena dimension
    pub const SHOE_RADIUS_FRACTION: f32 = 0.067;

    /// Downward acceleration, units/tick²
    pub const GRAVITY: f32 = 0.2;
    /// Per-axis velocity multiplier applied every tick
    pub const DRAG: f32 = 0.99;
    /// Velocity kept after bouncing off a wall
    pub const RESTITUTION: f32 = 0.8;
    /// Vertical velocity on (re)spawn (negative is up)
    pub const LAUNCH_VY: f32 = -5.0;
    /// Horizontal spawn velocity is uniform in [-LAUNCH_VX_RANGE, LAUNCH_VX_RANGE)
    pub const LAUNCH_VX_RANGE: f32 = 2.0;

    /// Minimum speed the ball leaves the shoe with
    pub const MIN_KICK_SPEED: f32 = 8.0;
    /// Share of the swipe displacement added to the bounce
    pub const SWIPE_TRANSFER: f32 = 0.5;
    /// Upward boost per unit of swipe speed
    pub const KICK_BOOST_FACTOR: f32 = 0.3;
    /// Upward boost cap
    pub const MAX_KICK_BOOST: f32 = 10.0;
    /// Swipe displacement cap per frame (guards against pointer teleports)
    pub const MAX_SWIPE: f32 = 60.0;
    /// Total width of the random bounce angle jitter (radians)
    pub const KICK_JITTER: f32 = 0.3;

    /// Combo window between alternating hits (milliseconds)
    pub const COMBO_TIMEOUT_MS: f64 = 2000.0;
    /// Combo counter ceiling
    pub const MAX_COMBO: u32 = 10;

    /// Side length of a keyboard key
    pub const KEY_SIZE: f32 = 40.0;
}

/// Unit vector for an angle (radians, screen coordinates)
#[inline]
pub fn direction(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Ball and shoe radii for an arena size
#[inline]
pub fn radii_for_arena(width: f32, height: f32) -> (f32, f32) {
    let base = width.min(height);
    (
        base * consts::BALL_RADIUS_FRACTION,
        base * consts::SHOE_RADIUS_FRACTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_follow_smaller_dimension() {
        let (ball, shoe) = radii_for_arena(800.0, 500.0);
        assert!((ball - 16.5).abs() < 1e-4);
        assert!((shoe - 33.5).abs() < 1e-4);
    }

    #[test]
    fn test_direction_is_unit() {
        let d = direction(1.234);
        assert!((d.length() - 1.0).abs() < 1e-6);
    }
}
