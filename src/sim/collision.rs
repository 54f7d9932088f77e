//! Collision tests and the shoe kick response

use glam::Vec2;

use crate::direction;
use crate::settings::Physics;

/// Axis-aligned rectangle test, inclusive on all edges
#[inline]
pub fn point_in_rect(p: Vec2, x: f32, y: f32, width: f32, height: f32) -> bool {
    p.x >= x && p.x <= x + width && p.y >= y && p.y <= y + height
}

/// Strict circle overlap (touching circles do not collide)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance_squared(b) < (ra + rb) * (ra + rb)
}

/// Outcome of the ball meeting the shoe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kick {
    pub vel: Vec2,
    /// Ball position just outside the shoe
    pub pos: Vec2,
}

/// Bounce the ball off the shoe.
///
/// The ball leaves opposite to the shoe at no less than `min_kick_speed`,
/// with `jitter` (radians) added to the angle. Part of the shoe's swipe carries
/// over, plus an upward boost that grows with swipe speed.
#[allow(clippy::too_many_arguments)]
pub fn kick(
    ball_pos: Vec2,
    ball_vel: Vec2,
    ball_radius: f32,
    shoe_pos: Vec2,
    shoe_radius: f32,
    swipe: Vec2,
    jitter: f32,
    physics: &Physics,
) -> Kick {
    let to_shoe = shoe_pos - ball_pos;
    let angle = to_shoe.y.atan2(to_shoe.x);
    let speed = ball_vel.length().max(physics.min_kick_speed);
    let boost = (swipe.length() * physics.kick_boost_factor).min(physics.max_kick_boost);

    let mut vel = -direction(angle + jitter) * speed + swipe * physics.swipe_transfer;
    vel.y -= boost;

    // Push out along the contact normal; straight up if the centers coincide
    let normal = (ball_pos - shoe_pos).try_normalize().unwrap_or(Vec2::NEG_Y);
    let pos = shoe_pos + normal * (shoe_radius + ball_radius);

    Kick { vel, pos }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_in_rect_edges() {
        assert!(point_in_rect(Vec2::new(0.0, 0.0), 0.0, 0.0, 10.0, 10.0));
        assert!(point_in_rect(Vec2::new(10.0, 10.0), 0.0, 0.0, 10.0, 10.0));
        assert!(!point_in_rect(Vec2::new(10.01, 5.0), 0.0, 0.0, 10.0, 10.0));
        assert!(!point_in_rect(Vec2::new(5.0, -0.01), 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 5.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
    }

    #[test]
    fn test_kick_from_below_sends_ball_up() {
        let physics = Physics::default();
        // Shoe directly under a slow ball
        let k = kick(
            Vec2::new(100.0, 100.0),
            Vec2::new(0.0, 1.0),
            10.0,
            Vec2::new(100.0, 120.0),
            20.0,
            Vec2::ZERO,
            0.0,
            &physics,
        );

        // Minimum speed floor applies
        assert!(k.vel.x.abs() < 1e-4);
        assert!((k.vel.y + 8.0).abs() < 1e-4);
        assert!((k.pos - Vec2::new(100.0, 90.0)).length() < 1e-4);
    }

    #[test]
    fn test_fast_ball_keeps_its_speed() {
        let physics = Physics::default();
        let k = kick(
            Vec2::new(100.0, 100.0),
            Vec2::new(12.0, 0.0),
            10.0,
            Vec2::new(120.0, 100.0),
            20.0,
            Vec2::ZERO,
            0.0,
            &physics,
        );
        assert!((k.vel.x + 12.0).abs() < 1e-4);
        assert!((k.pos.x - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_swipe_adds_velocity_and_boost() {
        let physics = Physics::default();
        let swipe = Vec2::new(10.0, 0.0);
        let k = kick(
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            10.0,
            Vec2::new(100.0, 120.0),
            20.0,
            swipe,
            0.0,
            &physics,
        );
        // Half of the swipe carries over, boost = 10 * 0.3
        assert!((k.vel.x - 5.0).abs() < 1e-4);
        assert!((k.vel.y - (-8.0 - 3.0)).abs() < 1e-4);
    }

    #[test]
    fn test_boost_is_capped() {
        let physics = Physics::default();
        let k = kick(
            Vec2::new(100.0, 100.0),
            Vec2::ZERO,
            10.0,
            Vec2::new(100.0, 120.0),
            20.0,
            Vec2::new(0.0, -1000.0),
            0.0,
            &physics,
        );
        // -8 base, -500 swipe carry, -10 capped boost
        assert!((k.vel.y - (-8.0 - 500.0 - 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_coincident_centers_push_up() {
        let physics = Physics::default();
        let k = kick(
            Vec2::new(50.0, 50.0),
            Vec2::ZERO,
            10.0,
            Vec2::new(50.0, 50.0),
            20.0,
            Vec2::ZERO,
            0.0,
            &physics,
        );
        assert_eq!(k.pos, Vec2::new(50.0, 20.0));
        assert!(k.vel.is_finite());
    }
}
