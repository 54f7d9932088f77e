//! Game state and core simulation types
//!
//! Everything the frame driver mutates lives here, owned by a single
//! [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::body::Body;
use super::keyboard::{KeyAction, Keyboard};
use super::text::TypedText;
use crate::consts::KEY_SIZE;
use crate::radii_for_arena;
use crate::settings::Physics;

/// Something that happened during a tick, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball fell through the floor and was relaunched from the center
    GroundContact,
    /// Ball entered a key
    KeyTyped(KeyAction),
    /// Shoe kicked the ball; `combo` is the count after the kick
    ShoeHit { combo: u32 },
    /// Wall hit completed a shoe-then-wall pair
    ComboScored { points: u32, at: Vec2 },
}

/// The player's pointer, drawn as a shoe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pointer {
    pub pos: Vec2,
    pub radius: f32,
    /// Position at the end of the previous frame
    last_frame_pos: Vec2,
}

impl Pointer {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            last_frame_pos: pos,
        }
    }

    /// Track a pointer/touch move
    pub fn move_to(&mut self, pos: Vec2) {
        if pos.is_finite() {
            self.pos = pos;
        }
    }

    /// Movement since the last frame, capped at `max` length
    pub fn displacement(&self, max: f32) -> Vec2 {
        (self.pos - self.last_frame_pos).clamp_length_max(max)
    }

    pub fn end_frame(&mut self) {
        self.last_frame_pos = self.pos;
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub width: f32,
    pub height: f32,
    pub physics: Physics,
    pub ball: Ball,
    pub keyboard: Keyboard,
    pub pointer: Pointer,
    /// Key the ball was inside last frame (debounce)
    pub last_key: Option<char>,
    /// Sum of combo points this session
    pub score: u64,
    pub best_combo: u32,
    pub text: TypedText,
}

impl GameState {
    /// Fresh session for an arena of the given size. The ball starts at the
    /// center moving with `launch_vx` sideways and the physics' launch speed up.
    pub fn new(width: f32, height: f32, physics: Physics, launch_vx: f32) -> Self {
        // A window shorter than the text box margin gives a negative height
        let width = width.max(0.0);
        let height = height.max(0.0);
        let (ball_radius, shoe_radius) = radii_for_arena(width, height);
        let center = Vec2::new(width / 2.0, height / 2.0);
        let body = Body::new(
            center,
            Vec2::new(launch_vx, physics.launch_vy),
            ball_radius,
            width,
            height,
        );

        Self {
            width,
            height,
            ball: Ball::with_combo(body, &physics),
            keyboard: Keyboard::new(width, height, KEY_SIZE),
            pointer: Pointer::new(center, shoe_radius),
            physics,
            last_key: None,
            score: 0,
            best_combo: 0,
            text: TypedText::new(),
        }
    }

    /// Arena center, where the ball respawns
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Window resized. Ball motion carries on; the key layout is kept.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ball.body.resize(width, height);
        let (w, h) = self.ball.body.bounds();
        self.width = w;
        self.height = h;
        log::info!("Arena resized to {}x{}", w, h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_centers_ball_and_shoe() {
        let state = GameState::new(800.0, 600.0, Physics::default(), 1.0);
        assert_eq!(state.ball.pos(), Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.body.vel, Vec2::new(1.0, -5.0));
        assert_eq!(state.pointer.pos, Vec2::new(400.0, 300.0));
        assert!((state.ball.radius() - 19.8).abs() < 1e-4);
        assert!(state.ball.combo.is_some());
    }

    #[test]
    fn test_pointer_displacement_is_capped() {
        let mut p = Pointer::new(Vec2::ZERO, 10.0);
        p.move_to(Vec2::new(3.0, 4.0));
        assert_eq!(p.displacement(60.0), Vec2::new(3.0, 4.0));

        p.end_frame();
        p.move_to(Vec2::new(603.0, 4.0));
        let d = p.displacement(60.0);
        assert!((d.length() - 60.0).abs() < 1e-4);
        assert!(d.x > 0.0);
    }

    #[test]
    fn test_pointer_ignores_nan() {
        let mut p = Pointer::new(Vec2::new(5.0, 5.0), 10.0);
        p.move_to(Vec2::new(f32::NAN, 1.0));
        assert_eq!(p.pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_negative_arena_gives_non_negative_radii() {
        let state = GameState::new(800.0, -40.0, Physics::default(), 0.0);
        assert_eq!(state.height, 0.0);
        assert!(state.ball.radius() >= 0.0);
        assert!(state.pointer.radius >= 0.0);
        assert!(state.ball.pos().is_finite());
    }

    #[test]
    fn test_resize_keeps_ball_motion() {
        let mut state = GameState::new(800.0, 600.0, Physics::default(), 1.0);
        state.resize(400.0, 500.0);
        assert_eq!((state.width, state.height), (400.0, 500.0));
        assert_eq!(state.ball.body.vel, Vec2::new(1.0, -5.0));
        assert_eq!(state.center(), Vec2::new(200.0, 250.0));
    }
}
