//! Ball body physics
//!
//! Arcade feel rather than accuracy: gravity, drag and lossy wall bounces,
//! applied once per frame in a fixed order. The left, right and top walls
//! reflect; the floor ends the ball's life.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Physics;

/// Which walls the body bounced off during a step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top
    }
}

/// Result of a single [`Body::advance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Step {
    pub walls: WallHits,
    /// Bottom edge went past the floor
    pub ground_contact: bool,
}

/// A circular body moving inside a rectangular arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    width: f32,
    height: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, width: f32, height: f32) -> Self {
        let mut body = Self {
            pos,
            vel,
            radius,
            width: 2.0 * radius,
            height: 2.0 * radius,
        };
        body.resize(width, height);
        body
    }

    /// Current arena bounds (width, height)
    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advance one frame: move, apply gravity and drag, bounce off the walls,
    /// then test the floor.
    pub fn advance(&mut self, physics: &Physics) -> Step {
        let mut step = Step::default();

        self.pos += self.vel;
        self.vel.y += physics.gravity;
        self.vel *= physics.drag;

        // Wall collisions
        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x * physics.restitution;
            step.walls.left = true;
        }
        if self.pos.x + self.radius > self.width {
            self.pos.x = self.width - self.radius;
            self.vel.x = -self.vel.x * physics.restitution;
            step.walls.right = true;
        }
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y * physics.restitution;
            step.walls.top = true;
        }

        // The floor never reflects
        step.ground_contact = self.pos.y + self.radius > self.height;
        step
    }

    /// Change the arena bounds used by later steps.
    ///
    /// Position and velocity are left alone. Non-finite sizes are ignored and
    /// sizes smaller than the ball are raised to fit it.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            log::warn!("Ignoring non-finite arena size {}x{}", width, height);
            return;
        }
        let min = 2.0 * self.radius;
        if width < min || height < min {
            log::warn!("Arena {}x{} smaller than the ball, clamping to {}", width, height, min);
        }
        self.width = width.max(min);
        self.height = height.max(min);
    }

    /// Put the body at `pos` with a fresh launch velocity. Bounds are kept.
    pub fn reset_to(&mut self, pos: Vec2, vx: f32, physics: &Physics) {
        self.pos = pos;
        self.vel = Vec2::new(vx, physics.launch_vy);
    }
}
