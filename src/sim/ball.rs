//! The ball: a physics body with optional combo tracking

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, Step};
use super::combo::ComboState;
use crate::settings::Physics;

/// Points earned by a wall hit that completed a shoe-then-wall pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboScore {
    pub points: u32,
    /// Ball position at impact
    pub at: Vec2,
}

/// Outcome of one [`Ball::advance`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallStep {
    pub step: Step,
    pub score: Option<ComboScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    /// Combo scoring; `None` for a plain bouncing ball
    pub combo: Option<ComboState>,
}

impl Ball {
    /// A bounce-only ball
    pub fn plain(body: Body) -> Self {
        Self { body, combo: None }
    }

    /// A ball that scores shoe/wall combos
    pub fn with_combo(body: Body, physics: &Physics) -> Self {
        Self {
            body,
            combo: Some(ComboState::new(physics.combo_timeout_ms, physics.max_combo)),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    pub fn radius(&self) -> f32 {
        self.body.radius
    }

    pub fn combo_count(&self) -> u32 {
        self.combo.as_ref().map(|c| c.count).unwrap_or(0)
    }

    /// Advance one frame at time `now` (ms)
    pub fn advance(&mut self, physics: &Physics, now: f64) -> BallStep {
        if let Some(combo) = &mut self.combo {
            combo.expire(now);
        }

        let step = self.body.advance(physics);
        if step.ground_contact {
            return BallStep { step, score: None };
        }

        // A corner bounce touches two walls but counts as one hit
        let at = self.body.pos;
        let score = match (&mut self.combo, step.walls.any()) {
            (Some(combo), true) => combo
                .register_wall_hit(now)
                .map(|points| ComboScore { points, at }),
            _ => None,
        };

        BallStep { step, score }
    }

    /// The shoe kicked the ball. Returns the combo count afterwards.
    pub fn register_shoe_hit(&mut self, now: f64) -> u32 {
        match &mut self.combo {
            Some(combo) => {
                combo.register_shoe_hit(now);
                combo.count
            }
            None => 0,
        }
    }

    pub fn reset_combo(&mut self) {
        if let Some(combo) = &mut self.combo {
            combo.reset();
        }
    }

    /// Relaunch from `center` with a random horizontal velocity
    pub fn respawn<R: Rng>(&mut self, center: Vec2, rng: &mut R, physics: &Physics) {
        let range = physics.launch_vx_range;
        let vx = if range > 0.0 {
            rng.random_range(-range..range)
        } else {
            0.0
        };
        self.body.reset_to(center, vx, physics);
        self.reset_combo();
    }
}
