//! Per-frame simulation tick
//!
//! Runs the fixed frame sequence: move the ball, type keys, kick off the shoe.
//! Called once per animation frame by the host (or a test).

use glam::Vec2;
use rand::Rng;

use super::collision::{circles_overlap, kick};
use super::keyboard::KeyAction;
use super::state::{GameEvent, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Frame timestamp (ms), drives the combo timeout
    pub now_ms: f64,
    /// Latest pointer/touch position, if it moved
    pub pointer: Option<Vec2>,
}

/// Advance the game by one frame. Returns what happened, in order.
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let now = input.now_ms;

    if let Some(pos) = input.pointer {
        state.pointer.move_to(pos);
    }

    // Ball physics and wall combos
    let result = state.ball.advance(&state.physics, now);
    if let Some(score) = result.score {
        state.score += u64::from(score.points);
        state.best_combo = state.best_combo.max(score.points);
        log::debug!("Combo x{} at ({:.0}, {:.0})", score.points, score.at.x, score.at.y);
        events.push(GameEvent::ComboScored {
            points: score.points,
            at: score.at,
        });
    }

    if result.step.ground_contact {
        let center = state.center();
        state.ball.respawn(center, rng, &state.physics);
        state.last_key = None;
        log::debug!("Ball hit the ground, respawned at center");
        events.push(GameEvent::GroundContact);
    }

    // Keys fire once per entry
    match state.keyboard.label_at(state.ball.pos()) {
        Some(label) if state.last_key != Some(label) => {
            let action = KeyAction::from_label(label);
            state.text.apply(action);
            state.last_key = Some(label);
            events.push(GameEvent::KeyTyped(action));
        }
        Some(_) => {}
        None => state.last_key = None,
    }

    // Shoe kick
    let ball_pos = state.ball.pos();
    let ball_radius = state.ball.radius();
    if circles_overlap(ball_pos, ball_radius, state.pointer.pos, state.pointer.radius) {
        let physics = &state.physics;
        let swipe = state.pointer.displacement(physics.max_swipe);
        let half = physics.kick_jitter / 2.0;
        let jitter = if half > 0.0 {
            rng.random_range(-half..half)
        } else {
            0.0
        };

        let k = kick(
            ball_pos,
            state.ball.body.vel,
            ball_radius,
            state.pointer.pos,
            state.pointer.radius,
            swipe,
            jitter,
            physics,
        );
        state.ball.body.vel = k.vel;
        state.ball.body.pos = k.pos;

        let combo = state.ball.register_shoe_hit(now);
        events.push(GameEvent::ShoeHit { combo });
    }

    state.pointer.end_frame();
    events
}
