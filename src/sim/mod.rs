//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches rendering or
//! the browser:
//! - Time comes in through `TickInput::now_ms`
//! - Randomness comes from the caller's `rand::Rng`
//! - One `tick` per animation frame

pub mod ball;
pub mod body;
pub mod collision;
pub mod combo;
pub mod keyboard;
pub mod state;
pub mod text;
pub mod tick;

pub use ball::{Ball, BallStep, ComboScore};
pub use body::{Body, Step, WallHits};
pub use collision::{Kick, circles_overlap, kick, point_in_rect};
pub use combo::{ComboState, HitKind};
pub use keyboard::{DELETE_LABEL, Key, KeyAction, Keyboard, SPACE_LABEL};
pub use state::{GameEvent, GameState, Pointer};
pub use text::TypedText;
pub use tick::{TickInput, tick};
