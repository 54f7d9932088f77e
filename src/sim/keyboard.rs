//! Keyboard keys lining the arena walls
//!
//! Laid out once from the arena size: a column of keys down the left and right
//! walls and a row along the top. The ball types a key by passing its center
//! through the key's rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Label of the key that deletes the last typed character
pub const DELETE_LABEL: char = '⌫';
/// Label of the key that types a space
pub const SPACE_LABEL: char = '␣';

const LEFT_WALL: [char; 6] = ['Q', 'W', 'E', 'R', 'T', DELETE_LABEL];
const RIGHT_WALL: [char; 6] = ['Y', 'U', 'I', 'O', 'P', SPACE_LABEL];
const TOP_WALL: [char; 9] = ['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L'];

/// What typing a key does to the text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Char(char),
    Space,
    Delete,
}

impl KeyAction {
    pub fn from_label(label: char) -> Self {
        match label {
            DELETE_LABEL => KeyAction::Delete,
            SPACE_LABEL => KeyAction::Space,
            c => KeyAction::Char(c.to_ascii_lowercase()),
        }
    }
}

/// A single key rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub label: char,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Key {
    pub fn new(label: char, x: f32, y: f32, size: f32) -> Self {
        Self {
            label,
            x,
            y,
            width: size,
            height: size,
        }
    }

    /// Inclusive on every edge
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        super::collision::point_in_rect(p, self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// The fixed set of keys for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyboard {
    keys: Vec<Key>,
}

impl Keyboard {
    /// Standard layout for an arena of the given size
    pub fn new(width: f32, height: f32, key_size: f32) -> Self {
        let mut keys = Vec::with_capacity(LEFT_WALL.len() + RIGHT_WALL.len() + TOP_WALL.len());

        let side_spacing = height / (LEFT_WALL.len() + 1) as f32;
        for (i, &label) in LEFT_WALL.iter().enumerate() {
            keys.push(Key::new(label, 0.0, (i + 1) as f32 * side_spacing, key_size));
        }

        let side_spacing = height / (RIGHT_WALL.len() + 1) as f32;
        for (i, &label) in RIGHT_WALL.iter().enumerate() {
            keys.push(Key::new(
                label,
                width - key_size,
                (i + 1) as f32 * side_spacing,
                key_size,
            ));
        }

        let top_spacing = width / (TOP_WALL.len() + 1) as f32;
        for (i, &label) in TOP_WALL.iter().enumerate() {
            keys.push(Key::new(label, (i + 1) as f32 * top_spacing, 0.0, key_size));
        }

        Self { keys }
    }

    /// Custom layout. Earlier keys win where rectangles overlap.
    pub fn from_keys(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// First key containing `p`
    pub fn key_at(&self, p: Vec2) -> Option<&Key> {
        self.keys.iter().find(|k| k.contains(p))
    }

    pub fn label_at(&self, p: Vec2) -> Option<char> {
        self.key_at(p).map(|k| k.label)
    }
}
