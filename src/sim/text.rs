//! Text typed by the ball

use serde::{Deserialize, Serialize};

use super::keyboard::KeyAction;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedText {
    buf: String,
}

impl TypedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Char(c) => self.buf.push(c),
            KeyAction::Space => self.buf.push(' '),
            KeyAction::Delete => {
                self.buf.pop();
            }
        }
    }

    /// Replace the contents (the page's text box is editable by hand)
    pub fn set(&mut self, text: impl Into<String>) {
        self.buf = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
