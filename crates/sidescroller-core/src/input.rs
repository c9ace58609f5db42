//! Keyboard intent.
//!
//! Key events set and clear flags; the simulation reads the flags once
//! per tick. Bindings follow `KeyboardEvent.code` names.

use serde::{Deserialize, Serialize};

/// Logical action a physical key maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Left,
    Right,
    Jump,
}

impl Action {
    /// Map a physical key code to an action. Unbound keys yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::Left),
            "ArrowRight" | "KeyD" => Some(Action::Right),
            "ArrowUp" | "Space" | "KeyW" => Some(Action::Jump),
            _ => None,
        }
    }
}

/// Held-key state for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Left => self.left = held,
            Action::Right => self.right = held,
            Action::Jump => self.jump = held,
        }
    }

    /// Apply a raw key event. Returns false if the code is unbound.
    pub fn apply_key(&mut self, code: &str, pressed: bool) -> bool {
        match Action::from_code(code) {
            Some(action) => {
                self.set(action, pressed);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
