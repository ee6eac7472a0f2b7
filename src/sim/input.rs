//! Named input port
//!
//! Edge-triggered key-down events. The simulation never sees physical keys;
//! the platform layer maps whatever device it has onto these names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Restart,
}

impl InputEvent {
    pub const ALL: [InputEvent; 6] = [
        InputEvent::Up,
        InputEvent::Down,
        InputEvent::Left,
        InputEvent::Right,
        InputEvent::Fire,
        InputEvent::Restart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Up => "up",
            InputEvent::Down => "down",
            InputEvent::Left => "left",
            InputEvent::Right => "right",
            InputEvent::Fire => "fire",
            InputEvent::Restart => "restart",
        }
    }

    /// Parse an event name; the classic key names `z` and `r` are accepted too
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "up" => Some(InputEvent::Up),
            "down" => Some(InputEvent::Down),
            "left" => Some(InputEvent::Left),
            "right" => Some(InputEvent::Right),
            "fire" | "z" => Some(InputEvent::Fire),
            "restart" | "r" => Some(InputEvent::Restart),
            _ => None,
        }
    }
}
