//! Logical input buttons of the pager device.
//!
//! Every front-end maps its native input to these six buttons. The
//! navigation engine never sees raw key events.

use serde::{Deserialize, Serialize};

/// The six physical buttons on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    A,
    B,
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    /// All buttons in a fixed order.
    pub const ALL: &[Button] = &[
        Button::A,
        Button::B,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    /// The lowercase name used in `button_map` keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}
