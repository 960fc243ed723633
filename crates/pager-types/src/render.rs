//! Renderer capability trait.
//!
//! The engine composes frames by issuing draw calls against this trait.
//! Window management, draw primitives, image decoding, and font loading
//! all live behind implementations of it.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;

/// Pager LCD width in pixels.
pub const SCREEN_W: i32 = 480;
/// Pager LCD height in pixels.
pub const SCREEN_H: i32 = 222;

/// An absolute pixel position on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a relative offset.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Text size class for drawn labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Draw target for one composed frame.
///
/// Calls arrive back-to-front: a clear, then background, then items,
/// then the status bar. Implementations may raise `ThemeError::Render`
/// on unrecoverable output failures.
pub trait Renderer {
    /// Reset the frame before drawing.
    fn clear_frame(&mut self) -> Result<()>;

    /// Fill the whole screen with a solid color.
    fn draw_background(&mut self, color: Color) -> Result<()>;

    /// Draw an image resource at a position, optionally recolored.
    fn draw_image(&mut self, pos: Position, resource: &str, recolor: Option<Color>) -> Result<()>;

    /// Draw a text run at a position.
    fn draw_text(&mut self, pos: Position, text: &str, color: Color, size: TextSize) -> Result<()>;
}
