//! Textual renderer: one listing line per draw call.

use pager_types::color::Color;
use pager_types::error::Result;
use pager_types::render::{Position, Renderer, TextSize};

/// Renders a frame as human-readable draw instructions instead of
/// pixels.
pub struct TraceRenderer {
    lines: Vec<String>,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Listing for the most recently composed frame.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Renderer for TraceRenderer {
    fn clear_frame(&mut self) -> Result<()> {
        self.lines.clear();
        Ok(())
    }

    fn draw_background(&mut self, color: Color) -> Result<()> {
        self.lines.push(format!("fill  {}", color.to_hex()));
        Ok(())
    }

    fn draw_image(&mut self, pos: Position, resource: &str, recolor: Option<Color>) -> Result<()> {
        let line = match recolor {
            Some(color) => format!(
                "image ({:3},{:3}) {resource} recolor {}",
                pos.x,
                pos.y,
                color.to_hex()
            ),
            None => format!("image ({:3},{:3}) {resource}", pos.x, pos.y),
        };
        self.lines.push(line);
        Ok(())
    }

    fn draw_text(&mut self, pos: Position, text: &str, color: Color, size: TextSize) -> Result<()> {
        self.lines.push(format!(
            "text  ({:3},{:3}) {text:?} {} {size:?}",
            pos.x,
            pos.y,
            color.to_hex()
        ));
        Ok(())
    }
}
