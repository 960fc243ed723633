//! Shared test utilities for pager-core rendering tests.
//!
//! Provides a [`RecordingRenderer`] that records all draw calls for
//! assertion.

use pager_types::color::Color;
use pager_types::error::Result;
use pager_types::render::{Position, Renderer, TextSize};

/// A recorded draw call from the recording renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Background {
        color: Color,
    },
    Image {
        pos: Position,
        resource: String,
        recolor: Option<Color>,
    },
    Text {
        pos: Position,
        text: String,
        color: Color,
        size: TextSize,
    },
}

/// A renderer that records all draw calls for test assertions.
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Count of `Image` calls.
    pub fn image_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Image { .. }))
            .count()
    }

    /// Count of `Text` calls.
    pub fn text_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Text { .. }))
            .count()
    }

    /// Return image draw calls as `(resource, pos, recolor)` tuples in
    /// draw order.
    pub fn images(&self) -> Vec<(&str, Position, Option<Color>)> {
        self.calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::Image {
                    pos,
                    resource,
                    recolor,
                } = c
                {
                    Some((resource.as_str(), *pos, *recolor))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Return text draw calls as `(text, pos, color, size)` tuples in
    /// draw order.
    pub fn texts(&self) -> Vec<(&str, Position, Color, TextSize)> {
        self.calls
            .iter()
            .filter_map(|c| {
                if let DrawCall::Text {
                    pos,
                    text,
                    color,
                    size,
                } = c
                {
                    Some((text.as_str(), *pos, *color, *size))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Check if any `Text` call contains the given substring.
    pub fn has_text(&self, needle: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::Text { text, .. } = c {
                text.contains(needle)
            } else {
                false
            }
        })
    }

    /// Check if any `Image` call draws the given resource.
    pub fn has_image(&self, resource: &str) -> bool {
        self.calls.iter().any(|c| {
            if let DrawCall::Image { resource: r, .. } = c {
                r == resource
            } else {
                false
            }
        })
    }
}

impl Renderer for RecordingRenderer {
    fn clear_frame(&mut self) -> Result<()> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn draw_background(&mut self, color: Color) -> Result<()> {
        self.calls.push(DrawCall::Background { color });
        Ok(())
    }

    fn draw_image(&mut self, pos: Position, resource: &str, recolor: Option<Color>) -> Result<()> {
        self.calls.push(DrawCall::Image {
            pos,
            resource: resource.to_string(),
            recolor,
        });
        Ok(())
    }

    fn draw_text(&mut self, pos: Position, text: &str, color: Color, size: TextSize) -> Result<()> {
        self.calls.push(DrawCall::Text {
            pos,
            text: text.to_string(),
            color,
            size,
        });
        Ok(())
    }
}
