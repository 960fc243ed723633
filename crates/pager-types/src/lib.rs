//! Foundation types for the pager theme tools.
//!
//! This crate contains the types shared by every pager crate: colors,
//! the six-button input enum, the renderer capability trait, and error
//! types.

pub mod color;
pub mod error;
pub mod input;
pub mod render;
