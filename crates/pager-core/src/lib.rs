//! Theme interpretation and navigation engine for the pager test tool.
//!
//! A theme is a directory of JSON documents plus image assets. Loading
//! runs a recursive path-resolution pass that inlines referenced JSON
//! documents into one tree, classifies the top-level entries into
//! screens, status bars, and the palette, and builds the menu graph a
//! `NavigationState` then walks in response to button events. One
//! `Session` owns the store, the graph, and the navigation state.

pub mod menu;
pub mod nav;
pub mod palette;
pub mod render;
pub mod resolve;
pub mod session;
pub mod statusbar;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;
