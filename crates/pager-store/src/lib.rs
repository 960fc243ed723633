//! Theme storage abstraction.
//!
//! The theme engine reads raw JSON documents and checks path existence
//! through the `ThemeStore` trait. `DiskStore` serves a real theme
//! directory; `MemoryStore` backs unit tests.

pub mod disk;
pub mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use pager_types::error::Result;

/// What a path names inside a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Dir,
    Missing,
}

/// Read access to theme content by path.
pub trait ThemeStore {
    /// Read a file as UTF-8 text.
    fn read_text_file(&self, path: &str) -> Result<String>;

    /// Classify a path without reading it.
    fn path_kind(&self, path: &str) -> PathKind;
}
