//! Store backed by a real directory tree.

use std::fs;
use std::path::Path;

use pager_types::error::{Result, ThemeError};

use crate::{PathKind, ThemeStore};

/// A `ThemeStore` reading directly from the file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl DiskStore {
    pub fn new() -> Self {
        Self
    }
}

impl ThemeStore for DiskStore {
    fn read_text_file(&self, path: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| ThemeError::Store(format!("read {path}: {e}")))
    }

    fn path_kind(&self, path: &str) -> PathKind {
        let p = Path::new(path);
        if p.is_file() {
            PathKind::File
        } else if p.is_dir() {
            PathKind::Dir
        } else {
            PathKind::Missing
        }
    }
}
