//! Error types for the pager theme tools.

use std::io;

/// Errors produced by the pager theme engine.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("load error: {0}")]
    Load(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_display() {
        let e = ThemeError::Load("theme.json not found".into());
        assert_eq!(format!("{e}"), "load error: theme.json not found");
    }

    #[test]
    fn store_error_display() {
        let e = ThemeError::Store("no such file".into());
        assert_eq!(format!("{e}"), "store error: no such file");
    }

    #[test]
    fn render_error_display() {
        let e = ThemeError::Render("frame buffer gone".into());
        assert_eq!(format!("{e}"), "render error: frame buffer gone");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: ThemeError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: ThemeError = json_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("JSON error"));
    }

    #[test]
    fn error_is_debug() {
        let e = ThemeError::Load("test".into());
        let dbg = format!("{e:?}");
        assert!(dbg.contains("Load"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(ThemeError::Store("oops".into()));
        assert!(r.is_err());
    }
}
