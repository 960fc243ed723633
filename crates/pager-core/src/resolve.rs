//! Recursive path resolution for theme documents.
//!
//! Every string in a raw document is resolved against the theme root:
//! a string naming an existing `.json` file is parsed and its contents
//! inlined, a string naming any other existing file or a directory is
//! replaced by its absolute path, and everything else is left alone as
//! ordinary data. The result is a new tree; inputs are never mutated.

use pager_store::{PathKind, ThemeStore};
use pager_types::error::{Result, ThemeError};
use serde_json::Value;

/// Maximum nesting depth across inlined documents. A theme whose
/// files reference each other in a cycle hits this cap and fails the
/// load instead of recursing forever.
pub const MAX_RESOLVE_DEPTH: usize = 16;

/// Resolve every string in `doc` against the `base` directory.
pub fn resolve_document(store: &dyn ThemeStore, doc: &Value, base: &str) -> Result<Value> {
    resolve_value(store, doc, base, 0)
}

fn resolve_value(store: &dyn ThemeStore, value: &Value, base: &str, depth: usize) -> Result<Value> {
    if depth > MAX_RESOLVE_DEPTH {
        return Err(ThemeError::Load(format!(
            "resolution depth exceeded {MAX_RESOLVE_DEPTH} under {base}, \
             theme files likely reference each other in a cycle"
        )));
    }
    match value {
        Value::String(s) => resolve_string(store, s, base, depth),
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (key, val) in map {
                out.insert(key.clone(), resolve_value(store, val, base, depth)?);
            }
            Ok(Value::Object(out))
        },
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(resolve_value(store, item, base, depth)?);
            }
            Ok(Value::Array(out))
        },
        other => Ok(other.clone()),
    }
}

fn resolve_string(store: &dyn ThemeStore, s: &str, base: &str, depth: usize) -> Result<Value> {
    let candidate = absolutize(base, s);
    match store.path_kind(&candidate) {
        PathKind::File => {
            if candidate.ends_with(".json") {
                let text = store.read_text_file(&candidate)?;
                let doc: Value = serde_json::from_str(&text).map_err(|e| {
                    ThemeError::Load(format!("malformed JSON in {candidate}: {e}"))
                })?;
                resolve_value(store, &doc, base, depth + 1)
            } else {
                Ok(Value::String(candidate))
            }
        },
        PathKind::Dir => Ok(Value::String(candidate)),
        PathKind::Missing => Ok(Value::String(s.to_string())),
    }
}

/// Join `rel` onto `base` and collapse `.`/`..` components lexically.
/// Absolute inputs skip the join but are still normalized.
pub fn absolutize(base: &str, rel: &str) -> String {
    let (joined, absolute) = if rel.starts_with('/') {
        (rel.to_string(), true)
    } else if base.is_empty() {
        (rel.to_string(), false)
    } else {
        (format!("{base}/{rel}"), base.starts_with('/'))
    };
    let mut parts: Vec<&str> = Vec::new();
    for part in joined.split('/') {
        match part {
            "" | "." => {},
            ".." => {
                if parts.last().is_some_and(|p| *p != "..") {
                    parts.pop();
                } else if !absolute {
                    parts.push("..");
                }
            },
            p => parts.push(p),
        }
    }
    let body = parts.join("/");
    if absolute {
        format!("/{body}")
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}
