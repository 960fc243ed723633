//! Theme graph: load, resolve, and classify a theme directory.
//!
//! `theme.json` at the theme root is the entry document. After path
//! resolution its top-level entries are classified once into screens,
//! the status bar index, the palette, or skipped. The graph is built
//! whole; a failed load never exposes a partial result.

use std::collections::BTreeMap;

use pager_store::{PathKind, ThemeStore};
use pager_types::error::{Result, ThemeError};
use serde_json::Value;

use crate::menu::MenuModel;
use crate::palette::Palette;
use crate::resolve::{absolutize, resolve_document};
use crate::statusbar::StatusBar;

/// Reserved top-level key naming the palette.
pub const PALETTE_KEY: &str = "color_palette";
/// Reserved top-level key naming the status bar index.
pub const STATUS_BARS_KEY: &str = "status_bars";

/// Classification of one top-level theme entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Screen,
    StatusBarIndex,
    Palette,
    Unclassified,
}

fn classify(key: &str, value: &Value) -> EntryKind {
    if key == PALETTE_KEY {
        return EntryKind::Palette;
    }
    if key == STATUS_BARS_KEY {
        return EntryKind::StatusBarIndex;
    }
    // Path-reference keys were already inlined by the resolver, so a
    // screen is recognizable purely by shape.
    if value
        .as_object()
        .is_some_and(|map| map.contains_key("screen_name") || map.contains_key("template"))
    {
        return EntryKind::Screen;
    }
    EntryKind::Unclassified
}

/// The fully loaded and classified result of one theme directory.
#[derive(Debug, Clone, Default)]
pub struct ThemeGraph {
    screens: BTreeMap<String, MenuModel>,
    status_bars: BTreeMap<String, StatusBar>,
    palette: Palette,
}

impl ThemeGraph {
    /// Load `theme.json` from the theme root, resolve every path
    /// reference, and classify the top-level entries.
    pub fn load(store: &dyn ThemeStore, theme_dir: &str) -> Result<Self> {
        let theme_file = absolutize(theme_dir, "theme.json");
        if store.path_kind(&theme_file) != PathKind::File {
            return Err(ThemeError::Load(format!(
                "theme file not found: {theme_file}"
            )));
        }
        let text = store.read_text_file(&theme_file)?;
        let raw: Value = serde_json::from_str(&text)
            .map_err(|e| ThemeError::Load(format!("malformed JSON in {theme_file}: {e}")))?;
        let resolved = resolve_document(store, &raw, theme_dir)?;
        Self::from_resolved(&resolved)
    }

    /// Classify and index an already-resolved theme document.
    pub fn from_resolved(doc: &Value) -> Result<Self> {
        let Value::Object(map) = doc else {
            return Err(ThemeError::Load("theme root is not a JSON object".into()));
        };
        let mut graph = Self::default();
        for (key, value) in map {
            match classify(key, value) {
                EntryKind::Palette => {
                    graph.palette = Palette::from_document(value);
                },
                EntryKind::StatusBarIndex => {
                    graph.load_status_bars(value)?;
                },
                EntryKind::Screen => {
                    let model = MenuModel::from_document(value)?;
                    log::debug!("screen '{key}' -> '{}'", model.screen_name);
                    graph.screens.insert(key.clone(), model);
                },
                EntryKind::Unclassified => {
                    log::debug!("skipping unclassified theme entry '{key}'");
                },
            }
        }
        log::info!(
            "theme loaded: {} screens, {} status bars, {} palette colors",
            graph.screens.len(),
            graph.status_bars.len(),
            graph.palette.len()
        );
        Ok(graph)
    }

    fn load_status_bars(&mut self, doc: &Value) -> Result<()> {
        let Value::Object(map) = doc else {
            return Err(ThemeError::Load(
                "status bar index is not a JSON object".into(),
            ));
        };
        for (name, value) in map {
            let bar = StatusBar::from_document(value)?;
            self.status_bars.insert(name.clone(), bar);
        }
        Ok(())
    }

    pub fn screen(&self, key: &str) -> Option<&MenuModel> {
        self.screens.get(key)
    }

    pub fn status_bar(&self, name: &str) -> Option<&StatusBar> {
        self.status_bars.get(name)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Screen keys in sorted order.
    pub fn screen_keys(&self) -> impl Iterator<Item = &str> {
        self.screens.keys().map(String::as_str)
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }
}
