//! Theme color palette.

use std::collections::BTreeMap;

use pager_types::color::Color;
use serde_json::Value;

/// Named colors shared by every screen of a theme. Looked up by the
/// `recolor_palette` and `text_color_palette` layer fields.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: BTreeMap<String, Color>,
}

impl Palette {
    /// Build a palette from the reserved `color_palette` document.
    /// Entries that are not `{r, g, b}` triplets are logged and
    /// skipped.
    pub fn from_document(doc: &Value) -> Self {
        let mut colors = BTreeMap::new();
        if let Value::Object(map) = doc {
            for (name, value) in map {
                match serde_json::from_value::<Color>(value.clone()) {
                    Ok(color) => {
                        colors.insert(name.clone(), color);
                    },
                    Err(e) => {
                        log::warn!("palette entry '{name}' is not an r/g/b triplet: {e}");
                    },
                }
            }
        }
        Self { colors }
    }

    /// Look up a color by symbolic name.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
