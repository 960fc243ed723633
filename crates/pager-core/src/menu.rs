//! Menu model: typed representation of one screen document.

use pager_types::color::Color;
use pager_types::error::{Result, ThemeError};
use pager_types::input::Button;
use pager_types::render::TextSize;
use serde::Deserialize;
use serde_json::Value;

/// Maximum `template` indirection depth when folding a screen
/// document.
const MAX_TEMPLATE_DEPTH: usize = 8;

/// Symbolic navigation actions a button can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select,
    Back,
    Previous,
    Next,
    PreviousPage,
    NextPage,
    Noop,
    Other,
}

impl Action {
    /// Parse an action name from a `button_map` value. Unrecognized
    /// names become `Other`, which the controller treats as a no-op.
    pub fn from_name(name: &str) -> Self {
        match name {
            "select" => Self::Select,
            "back" => Self::Back,
            "previous" => Self::Previous,
            "next" => Self::Next,
            "previous_page" => Self::PreviousPage,
            "next_page" => Self::NextPage,
            "noop" => Self::Noop,
            _ => Self::Other,
        }
    }
}

/// Per-screen (or per-item) mapping from physical buttons to action
/// names. Unset buttons are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ButtonMap {
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
    #[serde(default)]
    pub up: Option<String>,
    #[serde(default)]
    pub down: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

impl ButtonMap {
    /// Translate a button through this map.
    pub fn action_for(&self, button: Button) -> Action {
        let name = match button {
            Button::A => &self.a,
            Button::B => &self.b,
            Button::Up => &self.up,
            Button::Down => &self.down,
            Button::Left => &self.left,
            Button::Right => &self.right,
        };
        name.as_deref().map_or(Action::Noop, Action::from_name)
    }
}

/// One visual element, positioned relative to its containing item or
/// screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Layer {
    Image {
        image_path: String,
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
        #[serde(default)]
        recolor_palette: Option<String>,
    },
    Text {
        text: String,
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
        #[serde(default)]
        text_color_palette: Option<String>,
        #[serde(default)]
        text_size: TextSize,
    },
}

/// One selectable entry on a screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub button_map: Option<ButtonMap>,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub selected_layers: Vec<Layer>,
}

/// A named grouping whose `menu_items` becomes the active item set
/// when its page is selected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

/// Screen background: optional fill color plus ordered image layers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Background {
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// Normalized representation of one screen.
///
/// `menu_items` and `pages` are mutually exclusive by design: when
/// `pages` is non-empty the selected page supplies the active item
/// set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuModel {
    pub screen_name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub background: Option<Background>,
    #[serde(default)]
    pub button_map: Option<ButtonMap>,
    #[serde(default)]
    pub status_bar: Option<String>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl MenuModel {
    /// Build a model from an already-resolved screen document,
    /// folding `template` indirection first: a document embedding a
    /// screen under the `template` key substitutes that screen for
    /// itself.
    pub fn from_document(doc: &Value) -> Result<Self> {
        let mut doc = doc;
        let mut depth = 0;
        while let Some(template) = doc.get("template") {
            if depth >= MAX_TEMPLATE_DEPTH {
                return Err(ThemeError::Load(format!(
                    "template indirection deeper than {MAX_TEMPLATE_DEPTH}"
                )));
            }
            doc = template;
            depth += 1;
        }
        serde_json::from_value(doc.clone())
            .map_err(|e| ThemeError::Load(format!("invalid screen document: {e}")))
    }

    /// The item set driving selection for the given page index.
    pub fn active_items(&self, page: usize) -> &[MenuItem] {
        if self.pages.is_empty() {
            &self.menu_items
        } else {
            &self.pages[page % self.pages.len()].menu_items
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Effective button map for the given page: the active page's
    /// first item's map, if present, overrides the screen's.
    pub fn effective_button_map(&self, page: usize) -> ButtonMap {
        if !self.pages.is_empty() {
            let idx = page % self.pages.len();
            if let Some(map) = self.pages[idx]
                .menu_items
                .first()
                .and_then(|item| item.button_map.clone())
            {
                return map;
            }
        }
        self.button_map.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_names_parse() {
        assert_eq!(Action::from_name("select"), Action::Select);
        assert_eq!(Action::from_name("back"), Action::Back);
        assert_eq!(Action::from_name("previous"), Action::Previous);
        assert_eq!(Action::from_name("next"), Action::Next);
        assert_eq!(Action::from_name("previous_page"), Action::PreviousPage);
        assert_eq!(Action::from_name("next_page"), Action::NextPage);
        assert_eq!(Action::from_name("noop"), Action::Noop);
        assert_eq!(Action::from_name("launch_missiles"), Action::Other);
    }

    #[test]
    fn default_button_map_is_all_noop() {
        let map = ButtonMap::default();
        for &button in Button::ALL {
            assert_eq!(map.action_for(button), Action::Noop);
        }
    }

    #[test]
    fn button_map_translates_each_button() {
        let map: ButtonMap = serde_json::from_value(json!({
            "a": "select", "b": "back",
            "up": "previous", "down": "next",
            "left": "previous_page", "right": "next_page",
        }))
        .unwrap();
        assert_eq!(map.action_for(Button::A), Action::Select);
        assert_eq!(map.action_for(Button::B), Action::Back);
        assert_eq!(map.action_for(Button::Up), Action::Previous);
        assert_eq!(map.action_for(Button::Down), Action::Next);
        assert_eq!(map.action_for(Button::Left), Action::PreviousPage);
        assert_eq!(map.action_for(Button::Right), Action::NextPage);
    }

    #[test]
    fn image_and_text_layers_deserialize() {
        let layers: Vec<Layer> = serde_json::from_value(json!([
            {"image_path": "/t/a.png", "x": 3, "y": 4, "recolor_palette": "red"},
            {"text": "hello", "x": 1, "y": 2, "text_size": "small"},
        ]))
        .unwrap();
        assert_eq!(
            layers[0],
            Layer::Image {
                image_path: "/t/a.png".into(),
                x: 3,
                y: 4,
                recolor_palette: Some("red".into()),
            }
        );
        assert_eq!(
            layers[1],
            Layer::Text {
                text: "hello".into(),
                x: 1,
                y: 2,
                text_color_palette: None,
                text_size: TextSize::Small,
            }
        );
    }

    #[test]
    fn minimal_screen_document() {
        let model = MenuModel::from_document(&json!({"screen_name": "Dashboard"})).unwrap();
        assert_eq!(model.screen_name, "Dashboard");
        assert!(model.menu_items.is_empty());
        assert!(model.pages.is_empty());
        assert!(model.title.is_none());
    }

    #[test]
    fn missing_screen_name_is_a_load_error() {
        let err = MenuModel::from_document(&json!({"title": "Nope"})).unwrap_err();
        assert!(format!("{err}").contains("invalid screen document"));
    }

    #[test]
    fn template_substitutes_for_the_outer_document() {
        let doc = json!({
            "template": {"screen_name": "FromTemplate", "title": "T"},
        });
        let model = MenuModel::from_document(&doc).unwrap();
        assert_eq!(model.screen_name, "FromTemplate");
        assert_eq!(model.title.as_deref(), Some("T"));
    }

    #[test]
    fn template_chains_are_bounded() {
        let mut doc = json!({"screen_name": "Base"});
        for _ in 0..(MAX_TEMPLATE_DEPTH + 1) {
            doc = json!({"template": doc});
        }
        assert!(MenuModel::from_document(&doc).is_err());
    }

    #[test]
    fn active_items_without_pages() {
        let model = MenuModel::from_document(&json!({
            "screen_name": "S",
            "menu_items": [{"label": "one", "selected_layers": []}],
        }))
        .unwrap();
        assert_eq!(model.active_items(0).len(), 1);
        assert_eq!(model.active_items(0)[0].label, "one");
    }

    #[test]
    fn active_items_follow_the_selected_page() {
        let model = MenuModel::from_document(&json!({
            "screen_name": "S",
            "pages": [
                {"menu_items": [{"label": "p0", "selected_layers": []}]},
                {"menu_items": [{"label": "p1a", "selected_layers": []},
                                {"label": "p1b", "selected_layers": []}]},
            ],
        }))
        .unwrap();
        assert_eq!(model.active_items(0).len(), 1);
        assert_eq!(model.active_items(1).len(), 2);
        assert_eq!(model.active_items(1)[0].label, "p1a");
        assert_eq!(model.page_count(), 2);
    }

    #[test]
    fn page_first_item_button_map_overrides_screen() {
        let model = MenuModel::from_document(&json!({
            "screen_name": "S",
            "button_map": {"a": "select"},
            "pages": [
                {"menu_items": [
                    {"label": "x", "selected_layers": [], "button_map": {"a": "back"}},
                ]},
                {"menu_items": [{"label": "y", "selected_layers": []}]},
            ],
        }))
        .unwrap();
        assert_eq!(model.effective_button_map(0).action_for(Button::A), Action::Back);
        assert_eq!(model.effective_button_map(1).action_for(Button::A), Action::Select);
    }

    #[test]
    fn screen_map_applies_without_pages() {
        let model = MenuModel::from_document(&json!({
            "screen_name": "S",
            "button_map": {"down": "next"},
        }))
        .unwrap();
        assert_eq!(model.effective_button_map(0).action_for(Button::Down), Action::Next);
    }
}
