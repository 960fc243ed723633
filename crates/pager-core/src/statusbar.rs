//! Status bar resolution against telemetry stand-ins.
//!
//! A status bar document maps element kinds (battery, volume,
//! brightness, vibrate, time) to sets of layer variants keyed by
//! telemetry value. Resolution picks the variant matching the current
//! stand-in value and emits ordered draw instructions.

use std::collections::HashMap;

use pager_types::error::{Result, ThemeError};
use pager_types::render::Position;
use serde::Deserialize;
use serde_json::Value;

/// Status bar element kinds. `Time` is parsed but deliberately never
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Battery,
    Volume,
    Brightness,
    Vibrate,
    Time,
}

impl Kind {
    /// Kinds in render order. `Time` is absent.
    pub const RENDER_ORDER: &[Kind] = &[Kind::Battery, Kind::Volume, Kind::Brightness, Kind::Vibrate];

    /// The key naming this kind in `status_bar_items`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Battery => "battery",
            Self::Volume => "volume",
            Self::Brightness => "brightness",
            Self::Vibrate => "vibrate",
            Self::Time => "time",
        }
    }
}

/// Fixed stand-in values for the device sensors. Levels are small
/// integer steps matching the variant keys in status bar documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Telemetry {
    pub battery: u8,
    pub volume: u8,
    pub brightness: u8,
    pub vibrate: bool,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            battery: 3,
            volume: 2,
            brightness: 2,
            vibrate: false,
        }
    }
}

impl Telemetry {
    /// The layer-variant key selected by the current value of `kind`,
    /// or `None` for kinds that never render.
    pub fn variant_key(&self, kind: Kind) -> Option<String> {
        match kind {
            Kind::Battery => Some(self.battery.to_string()),
            Kind::Volume => Some(self.volume.to_string()),
            Kind::Brightness => Some(self.brightness.to_string()),
            Kind::Vibrate => Some(if self.vibrate { "on" } else { "off" }.to_string()),
            Kind::Time => None,
        }
    }
}

/// An image layer inside a status bar variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageLayer {
    pub image_path: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// One status bar element: layer variants keyed by telemetry value,
/// positioned at a screen offset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusBarItem {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub layers: HashMap<String, Vec<ImageLayer>>,
}

/// A status bar document: screen-shaped, with elements keyed by kind
/// name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusBar {
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub status_bar_items: HashMap<String, StatusBarItem>,
}

impl StatusBar {
    /// Build a status bar from an already-resolved document.
    pub fn from_document(doc: &Value) -> Result<Self> {
        serde_json::from_value(doc.clone())
            .map_err(|e| ThemeError::Load(format!("invalid status bar document: {e}")))
    }
}

/// One resolved draw instruction: an image at an absolute offset
/// (item offset + layer offset).
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarDraw {
    pub pos: Position,
    pub image_path: String,
}

/// Resolve a status bar against current telemetry into ordered draw
/// instructions. Kinds render in a fixed order; a kind whose variant
/// key has no layer set is logged and skipped.
pub fn resolve_status_bar(bar: &StatusBar, telemetry: &Telemetry) -> Vec<StatusBarDraw> {
    let mut draws = Vec::new();
    for &kind in Kind::RENDER_ORDER {
        let Some(item) = bar.status_bar_items.get(kind.name()) else {
            continue;
        };
        let Some(variant) = telemetry.variant_key(kind) else {
            continue;
        };
        let Some(layers) = item.layers.get(&variant) else {
            log::warn!(
                "status bar has no '{variant}' variant for {}, skipping",
                kind.name()
            );
            continue;
        };
        for layer in layers {
            draws.push(StatusBarDraw {
                pos: Position::new(item.x + layer.x, item.y + layer.y),
                image_path: layer.image_path.clone(),
            });
        }
    }
    draws
}
