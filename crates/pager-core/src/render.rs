//! Frame composition: one screen plus its status bar into draw calls.
//!
//! Draw order is back-to-front: clear, background fill, background
//! layers, title, menu items, status bar. A missing image asset or an
//! unknown palette name degrades the affected element and the rest of
//! the frame still draws.

use pager_store::{PathKind, ThemeStore};
use pager_types::color::Color;
use pager_types::error::{Result, ThemeError};
use pager_types::render::{Position, Renderer, SCREEN_W, TextSize};

use crate::menu::{Layer, MenuItem};
use crate::nav::NavigationState;
use crate::palette::Palette;
use crate::statusbar::{Telemetry, resolve_status_bar};
use crate::theme::ThemeGraph;

/// Vertical center of the title run.
const TITLE_Y: i32 = 20;
/// Left edge of plain-text fallback labels.
const LABEL_X: i32 = 20;
/// First fallback label row.
const LABEL_Y0: i32 = 50;
/// Row spacing between fallback labels.
const LABEL_SPACING: i32 = 30;

/// Compose the current screen into draw calls on `renderer`.
pub fn render_frame(
    renderer: &mut dyn Renderer,
    store: &dyn ThemeStore,
    graph: &ThemeGraph,
    nav: &NavigationState,
    telemetry: &Telemetry,
) -> Result<()> {
    let Some(model) = nav.current_model(graph) else {
        return Err(ThemeError::Render(format!(
            "current screen '{}' vanished from the graph",
            nav.current_key()
        )));
    };
    let palette = graph.palette();

    renderer.clear_frame()?;

    if let Some(background) = &model.background {
        if let Some(color) = background.background_color {
            renderer.draw_background(color)?;
        }
        for layer in &background.layers {
            draw_layer(renderer, store, palette, Position::default(), layer)?;
        }
    }

    if let Some(title) = &model.title {
        renderer.draw_text(
            Position::new(SCREEN_W / 2, TITLE_Y),
            title,
            Color::WHITE,
            TextSize::Large,
        )?;
    }

    let items = model.active_items(nav.selected_page());
    for (index, item) in items.iter().enumerate() {
        draw_item(
            renderer,
            store,
            palette,
            item,
            index,
            index == nav.selected_item(),
        )?;
    }

    if let Some(name) = &model.status_bar {
        match graph.status_bar(name) {
            Some(bar) => {
                for draw in resolve_status_bar(bar, telemetry) {
                    draw_image_checked(renderer, store, draw.pos, &draw.image_path, None)?;
                }
            },
            None => {
                log::warn!("screen '{}' names unknown status bar '{name}'", model.screen_name);
            },
        }
    }

    Ok(())
}

fn draw_item(
    renderer: &mut dyn Renderer,
    store: &dyn ThemeStore,
    palette: &Palette,
    item: &MenuItem,
    index: usize,
    selected: bool,
) -> Result<()> {
    // An item with no layers at all renders as a plain text row, the
    // way unstyled themes list their entries.
    if item.layers.is_empty() && item.selected_layers.is_empty() {
        let label = if item.label.is_empty() {
            "Unnamed"
        } else {
            &item.label
        };
        let index = i32::try_from(index).unwrap_or(i32::MAX);
        renderer.draw_text(
            Position::new(LABEL_X, LABEL_Y0 + index * LABEL_SPACING),
            label,
            Color::WHITE,
            TextSize::Medium,
        )?;
        return Ok(());
    }
    let layers = if selected {
        &item.selected_layers
    } else {
        &item.layers
    };
    let origin = Position::new(item.x, item.y);
    for layer in layers {
        draw_layer(renderer, store, palette, origin, layer)?;
    }
    Ok(())
}

fn draw_layer(
    renderer: &mut dyn Renderer,
    store: &dyn ThemeStore,
    palette: &Palette,
    origin: Position,
    layer: &Layer,
) -> Result<()> {
    match layer {
        Layer::Image {
            image_path,
            x,
            y,
            recolor_palette,
        } => {
            let recolor = recolor_palette.as_deref().and_then(|name| {
                let color = palette.get(name);
                if color.is_none() {
                    log::warn!("recolor palette '{name}' is not in the theme palette");
                }
                color
            });
            draw_image_checked(renderer, store, origin.offset(*x, *y), image_path, recolor)
        },
        Layer::Text {
            text,
            x,
            y,
            text_color_palette,
            text_size,
        } => {
            let color = match text_color_palette.as_deref() {
                Some(name) => palette.get(name).unwrap_or_else(|| {
                    log::warn!("text color palette '{name}' is not in the theme palette");
                    Color::WHITE
                }),
                None => Color::WHITE,
            };
            renderer.draw_text(origin.offset(*x, *y), text, color, *text_size)
        },
    }
}

/// Draw an image only if its asset exists in the store. A missing
/// asset is logged and skipped.
fn draw_image_checked(
    renderer: &mut dyn Renderer,
    store: &dyn ThemeStore,
    pos: Position,
    resource: &str,
    recolor: Option<Color>,
) -> Result<()> {
    if store.path_kind(resource) != PathKind::File {
        log::warn!("image asset missing: {resource}");
        return Ok(());
    }
    renderer.draw_image(pos, resource, recolor)
}
