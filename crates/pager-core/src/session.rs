//! One live theme session: the store, the graph, and navigation.
//!
//! Reload is atomic. The replacement graph and navigation state are
//! built first and only then swapped in, so a broken theme on disk
//! never takes down a running session.

use pager_store::ThemeStore;
use pager_types::error::{Result, ThemeError};
use pager_types::input::Button;
use pager_types::render::Renderer;

use crate::nav::NavigationState;
use crate::render::render_frame;
use crate::statusbar::Telemetry;
use crate::theme::ThemeGraph;

#[derive(Debug)]
pub struct Session<S: ThemeStore> {
    store: S,
    theme_dir: String,
    graph: ThemeGraph,
    nav: NavigationState,
}

impl<S: ThemeStore> Session<S> {
    /// Load the theme at `theme_dir` and start navigating at
    /// `start_screen`, or at the first screen in key order when none
    /// is given.
    pub fn load(store: S, theme_dir: &str, start_screen: Option<&str>) -> Result<Self> {
        let graph = ThemeGraph::load(&store, theme_dir)?;
        let start = match start_screen {
            Some(key) => key.to_string(),
            None => graph
                .screen_keys()
                .next()
                .map(str::to_string)
                .ok_or_else(|| {
                    ThemeError::Load(format!("theme at {theme_dir} has no screens"))
                })?,
        };
        let nav = NavigationState::new(&graph, &start)?;
        Ok(Self {
            store,
            theme_dir: theme_dir.to_string(),
            graph,
            nav,
        })
    }

    pub fn handle_button(&mut self, button: Button) {
        self.nav.handle_button(&self.graph, button);
    }

    /// Reload the theme from the store. Navigation restarts at the
    /// session's root screen. On failure the running graph and state
    /// are untouched.
    pub fn reload(&mut self) -> Result<()> {
        let graph = ThemeGraph::load(&self.store, &self.theme_dir)?;
        let nav = NavigationState::new(&graph, self.nav.root_key())?;
        self.graph = graph;
        self.nav = nav;
        log::info!("theme reloaded from {}", self.theme_dir);
        Ok(())
    }

    /// Compose the current screen onto `renderer`.
    pub fn render(&self, renderer: &mut dyn Renderer, telemetry: &Telemetry) -> Result<()> {
        render_frame(renderer, &self.store, &self.graph, &self.nav, telemetry)
    }

    pub fn graph(&self) -> &ThemeGraph {
        &self.graph
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn theme_dir(&self) -> &str {
        &self.theme_dir
    }
}
