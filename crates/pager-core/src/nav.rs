//! Navigation state machine: button events against the theme graph.
//!
//! The state tracks the current screen, a back stack whose first entry
//! is the root screen and whose last entry is always the current one,
//! and the item/page cursors. Buttons translate through the effective
//! button map into symbolic actions. A failed transition (no item
//! under the cursor, missing or unknown target) is logged and leaves
//! the state unchanged.

use pager_types::error::{Result, ThemeError};
use pager_types::input::Button;

use crate::menu::{Action, ButtonMap, MenuModel};
use crate::theme::ThemeGraph;

/// Live navigation state over one loaded theme graph.
#[derive(Debug, Clone)]
pub struct NavigationState {
    current: String,
    back_stack: Vec<String>,
    selected_item: usize,
    selected_page: usize,
    button_map: ButtonMap,
}

impl NavigationState {
    /// Start navigating at `start_key`. The key must name a screen in
    /// the graph.
    pub fn new(graph: &ThemeGraph, start_key: &str) -> Result<Self> {
        if graph.screen(start_key).is_none() {
            return Err(ThemeError::Load(format!(
                "start screen '{start_key}' is not in the theme"
            )));
        }
        let mut state = Self {
            current: start_key.to_string(),
            back_stack: vec![start_key.to_string()],
            selected_item: 0,
            selected_page: 0,
            button_map: ButtonMap::default(),
        };
        state.refresh_button_map(graph);
        Ok(state)
    }

    /// Translate a button press through the effective button map and
    /// apply the resulting action.
    pub fn handle_button(&mut self, graph: &ThemeGraph, button: Button) {
        let action = self.button_map.action_for(button);
        log::debug!(
            "button {} -> {action:?} on '{}'",
            button.name(),
            self.current
        );
        self.apply_action(graph, action);
    }

    fn apply_action(&mut self, graph: &ThemeGraph, action: Action) {
        match action {
            Action::Select => self.select(graph),
            Action::Back => self.back(graph),
            Action::Previous => self.step_item(graph, -1),
            Action::Next => self.step_item(graph, 1),
            Action::PreviousPage => self.step_page(graph, -1),
            Action::NextPage => self.step_page(graph, 1),
            Action::Noop | Action::Other => {},
        }
    }

    fn select(&mut self, graph: &ThemeGraph) {
        let Some(model) = graph.screen(&self.current) else {
            return;
        };
        let items = model.active_items(self.selected_page);
        let Some(item) = items.get(self.selected_item) else {
            log::warn!("select on '{}' with no item under the cursor", self.current);
            return;
        };
        let Some(target) = item.target.as_deref() else {
            log::warn!("item '{}' has no target", item.label);
            return;
        };
        if graph.screen(target).is_none() {
            log::warn!("item '{}' targets unknown screen '{target}'", item.label);
            return;
        }
        let target = target.to_string();
        self.back_stack.push(target.clone());
        self.enter(graph, target);
    }

    fn back(&mut self, graph: &ThemeGraph) {
        // The root entry never pops, so back on the root screen is a
        // no-op.
        if self.back_stack.len() <= 1 {
            log::debug!("back on root screen '{}' ignored", self.current);
            return;
        }
        self.back_stack.pop();
        if let Some(key) = self.back_stack.last().cloned() {
            self.enter(graph, key);
        }
    }

    fn step_item(&mut self, graph: &ThemeGraph, dir: i64) {
        let Some(model) = graph.screen(&self.current) else {
            return;
        };
        let count = model.active_items(self.selected_page).len();
        if count > 1 {
            self.selected_item = wrap(self.selected_item, dir, count);
        } else {
            // A page with at most one item has nothing to step
            // through, so the press moves between pages instead.
            self.step_page(graph, dir);
        }
    }

    fn step_page(&mut self, graph: &ThemeGraph, dir: i64) {
        let Some(model) = graph.screen(&self.current) else {
            return;
        };
        let pages = model.page_count();
        if pages == 0 {
            return;
        }
        self.selected_page = wrap(self.selected_page, dir, pages);
        self.selected_item = 0;
        self.button_map = model.effective_button_map(self.selected_page);
    }

    fn enter(&mut self, graph: &ThemeGraph, key: String) {
        self.current = key;
        self.selected_item = 0;
        self.selected_page = 0;
        self.refresh_button_map(graph);
    }

    fn refresh_button_map(&mut self, graph: &ThemeGraph) {
        self.button_map = graph
            .screen(&self.current)
            .map(|model| model.effective_button_map(self.selected_page))
            .unwrap_or_default();
    }

    pub fn current_key(&self) -> &str {
        &self.current
    }

    /// The screen the session started on.
    pub fn root_key(&self) -> &str {
        self.back_stack
            .first()
            .map(String::as_str)
            .unwrap_or(&self.current)
    }

    pub fn selected_item(&self) -> usize {
        self.selected_item
    }

    pub fn selected_page(&self) -> usize {
        self.selected_page
    }

    pub fn back_stack_len(&self) -> usize {
        self.back_stack.len()
    }

    pub fn button_map(&self) -> &ButtonMap {
        &self.button_map
    }

    /// The model for the current screen.
    pub fn current_model<'a>(&self, graph: &'a ThemeGraph) -> Option<&'a MenuModel> {
        graph.screen(&self.current)
    }
}

fn wrap(index: usize, dir: i64, count: usize) -> usize {
    (index as i64 + dir).rem_euclid(count as i64) as usize
}
