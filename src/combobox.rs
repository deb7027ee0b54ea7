//! Search-and-select widget core
//!
//! `Combobox` is the presentation boundary: a renderer reads its state
//! (`text`, `is_open`, `is_loading`, `results`, `highlight_index`) and feeds it
//! input events. It wires the selection state machine to the query
//! controller and reports commits through the `on_select` callback.

use std::time::Duration;

use ratatui::crossterm::event::KeyCode;

use crate::config::{DEFAULT_DEBOUNCE_MS, DEFAULT_PLACEHOLDER, WidgetConfig};
use crate::query::{QueryController, QueryStatus};
use crate::selection::SelectionState;
use crate::source::SuggestionSource;

/// Host-supplied widget options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxOptions {
    pub placeholder: String,
    pub min_query_length: usize,
    pub debounce: Duration,
    /// None keeps the per-query cache unbounded
    pub cache_capacity: Option<usize>,
}

impl Default for ComboboxOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            min_query_length: 1,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            cache_capacity: None,
        }
    }
}

impl From<&WidgetConfig> for ComboboxOptions {
    fn from(config: &WidgetConfig) -> Self {
        Self {
            placeholder: config.placeholder.clone(),
            min_query_length: config.min_query_length(),
            debounce: config.debounce(),
            cache_capacity: config.cache_capacity,
        }
    }
}

type SelectCallback = Box<dyn FnMut(&str)>;

pub struct Combobox {
    text: String,
    placeholder: String,
    min_query_length: usize,
    selection: SelectionState,
    controller: QueryController,
    last_selection: Option<String>,
    on_select: Option<SelectCallback>,
}

impl Combobox {
    pub fn new(source: Box<dyn SuggestionSource>, options: ComboboxOptions) -> Self {
        let controller = QueryController::new(source, options.debounce)
            .with_cache_capacity(options.cache_capacity);

        Self {
            text: String::new(),
            placeholder: options.placeholder,
            min_query_length: options.min_query_length,
            selection: SelectionState::new(),
            controller,
            last_selection: None,
            on_select: None,
        }
    }

    /// Register the callback invoked with each committed value
    pub fn with_on_select(mut self, on_select: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    // ---------------------------------------------------------------------
    // Read-only state for the renderer
    // ---------------------------------------------------------------------

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    pub fn results(&self) -> &[String] {
        self.controller.results()
    }

    /// Highlighted suggestion, None for "nothing highlighted"
    pub fn highlight_index(&self) -> Option<usize> {
        self.selection.highlighted()
    }

    pub fn status(&self) -> QueryStatus {
        self.controller.status()
    }

    pub fn results_query(&self) -> Option<&str> {
        self.controller.results_query()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.controller.last_error()
    }

    /// Most recently committed value
    pub fn last_selection(&self) -> Option<&str> {
        self.last_selection.as_deref()
    }

    pub fn controller(&self) -> &QueryController {
        &self.controller
    }

    // ---------------------------------------------------------------------
    // Input events
    // ---------------------------------------------------------------------

    /// The user edited the text
    ///
    /// This is the only path into query submission; commits set the text
    /// through [`set_text_from_selection`](Self::set_text_from_selection).
    pub fn on_text_changed(&mut self, raw: &str) {
        self.text = raw.to_string();
        self.selection.open_fresh();
        self.controller.submit_query(raw, self.min_query_length);
    }

    /// Handle a navigation key
    ///
    /// Returns true if the key was consumed by the widget.
    pub fn on_key_down(&mut self, key: KeyCode) -> bool {
        let item_count = self.results().len();
        match key {
            KeyCode::Down => {
                self.selection.navigate_next(item_count);
                true
            }
            KeyCode::Up => {
                self.selection.navigate_previous(item_count);
                true
            }
            KeyCode::Enter => match self.selection.committable() {
                Some(index) => self.commit(index),
                None => false,
            },
            KeyCode::Esc => {
                let was_open = self.selection.is_open();
                self.selection.close();
                was_open
            }
            _ => false,
        }
    }

    /// Pointer moved over suggestion `index`
    pub fn on_item_hover(&mut self, index: usize) {
        let item_count = self.results().len();
        self.selection.highlight(index, item_count);
    }

    /// Pointer pressed on suggestion `index`; commits it
    ///
    /// Hosts must route the press here before any focus-loss handling.
    /// Returns true if a value was committed.
    pub fn on_item_press(&mut self, index: usize) -> bool {
        if !self.selection.is_open() || index >= self.results().len() {
            return false;
        }
        self.commit(index)
    }

    /// Press anywhere outside the widget
    pub fn on_outside_interaction(&mut self) {
        self.selection.close();
    }

    /// Drive the query controller; call on every event-loop iteration
    ///
    /// Returns true when a new result set arrived (the highlight is reset).
    pub fn tick(&mut self) -> bool {
        let changed = self.controller.tick();
        if changed {
            self.selection.clear_highlight();
        }
        changed
    }

    /// Tear down: cancel the debounce and any live request
    pub fn dispose(&mut self) {
        self.controller.dispose();
        self.selection.close();
    }

    fn commit(&mut self, index: usize) -> bool {
        let Some(value) = self.results().get(index).cloned() else {
            return false;
        };

        self.set_text_from_selection(&value);
        self.selection.close();
        self.controller.cancel_pending();
        log::debug!("Committed selection {:?}", value);

        if let Some(on_select) = self.on_select.as_mut() {
            on_select(&value);
        }
        self.last_selection = Some(value);
        true
    }

    /// Programmatic text assignment; never submits a query
    fn set_text_from_selection(&mut self, value: &str) {
        self.text = value.to_string();
    }
}

#[cfg(test)]
#[path = "combobox_tests.rs"]
mod combobox_tests;
