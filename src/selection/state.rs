//! Selection state management for the suggestion panel
//!
//! Tracks the panel-open flag and the highlighted suggestion index.

/// Panel and highlight state
///
/// `highlighted` is `None` when nothing is highlighted, and is only ever
/// `Some` while the panel is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Whether the suggestion panel is visible and receiving navigation
    open: bool,
    /// Currently highlighted suggestion index (None = no highlight)
    highlighted: Option<usize>,
}

impl SelectionState {
    /// Create a closed SelectionState with no highlight
    pub fn new() -> Self {
        Self {
            open: false,
            highlighted: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Get the highlighted suggestion index
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Open the panel with nothing highlighted (text input changed)
    pub fn open_fresh(&mut self) {
        self.open = true;
        self.highlighted = None;
    }

    /// Close the panel and drop the highlight
    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    /// Drop the highlight without closing (result set replaced)
    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Highlight `index` if the panel is open and it is in bounds
    ///
    /// Returns true if the highlight was set.
    pub fn highlight(&mut self, index: usize, item_count: usize) -> bool {
        if !self.open || index >= item_count {
            return false;
        }
        self.highlighted = Some(index);
        true
    }

    /// Move the highlight down (ArrowDown)
    ///
    /// Opens a closed panel without moving the highlight. Otherwise wraps from
    /// the last suggestion to the first; from no highlight it starts at the
    /// first.
    pub fn navigate_next(&mut self, item_count: usize) {
        if !self.open {
            self.open = true;
            return;
        }
        if item_count == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(current) => (current + 1) % item_count,
            None => 0,
        });
    }

    /// Move the highlight up (ArrowUp)
    ///
    /// Opens a closed panel without moving the highlight. Otherwise wraps from
    /// the first suggestion to the last; from no highlight it starts at the
    /// last.
    pub fn navigate_previous(&mut self, item_count: usize) {
        if !self.open {
            self.open = true;
            return;
        }
        if item_count == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(current) if current > 0 && current < item_count => current - 1,
            _ => item_count - 1,
        });
    }

    /// Index to commit on Enter: the highlight, if the panel is open
    pub fn committable(&self) -> Option<usize> {
        if self.open { self.highlighted } else { None }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
