use ratatui::layout::Rect;

/// Interactive areas of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    /// Panel chrome (borders, loading or empty message)
    SuggestionPanel,
    /// A suggestion row, by index into the result set
    Suggestion(usize),
}

/// Where each component was drawn in the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub panel: Option<Rect>,
    /// Inner area of the suggestion list (inside the borders)
    pub list: Option<Rect>,
    /// Index of the first visible suggestion
    pub list_offset: usize,
    /// Number of suggestions in the list
    pub suggestion_count: usize,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame's regions
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
