use ratatui::Frame;

use super::input_state::InputState;
use crate::combobox::Combobox;
use crate::layout::LayoutRegions;

/// Terminal host for a single combobox
pub struct App {
    pub combobox: Combobox,
    pub input: InputState,
    /// Regions drawn in the last frame, used for mouse hit testing
    pub layout_regions: LayoutRegions,
    /// One-shot message shown in the status line until the next keystroke
    pub notification: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(combobox: Combobox) -> Self {
        let input = InputState::new(combobox.placeholder());
        Self {
            combobox,
            input,
            layout_regions: LayoutRegions::new(),
            notification: None,
            should_quit: false,
        }
    }

    pub fn with_notification(mut self, notification: Option<String>) -> Self {
        self.notification = notification;
        self
    }

    /// Drive the widget; returns true if a redraw is needed
    pub fn tick(&mut self) -> bool {
        self.combobox.tick()
    }

    pub fn render(&mut self, frame: &mut Frame) {
        super::render::render(self, frame);
    }

    /// Value committed most recently, if any
    pub fn selection(&self) -> Option<&str> {
        self.combobox.last_selection()
    }

    pub fn shutdown(&mut self) {
        self.combobox.dispose();
    }

    /// Mirror programmatic text changes (commits) into the input field
    pub(super) fn sync_input(&mut self) {
        if self.input.query() != self.combobox.text() {
            let text = self.combobox.text().to_string();
            self.input.set_text(&text);
        }
    }
}
