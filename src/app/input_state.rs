use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input backing the search field
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(placeholder: &str) -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(placeholder);

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole line, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }
}
