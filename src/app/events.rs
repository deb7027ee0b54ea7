use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::state::App;
use crate::layout::{Region, region_at};

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.notification = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => {
                    self.should_quit = true;
                    return;
                }
                // Would insert a newline into the single-line input
                KeyCode::Char('m') | KeyCode::Char('j') => return,
                _ => {}
            }
        }

        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Enter => {
                self.combobox.on_key_down(key.code);
            }
            KeyCode::Esc => {
                if !self.combobox.on_key_down(KeyCode::Esc) {
                    self.should_quit = true;
                }
            }
            KeyCode::Tab | KeyCode::BackTab => {}
            _ => {
                if self.input.textarea.input(key) {
                    let text = self.input.query().to_string();
                    self.combobox.on_text_changed(&text);
                }
            }
        }

        self.sync_input();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(region),
            MouseEventKind::Moved => {
                if let Some(Region::Suggestion(index)) = region {
                    self.combobox.on_item_hover(index);
                }
            }
            _ => {}
        }

        self.sync_input();
    }

    fn handle_press(&mut self, region: Option<Region>) {
        match region {
            // Resolved before the outside check so a row press always commits
            Some(Region::Suggestion(index)) => {
                self.combobox.on_item_press(index);
            }
            Some(Region::InputField) | Some(Region::SuggestionPanel) => {}
            None => self.combobox.on_outside_interaction(),
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
