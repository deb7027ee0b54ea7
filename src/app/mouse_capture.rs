//! Scoped mouse capture
//!
//! Outside-click detection needs every mouse event in the terminal, so mouse
//! capture is enabled for the lifetime of the guard and released on drop.

use std::io;

use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};

#[derive(Debug)]
pub struct MouseCapture {
    _private: (),
}

impl MouseCapture {
    pub fn acquire() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(Self { _private: () })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        // Nothing useful to do if the terminal is already gone
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
}
