//! Frame rendering for the combobox host
//!
//! Draws the input field, the suggestion panel directly below it and a
//! one-line status bar, recording each region for mouse hit testing.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::App;
use crate::combobox::Combobox;
use crate::query::QueryStatus;
use crate::widgets::popup;

const INPUT_HEIGHT: u16 = 3;
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const POPUP_BORDER_HEIGHT: u16 = 2;
/// Borders plus the two-column highlight marker
const POPUP_PADDING: u16 = 4;
const MIN_POPUP_WIDTH: u16 = 28;

const KEY_HINTS: &str = "↑/↓ navigate  Enter select  Esc close/quit  Ctrl+C quit";

pub fn render(app: &mut App, frame: &mut Frame) {
    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(INPUT_HEIGHT), Constraint::Length(1)])
            .areas(frame.area());
    let [input_area, _] =
        Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)]).areas(main_area);

    app.layout_regions.clear();

    frame.render_widget(&app.input.textarea, input_area);
    app.layout_regions.input = Some(input_area);

    if app.combobox.is_open() {
        render_panel(app, frame, input_area, main_area);
    }

    render_status(app, frame, status_area);
}

/// Message shown in place of the list when there is nothing to list
fn panel_message(combobox: &Combobox) -> Option<&'static str> {
    if !combobox.results().is_empty() {
        return None;
    }
    match combobox.status() {
        QueryStatus::Loading => Some("Loading..."),
        QueryStatus::Ready => Some("No matches"),
        QueryStatus::Idle | QueryStatus::Pending => None,
    }
}

/// Panel width for content of the given display width, saturating at `u16::MAX`
fn popup_width(content_width: usize) -> u16 {
    u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_PADDING)
        .max(MIN_POPUP_WIDTH)
}

fn render_panel(app: &mut App, frame: &mut Frame, input_area: Rect, bounds: Rect) {
    let results = app.combobox.results();
    let message = panel_message(&app.combobox);
    if results.is_empty() && message.is_none() {
        return;
    }

    let (content_width, content_height) = match message {
        Some(text) => (text.width(), 1),
        None => (
            results.iter().map(|r| r.width()).max().unwrap_or(0),
            results.len().min(MAX_VISIBLE_SUGGESTIONS),
        ),
    };
    let popup_width = popup_width(content_width);
    let popup_height = (content_height as u16) + POPUP_BORDER_HEIGHT;

    let popup_area = popup::popup_below_anchor(input_area, bounds, popup_width, popup_height);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return;
    }

    popup::clear_area(frame, popup_area);
    app.layout_regions.panel = Some(popup_area);

    let title = if app.combobox.is_loading() {
        " Suggestions (loading) "
    } else {
        " Suggestions "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    if let Some(text) = message {
        let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(paragraph, popup_area);
        return;
    }

    let highlighted = app.combobox.highlight_index();
    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let line = if Some(i) == highlighted {
                Line::from(Span::styled(
                    format!("► {}", suggestion),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", suggestion),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    let list_area = block.inner(popup_area);
    let list = List::new(items).block(block);
    // Selecting the highlight keeps it scrolled into view
    let mut state = ListState::default().with_selected(highlighted);
    frame.render_stateful_widget(list, popup_area, &mut state);

    app.layout_regions.list = Some(list_area);
    app.layout_regions.list_offset = state.offset();
    app.layout_regions.suggestion_count = app.combobox.results().len();
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let line = if let Some(notification) = &app.notification {
        Line::from(Span::styled(
            notification.as_str(),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = app.combobox.last_error() {
        Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(selection) = app.combobox.last_selection() {
        Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                selection,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)))
    };

    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
