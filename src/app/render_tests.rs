//! Tests for frame rendering and region recording

use crate::app::App;
use crate::layout::{Region, region_at};
use crate::source::SourceError;
use crate::test_utils::test_helpers::{
    MockMode, MockSource, fire_and_settle_combobox, test_app,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 16;

fn render_app(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_initial_frame_shows_placeholder_and_hints() {
    let source = MockSource::cities();
    let mut app = test_app(&source);

    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Search for a city..."));
    assert!(output.contains("Enter select"));
    assert!(!output.contains("Suggestions"));
    assert_eq!(app.layout_regions.input, Some(Rect::new(0, 0, TEST_WIDTH, 3)));
    assert!(app.layout_regions.panel.is_none());
    assert!(app.layout_regions.list.is_none());
}

#[test]
fn test_notification_takes_status_line() {
    let source = MockSource::cities();
    let mut app = test_app(&source).with_notification(Some("Bad config".to_string()));

    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Bad config"));
    assert!(!output.contains("Enter select"));
}

#[tokio::test(start_paused = true)]
async fn test_results_render_below_input() {
    let source = MockSource::cities();
    let mut app = test_app(&source);
    type_text(&mut app, "b");
    fire_and_settle_combobox(&mut app.combobox).await;

    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    for city in ["Boston", "Bogotá", "Buenos Aires", "Brisbane"] {
        assert!(output.contains(city), "missing {city}");
    }
    assert!(output.contains(" Suggestions "));
    assert!(!output.contains('►'));

    assert_eq!(app.layout_regions.panel, Some(Rect::new(0, 3, 28, 10)));
    assert_eq!(app.layout_regions.list, Some(Rect::new(1, 4, 26, 8)));
    assert_eq!(app.layout_regions.suggestion_count, 8);
    assert_eq!(
        region_at(&app.layout_regions, 2, 6),
        Some(Region::Suggestion(2))
    );
}

#[tokio::test(start_paused = true)]
async fn test_highlighted_row_has_marker() {
    let source = MockSource::cities();
    let mut app = test_app(&source);
    type_text(&mut app, "b");
    fire_and_settle_combobox(&mut app.combobox).await;

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("► Bogotá"));
    assert!(!output.contains("► Boston"));
}

#[tokio::test(start_paused = true)]
async fn test_loading_message_while_fetching() {
    let source = MockSource::new(MockMode::Hang);
    let mut app = test_app(&source);
    type_text(&mut app, "b");
    fire_and_settle_combobox(&mut app.combobox).await;

    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(app.combobox.is_loading());
    assert!(output.contains("Loading..."));
    assert!(output.contains("(loading)"));
    assert!(app.layout_regions.panel.is_some());
    assert!(app.layout_regions.list.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_empty_result_shows_no_matches() {
    let source = MockSource::cities();
    let mut app = test_app(&source);
    type_text(&mut app, "zzz");
    fire_and_settle_combobox(&mut app.combobox).await;

    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("No matches"));
}

#[test]
fn test_pending_debounce_draws_no_panel() {
    let source = MockSource::cities();
    let mut app = test_app(&source);
    type_text(&mut app, "b");

    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(app.combobox.is_open());
    assert!(!output.contains("Suggestions"));
    assert!(app.layout_regions.panel.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_error_shown_in_status_line() {
    let source = MockSource::new(MockMode::Fail(SourceError::Network("timed out".into())));
    let mut app = test_app(&source);
    type_text(&mut app, "b");
    fire_and_settle_combobox(&mut app.combobox).await;

    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Error: Network error: timed out"));
}

#[tokio::test(start_paused = true)]
async fn test_selection_shown_after_commit() {
    let source = MockSource::cities();
    let mut app = test_app(&source);
    type_text(&mut app, "b");
    fire_and_settle_combobox(&mut app.combobox).await;

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let output = render_app(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Selected: Boston"));
    assert!(!output.contains(" Suggestions "));
    assert!(app.layout_regions.panel.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_short_terminal_scrolls_to_highlight() {
    let source = MockSource::cities();
    let mut app = test_app(&source);
    type_text(&mut app, "b");
    fire_and_settle_combobox(&mut app.combobox).await;

    for _ in 0..6 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.combobox.highlight_index(), Some(5));

    // Seven rows above the status line leave room for two suggestions
    let output = render_app(&mut app, TEST_WIDTH, 8);

    assert!(output.contains("► Barcelona"));
    assert!(!output.contains("Boston"));

    let list = app.layout_regions.list.unwrap();
    assert_eq!(list.height, 2);
    assert!(app.layout_regions.list_offset > 0);
    assert_eq!(
        region_at(&app.layout_regions, list.x, list.y),
        Some(Region::Suggestion(app.layout_regions.list_offset))
    );
}

#[test]
fn test_popup_width_has_minimum_and_saturates() {
    assert_eq!(super::popup_width(0), 28);
    assert_eq!(super::popup_width(30), 34);
    assert_eq!(super::popup_width(usize::from(u16::MAX) + 10), u16::MAX);
    assert_eq!(super::popup_width(usize::from(u16::MAX) - 1), u16::MAX);
}
