//! Tests for widgets/popup

use super::*;

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect::new(0, 0, 60, 3);
    let bounds = Rect::new(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 30, 10);

    assert_eq!(popup, Rect::new(0, 3, 30, 10));
}

#[test]
fn test_popup_below_anchor_width_limited_by_anchor() {
    let anchor = Rect::new(2, 0, 20, 3);
    let bounds = Rect::new(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 50, 5);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.width, 20);
}

#[test]
fn test_popup_below_anchor_height_clamped_to_bounds() {
    let anchor = Rect::new(0, 0, 60, 3);
    let bounds = Rect::new(0, 0, 80, 8);

    let popup = popup_below_anchor(anchor, bounds, 30, 12);

    assert_eq!(popup.y, 3);
    assert_eq!(popup.height, 5);
}

#[test]
fn test_popup_below_anchor_no_room() {
    let anchor = Rect::new(0, 5, 60, 3);
    let bounds = Rect::new(0, 0, 80, 8);

    let popup = popup_below_anchor(anchor, bounds, 30, 10);

    assert_eq!(popup.height, 0);
}
