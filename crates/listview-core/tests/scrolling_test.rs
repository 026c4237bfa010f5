//! Viewport edge cases: alignment, overscroll, empty content, resizing.

use listview_core::{Point, RowIndex, ScrollAlignment, Size};
use listview_testing::prelude::*;
use listview_testing::{assert_displayed_rows, assert_row_in_viewport};

#[test]
fn test_scroll_to_row_centers_target() {
    let mut rule = ListViewTestRule::new(320.0, 200.0);
    rule.set_content([100], label_rows)
        .expect("host accepts commands");

    let target = RowIndex::new(0, 40);
    assert!(rule
        .list_mut()
        .scroll_to_row(target, ScrollAlignment::Center));
    rule.layout().expect("host accepts commands");

    assert_eq!(rule.list().content_offset(), 1925.0);
    assert_row_in_viewport(rule.list(), target, Rect::new(0.0, 75.0, 320.0, 50.0), 0.001);
    rule.assert_consistent();
}

#[test]
fn test_overscroll_shows_edge_rows() {
    let mut rule = ListViewTestRule::new(320.0, 200.0);
    rule.set_content([10], label_rows)
        .expect("host accepts commands");

    rule.scroll_to(-100.0).expect("host accepts commands");
    assert_displayed_rows(rule.list(), &[(0, 0), (0, 1), (0, 2)]);

    rule.scroll_to(450.0).expect("host accepts commands");
    assert_displayed_rows(rule.list(), &[(0, 8), (0, 9)]);

    rule.scroll_to(2000.0).expect("host accepts commands");
    assert_displayed_rows(rule.list(), &[]);
    assert_eq!(rule.host().visible_count(), 0);
    rule.assert_consistent();
}

#[test]
fn test_empty_sections_display_nothing() {
    let mut rule = ListViewTestRule::new(320.0, 200.0);
    rule.set_content([0, 0, 0], label_rows)
        .expect("host accepts commands");

    assert_eq!(rule.list().content_height(), 0.0);
    assert_eq!(rule.list().geometry().section_count(), 3);
    assert!(rule.list().visible_rows().is_empty());
    assert_eq!(rule.host().node_count(), 0);
    assert_eq!(rule.list().row_at_point(Point::new(1.0, 0.0)), None);
}

#[test]
fn test_zero_height_viewport_shows_touching_rows() {
    let mut rule = ListViewTestRule::new(320.0, 0.0);
    rule.set_content([3], label_rows)
        .expect("host accepts commands");

    rule.scroll_to(75.0).expect("host accepts commands");
    assert_displayed_rows(rule.list(), &[(0, 1)]);

    rule.scroll_to(50.0).expect("host accepts commands");
    assert_displayed_rows(rule.list(), &[(0, 0), (0, 1)]);
    rule.assert_consistent();
}

#[test]
fn test_resize_adds_and_removes_rows() {
    let mut rule = ListViewTestRule::new(320.0, 90.0);
    rule.set_content([10], label_rows)
        .expect("host accepts commands");
    assert_displayed_rows(rule.list(), &[(0, 0), (0, 1)]);

    rule.list_mut().set_frame_size(Size::new(200.0, 240.0));
    rule.layout().expect("host accepts commands");
    assert_displayed_rows(rule.list(), &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    for (_, frame) in rule.host().visible_nodes() {
        assert_eq!(frame.width, 200.0);
    }

    rule.list_mut().set_frame_size(Size::new(200.0, 40.0));
    rule.layout().expect("host accepts commands");
    assert_displayed_rows(rule.list(), &[(0, 0)]);
    assert_eq!(rule.list().stats().widgets_pooled, 4);
    rule.assert_consistent();
}

#[test]
fn test_clamped_list_stops_at_content_edges() {
    let mut rule = ListViewTestRule::with_config(ListViewConfig {
        bounds: Rect::new(0.0, 0.0, 320.0, 200.0),
        clamp_scroll: true,
        ..Default::default()
    });
    rule.set_content([10], label_rows)
        .expect("host accepts commands");

    rule.scroll_by(-40.0).expect("host accepts commands");
    assert_eq!(rule.list().content_offset(), 0.0);
    rule.scroll_by(10_000.0).expect("host accepts commands");
    assert_eq!(rule.list().content_offset(), 300.0);
    assert_eq!(rule.list().last_visible_row(), Some(RowIndex::new(0, 9)));
    rule.assert_consistent();
}
