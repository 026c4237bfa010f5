//! End-to-end recycling behavior observed through a headless host tree.

use listview_core::RowIndex;
use listview_testing::prelude::*;
use listview_testing::{assert_displayed_rows, label_text};

#[test]
fn test_labels_show_section_and_row() {
    let mut rule = ListViewTestRule::new(320.0, 90.0);
    rule.set_content([3], label_rows).expect("host accepts commands");

    assert_eq!(
        rule.visible_texts(),
        vec!["Section: 0, Row: 0", "Section: 0, Row: 1"]
    );
    assert_displayed_rows(rule.list(), &[(0, 0), (0, 1)]);
    rule.assert_consistent();
}

#[test]
fn test_scroll_sweep_keeps_host_in_sync() {
    let mut rule = ListViewTestRule::new(320.0, 480.0);
    rule.set_content([3, 12, 40], label_rows)
        .expect("host accepts commands");
    let max = rule.list().max_content_offset();
    assert_eq!(max, 55.0 * 50.0 - 480.0);

    let mut offset = 0.0;
    while offset <= max {
        rule.scroll_to(offset).expect("host accepts commands");
        rule.assert_consistent();
        let expected: Vec<String> = rule
            .list()
            .visible_rows()
            .into_iter()
            .map(label_text)
            .collect();
        assert_eq!(rule.visible_texts(), expected, "offset {offset}");
        offset += 37.0;
    }

    // 480 / 50 rows plus one partially visible row at each edge.
    assert!(rule.list().widget_count() <= 11);
    assert_eq!(rule.host().attach_count(), rule.list().widget_count());
    assert!(rule.list().stats().reuse_count > 0);
}

#[test]
fn test_reload_rebinds_pooled_widgets() {
    let mut rule = ListViewTestRule::new(320.0, 200.0);
    rule.set_content([50], label_rows)
        .expect("host accepts commands");
    rule.scroll_to(600.0).expect("host accepts commands");
    let labels_before = rule.list().pool().created("label");

    rule.set_content([4, 4], sectioned_rows)
        .expect("host accepts commands");
    rule.assert_consistent();

    assert_eq!(rule.list().content_offset(), 0.0);
    assert_eq!(rule.list().pool().created("label"), labels_before);
    assert_eq!(rule.list().pool().created("header"), 2);
    assert_eq!(
        rule.visible_texts(),
        vec![
            "Section 0",
            "Section: 0, Row: 1",
            "Section: 0, Row: 2",
            "Section: 0, Row: 3",
            "Section 1",
        ]
    );
    let rebound = rule
        .list()
        .displayed_rows()
        .filter_map(|(_, id)| rule.list().widget(id))
        .filter(|row| row.binds > 1)
        .count();
    assert!(rebound > 0, "no label widget was rebound after reload");
}

#[test]
fn test_headers_and_labels_never_swap() {
    let mut rule = ListViewTestRule::new(320.0, 300.0);
    rule.set_content([1, 5, 2, 8, 3, 1, 9], sectioned_rows)
        .expect("host accepts commands");

    let mut offset = 0.0;
    while offset <= rule.list().max_content_offset() {
        rule.scroll_to(offset).expect("host accepts commands");
        for (index, id) in rule.list().displayed_rows() {
            let expected = if index.row == 0 { "header" } else { "label" };
            assert_eq!(rule.list().kind_of(id), Some(expected), "row {index}");
            assert_eq!(rule.host().node(id).map(|node| node.kind), Some(expected));
        }
        offset += 23.0;
    }
    rule.assert_consistent();
}

#[test]
fn test_factory_runs_once_per_row_entering_view() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = calls.clone();
    let mut rule = ListViewTestRule::new(320.0, 90.0);
    rule.set_content([4], move |index, rows| {
        seen.borrow_mut().push(index);
        label_rows(index, rows)
    })
    .expect("host accepts commands");
    rule.scroll_by(100.0).expect("host accepts commands");

    assert_eq!(
        *calls.borrow(),
        vec![
            RowIndex::new(0, 0),
            RowIndex::new(0, 1),
            RowIndex::new(0, 2),
            RowIndex::new(0, 3),
        ]
    );
}
