//! Assertion helpers shared by list tests.

use listview_core::{ListView, Rect, RowIndex};

use crate::host::TestHost;

/// Assert that `index` is displayed and that its frame, shifted into
/// viewport coordinates, lies within `tolerance` of `expected` on every edge.
pub fn assert_row_in_viewport<W>(
    list: &ListView<W>,
    index: RowIndex,
    expected: Rect,
    tolerance: f32,
) {
    let id = list
        .widget_for_row(index)
        .unwrap_or_else(|| panic!("row {index} is not displayed"));
    let frame = list
        .frame_of(id)
        .unwrap_or_else(|| panic!("row {index} (widget {id}) was never placed"));
    let actual = frame.translate(0.0, -list.content_offset());

    let edges = [
        ("x", actual.x, expected.x),
        ("top", actual.y, expected.y),
        ("width", actual.width, expected.width),
        ("height", actual.height, expected.height),
    ];
    for (edge, actual, expected) in edges {
        assert!(
            (actual - expected).abs() <= tolerance,
            "row {index} sits at {edge} = {actual} in the viewport, wanted {expected} within {tolerance}"
        );
    }
}

/// Assert the displayed rows, in index order.
pub fn assert_displayed_rows<W>(list: &ListView<W>, expected: &[(usize, usize)]) {
    let actual: Vec<RowIndex> = list.displayed_rows().map(|(index, _)| index).collect();
    let expected: Vec<RowIndex> = expected.iter().copied().map(RowIndex::from).collect();
    assert_eq!(actual, expected, "displayed rows");
}

/// Assert that the host shows exactly the list's displayed widgets at the
/// frames the list last wrote.
pub fn assert_host_matches_list<W>(host: &TestHost, list: &ListView<W>) {
    let mut expected: Vec<_> = list
        .displayed_rows()
        .map(|(index, id)| {
            let frame = list
                .frame_of(id)
                .unwrap_or_else(|| panic!("displayed row {index} has no frame"));
            (id, frame)
        })
        .collect();
    expected.sort_by(|a, b| a.1.y.total_cmp(&b.1.y));
    assert_eq!(
        host.visible_nodes(),
        expected,
        "host tree differs from the list:\n{}",
        host.dump_tree()
    );
    assert_eq!(host.node_count(), list.widget_count(), "host node count");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::label_rows;
    use crate::rule::ListViewTestRule;

    fn scrolled_rule(offset: f32) -> ListViewTestRule {
        let mut rule = ListViewTestRule::new(320.0, 100.0);
        rule.set_content([10], label_rows)
            .expect("host accepts commands");
        rule.scroll_to(offset).expect("host accepts commands");
        rule
    }

    #[test]
    fn row_in_viewport_accounts_for_scroll_offset() {
        let rule = scrolled_rule(60.0);
        assert_row_in_viewport(
            rule.list(),
            RowIndex::new(0, 2),
            Rect::new(0.0, 40.0, 320.0, 50.0),
            0.0,
        );
    }

    #[test]
    #[should_panic(expected = "row (0, 2) sits at top = 40")]
    fn row_in_viewport_names_the_misplaced_edge() {
        let rule = scrolled_rule(60.0);
        assert_row_in_viewport(
            rule.list(),
            RowIndex::new(0, 2),
            Rect::new(0.0, 100.0, 320.0, 50.0),
            0.5,
        );
    }

    #[test]
    #[should_panic(expected = "is not displayed")]
    fn row_in_viewport_rejects_offscreen_rows() {
        let rule = scrolled_rule(0.0);
        assert_row_in_viewport(rule.list(), RowIndex::new(0, 9), Rect::ZERO, 1.0);
    }
}
