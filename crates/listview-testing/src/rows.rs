//! Row widgets and factories for tests.

use listview_core::{RowDequeue, RowIndex, RowKind, WidgetId};

/// Minimal row widget: a kind tag plus the text it currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestRow {
    pub text: String,
    /// Number of times a factory configured this widget.
    pub binds: usize,
}

impl TestRow {
    fn bind(&mut self, text: String) {
        self.text = text;
        self.binds += 1;
    }
}

pub const LABEL: RowKind<TestRow> = RowKind::new("label", TestRow::default);
pub const HEADER: RowKind<TestRow> = RowKind::new("header", TestRow::default);

/// Label text for `index`.
pub fn label_text(index: RowIndex) -> String {
    format!("Section: {}, Row: {}", index.section, index.row)
}

/// Factory showing every row as a label.
pub fn label_rows(index: RowIndex, rows: &mut RowDequeue<'_, TestRow>) -> WidgetId {
    rows.dequeue_with(&LABEL, index, |row| row.bind(label_text(index)))
}

/// Factory showing the first row of each section as a header.
pub fn sectioned_rows(index: RowIndex, rows: &mut RowDequeue<'_, TestRow>) -> WidgetId {
    if index.row == 0 {
        rows.dequeue_with(&HEADER, index, |row| {
            row.bind(format!("Section {}", index.section))
        })
    } else {
        label_rows(index, rows)
    }
}
