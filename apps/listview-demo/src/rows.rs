use std::fmt;

use listview_core::{RowDequeue, RowIndex, RowKind, WidgetId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowStyle {
    #[default]
    Label,
    Header,
}

/// A row widget: its style plus the text it is currently bound to.
#[derive(Clone, Debug, Default)]
pub struct DemoRow {
    style: RowStyle,
    text: String,
}

impl DemoRow {
    fn label() -> Self {
        Self::default()
    }

    fn header() -> Self {
        Self {
            style: RowStyle::Header,
            text: String::new(),
        }
    }
}

impl fmt::Display for DemoRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            RowStyle::Header => write!(f, "== {} ==", self.text),
            RowStyle::Label => write!(f, "   {}", self.text),
        }
    }
}

pub const LABEL: RowKind<DemoRow> = RowKind::new("label", DemoRow::label);
pub const HEADER: RowKind<DemoRow> = RowKind::new("header", DemoRow::header);

/// Row factory: a header on top of each section, labels below.
pub fn bind_row(index: RowIndex, rows: &mut RowDequeue<'_, DemoRow>) -> WidgetId {
    if index.row == 0 {
        rows.dequeue_with(&HEADER, index, |row| {
            row.text = format!("Section {}", index.section);
        })
    } else {
        rows.dequeue_with(&LABEL, index, |row| {
            row.text = format!("Section: {}, Row: {}", index.section, index.row);
        })
    }
}
