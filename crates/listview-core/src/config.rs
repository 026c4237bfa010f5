//! List configuration.

use crate::geometry_table::RowHeight;
use listview_geometry::{GeometryError, Rect};

/// Row height used when the configuration does not override it.
pub const DEFAULT_ROW_HEIGHT: f32 = 50.0;

/// Configuration for a [`ListView`](crate::ListView).
#[derive(Clone, Debug, PartialEq)]
pub struct ListViewConfig {
    /// Fixed height of every row.
    pub row_height: f32,

    /// Initial viewport bounds in content coordinates.
    pub bounds: Rect,

    /// Clamp programmatic scrolls (`set_content_offset`, `scroll_by`) into
    /// `[0, max_content_offset]`. Hosts that implement overscroll bounce
    /// leave this off and pass raw offsets through.
    pub clamp_scroll: bool,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            bounds: Rect::ZERO,
            clamp_scroll: false,
        }
    }
}

impl ListViewConfig {
    /// Checks the row height and returns it in validated form.
    pub fn validate(&self) -> Result<RowHeight, GeometryError> {
        RowHeight::new(self.row_height)
    }
}
