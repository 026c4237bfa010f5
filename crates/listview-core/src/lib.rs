#![doc = r"Virtualized, sectioned list engine with per-kind widget recycling."]
//!
//! Only rows intersecting the viewport own a widget. Widgets of rows that
//! scroll out are hidden and pooled by [`RowKind`], then handed back to the
//! row factory when a row of the same kind scrolls in.
//!
//! ```rust,ignore
//! use listview_core::{ListView, ListViewConfig, Rect, RowKind};
//!
//! const LABEL: RowKind<String> = RowKind::new("label", String::new);
//!
//! let mut list = ListView::new(ListViewConfig::default())?;
//! list.set_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
//! list.reload([3], |index, rows| {
//!     rows.dequeue_with(&LABEL, index, |label| {
//!         *label = format!("Section: {}, Row: {}", index.section, index.row);
//!     })
//! });
//! list.layout_if_needed();
//! for command in list.drain_commands() {
//!     host.apply(command);
//! }
//! ```

mod collections;
pub mod config;
pub mod geometry_table;
pub mod list_view;
pub mod placement;
pub mod pool;
pub mod row_index;

pub use config::{ListViewConfig, DEFAULT_ROW_HEIGHT};
pub use geometry_table::{GeometryTable, RowHeight, SectionDimensions};
pub use list_view::{ListView, ListViewStats, RowDequeue, RowFactory, ScrollAlignment};
pub use placement::{PlacementCommand, PlacementLog};
pub use pool::{Acquired, RecyclingPool, RowKind, WidgetId};
pub use row_index::RowIndex;

pub use listview_geometry::{EdgeInsets, GeometryError, Interval, Point, Rect, Size};

pub mod prelude {
    pub use crate::config::ListViewConfig;
    pub use crate::list_view::{ListView, RowDequeue, ScrollAlignment};
    pub use crate::placement::PlacementCommand;
    pub use crate::pool::{RowKind, WidgetId};
    pub use crate::row_index::RowIndex;
    pub use listview_geometry::prelude::*;
}
