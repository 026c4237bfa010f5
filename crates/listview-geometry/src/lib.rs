//! Pure geometry for listview
//!
//! Points, sizes, rectangles and the vertical [`Interval`] used by the
//! list engine for row placement and viewport overlap tests.

mod error;
mod geometry;
mod interval;

pub use error::*;
pub use geometry::*;
pub use interval::*;

pub mod prelude {
    pub use crate::error::GeometryError;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::interval::Interval;
}
