//! Geometric primitives: Point, Size, Rect, EdgeInsets

use crate::Interval;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Axis-aligned rectangle in content coordinates.
///
/// For a list viewport, `origin.y` is the scroll offset and `size` is the
/// visible area of the host container.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }

    /// Shrinks the rectangle by the given insets. Sizes never go negative.
    pub fn inset(&self, insets: EdgeInsets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: (self.width - insets.horizontal_sum()).max(0.0),
            height: (self.height - insets.vertical_sum()).max(0.0),
        }
    }

    /// Returns true when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// The vertical span covered by this rectangle.
    ///
    /// A negative height collapses to an empty span at `y`.
    pub fn vertical(&self) -> Interval {
        Interval::clamped(self.y, self.height)
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_from_every_edge() {
        let rect = Rect::new(0.0, 0.0, 320.0, 480.0).inset(EdgeInsets::uniform(16.0));
        assert_eq!(rect, Rect::new(16.0, 16.0, 288.0, 448.0));
    }

    #[test]
    fn inset_never_produces_negative_size() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0).inset(EdgeInsets::symmetric(8.0, 20.0));
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn vertical_span_follows_origin_and_height() {
        let span = Rect::new(5.0, 40.0, 100.0, 50.0).vertical();
        assert_eq!(span.start(), 40.0);
        assert_eq!(span.end(), 90.0);
    }

    #[test]
    fn vertical_span_of_negative_height_is_empty() {
        let span = Rect::new(0.0, 12.0, 100.0, -5.0).vertical();
        assert_eq!(span.start(), 12.0);
        assert_eq!(span.length(), 0.0);
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(!rect.contains(10.1, 5.0));
    }

    #[test]
    fn origin_size_round_trip_through_rect() {
        let rect = Rect::from_origin_size(Point::ZERO, Size::new(100.0, 40.0));
        assert_eq!(rect, Rect::from_size(Size::new(100.0, 40.0)));
        assert_eq!(rect.origin(), Point::ZERO);
        assert_eq!(rect.translate(0.0, 25.0).max_y(), 65.0);
        assert_eq!(Rect::ZERO.size(), Size::ZERO);
    }
}
