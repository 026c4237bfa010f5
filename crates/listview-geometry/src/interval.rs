//! One-dimensional vertical spans used for row layout and visibility tests.

use crate::GeometryError;

/// A vertical span with a start and a non-negative length.
///
/// Overlap is closed on both ends: two spans that merely touch are considered
/// overlapping, so a row whose edge sits exactly on the viewport edge counts
/// as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    start: f32,
    length: f32,
}

impl Interval {
    /// Creates a span, rejecting negative or non-finite lengths and non-finite starts.
    pub fn new(start: f32, length: f32) -> Result<Self, GeometryError> {
        if !start.is_finite() {
            return Err(GeometryError::NonFiniteStart { start });
        }
        if !length.is_finite() {
            return Err(GeometryError::NonFiniteLength { length });
        }
        if length < 0.0 {
            return Err(GeometryError::NegativeLength { length });
        }
        Ok(Self { start, length })
    }

    /// Builds a span whose length is clamped to zero when negative.
    pub(crate) fn clamped(start: f32, length: f32) -> Self {
        Self {
            start,
            length: length.max(0.0),
        }
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.length
    }

    /// Returns true when `y` lies within `[start, end)`.
    pub fn contains(&self, y: f32) -> bool {
        y >= self.start && y < self.end()
    }

    /// Boundary-inclusive overlap test. Symmetric in its arguments.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.end() >= other.start && self.start <= other.end()
    }
}
