//! Row geometry for a sectioned list.
//!
//! The table is rebuilt from scratch on every reload: rows are stacked top to
//! bottom in index order with a fixed height, so the table is sorted both by
//! [`RowIndex`] and by vertical position. Lookups and visibility queries use
//! binary search over that order.

use std::ops::Range;

use crate::row_index::RowIndex;
use listview_geometry::{GeometryError, Interval};

/// Validated fixed row height. Always finite and greater than zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowHeight(f32);

impl RowHeight {
    pub fn new(height: f32) -> Result<Self, GeometryError> {
        if height.is_finite() && height > 0.0 {
            Ok(Self(height))
        } else {
            Err(GeometryError::InvalidRowHeight { height })
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

/// Row counts, one entry per section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionDimensions(Vec<usize>);

impl SectionDimensions {
    pub fn new(row_counts: Vec<usize>) -> Self {
        Self(row_counts)
    }

    pub fn section_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of rows across all sections.
    pub fn row_count(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn rows_in(&self, section: usize) -> Option<usize> {
        self.0.get(section).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for SectionDimensions {
    fn from(row_counts: Vec<usize>) -> Self {
        Self(row_counts)
    }
}

impl From<&[usize]> for SectionDimensions {
    fn from(row_counts: &[usize]) -> Self {
        Self(row_counts.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for SectionDimensions {
    fn from(row_counts: [usize; N]) -> Self {
        Self(row_counts.to_vec())
    }
}

/// Maps every row to its vertical span.
#[derive(Clone, Debug)]
pub struct GeometryTable {
    row_height: RowHeight,
    /// Rows in index order. Also ordered by `start`.
    rows: Vec<(RowIndex, Interval)>,
    /// Offset of each section's first row within `rows`.
    section_starts: Vec<usize>,
    total_height: f32,
}

impl GeometryTable {
    /// An empty table: no sections, zero content height.
    pub fn empty(row_height: RowHeight) -> Self {
        Self {
            row_height,
            rows: Vec::new(),
            section_starts: Vec::new(),
            total_height: 0.0,
        }
    }

    /// Stacks every row of every section in index order.
    pub fn build(sections: &SectionDimensions, row_height: RowHeight) -> Self {
        let height = row_height.get();
        let mut rows = Vec::with_capacity(sections.row_count());
        let mut section_starts = Vec::with_capacity(sections.section_count());

        // Starts are derived from the row ordinal so rounding never accumulates.
        for (section, &count) in sections.as_slice().iter().enumerate() {
            section_starts.push(rows.len());
            for row in 0..count {
                let start = rows.len() as f32 * height;
                let interval = match Interval::new(start, height) {
                    Ok(interval) => interval,
                    Err(err) => panic!("row ({section}, {row}) produced invalid geometry: {err}"),
                };
                rows.push((RowIndex::new(section, row), interval));
            }
        }
        let total_height = rows.len() as f32 * height;

        Self {
            row_height,
            rows,
            section_starts,
            total_height,
        }
    }

    pub fn row_height(&self) -> RowHeight {
        self.row_height
    }

    /// Height of all rows stacked together.
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.section_starts.len()
    }

    /// Returns the span of `index`, if the row exists.
    pub fn get(&self, index: RowIndex) -> Option<Interval> {
        self.position_of(index).map(|position| self.rows[position].1)
    }

    pub fn contains(&self, index: RowIndex) -> bool {
        self.position_of(index).is_some()
    }

    /// All rows in index order.
    pub fn iter(&self) -> impl Iterator<Item = (RowIndex, Interval)> + '_ {
        self.rows.iter().copied()
    }

    /// Rows of a single section, in row order. Empty for unknown sections.
    pub fn rows_in_section(&self, section: usize) -> &[(RowIndex, Interval)] {
        match self.section_range(section) {
            Some(range) => &self.rows[range],
            None => &[],
        }
    }

    /// Rows whose span overlaps `span` (boundary inclusive), in index order.
    pub fn visible(&self, span: &Interval) -> &[(RowIndex, Interval)] {
        let first = self
            .rows
            .partition_point(|(_, interval)| interval.end() < span.start());
        let last = first
            + self.rows[first..].partition_point(|(_, interval)| interval.start() <= span.end());
        &self.rows[first..last]
    }

    /// Row whose span contains `y`, if any.
    pub fn row_at(&self, y: f32) -> Option<RowIndex> {
        let position = self.rows.partition_point(|(_, interval)| interval.end() <= y);
        self.rows
            .get(position)
            .filter(|(_, interval)| interval.contains(y))
            .map(|(index, _)| *index)
    }

    fn section_range(&self, section: usize) -> Option<Range<usize>> {
        let start = *self.section_starts.get(section)?;
        let end = self
            .section_starts
            .get(section + 1)
            .copied()
            .unwrap_or(self.rows.len());
        Some(start..end)
    }

    fn position_of(&self, index: RowIndex) -> Option<usize> {
        let range = self.section_range(index.section)?;
        let position = range.start.checked_add(index.row)?;
        (position < range.end).then_some(position)
    }
}
