//! Row identifiers.

use std::fmt;

/// Identifies a logical row by section and row within that section.
///
/// Ordering is by section first, then by row, which is also the order rows
/// are laid out top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RowIndex {
    pub section: usize,
    pub row: usize,
}

impl RowIndex {
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.row)
    }
}

impl From<(usize, usize)> for RowIndex {
    fn from((section, row): (usize, usize)) -> Self {
        Self { section, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_section_then_row() {
        let mut indices = vec![
            RowIndex::new(1, 0),
            RowIndex::new(0, 2),
            RowIndex::new(0, 0),
            RowIndex::new(1, 3),
            RowIndex::new(0, 10),
        ];
        indices.sort();
        assert_eq!(
            indices,
            vec![
                RowIndex::new(0, 0),
                RowIndex::new(0, 2),
                RowIndex::new(0, 10),
                RowIndex::new(1, 0),
                RowIndex::new(1, 3),
            ]
        );
    }

    #[test]
    fn later_section_sorts_after_any_row_of_earlier_section() {
        assert!(RowIndex::new(0, usize::MAX) < RowIndex::new(1, 0));
    }

    #[test]
    fn equality_requires_both_fields() {
        assert_eq!(RowIndex::new(2, 3), RowIndex::from((2, 3)));
        assert_ne!(RowIndex::new(2, 3), RowIndex::new(3, 2));
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(RowIndex::new(4, 7).to_string(), "(4, 7)");
    }
}
