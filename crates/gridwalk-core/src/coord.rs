//! Grid coordinates and the [`Neighbours`] buffer type.

use smallvec::SmallVec;
use std::fmt;

/// A cell address on a 2D grid, `row` first.
///
/// Coordinates are signed so that neighbour offsets can step off the
/// grid and be rejected by a bounds check instead of wrapping. A coordinate
/// is only meaningful relative to a particular grid; nothing here knows
/// the grid's dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, `0..height`.
    pub row: i32,
    /// Column index, `0..width`.
    pub col: i32,
}

impl Coord {
    /// Create a coordinate from `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate displaced by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Whether `other` is one of the four axis-aligned neighbours of `self`.
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr + dc == 1
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Coord) -> i64 {
        let dr = i64::from(self.row - other.row);
        let dc = i64::from(self.col - other.col);
        dr * dr + dc * dc
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Up to four neighbour coordinates, stored inline.
///
/// A 4-connected grid never yields more than four neighbours, so the
/// buffer never spills to the heap.
pub type Neighbours = SmallVec<[Coord; 4]>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn adjacency_is_axis_aligned_only() {
        let c = Coord::new(2, 2);
        assert!(c.is_adjacent(Coord::new(2, 3)));
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(!c.is_adjacent(Coord::new(3, 3))); // diagonal
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(2, 4)));
    }

    #[test]
    fn offset_can_leave_the_grid() {
        assert_eq!(Coord::new(0, 0).offset(-1, 0), Coord::new(-1, 0));
    }

    #[test]
    fn display_is_row_then_col() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
    }

    proptest! {
        #[test]
        fn adjacency_symmetric(r in -50i32..50, c in -50i32..50, dr in -2i32..=2, dc in -2i32..=2) {
            let a = Coord::new(r, c);
            let b = a.offset(dr, dc);
            prop_assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
            prop_assert_eq!(a.distance_squared(b), b.distance_squared(a));
        }
    }
}
