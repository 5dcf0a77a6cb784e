//! The closed set: cells that have been expanded.

use gridwalk_core::Coord;
use indexmap::IndexSet;

/// Expanded cells, remembered in expansion order.
#[derive(Clone, Debug, Default)]
pub struct Visited {
    cells: IndexSet<Coord>,
}

impl Visited {
    /// An empty closed set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `coord` as expanded. Returns `false` if it already was.
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    /// Whether `coord` has been expanded.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of expanded cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing has been expanded yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Expanded cells, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}
