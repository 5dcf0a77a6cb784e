//! Per-cell search state.

use crate::coord::Coord;
use std::fmt;

/// Observable state of a single grid cell.
///
/// A presentation layer maps these to colours; the core only tracks
/// transitions between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Not yet discovered by the search.
    #[default]
    Unvisited,
    /// Discovered and waiting in the frontier (open set).
    Frontier,
    /// Left in the frontier when the search succeeded; never expanded.
    Rejected,
    /// Expanded (closed set).
    Visited,
    /// Obstacle. Never enters the frontier or the visited set.
    Blocked,
    /// Part of the reconstructed path.
    OnPath,
}

impl CellState {
    /// Whether the search may walk onto a cell in this state.
    pub fn is_passable(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unvisited => "unvisited",
            Self::Frontier => "frontier",
            Self::Rejected => "rejected",
            Self::Visited => "visited",
            Self::Blocked => "blocked",
            Self::OnPath => "on-path",
        };
        f.write_str(name)
    }
}

/// Plain data record for one grid cell.
///
/// `parent` is a coordinate back-reference into the owning grid, never
/// an owning pointer. The chain of parents always terminates at the
/// start cell, which has none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Current observable state.
    pub state: CellState,
    /// Hop count from the start along the discovered path. `None` until
    /// the cell is discovered (or seeded as the start).
    pub cost_from_start: Option<u32>,
    /// The cell that discovered this one.
    pub parent: Option<Coord>,
}

impl Cell {
    /// A fresh, unvisited cell with no search bookkeeping.
    pub const fn new() -> Self {
        Self {
            state: CellState::Unvisited,
            cost_from_start: None,
            parent: None,
        }
    }

    /// A fresh blocked cell.
    pub const fn blocked() -> Self {
        Self {
            state: CellState::Blocked,
            cost_from_start: None,
            parent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_unvisited_and_unset() {
        let c = Cell::default();
        assert_eq!(c, Cell::new());
        assert_eq!(c.state, CellState::Unvisited);
        assert!(c.cost_from_start.is_none());
        assert!(c.parent.is_none());
    }

    #[test]
    fn only_blocked_is_impassable() {
        assert!(!CellState::Blocked.is_passable());
        for s in [
            CellState::Unvisited,
            CellState::Frontier,
            CellState::Rejected,
            CellState::Visited,
            CellState::OnPath,
        ] {
            assert!(s.is_passable(), "{s} should be passable");
        }
    }
}
