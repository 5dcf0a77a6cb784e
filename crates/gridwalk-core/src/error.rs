//! Error types raised while stepping a search.
//!
//! A search that ends without a path is a normal outcome and is reported
//! through the step result, not through these errors. Everything here is
//! either caller misuse or a broken internal invariant.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors from `step()` and path reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A cell was requested from an empty frontier. Reached when `step()`
    /// is called again after the search already failed.
    EmptyFrontier,
    /// Walking parent links from the goal hit a non-start cell with no
    /// parent, or looped. Indicates a defect in step bookkeeping.
    BrokenParentChain {
        /// The cell whose parent link was missing.
        at: Coord,
    },
    /// `step()` was called before any grid was generated.
    NotStarted,
    /// `step()` was called after the search already reached the goal.
    AlreadyFinished,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrontier => write!(f, "frontier is empty"),
            Self::BrokenParentChain { at } => {
                write!(f, "parent chain broken at cell {at}")
            }
            Self::NotStarted => write!(f, "search has not been reset"),
            Self::AlreadyFinished => write!(f, "search already reached the goal"),
        }
    }
}

impl Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_broken_cell() {
        let e = SearchError::BrokenParentChain {
            at: Coord::new(4, 1),
        };
        assert_eq!(e.to_string(), "parent chain broken at cell (4, 1)");
    }
}
