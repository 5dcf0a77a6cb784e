//! Error types for grid construction and queries.

use gridwalk_core::Coord;
use std::fmt;

/// Errors arising from grid construction, lookups, or boundary selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// A dimension does not fit in a signed 32-bit coordinate.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// `width * height` does not fit in `usize`.
    CellCountOverflow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A coordinate is outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A search endpoint sits on a blocked cell.
    BlockedEndpoint {
        /// The blocked start or goal.
        coord: Coord,
    },
    /// No boundary cell satisfies the selection constraints. Only
    /// possible on degenerate geometries such as `1 x N` grids.
    NoEligibleCell {
        /// The cell whose row and column were excluded, if any.
        exclude: Option<Coord>,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "cell count {width} x {height} overflows usize")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::BlockedEndpoint { coord } => {
                write!(f, "search endpoint {coord} is blocked")
            }
            Self::NoEligibleCell { exclude: None } => {
                write!(f, "no eligible boundary cell")
            }
            Self::NoEligibleCell {
                exclude: Some(coord),
            } => {
                write!(
                    f,
                    "no eligible boundary cell outside row {} and column {}",
                    coord.row, coord.col
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
