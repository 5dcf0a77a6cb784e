//! The [`Grid`] arena: dimensions, cell storage, and neighbour queries.

use crate::error::GridError;
use gridwalk_core::{Cell, CellState, Coord, Neighbours};
use std::ops::{Index, IndexMut};

/// Neighbour offsets as `(dr, dc)`, in east, south, west, north order.
///
/// The order is observable: frontier ties are broken by insertion order,
/// and insertion follows this sequence.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A `width x height` grid that exclusively owns its cells.
///
/// Cells are stored row-major. Every in-range coordinate maps to exactly
/// one cell, and the dimensions never change after construction; a new
/// search gets a new grid.
///
/// # Examples
///
/// ```
/// use gridwalk_grid::Grid;
/// use gridwalk_core::Coord;
///
/// let grid = Grid::open(4, 3).unwrap();
/// assert_eq!(grid.cell_count(), 12);
///
/// // Corner cell: only east and south are on the grid.
/// let n = grid.neighbours(Coord::new(0, 0));
/// assert_eq!(n.as_slice(), &[Coord::new(0, 1), Coord::new(1, 0)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with every cell `Unvisited`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn open(width: u32, height: u32) -> Result<Self, GridError> {
        let count = validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::new(); count],
        })
    }

    /// Create a grid with the given cells blocked and the rest open.
    pub fn with_blocked(width: u32, height: u32, blocked: &[Coord]) -> Result<Self, GridError> {
        let mut grid = Self::open(width, height)?;
        for &coord in blocked {
            let idx = grid.checked_index(coord)?;
            grid.cells[idx] = Cell::blocked();
        }
        Ok(grid)
    }

    /// Build a grid from row-major cells. Used by the generator.
    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells currently `Blocked`.
    pub fn blocked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.state == CellState::Blocked)
            .count()
    }

    /// Whether `coord` lies inside the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as u32) < self.height
            && (coord.col as u32) < self.width
    }

    /// Whether `coord` lies on the outer ring (first/last row or column).
    pub fn is_boundary(&self, coord: Coord) -> bool {
        self.in_bounds(coord)
            && (coord.row == 0
                || coord.col == 0
                || coord.row as u32 == self.height - 1
                || coord.col as u32 == self.width - 1)
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some((coord.row as usize) * (self.width as usize) + coord.col as usize)
        } else {
            None
        }
    }

    fn checked_index(&self, coord: Coord) -> Result<usize, GridError> {
        self.index_of(coord)
            .ok_or_else(|| GridError::CoordOutOfBounds {
                coord,
                bounds: format!("[0, {}) x [0, {})", self.height, self.width),
            })
    }

    /// Look up a cell, or `None` if `coord` is off the grid.
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index_of(coord).map(|i| &self.cells[i])
    }

    /// State of the cell at `coord`.
    pub fn state(&self, coord: Coord) -> Result<CellState, GridError> {
        let idx = self.checked_index(coord)?;
        Ok(self.cells[idx].state)
    }

    /// Set the state at `coord`, returning the previous state.
    pub fn set_state(&mut self, coord: Coord, state: CellState) -> Result<CellState, GridError> {
        let idx = self.checked_index(coord)?;
        Ok(std::mem::replace(&mut self.cells[idx].state, state))
    }

    /// Up to four passable, not-yet-visited neighbours of `coord`.
    ///
    /// Candidates are produced in [`NEIGHBOUR_OFFSETS`] order and dropped
    /// if they are off the grid, `Blocked`, or `Visited`. Frontier cells
    /// are still returned; the caller decides whether to rediscover them.
    pub fn neighbours(&self, coord: Coord) -> Neighbours {
        let mut out = Neighbours::new();
        for (dr, dc) in NEIGHBOUR_OFFSETS {
            let n = coord.offset(dr, dc);
            if let Some(cell) = self.cell(n) {
                if !cell.state.is_passable() || cell.state == CellState::Visited {
                    continue;
                }
                out.push(n);
            }
        }
        out
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |r| (0..width).map(move |c| Coord::new(r, c)))
    }

    /// `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.coords().zip(self.cells.iter())
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if `coord` is off the grid.
    fn index(&self, coord: Coord) -> &Cell {
        match self.index_of(coord) {
            Some(i) => &self.cells[i],
            None => panic!(
                "coordinate {coord} out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl IndexMut<Coord> for Grid {
    /// # Panics
    ///
    /// Panics if `coord` is off the grid.
    fn index_mut(&mut self, coord: Coord) -> &mut Cell {
        let (w, h) = (self.width, self.height);
        match self.index_of(coord) {
            Some(i) => &mut self.cells[i],
            None => panic!("coordinate {coord} out of bounds for {w}x{h} grid"),
        }
    }
}

/// Validate grid dimensions and return `width * height`.
///
/// Shared by every grid constructor and by callers that want to reject a
/// configuration before generating anything.
pub fn validate_dimensions(width: u32, height: u32) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    if width > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "width",
            value: width,
            max: Grid::MAX_DIM,
        });
    }
    if height > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "height",
            value: height,
            max: Grid::MAX_DIM,
        });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(GridError::CellCountOverflow { width, height })
}
