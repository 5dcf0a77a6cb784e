//! Grids drawn as text.
//!
//! Each string is one row, top to bottom. `.` is open, `#` is blocked,
//! and in [`fixture_from_ascii`] `S` and `G` mark an open start and goal.
//!
//! ```
//! use gridwalk_test_utils::grid_from_ascii;
//!
//! let grid = grid_from_ascii(&[
//!     "..#",
//!     ".##",
//!     "...",
//! ]);
//! assert_eq!((grid.width(), grid.height()), (3, 3));
//! assert_eq!(grid.blocked_count(), 3);
//! ```

use gridwalk_core::Coord;
use gridwalk_grid::Grid;

/// A parsed fixture with optional endpoint markers.
#[derive(Clone, Debug)]
pub struct AsciiFixture {
    pub grid: Grid,
    pub start: Option<Coord>,
    pub goal: Option<Coord>,
}

/// Parse rows of `.`/`#` (and `S`/`G`) into a grid plus endpoints.
///
/// # Panics
///
/// On empty input, ragged rows, unknown characters, or repeated markers.
pub fn fixture_from_ascii(rows: &[&str]) -> AsciiFixture {
    assert!(!rows.is_empty(), "fixture needs at least one row");
    let width = rows[0].chars().count();
    let mut blocked = Vec::new();
    let mut start = None;
    let mut goal = None;

    for (r, line) in rows.iter().enumerate() {
        assert_eq!(
            line.chars().count(),
            width,
            "row {r} has a different width than row 0"
        );
        for (c, ch) in line.chars().enumerate() {
            let coord = Coord::new(r as i32, c as i32);
            match ch {
                '.' => {}
                '#' => blocked.push(coord),
                'S' => {
                    assert!(start.replace(coord).is_none(), "more than one S");
                }
                'G' => {
                    assert!(goal.replace(coord).is_none(), "more than one G");
                }
                other => panic!("unknown fixture character {other:?} at {coord}"),
            }
        }
    }

    let grid = Grid::with_blocked(width as u32, rows.len() as u32, &blocked)
        .unwrap_or_else(|e| panic!("invalid fixture: {e}"));
    AsciiFixture { grid, start, goal }
}

/// Parse rows of `.`/`#` into a grid, ignoring any endpoint markers.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    fixture_from_ascii(rows).grid
}
