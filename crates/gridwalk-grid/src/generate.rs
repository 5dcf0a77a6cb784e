//! Seeded random blocking.
//!
//! Each cell rolls a ten-sided die (`0..10`) in row-major order and is
//! blocked when the roll is below the clamped block percentage. The
//! percentage is therefore expressed in tenths: `3` blocks roughly 30%
//! of the grid. With a [`seeded_rng`] the layout is fully reproducible.

use crate::error::GridError;
use crate::grid::{validate_dimensions, Grid};
use gridwalk_core::Cell;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

/// Deterministic RNG used for grid generation and boundary selection.
pub type GridRng = ChaCha8Rng;

/// Faces on the per-cell blocking roll.
pub const BLOCK_ROLL_SIDES: i32 = 10;

/// Build the deterministic generator for `seed`.
pub fn seeded_rng(seed: u64) -> GridRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Clamp a block percentage into `[0, BLOCK_ROLL_SIDES]`.
pub fn clamp_block_percentage(block_percentage: i32) -> i32 {
    block_percentage.clamp(0, BLOCK_ROLL_SIDES)
}

impl Grid {
    /// Generate a `width x height` grid with random obstacles.
    ///
    /// Exactly one roll is drawn per cell, row-major, so two calls with
    /// identically seeded generators produce identical layouts.
    pub fn generate<R: Rng>(
        width: u32,
        height: u32,
        block_percentage: i32,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let count = validate_dimensions(width, height)?;
        let threshold = clamp_block_percentage(block_percentage);
        if threshold != block_percentage {
            warn!(
                requested = block_percentage,
                clamped = threshold,
                "block percentage outside 0..=10, clamping"
            );
        }

        let mut cells = Vec::with_capacity(count);
        for _ in 0..count {
            let roll = rng.random_range(0..BLOCK_ROLL_SIDES);
            cells.push(if roll < threshold {
                Cell::blocked()
            } else {
                Cell::new()
            });
        }

        let grid = Grid::from_cells(width, height, cells);
        debug!(
            width,
            height,
            blocked = grid.blocked_count(),
            "generated grid"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::CellState;
    use proptest::prelude::*;

    #[test]
    fn zero_percentage_blocks_nothing() {
        let mut rng = seeded_rng(7);
        let g = Grid::generate(20, 20, 0, &mut rng).unwrap();
        assert_eq!(g.blocked_count(), 0);
    }

    #[test]
    fn full_percentage_blocks_everything() {
        let mut rng = seeded_rng(7);
        let g = Grid::generate(8, 6, 10, &mut rng).unwrap();
        assert_eq!(g.blocked_count(), 48);
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        let g = Grid::generate(6, 6, -4, &mut seeded_rng(1)).unwrap();
        assert_eq!(g.blocked_count(), 0);
        let g = Grid::generate(6, 6, 99, &mut seeded_rng(1)).unwrap();
        assert_eq!(g.blocked_count(), 36);
    }

    #[test]
    fn generated_cells_carry_no_search_state() {
        let g = Grid::generate(10, 10, 3, &mut seeded_rng(3)).unwrap();
        for (_, cell) in g.iter() {
            assert!(matches!(cell.state, CellState::Unvisited | CellState::Blocked));
            assert!(cell.cost_from_start.is_none());
            assert!(cell.parent.is_none());
        }
    }

    #[test]
    fn empty_dimensions_rejected() {
        assert_eq!(
            Grid::generate(0, 3, 3, &mut seeded_rng(0)),
            Err(GridError::EmptyGrid)
        );
    }

    proptest! {
        #[test]
        fn same_seed_same_layout(seed in any::<u64>(), w in 1u32..16, h in 1u32..16, p in 0i32..=10) {
            let a = Grid::generate(w, h, p, &mut seeded_rng(seed)).unwrap();
            let b = Grid::generate(w, h, p, &mut seeded_rng(seed)).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
