//! Start and goal selection on the grid's outer ring.

use crate::error::GridError;
use crate::grid::Grid;
use gridwalk_core::Coord;
use rand::Rng;

impl Grid {
    /// Boundary cells eligible for selection, in row-major order.
    ///
    /// With `exclude = Some(s)` every cell sharing `s`'s row or column is
    /// dropped, not just `s` itself.
    pub fn eligible_boundary_cells(&self, exclude: Option<Coord>) -> Vec<Coord> {
        self.coords()
            .filter(|&c| self.is_boundary(c))
            .filter(|&c| match exclude {
                Some(ex) => c.row != ex.row && c.col != ex.col,
                None => true,
            })
            .collect()
    }

    /// Pick a boundary cell uniformly at random.
    ///
    /// Pass `None` to choose a start, and `Some(start)` to choose a goal
    /// that differs from the start in both row and column. Blocked cells
    /// are eligible; callers that need an open endpoint clear it
    /// afterwards.
    ///
    /// Returns `Err(GridError::NoEligibleCell)` when nothing qualifies,
    /// which only happens on degenerate geometries (`1 x N`, `N x 1`).
    pub fn pick_boundary_cell<R: Rng>(
        &self,
        exclude: Option<Coord>,
        rng: &mut R,
    ) -> Result<Coord, GridError> {
        let eligible = self.eligible_boundary_cells(exclude);
        if eligible.is_empty() {
            return Err(GridError::NoEligibleCell { exclude });
        }
        let pick = rng.random_range(0..eligible.len());
        Ok(eligible[pick])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::seeded_rng;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Coord {
        Coord::new(r, col)
    }

    #[test]
    fn boundary_ring_of_5x5_has_16_cells() {
        let g = Grid::open(5, 5).unwrap();
        assert_eq!(g.eligible_boundary_cells(None).len(), 16);
    }

    #[test]
    fn exclusion_drops_whole_row_and_column() {
        let g = Grid::open(5, 5).unwrap();
        let eligible = g.eligible_boundary_cells(Some(c(0, 0)));
        // Bottom row and right column minus the shared corner, minus
        // anything in row 0 or column 0.
        assert_eq!(
            eligible,
            vec![c(1, 4), c(2, 4), c(3, 4), c(4, 1), c(4, 2), c(4, 3), c(4, 4)]
        );
    }

    #[test]
    fn two_by_two_goal_is_opposite_corner() {
        let g = Grid::open(2, 2).unwrap();
        let goal = g.pick_boundary_cell(Some(c(0, 1)), &mut seeded_rng(9)).unwrap();
        assert_eq!(goal, c(1, 0));
    }

    #[test]
    fn single_row_has_no_goal() {
        let g = Grid::open(6, 1).unwrap();
        let mut rng = seeded_rng(0);
        let start = g.pick_boundary_cell(None, &mut rng).unwrap();
        assert_eq!(
            g.pick_boundary_cell(Some(start), &mut rng),
            Err(GridError::NoEligibleCell {
                exclude: Some(start)
            })
        );
    }

    #[test]
    fn single_cell_has_no_goal() {
        let g = Grid::open(1, 1).unwrap();
        let mut rng = seeded_rng(0);
        assert_eq!(g.pick_boundary_cell(None, &mut rng), Ok(c(0, 0)));
        assert!(g.pick_boundary_cell(Some(c(0, 0)), &mut rng).is_err());
    }

    #[test]
    fn blocked_cells_remain_eligible() {
        let g = Grid::with_blocked(3, 3, &[c(0, 0)]).unwrap();
        assert!(g.eligible_boundary_cells(None).contains(&c(0, 0)));
    }

    proptest! {
        #[test]
        fn five_by_five_selection(seed in any::<u64>()) {
            let g = Grid::open(5, 5).unwrap();
            let mut rng = seeded_rng(seed);
            let start = g.pick_boundary_cell(None, &mut rng).unwrap();
            prop_assert!(start.row == 0 || start.row == 4 || start.col == 0 || start.col == 4);
            let goal = g.pick_boundary_cell(Some(start), &mut rng).unwrap();
            prop_assert!(g.is_boundary(goal));
            prop_assert_ne!(goal.row, start.row);
            prop_assert_ne!(goal.col, start.col);
        }
    }
}
