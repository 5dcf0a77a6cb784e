//! Cost model: Euclidean heuristic plus hop count from the start.
//!
//! Every edge costs [`STEP_COST`] regardless of geometry. On a
//! 4-connected uniform grid that is the true path length; with diagonal
//! or weighted edges it would no longer be, so scores are a ranking
//! device here, not an optimality guarantee.

use gridwalk_core::Coord;

/// Cost of one hop between adjacent cells.
pub const STEP_COST: u32 = 1;

/// Straight-line distance from `coord` to `goal`.
pub fn heuristic(coord: Coord, goal: Coord) -> f64 {
    (coord.distance_squared(goal) as f64).sqrt()
}

/// Ranking score of a frontier cell: heuristic plus accumulated hops.
pub fn score(coord: Coord, goal: Coord, cost_from_start: u32) -> f64 {
    heuristic(coord, goal) + f64::from(cost_from_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_is_euclidean() {
        let goal = Coord::new(0, 0);
        assert_eq!(heuristic(Coord::new(3, 4), goal), 5.0);
        assert_eq!(heuristic(goal, goal), 0.0);
        assert!((heuristic(Coord::new(1, 1), goal) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn score_adds_hops() {
        let goal = Coord::new(2, 2);
        assert_eq!(score(Coord::new(2, 0), goal, 2), 4.0);
        assert_eq!(score(goal, goal, 4), 4.0);
    }

    #[test]
    fn heuristic_symmetric() {
        let a = Coord::new(7, -2);
        let b = Coord::new(-1, 5);
        assert_eq!(heuristic(a, b), heuristic(b, a));
    }
}
