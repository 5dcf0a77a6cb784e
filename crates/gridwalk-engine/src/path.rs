//! Backward path reconstruction along parent links.

use crate::search::transition;
use gridwalk_core::{CellState, Coord, SearchError, SearchObserver};
use gridwalk_grid::Grid;

/// Walk parent links from `goal` back to `start`, marking each cell
/// except the start as `OnPath`, and return the path start-to-goal.
///
/// The start keeps its state so hosts can still distinguish it. A
/// missing parent on a non-start cell, or a chain longer than the grid,
/// means the step bookkeeping is broken and yields
/// [`SearchError::BrokenParentChain`].
pub fn reconstruct_path<O>(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    observer: &mut O,
) -> Result<Vec<Coord>, SearchError>
where
    O: SearchObserver + ?Sized,
{
    let limit = grid.cell_count();
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        let parent = grid
            .cell(current)
            .and_then(|cell| cell.parent)
            .ok_or(SearchError::BrokenParentChain { at: current })?;
        if path.len() >= limit {
            // Longer than the grid: the links loop.
            return Err(SearchError::BrokenParentChain { at: current });
        }
        transition(grid, current, CellState::OnPath, observer);
        path.push(parent);
        current = parent;
    }

    path.reverse();
    Ok(path)
}
