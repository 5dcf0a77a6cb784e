//! Observation hooks for a presentation layer.
//!
//! The engine mutates cell state and then tells an observer about it.
//! It never touches colours, materials, or text; a host implements
//! [`SearchObserver`] and renders however it likes.

use crate::cell::CellState;
use crate::coord::Coord;

/// Receives cell-level notifications as a search advances.
///
/// Only `on_cell_state_changed` is required. The scoring hooks default
/// to no-ops for hosts that only draw colours.
pub trait SearchObserver {
    /// A cell moved to `state`. Fired only on actual transitions.
    fn on_cell_state_changed(&mut self, coord: Coord, state: CellState);

    /// A frontier cell was scored while choosing the next cell to expand.
    fn on_cell_scored(&mut self, _coord: Coord, _score: f64) {}

    /// A cell was removed from the frontier to become the current cell.
    fn on_cell_selected(&mut self, _coord: Coord, _score: f64) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_cell_state_changed(&mut self, _coord: Coord, _state: CellState) {}
}

/// One observer notification as a value.
///
/// Useful for recording, replaying, or shipping notifications across a
/// thread boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellEvent {
    /// See [`SearchObserver::on_cell_state_changed`].
    StateChanged {
        /// The cell that changed.
        coord: Coord,
        /// Its new state.
        state: CellState,
    },
    /// See [`SearchObserver::on_cell_scored`].
    Scored {
        /// The scored cell.
        coord: Coord,
        /// Heuristic plus cost from start.
        score: f64,
    },
    /// See [`SearchObserver::on_cell_selected`].
    Selected {
        /// The new current cell.
        coord: Coord,
        /// The score it won with.
        score: f64,
    },
}

impl CellEvent {
    /// The cell this event refers to.
    pub fn coord(&self) -> Coord {
        match *self {
            Self::StateChanged { coord, .. }
            | Self::Scored { coord, .. }
            | Self::Selected { coord, .. } => coord,
        }
    }
}

impl SearchObserver for Vec<CellEvent> {
    fn on_cell_state_changed(&mut self, coord: Coord, state: CellState) {
        self.push(CellEvent::StateChanged { coord, state });
    }

    fn on_cell_scored(&mut self, coord: Coord, score: f64) {
        self.push(CellEvent::Scored { coord, score });
    }

    fn on_cell_selected(&mut self, coord: Coord, score: f64) {
        self.push(CellEvent::Selected { coord, score });
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_cell_state_changed(&mut self, coord: Coord, state: CellState) {
        (**self).on_cell_state_changed(coord, state);
    }

    fn on_cell_scored(&mut self, coord: Coord, score: f64) {
        (**self).on_cell_scored(coord, score);
    }

    fn on_cell_selected(&mut self, coord: Coord, score: f64) {
        (**self).on_cell_selected(coord, score);
    }
}
