//! Test utilities for Gridwalk development.
//!
//! Provides ASCII grid fixtures (see [`fixtures`]), a
//! [`RecordingObserver`] that keeps every cell event for later
//! inspection, and [`assert_valid_path`] for checking search output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{fixture_from_ascii, grid_from_ascii, AsciiFixture};

use gridwalk_core::{CellEvent, CellState, Coord, SearchObserver};
use gridwalk_grid::Grid;

/// Observer that records every event in arrival order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<CellEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events so far.
    pub fn events(&self) -> &[CellEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the observer empty.
    pub fn take(&mut self) -> Vec<CellEvent> {
        std::mem::take(&mut self.events)
    }

    /// Successive states reported for `coord`.
    pub fn states_of(&self, coord: Coord) -> Vec<CellState> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                CellEvent::StateChanged { coord: c, state } if c == coord => Some(state),
                _ => None,
            })
            .collect()
    }

    /// Coordinates that transitioned into `state`, in event order.
    pub fn transitions_to(&self, state: CellState) -> Vec<Coord> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                CellEvent::StateChanged { coord, state: s } if s == state => Some(coord),
                _ => None,
            })
            .collect()
    }

    /// Cells picked as the next current cell, in order.
    pub fn selections(&self) -> Vec<Coord> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                CellEvent::Selected { coord, .. } => Some(coord),
                _ => None,
            })
            .collect()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_cell_state_changed(&mut self, coord: Coord, state: CellState) {
        self.events.push(CellEvent::StateChanged { coord, state });
    }

    fn on_cell_scored(&mut self, coord: Coord, score: f64) {
        self.events.push(CellEvent::Scored { coord, score });
    }

    fn on_cell_selected(&mut self, coord: Coord, score: f64) {
        self.events.push(CellEvent::Selected { coord, score });
    }
}

/// Panic unless `path` is a valid start-to-goal walk over `grid`.
///
/// Checks the endpoints, 4-adjacency of consecutive cells, that every
/// cell is on the grid and not `Blocked`, and that no cell repeats.
pub fn assert_valid_path(grid: &Grid, path: &[Coord], start: Coord, goal: Coord) {
    assert_eq!(path.first(), Some(&start), "path must begin at start");
    assert_eq!(path.last(), Some(&goal), "path must end at goal");
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(pair[1]),
            "{} and {} are not 4-adjacent",
            pair[0],
            pair[1]
        );
    }
    for (i, &coord) in path.iter().enumerate() {
        let cell = grid
            .cell(coord)
            .unwrap_or_else(|| panic!("path cell {coord} is off the grid"));
        assert_ne!(cell.state, CellState::Blocked, "path crosses blocked {coord}");
        assert!(
            !path[..i].contains(&coord),
            "path revisits {coord}"
        );
    }
}
