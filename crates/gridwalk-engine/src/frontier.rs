//! The open set: discovered cells waiting to be expanded.

use gridwalk_core::{Coord, SearchError};
use indexmap::IndexSet;

/// Insertion-ordered set of frontier coordinates.
///
/// Order matters: [`pop_min`](Frontier::pop_min) breaks score ties in
/// favour of the cell discovered first, and removal preserves the
/// relative order of the remaining cells.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    cells: IndexSet<Coord>,
}

impl Frontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `coord`. Returns `false` (and changes nothing) if it was
    /// already present.
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.cells.insert(coord)
    }

    /// Whether `coord` is waiting in the frontier.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of waiting cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Waiting cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Remove and return every waiting cell, in insertion order.
    pub fn drain(&mut self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.drain(..)
    }

    /// Score every member and remove the lowest-scoring one.
    ///
    /// `score_fn` is called exactly once per member, in insertion order.
    /// On ties the earliest-inserted member wins. Returns the chosen
    /// coordinate together with its score.
    ///
    /// Returns `Err(SearchError::EmptyFrontier)` if nothing is waiting.
    pub fn pop_min<F>(&mut self, mut score_fn: F) -> Result<(Coord, f64), SearchError>
    where
        F: FnMut(Coord) -> f64,
    {
        let mut best: Option<(usize, f64)> = None;
        for (i, &coord) in self.cells.iter().enumerate() {
            let s = score_fn(coord);
            match best {
                Some((_, best_score)) if s >= best_score => {}
                _ => best = Some((i, s)),
            }
        }
        let (idx, score) = best.ok_or(SearchError::EmptyFrontier)?;
        let coord = self
            .cells
            .shift_remove_index(idx)
            .ok_or(SearchError::EmptyFrontier)?;
        Ok((coord, score))
    }
}
