//! One search run as an explicit, steppable state machine.
//!
//! A [`Search`] owns its grid, frontier, and visited set. Each call to
//! [`step()`](Search::step) performs exactly one expansion and returns;
//! pacing between steps belongs to the host. Abandoning a search is just
//! dropping it.
//!
//! # Step
//!
//! 1. Mark the current cell `Visited` and add it to the visited set.
//! 2. Ask the grid for its open, unvisited neighbours.
//! 3. With no neighbours (and not at the goal): fail if the frontier is
//!    empty, otherwise pick the next current cell and return.
//! 4. Insert each neighbour not already in the frontier or visited set,
//!    recording `parent` and `cost_from_start = parent + 1`.
//! 5. At the goal, reject leftover frontier cells, reconstruct the path,
//!    and succeed. Otherwise pick the lowest-scoring frontier cell.

use std::time::Instant;

use gridwalk_core::{CellState, Coord, SearchError, SearchObserver};
use gridwalk_grid::{Grid, GridError};
use tracing::{debug, info, trace};

use crate::cost::{self, STEP_COST};
use crate::frontier::Frontier;
use crate::metrics::SearchMetrics;
use crate::path::reconstruct_path;
use crate::visited::Visited;

// ── Status and results ──────────────────────────────────────────

/// Lifecycle of a search: `Idle -> Running -> {Succeeded, Failed}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// No grid has been generated yet.
    Idle,
    /// Steps may be taken.
    Running,
    /// The goal was expanded and the path reconstructed.
    Succeeded,
    /// The frontier ran dry before the goal was reached.
    Failed,
}

impl SearchStatus {
    /// Whether no further steps will be accepted.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Outcome of a single [`Search::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The search advanced; the payload is the next cell to expand.
    Continue(Coord),
    /// The goal was reached. The path runs start to goal inclusive.
    Succeeded(Vec<Coord>),
    /// No path exists. A normal outcome, not an error.
    Failed,
}

impl StepResult {
    /// Whether the search has stopped.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue(_))
    }
}

// ── Search ──────────────────────────────────────────────────────

/// A single best-first search over an owned grid.
#[derive(Clone, Debug)]
pub struct Search {
    grid: Grid,
    start: Coord,
    goal: Coord,
    current: Coord,
    frontier: Frontier,
    visited: Visited,
    status: SearchStatus,
    metrics: SearchMetrics,
}

impl Search {
    /// Begin a search from `start` to `goal` over `grid`.
    ///
    /// The start gets `cost_from_start = 0` and becomes the current cell.
    /// It is not placed in the frontier or the visited set until the
    /// first step expands it.
    ///
    /// Both endpoints must be on the grid and open; a blocked start or
    /// goal yields [`GridError::BlockedEndpoint`].
    pub fn new(mut grid: Grid, start: Coord, goal: Coord) -> Result<Self, GridError> {
        for coord in [start, goal] {
            if grid.state(coord)? == CellState::Blocked {
                return Err(GridError::BlockedEndpoint { coord });
            }
        }
        let origin = &mut grid[start];
        origin.cost_from_start = Some(0);
        origin.parent = None;

        Ok(Self {
            grid,
            start,
            goal,
            current: start,
            frontier: Frontier::new(),
            visited: Visited::new(),
            status: SearchStatus::Running,
            metrics: SearchMetrics::default(),
        })
    }

    /// Perform one expansion.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyFrontier`] if the search already failed.
    /// - [`SearchError::AlreadyFinished`] if it already succeeded.
    /// - [`SearchError::BrokenParentChain`] if path reconstruction finds
    ///   inconsistent bookkeeping. This is an internal defect.
    pub fn step<O>(&mut self, observer: &mut O) -> Result<StepResult, SearchError>
    where
        O: SearchObserver + ?Sized,
    {
        match self.status {
            SearchStatus::Running => {}
            SearchStatus::Failed => return Err(SearchError::EmptyFrontier),
            SearchStatus::Succeeded => return Err(SearchError::AlreadyFinished),
            SearchStatus::Idle => return Err(SearchError::NotStarted),
        }

        let step_start = Instant::now();
        let result = self.advance(observer);
        let elapsed = u64::try_from(step_start.elapsed().as_micros()).unwrap_or(u64::MAX);
        self.metrics.steps += 1;
        self.metrics.last_step_us = elapsed;
        self.metrics.total_us = self.metrics.total_us.saturating_add(elapsed);
        result
    }

    fn advance<O>(&mut self, observer: &mut O) -> Result<StepResult, SearchError>
    where
        O: SearchObserver + ?Sized,
    {
        let current = self.current;
        let at_goal = current == self.goal;

        transition(&mut self.grid, current, CellState::Visited, observer);
        self.visited.insert(current);
        self.metrics.cells_expanded += 1;

        let neighbours = self.grid.neighbours(current);

        if neighbours.is_empty() && !at_goal {
            debug!(%current, "no neighbours");
            if self.frontier.is_empty() {
                return Ok(self.fail());
            }
            return self.select_next(observer);
        }

        let next_cost = self.grid[current]
            .cost_from_start
            .ok_or(SearchError::BrokenParentChain { at: current })?
            + STEP_COST;

        for n in neighbours {
            if self.frontier.contains(n) || self.visited.contains(n) {
                continue;
            }
            self.frontier.insert(n);
            let cell = &mut self.grid[n];
            cell.parent = Some(current);
            cell.cost_from_start = Some(next_cost);
            self.metrics.cells_discovered += 1;
            transition(&mut self.grid, n, CellState::Frontier, observer);
        }
        self.metrics.frontier_peak = self.metrics.frontier_peak.max(self.frontier.len());

        if at_goal {
            return self.succeed(observer);
        }
        if self.frontier.is_empty() {
            return Ok(self.fail());
        }
        self.select_next(observer)
    }

    /// Pop the lowest-scoring frontier cell and make it current.
    fn select_next<O>(&mut self, observer: &mut O) -> Result<StepResult, SearchError>
    where
        O: SearchObserver + ?Sized,
    {
        let goal = self.goal;
        let grid = &self.grid;
        let metrics = &mut self.metrics;
        let (next, score) = self.frontier.pop_min(|coord| {
            // Frontier cells always carry a cost: it is set on insertion.
            let hops = grid[coord].cost_from_start.unwrap_or_default();
            let s = cost::score(coord, goal, hops);
            metrics.scores_computed += 1;
            observer.on_cell_scored(coord, s);
            s
        })?;

        trace!(%next, score, "selected");
        observer.on_cell_selected(next, score);
        self.current = next;
        Ok(StepResult::Continue(next))
    }

    fn succeed<O>(&mut self, observer: &mut O) -> Result<StepResult, SearchError>
    where
        O: SearchObserver + ?Sized,
    {
        self.status = SearchStatus::Succeeded;
        let leftovers: Vec<Coord> = self.frontier.drain().collect();
        for coord in leftovers {
            transition(&mut self.grid, coord, CellState::Rejected, observer);
        }

        let path = reconstruct_path(&mut self.grid, self.start, self.goal, observer)?;
        self.metrics.path_len = path.len();
        info!(
            steps = self.metrics.steps + 1,
            hops = path.len().saturating_sub(1),
            "search ended: goal reached"
        );
        Ok(StepResult::Succeeded(path))
    }

    fn fail(&mut self) -> StepResult {
        self.status = SearchStatus::Failed;
        info!(
            steps = self.metrics.steps + 1,
            expanded = self.visited.len(),
            "no more tiles to explore, search terminated"
        );
        StepResult::Failed
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The grid being searched.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Start cell.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Goal cell.
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// The cell the next step will expand.
    pub fn current(&self) -> Coord {
        self.current
    }

    /// The open set.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// The closed set.
    pub fn visited(&self) -> &Visited {
        &self.visited
    }

    /// Lifecycle state.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Counters for this run.
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Hop count recorded for `coord`, if it has been discovered.
    pub fn cost_from_start(&self, coord: Coord) -> Option<u32> {
        self.grid.cell(coord).and_then(|c| c.cost_from_start)
    }
}

/// Set `coord`'s state and notify `observer`, but only on a real change.
pub(crate) fn transition<O>(grid: &mut Grid, coord: Coord, state: CellState, observer: &mut O)
where
    O: SearchObserver + ?Sized,
{
    let cell = &mut grid[coord];
    if cell.state != state {
        cell.state = state;
        observer.on_cell_state_changed(coord, state);
    }
}
