//! Host-facing search engine.
//!
//! [`SearchEngine`] is the entry point for presentation layers. Each
//! [`reset()`](SearchEngine::reset) generates a fresh grid, picks start
//! and goal on the boundary, and discards whatever search was running.
//! Each [`step()`](SearchEngine::step) performs one expansion and reports
//! cell transitions to the engine's [`SearchObserver`].
//!
//! # Ownership model
//!
//! The engine owns the only [`Search`], which owns the only [`Grid`].
//! [`Reset`] borrows the freshly generated grid from the engine, so the
//! host must drop it before stepping. There are no background threads;
//! pacing between steps is entirely the host's choice.

use std::error::Error;
use std::fmt;

use gridwalk_core::{CellState, Coord, NoopObserver, SearchError, SearchObserver};
use gridwalk_grid::{seeded_rng, Grid, GridError};
use rand::Rng;
use tracing::info;

use crate::config::{ConfigError, SearchConfig};
use crate::metrics::SearchMetrics;
use crate::search::{Search, SearchStatus, StepResult};

// ── ResetError ──────────────────────────────────────────────────

/// Errors from [`SearchEngine::reset`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResetError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Generation or endpoint selection failed, typically
    /// [`GridError::NoEligibleCell`] on a degenerate grid.
    Grid(GridError),
}

impl fmt::Display for ResetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ResetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ResetError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for ResetError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── Reset ───────────────────────────────────────────────────────

/// The freshly generated search setup returned by a reset.
#[derive(Clone, Copy, Debug)]
pub struct Reset<'a> {
    /// The new grid, with both endpoints open.
    pub grid: &'a Grid,
    /// Start cell on the boundary.
    pub start: Coord,
    /// Goal cell on the boundary, sharing neither row nor column with
    /// `start`.
    pub goal: Coord,
    /// Seed that produced this layout. Passing it back reproduces it.
    pub seed: u64,
}

// ── SearchEngine ────────────────────────────────────────────────

/// Owns the active search and the observer that watches it.
///
/// # Example
///
/// ```
/// use gridwalk_engine::{SearchConfig, SearchEngine};
///
/// let mut engine = SearchEngine::new(SearchConfig::default());
/// let setup = engine.reset(8, 8, 2, Some(7)).unwrap();
/// let (start, goal) = (setup.start, setup.goal);
/// assert_ne!(start.row, goal.row);
///
/// let outcome = engine.run_to_completion().unwrap();
/// assert!(outcome.is_terminal());
/// ```
pub struct SearchEngine<O: SearchObserver = NoopObserver> {
    config: SearchConfig,
    observer: O,
    search: Option<Search>,
    seed: Option<u64>,
}

impl SearchEngine<NoopObserver> {
    /// Create an idle engine that reports to nobody.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_observer(config, NoopObserver)
    }
}

impl<O: SearchObserver> SearchEngine<O> {
    /// Create an idle engine that reports cell events to `observer`.
    ///
    /// No grid exists until the first reset; stepping before then
    /// returns [`SearchError::NotStarted`].
    pub fn with_observer(config: SearchConfig, observer: O) -> Self {
        Self {
            config,
            observer,
            search: None,
            seed: None,
        }
    }

    /// Generate a new grid and start a search over it.
    ///
    /// Overwrites the dimension, blocking, and seed settings of the
    /// stored config, then behaves like [`regenerate()`](Self::regenerate).
    /// With `seed = None` a fresh seed is drawn.
    pub fn reset(
        &mut self,
        width: u32,
        height: u32,
        block_percentage: i32,
        seed: Option<u64>,
    ) -> Result<Reset<'_>, ResetError> {
        self.config.width = width;
        self.config.height = height;
        self.config.block_percentage = block_percentage;
        self.config.seed = seed;
        self.regenerate()
    }

    /// Replace the whole config, then [`regenerate()`](Self::regenerate).
    pub fn reset_from_config(&mut self, config: SearchConfig) -> Result<Reset<'_>, ResetError> {
        self.config = config;
        self.regenerate()
    }

    /// Start over with the stored config.
    ///
    /// Any running search is discarded first, even if validation or
    /// generation then fails. On success the grid has been generated
    /// with one roll per cell, the start and goal drawn from the same
    /// generator, and both endpoints cleared of blocking.
    pub fn regenerate(&mut self) -> Result<Reset<'_>, ResetError> {
        self.search = None;
        self.seed = None;
        self.config.validate()?;

        let seed = match self.config.seed {
            Some(seed) => seed,
            None => rand::rng().random::<u64>(),
        };
        let mut rng = seeded_rng(seed);
        let cfg = &self.config;

        let mut grid = Grid::generate(cfg.width, cfg.height, cfg.block_percentage, &mut rng)?;
        let start = grid.pick_boundary_cell(None, &mut rng)?;
        let goal = grid.pick_boundary_cell(Some(start), &mut rng)?;
        for endpoint in [start, goal] {
            grid.set_state(endpoint, CellState::Unvisited)?;
        }

        info!(
            width = cfg.width,
            height = cfg.height,
            seed,
            %start,
            %goal,
            blocked = grid.blocked_count(),
            "search reset"
        );

        let search = self.search.insert(Search::new(grid, start, goal)?);
        self.seed = Some(seed);
        Ok(Reset {
            grid: search.grid(),
            start,
            goal,
            seed,
        })
    }

    /// Perform one expansion of the active search.
    ///
    /// # Errors
    ///
    /// [`SearchError::NotStarted`] before the first successful reset;
    /// otherwise as [`Search::step`].
    pub fn step(&mut self) -> Result<StepResult, SearchError> {
        let search = self.search.as_mut().ok_or(SearchError::NotStarted)?;
        search.step(&mut self.observer)
    }

    /// Step until a terminal result or the configured step cap.
    ///
    /// Returns the last result produced. If the cap is hit first that is
    /// a `Continue`; on any grid the cap defaults to `width * height`,
    /// which an unobstructed search never exceeds.
    pub fn run_to_completion(&mut self) -> Result<StepResult, SearchError> {
        let cap = self.config.resolved_max_steps();
        let mut last = self.step()?;
        let mut taken = 1;
        while !last.is_terminal() && taken < cap {
            last = self.step()?;
            taken += 1;
        }
        Ok(last)
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Lifecycle state; `Idle` before the first successful reset.
    pub fn status(&self) -> SearchStatus {
        self.search
            .as_ref()
            .map_or(SearchStatus::Idle, Search::status)
    }

    /// Counters for the active search.
    pub fn metrics(&self) -> Option<&SearchMetrics> {
        self.search.as_ref().map(Search::metrics)
    }

    /// Seed of the active layout.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The active grid.
    pub fn grid(&self) -> Option<&Grid> {
        self.search.as_ref().map(Search::grid)
    }

    /// The active search.
    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    /// The stored configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The observer receiving cell events.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer, e.g. to drain recorded events.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the engine, returning its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<O: SearchObserver> fmt::Debug for SearchEngine<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchEngine")
            .field("status", &self.status())
            .field("seed", &self.seed)
            .field("width", &self.config.width)
            .field("height", &self.config.height)
            .finish()
    }
}
