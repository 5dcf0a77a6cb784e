//! Gridwalk: a steppable best-first search over random obstacle grids.
//!
//! This is the facade crate that re-exports the public API from all
//! Gridwalk sub-crates. For most users, adding `gridwalk` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridwalk::prelude::*;
//!
//! let mut engine = SearchEngine::new(SearchConfig::default());
//! let setup = engine.reset(12, 12, 3, Some(2024)).unwrap();
//! let (start, goal) = (setup.start, setup.goal);
//!
//! // The host decides the pacing; here we just loop.
//! let outcome = loop {
//!     let result = engine.step().unwrap();
//!     if result.is_terminal() {
//!         break result;
//!     }
//! };
//!
//! // Random blocking may wall the goal off, so either outcome is valid.
//! match outcome {
//!     StepResult::Succeeded(path) => {
//!         assert_eq!(path.first(), Some(&start));
//!         assert_eq!(path.last(), Some(&goal));
//!     }
//!     StepResult::Failed => {}
//!     StepResult::Continue(_) => unreachable!(),
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwalk-core` | Coordinates, cell states, observer trait, errors |
//! | [`grid`] | `gridwalk-grid` | Grid arena, seeded generation, boundary selection |
//! | [`engine`] | `gridwalk-engine` | Cost model, open/closed sets, search state machine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`gridwalk-core`).
///
/// Contains [`types::Coord`], [`types::Cell`], [`types::CellState`], the
/// [`types::SearchObserver`] trait, and [`types::SearchError`].
pub use gridwalk_core as types;

/// Obstacle grids (`gridwalk-grid`).
///
/// [`grid::Grid`] owns the cells; generation and start/goal selection
/// are methods on it.
pub use gridwalk_grid as grid;

/// Search engine (`gridwalk-engine`).
///
/// [`engine::SearchEngine`] for the reset/step host API,
/// [`engine::Search`] for driving a search over a hand-built grid.
pub use gridwalk_engine as engine;

/// Common imports for typical Gridwalk usage.
///
/// ```rust
/// use gridwalk::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use gridwalk_core::{Cell, CellEvent, CellState, Coord, NoopObserver, SearchObserver};

    // Errors
    pub use gridwalk_core::SearchError;
    pub use gridwalk_engine::{ConfigError, ResetError};
    pub use gridwalk_grid::GridError;

    // Grid
    pub use gridwalk_grid::Grid;

    // Engine
    pub use gridwalk_engine::{
        ChannelObserver, Search, SearchConfig, SearchEngine, SearchMetrics, SearchStatus,
        StepResult,
    };
}
