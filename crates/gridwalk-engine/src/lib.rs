//! Steppable best-first search over Gridwalk grids.
//!
//! The high-level entry point is [`SearchEngine`], which owns one
//! [`Search`] at a time, regenerates it on [`reset`](SearchEngine::reset),
//! and advances it one expansion per [`step`](SearchEngine::step). The
//! building blocks are public for hosts that want to drive a search over
//! a hand-made grid:
//!
//! - [`cost`]: Euclidean heuristic plus uniform hop cost
//! - [`Frontier`] and [`Visited`]: the open and closed sets
//! - [`reconstruct_path`]: parent-link walk from goal to start
//! - [`ChannelObserver`]: ships cell events to another thread

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod channel;
pub mod config;
pub mod cost;
pub mod engine;
pub mod frontier;
pub mod metrics;
pub mod path;
pub mod search;
pub mod visited;

pub use channel::ChannelObserver;
pub use config::{ConfigError, SearchConfig};
pub use engine::{Reset, ResetError, SearchEngine};
pub use frontier::Frontier;
pub use metrics::SearchMetrics;
pub use path::reconstruct_path;
pub use search::{Search, SearchStatus, StepResult};
pub use visited::Visited;
