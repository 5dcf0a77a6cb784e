//! Core types and traits for the Gridwalk search engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: grid coordinates,
//! per-cell search state, error types, and the observer trait through
//! which a presentation layer watches a search unfold.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod observer;

pub use cell::{Cell, CellState};
pub use coord::{Coord, Neighbours};
pub use error::SearchError;
pub use observer::{CellEvent, NoopObserver, SearchObserver};
