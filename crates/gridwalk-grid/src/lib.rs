//! Obstacle grids for Gridwalk searches.
//!
//! [`Grid`] is the arena that owns every [`Cell`](gridwalk_core::Cell);
//! everything else in the workspace refers to cells by
//! [`Coord`](gridwalk_core::Coord). This crate also provides:
//!
//! - seeded random blocking ([`Grid::generate`], [`seeded_rng`])
//! - 4-connected neighbour enumeration in a fixed east, south, west,
//!   north order ([`Grid::neighbours`])
//! - start/goal selection on the outer boundary ([`Grid::pick_boundary_cell`])
//! - a cheap layout fingerprint for determinism checks ([`Grid::layout_hash`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod generate;
pub mod grid;
pub mod hash;

pub use error::GridError;
pub use generate::{clamp_block_percentage, seeded_rng, GridRng, BLOCK_ROLL_SIDES};
pub use grid::{validate_dimensions, Grid, NEIGHBOUR_OFFSETS};
