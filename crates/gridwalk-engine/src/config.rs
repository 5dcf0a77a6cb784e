//! Search configuration, validation, and error types.
//!
//! [`SearchConfig`] is the input to [`SearchEngine::reset_from_config`].
//! [`validate()`](SearchConfig::validate) rejects unusable settings before
//! any grid is generated.
//!
//! [`SearchEngine::reset_from_config`]: crate::engine::SearchEngine::reset_from_config

use std::error::Error;
use std::fmt;

use gridwalk_core::Coord;
use gridwalk_grid::{validate_dimensions, GridError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SearchConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions are zero, too large, or overflow the cell count.
    Grid(GridError),
    /// `spacing` is NaN, infinite, zero, or negative.
    InvalidSpacing {
        /// The invalid value.
        value: f32,
    },
    /// `max_steps` is `Some(0)`, which would never take a step.
    ZeroMaxSteps,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidSpacing { value } => {
                write!(f, "spacing must be finite and positive, got {value}")
            }
            Self::ZeroMaxSteps => write!(f, "max_steps must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SearchConfig ───────────────────────────────────────────────────

/// Everything needed to generate a grid and start a search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Number of columns. Default: 10.
    pub width: u32,
    /// Number of rows. Default: 10.
    pub height: u32,
    /// Blocking chance in tenths, clamped to `[0, 10]` at generation.
    /// Default: 3.
    pub block_percentage: i32,
    /// Seed for generation and endpoint selection. `None` draws a fresh
    /// seed on every reset.
    pub seed: Option<u64>,
    /// Distance between neighbouring cell centres, for hosts that place
    /// cells in space. Default: 1.01.
    pub spacing: f32,
    /// Cap on steps taken by `run_to_completion`. `None` = `width * height`.
    pub max_steps: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            block_percentage: 3,
            seed: None,
            spacing: 1.01,
            max_steps: None,
        }
    }
}

impl SearchConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.width, self.height)?;
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::InvalidSpacing {
                value: self.spacing,
            });
        }
        if self.max_steps == Some(0) {
            return Err(ConfigError::ZeroMaxSteps);
        }
        Ok(())
    }

    /// Number of cells the configured grid will hold.
    ///
    /// Saturates instead of overflowing; `validate()` rejects such sizes.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width).saturating_mul(u64::from(self.height))
    }

    /// Step cap for `run_to_completion`.
    pub fn resolved_max_steps(&self) -> u64 {
        self.max_steps.unwrap_or_else(|| self.cell_count())
    }

    /// Position of `coord`'s centre as `(row * spacing, col * spacing)`.
    pub fn cell_position(&self, coord: Coord) -> (f32, f32) {
        (
            coord.row as f32 * self.spacing,
            coord.col as f32 * self.spacing,
        )
    }
}
