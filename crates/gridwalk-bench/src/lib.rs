//! Benchmark profiles for the Gridwalk search engine.
//!
//! Provides pre-built [`SearchConfig`] profiles for benchmarks:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells), 30% blocking
//! - [`stress_profile`]: 316x316 grid (~100K cells), 30% blocking
//! - [`open_profile`]: 100x100 grid with no obstacles, which always
//!   succeeds and maximises frontier growth
//! - [`first_solvable_seed`]: scan seeds until one yields a path

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwalk_engine::{SearchConfig, SearchEngine, StepResult};

/// 100x100 grid at the default blocking level.
pub fn reference_profile(seed: u64) -> SearchConfig {
    SearchConfig {
        width: 100,
        height: 100,
        block_percentage: 3,
        seed: Some(seed),
        ..SearchConfig::default()
    }
}

/// 316x316 grid at the default blocking level.
pub fn stress_profile(seed: u64) -> SearchConfig {
    SearchConfig {
        width: 316,
        height: 316,
        ..reference_profile(seed)
    }
}

/// 100x100 grid with no obstacles.
pub fn open_profile(seed: u64) -> SearchConfig {
    SearchConfig {
        block_percentage: 0,
        ..reference_profile(seed)
    }
}

/// First seed at or after `from` whose layout under `base` has a path.
///
/// Random blocking sometimes walls off the goal; benchmarks that time
/// a full search want a run that ends in success. Gives up after
/// `tries` seeds.
pub fn first_solvable_seed(base: &SearchConfig, from: u64, tries: u64) -> Option<u64> {
    (from..from.saturating_add(tries)).find(|&seed| {
        let mut engine = SearchEngine::new(SearchConfig {
            seed: Some(seed),
            ..base.clone()
        });
        engine.regenerate().is_ok()
            && matches!(engine.run_to_completion(), Ok(StepResult::Succeeded(_)))
    })
}
