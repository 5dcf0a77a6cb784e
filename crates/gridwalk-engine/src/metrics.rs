//! Per-search counters and timings.
//!
//! [`SearchMetrics`] is owned by a running search and updated on every
//! `step()`. Durations are in microseconds.

/// Counters and timings for one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Successful `step()` calls.
    pub steps: u64,
    /// Cells moved into the visited set.
    pub cells_expanded: u64,
    /// Cells newly inserted into the frontier.
    pub cells_discovered: u64,
    /// Score evaluations performed while choosing the next cell.
    pub scores_computed: u64,
    /// Largest frontier size observed after a discovery pass.
    pub frontier_peak: usize,
    /// Length of the reconstructed path, in cells. Zero until success.
    pub path_len: usize,
    /// Wall-clock time of the most recent step.
    pub last_step_us: u64,
    /// Wall-clock time summed over all steps.
    pub total_us: u64,
}
