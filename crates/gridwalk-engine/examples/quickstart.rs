//! Gridwalk quickstart: generate a grid, step a search, draw the result.
//!
//! Demonstrates:
//!   1. Installing a tracing subscriber (the library never does)
//!   2. Resetting a `SearchEngine` with a fixed seed
//!   3. Stepping one expansion at a time, as a paced host would
//!   4. Rendering the final cell states as ASCII
//!
//! Run with:
//!   RUST_LOG=gridwalk_engine=debug cargo run --example quickstart

use gridwalk_core::{CellState, Coord};
use gridwalk_engine::{SearchConfig, SearchEngine, StepResult};
use gridwalk_grid::Grid;
use tracing_subscriber::EnvFilter;

// ─── Grid parameters ────────────────────────────────────────────

const WIDTH: u32 = 24;
const HEIGHT: u32 = 12;
const BLOCK_PERCENTAGE: i32 = 3;
const SEED: u64 = 2024;

fn glyph(state: CellState) -> char {
    match state {
        CellState::Unvisited => '.',
        CellState::Frontier => '+',
        CellState::Rejected => '-',
        CellState::Visited => 'o',
        CellState::Blocked => '#',
        CellState::OnPath => '*',
    }
}

fn render(grid: &Grid, start: Coord, goal: Coord) -> String {
    let mut out = String::new();
    for r in 0..grid.height() as i32 {
        for c in 0..grid.width() as i32 {
            let coord = Coord::new(r, c);
            out.push(if coord == start {
                'S'
            } else if coord == goal {
                'G'
            } else {
                glyph(grid[coord].state)
            });
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("gridwalk_engine=info".parse()?),
        )
        .init();

    let mut engine = SearchEngine::new(SearchConfig::default());
    let (start, goal) = {
        let setup = engine.reset(WIDTH, HEIGHT, BLOCK_PERCENTAGE, Some(SEED))?;
        println!(
            "seed {} | start {} | goal {} | {} blocked",
            setup.seed,
            setup.start,
            setup.goal,
            setup.grid.blocked_count()
        );
        (setup.start, setup.goal)
    };

    // A visual host would wait between steps; we just keep going.
    let outcome = loop {
        match engine.step()? {
            StepResult::Continue(_) => {}
            terminal => break terminal,
        }
    };

    if let Some(grid) = engine.grid() {
        print!("{}", render(grid, start, goal));
    }
    match outcome {
        StepResult::Succeeded(path) => println!("path: {} hops", path.len() - 1),
        StepResult::Failed => println!("no path"),
        StepResult::Continue(_) => {}
    }
    if let Some(m) = engine.metrics() {
        println!(
            "steps {} | expanded {} | peak frontier {} | {} us",
            m.steps, m.cells_expanded, m.frontier_peak, m.total_us
        );
    }
    Ok(())
}
