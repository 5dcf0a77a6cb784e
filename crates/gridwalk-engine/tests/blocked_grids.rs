//! Integration test: searches over hand-drawn obstacle layouts.
//!
//! Covers the disconnected case, where the search must terminate in
//! `Failed`, and detours around walls, where the path must route
//! through the only gap.

use gridwalk_core::{CellState, Coord, SearchError};
use gridwalk_engine::{Search, SearchStatus, StepResult};
use gridwalk_test_utils::{assert_valid_path, fixture_from_ascii, RecordingObserver};

fn run(search: &mut Search, obs: &mut RecordingObserver) -> (StepResult, u64) {
    let limit = search.grid().cell_count() as u64;
    let mut steps = 0;
    loop {
        steps += 1;
        let result = search.step(obs).unwrap();
        if result.is_terminal() {
            return (result, steps);
        }
        assert!(steps < limit, "search did not terminate");
    }
}

// ── Disconnected layouts ───────────────────────────────────────────

#[test]
fn blocked_interior_with_split_ring_fails() {
    let f = fixture_from_ascii(&[
        "S.#..",
        ".###.",
        ".###.",
        ".###.",
        "..#.G",
    ]);
    let (start, goal) = (f.start.unwrap(), f.goal.unwrap());
    let mut search = Search::new(f.grid, start, goal).unwrap();
    let mut obs = RecordingObserver::new();

    let (result, steps) = run(&mut search, &mut obs);
    assert_eq!(result, StepResult::Failed);
    // The start's side of the ring holds seven open cells.
    assert_eq!(steps, 7);
    assert_eq!(search.visited().len(), 7);
    assert_eq!(search.status(), SearchStatus::Failed);
    assert!(obs.transitions_to(CellState::OnPath).is_empty());
    assert!(obs.states_of(goal).is_empty());

    assert_eq!(search.step(&mut obs), Err(SearchError::EmptyFrontier));
}

#[test]
fn goal_enclosed_by_walls_fails() {
    let f = fixture_from_ascii(&[
        "S....",
        ".....",
        "...##",
        "...#G",
    ]);
    let mut search = Search::new(f.grid, f.start.unwrap(), f.goal.unwrap()).unwrap();
    let (result, _) = run(&mut search, &mut RecordingObserver::new());
    assert_eq!(result, StepResult::Failed);
    // Everything reachable was expanded before giving up.
    assert_eq!(search.visited().len(), 20 - 4);
}

// ── Detours ────────────────────────────────────────────────────────

#[test]
fn path_threads_the_single_gap() {
    let f = fixture_from_ascii(&[
        "S...#...",
        "....#...",
        "........",
        "....#...",
        "....#..G",
    ]);
    let (start, goal) = (f.start.unwrap(), f.goal.unwrap());
    let mut search = Search::new(f.grid, start, goal).unwrap();
    let mut obs = RecordingObserver::new();

    let (result, _) = run(&mut search, &mut obs);
    let StepResult::Succeeded(path) = result else {
        panic!("expected success, got {result:?}");
    };
    assert_valid_path(search.grid(), &path, start, goal);
    assert!(path.contains(&Coord::new(2, 4)), "path must use the gap");
    assert_eq!(search.cost_from_start(goal), Some(path.len() as u32 - 1));

    // Every cell after the start was first chosen from the frontier.
    let expanded: Vec<Coord> = search.visited().iter().skip(1).collect();
    assert_eq!(obs.selections(), expanded);

    // Path cells other than the start are announced as OnPath, goal first.
    let mut on_path = obs.transitions_to(CellState::OnPath);
    on_path.reverse();
    assert_eq!(on_path, path[1..].to_vec());
}

#[test]
fn every_cell_enters_frontier_at_most_once() {
    let f = fixture_from_ascii(&[
        "S..#....",
        ".#.#.##.",
        ".#...#..",
        ".####.#.",
        "......#G",
    ]);
    let mut search = Search::new(f.grid, f.start.unwrap(), f.goal.unwrap()).unwrap();
    let mut obs = RecordingObserver::new();
    run(&mut search, &mut obs);

    let discovered = obs.transitions_to(CellState::Frontier);
    for (i, coord) in discovered.iter().enumerate() {
        assert!(
            !discovered[..i].contains(coord),
            "{coord} discovered twice"
        );
    }
    for coord in obs.transitions_to(CellState::Visited) {
        assert_ne!(
            search.grid()[coord].state,
            CellState::Blocked,
            "blocked cell {coord} was expanded"
        );
    }
}

#[test]
fn start_boxed_in_fails_immediately() {
    let f = fixture_from_ascii(&[
        "S#..",
        "#...",
        "...G",
    ]);
    let mut search = Search::new(f.grid, f.start.unwrap(), f.goal.unwrap()).unwrap();
    let mut obs = RecordingObserver::new();
    assert_eq!(search.step(&mut obs), Ok(StepResult::Failed));
    assert_eq!(
        obs.states_of(Coord::new(0, 0)),
        vec![CellState::Visited]
    );
}
