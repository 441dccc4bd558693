//! Cross-checks of the route searches on fixed and randomly generated mazes.

use std::collections::HashSet;

use kroute_core::{Cell, Grid, Position};
use kroute_paths::{
    Context, KShortestPaths, backtracking_path, k_shortest_paths, moves, shortest_path,
    validate_path,
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// The 12x12 demonstration labyrinth, exit at (10, 11).
fn labyrinth() -> Grid {
    Grid::from_rows(vec![
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 0, 1],
        vec![1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1],
        vec![1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        vec![1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 0, 1],
        vec![1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1],
        vec![1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 9],
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ])
    .unwrap()
}

/// A `size` x `size` maze with roughly `wall_pct` walls, an exit, and a free
/// start cell. Returns `None` if the dice left no room for both.
fn random_maze(rng: &mut StdRng, size: usize, wall_pct: f64) -> Option<(Grid, Position)> {
    let mut cells: Vec<Cell> = (0..size * size)
        .map(|_| {
            if rng.random_bool(wall_pct) {
                Cell::Wall
            } else {
                Cell::Free
            }
        })
        .collect();
    let free: Vec<usize> = (0..cells.len()).filter(|&i| cells[i] == Cell::Free).collect();
    if free.len() < 2 {
        return None;
    }
    let exit = free[rng.random_range(0..free.len())];
    let start = loop {
        let s = free[rng.random_range(0..free.len())];
        if s != exit {
            break s;
        }
    };
    cells[exit] = Cell::Exit;
    let grid = Grid::from_cells(size, size, cells).ok()?;
    Some((grid, p((start / size) as i32, (start % size) as i32)))
}

fn check_result_set(grid: &Grid, start: Position, k: usize) {
    let routes = k_shortest_paths(grid, start, k);
    let Ok(goal) = grid.locate_exit() else {
        assert!(routes.is_empty());
        return;
    };
    let bfs = shortest_path(grid, start, goal);

    match &bfs {
        None => assert!(routes.is_empty()),
        Some(best) => {
            assert!(!routes.is_empty());
            assert!(routes.len() <= k);
            assert_eq!(moves(&routes[0]), moves(best));
        }
    }
    for r in &routes {
        assert_eq!(validate_path(grid, r, start, goal), Ok(()), "route {r:?}");
    }
    for w in routes.windows(2) {
        assert!(moves(&w[0]) <= moves(&w[1]));
    }
    let distinct: HashSet<_> = routes.iter().collect();
    assert_eq!(distinct.len(), routes.len());
}

#[test]
fn labyrinth_official_route() {
    let g = labyrinth();
    let start = p(1, 0);
    let goal = g.locate_exit().unwrap();
    assert_eq!(goal, p(10, 11));

    let routes = k_shortest_paths(&g, start, 4);
    let lengths: Vec<usize> = routes.iter().map(|r| moves(r)).collect();
    assert_eq!(lengths, vec![20, 20, 20, 20]);
    assert_eq!(routes[0], shortest_path(&g, start, goal).unwrap());
    check_result_set(&g, start, 4);
}

#[test]
fn labyrinth_many_routes() {
    let g = labyrinth();
    let routes = k_shortest_paths(&g, p(1, 0), 25);
    let lengths: Vec<usize> = routes.iter().map(|r| moves(r)).collect();
    assert_eq!(
        lengths,
        vec![
            20, 20, 20, 20, 24, 24, 24, 24, 26, 26, 28, 28, 32, 32, 32, 32, 32, 32, 34, 34, 36,
            36, 42, 42, 42
        ]
    );
    check_result_set(&g, p(1, 0), 25);
}

#[test]
fn labyrinth_bfs_not_longer_than_dfs() {
    let g = labyrinth();
    let start = p(1, 0);
    let goal = g.locate_exit().unwrap();
    let bfs = shortest_path(&g, start, goal).unwrap();
    let dfs = backtracking_path(&g, start, goal).unwrap();
    assert_eq!(validate_path(&g, &dfs, start, goal), Ok(()));
    assert_eq!(moves(&dfs), 42);
    assert!(moves(&bfs) <= moves(&dfs));
}

#[test]
fn corridor_stops_early() {
    let g = Grid::from_rows(vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 9]]).unwrap();
    let routes = k_shortest_paths(&g, p(0, 0), 2);
    assert_eq!(routes.len(), 1);
    assert_eq!(moves(&routes[0]), 4);
}

#[test]
fn no_exit_regardless_of_k() {
    let g = Grid::from_rows(vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
    for k in [0, 1, 2, 10] {
        assert!(k_shortest_paths(&g, p(0, 0), k).is_empty());
    }
}

#[test]
fn wall_or_outside_start() {
    let g = labyrinth();
    assert!(k_shortest_paths(&g, p(0, 0), 3).is_empty());
    assert!(k_shortest_paths(&g, p(12, 0), 3).is_empty());
    assert!(k_shortest_paths(&g, p(1, -1), 3).is_empty());
}

#[test]
fn context_that_is_never_cancelled_changes_nothing() {
    let g = labyrinth();
    let plain = k_shortest_paths(&g, p(1, 0), 8);
    let with_ctx = KShortestPaths::new(&g)
        .with_context(Context::new())
        .enumerate(p(1, 0), 8);
    assert_eq!(plain, with_ctx);
}

#[test]
fn random_mazes_hold_result_set_properties() {
    let mut rng = StdRng::seed_from_u64(0x6b72_6f75);
    let mut checked = 0;
    for _ in 0..200 {
        let Some((grid, start)) = random_maze(&mut rng, 6, 0.3) else {
            continue;
        };
        check_result_set(&grid, start, 5);
        checked += 1;
    }
    assert!(checked > 100);
}

#[test]
fn random_mazes_bfs_not_longer_than_dfs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let Some((grid, start)) = random_maze(&mut rng, 5, 0.35) else {
            continue;
        };
        let goal = grid.locate_exit().unwrap();
        let Some(bfs) = shortest_path(&grid, start, goal) else {
            continue;
        };
        let dfs = backtracking_path(&grid, start, goal).expect("dfs finds reachable exit");
        assert_eq!(validate_path(&grid, &dfs, start, goal), Ok(()));
        assert!(moves(&bfs) <= moves(&dfs));
    }
}
