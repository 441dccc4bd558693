//! Self-checks run against the searches on a concrete maze.

use std::collections::HashSet;
use std::fmt;

use kroute_core::{Grid, Position};
use kroute_paths::{
    PathDefect, backtracking_path, k_shortest_paths, moves, shortest_path, validate_path,
};

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The maze has no exit.
    NoExit,
    /// The BFS route is malformed.
    InvalidBfs(PathDefect),
    /// The DFS route is malformed.
    InvalidDfs(PathDefect),
    /// BFS returned a longer route than the DFS baseline.
    BfsLongerThanDfs { bfs: usize, dfs: usize },
    /// The enumerator found nothing although BFS reaches the exit.
    MissingRoutes,
    /// The same route appears twice.
    Duplicate { index: usize },
    /// A route is shorter than the one before it.
    OutOfOrder { index: usize },
    /// A route is malformed.
    InvalidRoute { index: usize, defect: PathDefect },
    /// The first route is not as short as the BFS route.
    FirstNotShortest { expected: usize, found: usize },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoExit => write!(f, "the maze has no exit"),
            Self::InvalidBfs(d) => write!(f, "BFS route is invalid: {d}"),
            Self::InvalidDfs(d) => write!(f, "DFS route is invalid: {d}"),
            Self::BfsLongerThanDfs { bfs, dfs } => {
                write!(f, "BFS route ({bfs} moves) is longer than DFS route ({dfs} moves)")
            }
            Self::MissingRoutes => write!(f, "no routes enumerated although BFS found one"),
            Self::Duplicate { index } => write!(f, "route #{index} is a duplicate"),
            Self::OutOfOrder { index } => {
                write!(f, "route #{index} is shorter than the route before it")
            }
            Self::InvalidRoute { index, defect } => write!(f, "route #{index} is invalid: {defect}"),
            Self::FirstNotShortest { expected, found } => write!(
                f,
                "first route has {found} moves, shortest has {expected}"
            ),
        }
    }
}

/// Outcome of [`check`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanityReport {
    pub failures: Vec<Failure>,
}

impl SanityReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for SanityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failures {
            writeln!(f, "[checks] failed: {failure}")?;
        }
        writeln!(
            f,
            "[checks] result: {}",
            if self.is_ok() { "OK" } else { "FAILED" }
        )
    }
}

/// Check BFS against the DFS baseline, then check the k-shortest result
/// set: non-empty when reachable, distinct, ordered, valid, and led by a
/// shortest route.
pub fn check(grid: &Grid, start: Position, k: usize) -> SanityReport {
    let mut failures = Vec::new();
    let Ok(goal) = grid.locate_exit() else {
        failures.push(Failure::NoExit);
        return SanityReport { failures };
    };

    let bfs = shortest_path(grid, start, goal);
    let dfs = backtracking_path(grid, start, goal);

    if let Some(Err(d)) = bfs.as_deref().map(|p| validate_path(grid, p, start, goal)) {
        failures.push(Failure::InvalidBfs(d));
    }
    if let Some(Err(d)) = dfs.as_deref().map(|p| validate_path(grid, p, start, goal)) {
        failures.push(Failure::InvalidDfs(d));
    }
    if let (Some(b), Some(d)) = (&bfs, &dfs) {
        if b.len() > d.len() {
            failures.push(Failure::BfsLongerThanDfs {
                bfs: moves(b),
                dfs: moves(d),
            });
        }
    }

    let routes = k_shortest_paths(grid, start, k);
    if routes.is_empty() {
        if bfs.is_some() {
            failures.push(Failure::MissingRoutes);
        }
    } else {
        let mut seen = HashSet::new();
        if let Some(index) = routes.iter().position(|r| !seen.insert(r)) {
            failures.push(Failure::Duplicate { index });
        }
        if let Some(index) = routes
            .windows(2)
            .position(|w| moves(&w[0]) > moves(&w[1]))
        {
            failures.push(Failure::OutOfOrder { index: index + 1 });
        }
        if let Some((index, defect)) = routes
            .iter()
            .enumerate()
            .find_map(|(i, r)| validate_path(grid, r, start, goal).err().map(|d| (i, d)))
        {
            failures.push(Failure::InvalidRoute { index, defect });
        }
        if let Some(b) = &bfs {
            if routes[0].len() != b.len() {
                failures.push(Failure::FirstNotShortest {
                    expected: moves(b),
                    found: moves(&routes[0]),
                });
            }
        }
    }

    for failure in &failures {
        log::warn!("sanity check failed: {failure}");
    }
    SanityReport { failures }
}
