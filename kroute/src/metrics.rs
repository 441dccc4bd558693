//! Timing and explored-node counts for the searches.

use std::fmt;
use std::time::{Duration, Instant};

use kroute_core::{Grid, Position};
use kroute_paths::{
    Exclusions, KShortestPaths, SearchStats, backtracking_path, backtracking_path_with,
    constrained_path_with, moves, shortest_path,
};

/// Measurements of one BFS, one DFS baseline and one k-shortest run.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub start: Position,
    pub goal: Position,
    pub k: usize,
    pub bfs_time: Duration,
    pub bfs_moves: Option<usize>,
    pub bfs_count_time: Duration,
    pub bfs_explored: usize,
    pub dfs_time: Duration,
    pub dfs_moves: Option<usize>,
    pub dfs_count_time: Duration,
    pub dfs_explored: usize,
    pub k_time: Duration,
    pub k_routes: usize,
    pub k_searches: usize,
    pub official_moves: Option<usize>,
    pub second_moves: Option<usize>,
}

/// Run `f` and return its result with the elapsed time.
fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let t0 = Instant::now();
    let out = f();
    (out, t0.elapsed())
}

impl Metrics {
    /// Time every search on `grid` from `start`.
    ///
    /// Returns `None` when the grid has no exit.
    pub fn collect(grid: &Grid, start: Position, k: usize) -> Option<Self> {
        let goal = grid.locate_exit().ok()?;

        let (bfs, bfs_time) = timed(|| shortest_path(grid, start, goal));

        let mut bfs_stats = SearchStats::default();
        let (_, bfs_count_time) = timed(|| {
            constrained_path_with(grid, start, goal, &Exclusions::new(), None, &mut bfs_stats)
        });

        let (dfs, dfs_time) = timed(|| backtracking_path(grid, start, goal));

        let mut dfs_stats = SearchStats::default();
        let (_, dfs_count_time) =
            timed(|| backtracking_path_with(grid, start, goal, None, &mut dfs_stats));

        let mut ksp = KShortestPaths::new(grid);
        let (routes, k_time) = timed(|| ksp.enumerate(start, k));

        log::info!(
            "metrics: bfs explored {} nodes, dfs explored {} nodes",
            bfs_stats.explored,
            dfs_stats.explored
        );

        Some(Self {
            start,
            goal,
            k,
            bfs_time,
            bfs_moves: bfs.as_deref().map(moves),
            bfs_count_time,
            bfs_explored: bfs_stats.explored,
            dfs_time,
            dfs_moves: dfs.as_deref().map(moves),
            dfs_count_time,
            dfs_explored: dfs_stats.explored,
            k_time,
            k_routes: routes.len(),
            k_searches: ksp.stats().searches,
            official_moves: routes.first().map(|r| moves(r)),
            second_moves: routes.get(1).map(|r| moves(r)),
        })
    }
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn opt(v: Option<usize>) -> String {
    v.map_or_else(|| "none".to_string(), |n| n.to_string())
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = "=".repeat(48);
        let thin = "-".repeat(48);
        writeln!(f, "\n{wide}")?;
        writeln!(f, "ADVANCED METRICS")?;
        writeln!(f, "{wide}")?;
        writeln!(f, "Start: {} | Goal: {}", self.start, self.goal)?;
        writeln!(f, "{thin}")?;
        writeln!(
            f,
            "BFS:          time={:.3} ms | moves={}",
            ms(self.bfs_time),
            opt(self.bfs_moves)
        )?;
        writeln!(
            f,
            "BFS (count):  time={:.3} ms | explored={}",
            ms(self.bfs_count_time),
            self.bfs_explored
        )?;
        writeln!(f, "{thin}")?;
        writeln!(
            f,
            "DFS:          time={:.3} ms | moves={}",
            ms(self.dfs_time),
            opt(self.dfs_moves)
        )?;
        writeln!(
            f,
            "DFS (count):  time={:.3} ms | explored={}",
            ms(self.dfs_count_time),
            self.dfs_explored
        )?;
        writeln!(f, "{thin}")?;
        writeln!(
            f,
            "K-shortest (k={}): time={:.3} ms | routes={} | searches={}",
            self.k,
            ms(self.k_time),
            self.k_routes,
            self.k_searches
        )?;
        if let Some(m) = self.official_moves {
            writeln!(f, "  Official:      moves={m}")?;
        }
        if let Some(m) = self.second_moves {
            writeln!(f, "  Second option: moves={m}")?;
        }
        writeln!(f, "{wide}")
    }
}
