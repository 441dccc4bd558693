//! Route search on occupancy grids.
//!
//! This crate provides the search engine of *kroute*:
//!
//! - **Constrained BFS** shortest path with forbidden cells and forbidden
//!   moves ([`constrained_path`], [`shortest_path`])
//! - **k shortest routes**, a grid adaptation of Yen's algorithm driven by
//!   the constrained BFS ([`KShortestPaths`], [`k_shortest_paths`])
//! - **Backtracking DFS**, a brute-force baseline used to cross-check the
//!   BFS results ([`backtracking_path`])
//!
//! Every search owns its working state (queue, predecessor map, visited
//! marks) for the duration of one call; the [`Grid`](kroute_core::Grid) is
//! only ever borrowed immutably.
//!
//! # Determinism
//!
//! Neighbours are expanded up, down, left, right, and candidate routes of
//! equal length are accepted in the order they were discovered. Both
//! orderings decide which route is returned among equal-cost alternatives.

mod bfs;
mod context;
mod dfs;
mod exclusion;
mod path;
mod traits;
mod yen;

pub use bfs::{SearchStats, constrained_path, constrained_path_with, shortest_path};
pub use context::Context;
pub use dfs::{backtracking_path, backtracking_path_with};
pub use exclusion::{Exclusions, Transition};
pub use path::{Path, PathDefect, moves, validate_path};
pub use traits::Pather;
pub use yen::{KShortestPaths, k_shortest_paths};
