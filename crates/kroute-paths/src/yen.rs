//! k shortest routes to the exit (Yen's algorithm over unit-cost BFS).
//!
//! Each round takes the most recently accepted route and, for every cell on
//! it except the goal, forces a detour at that cell ("spur"):
//!
//! - the cells before the spur ("root") are forbidden, so the detour cannot
//!   loop back through its own fixed prefix;
//! - the next move of every accepted route that shares the same root is
//!   forbidden, so the detour cannot reproduce a known route.
//!
//! Root and detour are spliced into a candidate. The cheapest candidate
//! (earliest discovered on ties) becomes the next accepted route.

use std::collections::HashSet;

use kroute_core::{Grid, Position};

use crate::bfs::{SearchStats, constrained_path_with};
use crate::context::Context;
use crate::exclusion::Exclusions;
use crate::path::{Path, moves};

/// A not-yet-accepted route.
#[derive(Debug)]
struct Candidate {
    cost: usize,
    path: Path,
}

/// Enumerates up to `k` distinct routes from a start cell to the grid's
/// exit, shortest first.
///
/// ```
/// use kroute_core::{Grid, Position};
/// use kroute_paths::KShortestPaths;
///
/// let grid = Grid::parse("000\n010\n009").unwrap();
/// let routes = KShortestPaths::new(&grid).enumerate(Position::new(0, 0), 3);
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[0].len() - 1, 4);
/// ```
pub struct KShortestPaths<'g> {
    grid: &'g Grid,
    ctx: Option<Context>,
    stats: SearchStats,
}

impl<'g> KShortestPaths<'g> {
    /// Create an enumerator over `grid`.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            ctx: None,
            stats: SearchStats::default(),
        }
    }

    /// Poll `ctx` between spur searches and inside every BFS. Once it is
    /// cancelled the enumeration returns the routes accepted so far.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Counters accumulated by all `enumerate` calls on this value.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Up to `k` distinct routes from `start` to the exit, in non-decreasing
    /// move count. Index 0 is a globally shortest route.
    ///
    /// Returns an empty list when the grid has no exit or the exit cannot be
    /// reached from `start`. A `k` of 0 is treated as 1.
    pub fn enumerate(&mut self, start: Position, k: usize) -> Vec<Path> {
        if k == 0 {
            log::warn!("k = 0 requested, returning the single shortest route");
        }
        let k = k.max(1);

        let Ok(goal) = self.grid.locate_exit() else {
            log::debug!("no exit in grid");
            return Vec::new();
        };

        let ctx = self.ctx.as_ref();
        let Some(first) =
            constrained_path_with(self.grid, start, goal, &Exclusions::new(), ctx, &mut self.stats)
        else {
            log::debug!("exit {goal} unreachable from {start}");
            return Vec::new();
        };
        log::debug!("route 1: {} moves", moves(&first));

        let mut accepted: Vec<Path> = vec![first];
        let mut pool: Vec<Candidate> = Vec::new();
        let mut seen: HashSet<Path> = HashSet::new();

        'rounds: while accepted.len() < k {
            let last = &accepted[accepted.len() - 1];

            for i in 0..last.len() - 1 {
                if ctx.is_some_and(Context::is_done) {
                    log::debug!("enumeration cancelled after {} routes", accepted.len());
                    break 'rounds;
                }

                let spur = last[i];
                let root = &last[..=i];

                let mut exclusions = Exclusions::new().with_cells(root[..i].iter().copied());
                for route in &accepted {
                    if route.len() > i && route[..=i] == *root {
                        if let Some(&next) = route.get(i + 1) {
                            exclusions.block_transition(route[i], next);
                        }
                    }
                }

                let Some(spur_path) =
                    constrained_path_with(self.grid, spur, goal, &exclusions, ctx, &mut self.stats)
                else {
                    log::trace!("spur {i} at {spur}: no detour");
                    continue;
                };

                let mut path = Vec::with_capacity(root.len() + spur_path.len() - 1);
                path.extend_from_slice(root);
                path.extend_from_slice(&spur_path[1..]);

                if seen.contains(&path) {
                    log::trace!("spur {i} at {spur}: duplicate candidate");
                    continue;
                }
                log::trace!("spur {i} at {spur}: candidate of {} moves", moves(&path));
                seen.insert(path.clone());
                pool.push(Candidate {
                    cost: moves(&path),
                    path,
                });
            }

            // Cheapest candidate; `min_by_key` keeps the first of equal keys.
            let Some(best) = pool
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| c.cost)
                .map(|(idx, _)| idx)
            else {
                log::debug!("exhausted after {} routes", accepted.len());
                break;
            };
            let chosen = pool.remove(best);
            log::debug!("route {}: {} moves", accepted.len() + 1, chosen.cost);
            accepted.push(chosen.path);
        }

        accepted
    }
}

/// Up to `k` distinct routes from `start` to the grid's exit, shortest first.
///
/// See [`KShortestPaths::enumerate`].
pub fn k_shortest_paths(grid: &Grid, start: Position, k: usize) -> Vec<Path> {
    KShortestPaths::new(grid).enumerate(start, k)
}
