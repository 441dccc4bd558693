use std::collections::{HashMap, VecDeque};

use kroute_core::Position;

use crate::context::Context;
use crate::exclusion::Exclusions;
use crate::path::Path;
use crate::traits::Pather;

/// Counters accumulated by instrumented searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Number of search calls made.
    pub searches: usize,
    /// Number of nodes dequeued (BFS) or entered (DFS).
    pub explored: usize,
}

impl SearchStats {
    /// Fold another set of counters into this one.
    pub fn absorb(&mut self, other: SearchStats) {
        self.searches += other.searches;
        self.explored += other.explored;
    }
}

/// Unconstrained breadth-first shortest path from `start` to `goal`.
///
/// Returns the full path (including both endpoints) or `None` if `goal` is
/// unreachable.
pub fn shortest_path<P: Pather>(pather: &P, start: Position, goal: Position) -> Option<Path> {
    constrained_path(pather, start, goal, &Exclusions::default())
}

/// Breadth-first shortest path that avoids the cells and moves listed in
/// `exclusions`.
///
/// Returns `None` when `start` or `goal` is impassable or excluded, or when
/// no route exists.
pub fn constrained_path<P: Pather>(
    pather: &P,
    start: Position,
    goal: Position,
    exclusions: &Exclusions,
) -> Option<Path> {
    let mut stats = SearchStats::default();
    constrained_path_with(pather, start, goal, exclusions, None, &mut stats)
}

/// Instrumented, cancellable form of [`constrained_path`].
///
/// Adds one search and the number of dequeued nodes to `stats`. If `ctx` is
/// cancelled the search stops at the next dequeue and returns `None`.
pub fn constrained_path_with<P: Pather>(
    pather: &P,
    start: Position,
    goal: Position,
    exclusions: &Exclusions,
    ctx: Option<&Context>,
    stats: &mut SearchStats,
) -> Option<Path> {
    stats.searches += 1;

    if !pather.passable(start) || !pather.passable(goal) {
        return None;
    }
    if exclusions.is_cell_blocked(start) || exclusions.is_cell_blocked(goal) {
        return None;
    }

    let mut queue: VecDeque<Position> = VecDeque::new();
    let mut parent: HashMap<Position, Option<Position>> = HashMap::new();
    let mut nbuf: Vec<Position> = Vec::with_capacity(4);

    queue.push_back(start);
    parent.insert(start, None);

    while let Some(cur) = queue.pop_front() {
        if ctx.is_some_and(Context::is_done) {
            log::debug!("bfs {start} -> {goal}: cancelled");
            return None;
        }
        stats.explored += 1;

        if cur == goal {
            return Some(reconstruct(&parent, goal));
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &next in nbuf.iter() {
            if parent.contains_key(&next) {
                continue;
            }
            if exclusions.is_cell_blocked(next) {
                continue;
            }
            if exclusions.is_transition_blocked(cur, next) {
                continue;
            }
            parent.insert(next, Some(cur));
            queue.push_back(next);
        }
    }

    None
}

/// Walk predecessors back from `goal` and reverse.
fn reconstruct(parent: &HashMap<Position, Option<Position>>, goal: Position) -> Path {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(p) = cur {
        path.push(p);
        cur = parent.get(&p).copied().flatten();
    }
    path.reverse();
    path
}
