//! Depth-first search with backtracking.
//!
//! This is a brute-force baseline: it finds *a* route, not necessarily the
//! shortest, and is used to cross-check [`shortest_path`](crate::shortest_path).
//! Cells are un-marked when the search backs out of them, so the running
//! time is exponential in the worst case. Keep it to small mazes.

use kroute_core::{Direction, Position};

use crate::bfs::SearchStats;
use crate::context::Context;
use crate::path::Path;
use crate::traits::Pather;

/// One level of the explicit search stack.
struct Frame {
    pos: Position,
    /// Index into [`Direction::ALL`] of the next neighbour to try.
    next: usize,
}

/// Depth-first route from `start` to `goal`, trying neighbours up, down,
/// left, right and backtracking out of dead ends.
pub fn backtracking_path<P: Pather>(pather: &P, start: Position, goal: Position) -> Option<Path> {
    let mut stats = SearchStats::default();
    backtracking_path_with(pather, start, goal, None, &mut stats)
}

/// Instrumented, cancellable form of [`backtracking_path`].
///
/// `stats.explored` counts every cell entered, including re-entries after
/// backtracking.
pub fn backtracking_path_with<P: Pather>(
    pather: &P,
    start: Position,
    goal: Position,
    ctx: Option<&Context>,
    stats: &mut SearchStats,
) -> Option<Path> {
    stats.searches += 1;

    if !pather.passable(start) {
        return None;
    }

    // Cells currently on the stack. A cell may be entered again once the
    // search has backed out of it.
    let mut on_path = std::collections::HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    stats.explored += 1;
    on_path.insert(start);
    stack.push(Frame {
        pos: start,
        next: 0,
    });

    loop {
        if start == goal {
            break;
        }
        if ctx.is_some_and(Context::is_done) {
            log::debug!("dfs {start} -> {goal}: cancelled");
            return None;
        }
        let Some(top) = stack.last_mut() else {
            return None;
        };

        if top.next == Direction::ALL.len() {
            // Exhausted: backtrack.
            on_path.remove(&top.pos);
            stack.pop();
            continue;
        }

        let next = top.pos.step(Direction::ALL[top.next]);
        top.next += 1;

        if !pather.passable(next) || on_path.contains(&next) {
            continue;
        }

        stats.explored += 1;
        on_path.insert(next);
        stack.push(Frame { pos: next, next: 0 });

        if next == goal {
            break;
        }
    }

    Some(stack.into_iter().map(|f| f.pos).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{moves, validate_path};
    use kroute_core::Grid;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn follows_neighbour_order_not_length() {
        // Open 3x3 from (0,2) to (0,0): DFS goes down first and winds
        // around instead of stepping left twice.
        let g = Grid::from_rows(vec![vec![9, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
        let path = backtracking_path(&g, p(0, 2), p(0, 0)).unwrap();
        assert_eq!(validate_path(&g, &path, p(0, 2), p(0, 0)), Ok(()));
        assert_eq!(path[1], p(1, 2));
        assert!(moves(&path) > 2);
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        let g = Grid::from_rows(vec![
            vec![0, 0, 0],
            vec![0, 1, 0],
            vec![0, 1, 9],
        ])
        .unwrap();
        // Down first leads into the dead-end left column.
        let path = backtracking_path(&g, p(0, 0), p(2, 2)).unwrap();
        assert_eq!(path, vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)]);
    }

    #[test]
    fn blocked_endpoints() {
        let g = Grid::from_rows(vec![vec![1, 0, 9]]).unwrap();
        assert_eq!(backtracking_path(&g, p(0, 0), p(0, 2)), None);
        assert_eq!(backtracking_path(&g, p(0, 5), p(0, 2)), None);
        let g = Grid::from_rows(vec![vec![0, 1, 9]]).unwrap();
        assert_eq!(backtracking_path(&g, p(0, 0), p(0, 2)), None);
    }

    #[test]
    fn start_is_goal() {
        let g = Grid::from_rows(vec![vec![9]]).unwrap();
        assert_eq!(backtracking_path(&g, p(0, 0), p(0, 0)), Some(vec![p(0, 0)]));
    }

    #[test]
    fn counts_reentries() {
        let g = Grid::from_rows(vec![
            vec![0, 0, 0],
            vec![0, 1, 0],
            vec![0, 1, 9],
        ])
        .unwrap();
        let mut stats = SearchStats::default();
        backtracking_path_with(&g, p(0, 0), p(2, 2), None, &mut stats).unwrap();
        // (0,0) (1,0) (2,0) backtrack, then (0,1) (0,2) (1,2) (2,2).
        assert_eq!(stats.explored, 7);
        assert_eq!(stats.searches, 1);
    }

    #[test]
    fn cancelled_context() {
        let g = Grid::from_rows(vec![vec![0, 0, 9]]).unwrap();
        let ctx = Context::new();
        ctx.cancel();
        let mut stats = SearchStats::default();
        assert_eq!(
            backtracking_path_with(&g, p(0, 0), p(0, 2), Some(&ctx), &mut stats),
            None
        );
    }
}
