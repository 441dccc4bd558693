//! Random maze generation.
//!
//! A drunk-walk carves free cells out of an all-wall grid, starting from the
//! requested start cell. The exit goes on the carved cell farthest (in
//! Manhattan distance) from the start, so it is always reachable.

use kroute_core::{Cell, Direction, Grid, GridError, Position};
use rand::{Rng, RngExt};

/// Random-walk maze generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a `rows` x `cols` maze.
    ///
    /// The walk continues until `fill_pct` (0.0–1.0) of the area is free or
    /// a step limit is hit. `start` is clamped into the grid.
    pub fn random_walk(
        &mut self,
        rows: usize,
        cols: usize,
        start: Position,
        fill_pct: f64,
    ) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        let total = rows * cols;
        let target = ((total as f64 * fill_pct.clamp(0.0, 1.0)) as usize).max(2);
        let start = Position::new(
            start.row.clamp(0, rows as i32 - 1),
            start.col.clamp(0, cols as i32 - 1),
        );
        let index = |p: Position| (p.row as usize) * cols + p.col as usize;
        let inside =
            |p: Position| p.row >= 0 && p.col >= 0 && (p.row as usize) < rows && (p.col as usize) < cols;

        let mut cells = vec![Cell::Wall; total];
        let mut carved = 0usize;
        let mut pos = start;
        let step_limit = total * 16;

        for _ in 0..step_limit {
            if carved >= target {
                break;
            }
            if cells[index(pos)] == Cell::Wall {
                cells[index(pos)] = Cell::Free;
                carved += 1;
            }
            let dir = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
            let next = pos.step(dir);
            if inside(next) {
                pos = next;
            }
        }

        if carved < 2 {
            // Single-cell grid: the start is the only cell and becomes the exit.
            cells[index(start)] = Cell::Exit;
        } else {
            let exit = (0..total)
                .filter(|&i| cells[i] == Cell::Free)
                .map(|i| Position::new((i / cols) as i32, (i % cols) as i32))
                .filter(|&p| p != start)
                .max_by_key(|&p| (start.manhattan(p), std::cmp::Reverse(p)))
                .unwrap_or(start);
            cells[index(exit)] = Cell::Exit;
        }
        log::debug!("generated {rows}x{cols} maze with {carved} free cells");

        Grid::from_cells(rows, cols, cells)
    }
}
