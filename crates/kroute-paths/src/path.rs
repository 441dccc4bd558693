//! Routes and route validation.

use std::fmt;

use kroute_core::{Grid, Position};

/// An ordered sequence of positions from a start to a goal.
pub type Path = Vec<Position>;

/// Number of moves in a path (one fewer than the number of cells).
#[inline]
pub fn moves(path: &[Position]) -> usize {
    path.len().saturating_sub(1)
}

/// Why a sequence of positions is not a valid route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDefect {
    /// The path has no cells.
    Empty,
    /// The first cell is not the requested start.
    WrongStart { expected: Position, found: Position },
    /// The last cell is not the requested goal.
    WrongGoal { expected: Position, found: Position },
    /// A cell is out of bounds or a wall.
    Blocked(Position),
    /// Two consecutive cells are not one orthogonal step apart.
    NotAdjacent(Position, Position),
}

impl fmt::Display for PathDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::WrongStart { expected, found } => {
                write!(f, "path starts at {found}, expected {expected}")
            }
            Self::WrongGoal { expected, found } => {
                write!(f, "path ends at {found}, expected {expected}")
            }
            Self::Blocked(p) => write!(f, "path crosses blocked cell {p}"),
            Self::NotAdjacent(a, b) => write!(f, "path jumps from {a} to {b}"),
        }
    }
}

impl std::error::Error for PathDefect {}

/// Check that `path` runs from `start` to `goal` over traversable cells in
/// single orthogonal steps.
pub fn validate_path(
    grid: &Grid,
    path: &[Position],
    start: Position,
    goal: Position,
) -> Result<(), PathDefect> {
    let (&first, &last) = match (path.first(), path.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(PathDefect::Empty),
    };
    if first != start {
        return Err(PathDefect::WrongStart {
            expected: start,
            found: first,
        });
    }
    if last != goal {
        return Err(PathDefect::WrongGoal {
            expected: goal,
            found: last,
        });
    }
    if let Some(&p) = path.iter().find(|&&p| !grid.is_traversable(p)) {
        return Err(PathDefect::Blocked(p));
    }
    if let Some(w) = path.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
        return Err(PathDefect::NotAdjacent(w[0], w[1]));
    }
    Ok(())
}
