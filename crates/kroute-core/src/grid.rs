//! The [`Grid`] type: an immutable rectangular maze of [`Cell`]s.
//!
//! A `Grid` is validated once at construction: every row has the same
//! length and every code is one of the known [`Cell`] codes. After that it
//! is never mutated, so any number of searches can borrow it at once.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Bounds, Position};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when building or querying a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows, or its rows have no columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell code outside `{0, 1, 9}`.
    InvalidCode { pos: Position, code: i32 },
    /// A character in textual input that is not a digit.
    InvalidChar { pos: Position, ch: char },
    /// No exit cell exists.
    NoExit,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidCode { pos, code } => {
                write!(f, "grid: invalid cell code {code} at {pos}")
            }
            Self::InvalidChar { pos, ch } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::NoExit => write!(f, "grid: no exit cell"),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An immutable, rectangular 2D grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Bounds,
}

impl Grid {
    /// Build a grid from rows of integer codes.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }
            for (c, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(GridError::InvalidCode {
                    pos: Position::new(r as i32, c as i32),
                    code,
                })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, width as i32),
        })
    }

    /// Build a grid from a flat row-major cell vector.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != rows * cols {
            let found = cells.len() % cols;
            return Err(GridError::Ragged {
                row: cells.len() / cols,
                expected: cols,
                found,
            });
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows as i32, cols as i32),
        })
    }

    /// Parse a grid written as one line of digits per row.
    ///
    /// Whitespace between digits is ignored, as are blank lines.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let r = rows.len() as i32;
            let mut row = Vec::new();
            for ch in line.chars().filter(|ch| !ch.is_whitespace()) {
                let pos = Position::new(r, row.len() as i32);
                let code = ch
                    .to_digit(10)
                    .ok_or(GridError::InvalidChar { pos, ch })?;
                row.push(code as i32);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// The bounding rectangle of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Position) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols() as usize) + p.col as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Position) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_traversable(&self, p: Position) -> bool {
        self.at(p).is_some_and(Cell::is_passable)
    }

    /// Whether `p` is in bounds and a wall.
    #[inline]
    pub fn is_wall(&self, p: Position) -> bool {
        self.at(p) == Some(Cell::Wall)
    }

    /// First exit cell in row-major order.
    pub fn locate_exit(&self) -> Result<Position, GridError> {
        self.iter()
            .find(|&(_, c)| c == Cell::Exit)
            .map(|(p, _)| p)
            .ok_or(GridError::NoExit)
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Position, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The grid as rows of integer codes.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.cols() as usize)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<i32>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<i32>> {
    fn from(g: Grid) -> Self {
        g.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols() as usize) {
            for c in row {
                write!(f, "{}", c.code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 9]]).unwrap()
    }

    #[test]
    fn test_from_rows_and_size() {
        let g = sample();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.at(Position::new(1, 0)), Some(Cell::Wall));
        assert_eq!(g.at(Position::new(2, 2)), Some(Cell::Exit));
        assert_eq!(g.at(Position::new(3, 0)), None);
        assert_eq!(g.at(Position::new(0, -1)), None);
    }

    #[test]
    fn test_locate_exit() {
        assert_eq!(sample().locate_exit(), Ok(Position::new(2, 2)));
    }

    #[test]
    fn test_locate_exit_takes_first_in_row_major_order() {
        let g = Grid::from_rows(vec![vec![0, 0, 9], vec![9, 0, 0]]).unwrap();
        assert_eq!(g.locate_exit(), Ok(Position::new(0, 2)));
    }

    #[test]
    fn test_no_exit() {
        let g = Grid::from_rows(vec![vec![0, 0], vec![0, 1]]).unwrap();
        assert_eq!(g.locate_exit(), Err(GridError::NoExit));
    }

    #[test]
    fn test_traversable() {
        let g = sample();
        assert!(g.is_traversable(Position::new(0, 0)));
        assert!(g.is_traversable(Position::new(2, 2)));
        assert!(!g.is_traversable(Position::new(1, 1)));
        assert!(!g.is_traversable(Position::new(-1, 0)));
        assert!(!g.is_traversable(Position::new(0, 3)));
        assert!(g.is_wall(Position::new(1, 0)));
    }

    #[test]
    fn test_ragged_rejected() {
        let err = Grid::from_rows(vec![vec![0, 0, 0], vec![0, 9]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_invalid_code_rejected() {
        let err = Grid::from_rows(vec![vec![0, 2]]).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidCode {
                pos: Position::new(0, 1),
                code: 2
            }
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Grid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::Empty));
        assert_eq!(Grid::from_cells(0, 3, vec![]), Err(GridError::Empty));
    }

    #[test]
    fn test_from_cells_length_mismatch() {
        let err = Grid::from_cells(2, 2, vec![Cell::Free; 3]).unwrap_err();
        assert!(matches!(err, GridError::Ragged { .. }));
    }

    #[test]
    fn test_parse() {
        let g = Grid::parse("000\n110\n\n0 0 9\n").unwrap();
        assert_eq!(g, sample());
        assert_eq!(g.to_string(), "000\n110\n009\n");
    }

    #[test]
    fn test_parse_invalid_char() {
        let err = Grid::parse("00\n0x\n").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                pos: Position::new(1, 1),
                ch: 'x'
            }
        );
    }

    #[test]
    fn test_iter_and_count() {
        let g = sample();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 9);
        assert_eq!(items[3], (Position::new(1, 0), Cell::Wall));
        assert_eq!(g.count(Cell::Wall), 2);
        assert_eq!(g.count(Cell::Exit), 1);
        assert_eq!(g.to_rows(), vec![vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 9]]);
    }
}
