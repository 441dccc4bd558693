//! Maze sources: the built-in labyrinth and maze files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use kroute_core::{Grid, GridError, Position};

/// The 12x12 demonstration labyrinth.
pub const LABYRINTH: &str = include_str!("../mazes/labyrinth.txt");

/// Default start cell for the demonstration labyrinth.
pub const LABYRINTH_START: Position = Position::new(1, 0);

/// Errors that can occur when loading a maze.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not a JSON array of integer rows.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The rows do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "invalid maze JSON in {}: {source}", path.display())
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// The built-in demonstration labyrinth.
pub fn builtin() -> Result<Grid, GridError> {
    Grid::parse(LABYRINTH)
}

/// Load a maze file.
///
/// Files ending in `.json` hold an array of integer rows; anything else is
/// read as one line of digits per row.
pub fn load(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let rows: Vec<Vec<i32>> = serde_json::from_str(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Grid::from_rows(rows)?)
    } else {
        Ok(Grid::parse(&text)?)
    }
}
