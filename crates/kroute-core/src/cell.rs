//! The [`Cell`] type: the occupancy code of one maze square.

use std::fmt;

/// Occupancy of a single grid square.
///
/// The integer codes are the ones maze files are written with:
/// `0` free, `1` wall, `9` exit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub enum Cell {
    #[default]
    Free,
    Wall,
    Exit,
}

impl Cell {
    pub const FREE_CODE: i32 = 0;
    pub const WALL_CODE: i32 = 1;
    pub const EXIT_CODE: i32 = 9;

    /// Decode an integer cell code.
    #[inline]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            Self::FREE_CODE => Some(Self::Free),
            Self::WALL_CODE => Some(Self::Wall),
            Self::EXIT_CODE => Some(Self::Exit),
            _ => None,
        }
    }

    /// The integer code of this cell.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Self::Free => Self::FREE_CODE,
            Self::Wall => Self::WALL_CODE,
            Self::Exit => Self::EXIT_CODE,
        }
    }

    /// Whether a route may pass through this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Error returned when an integer is not one of the known cell codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownCode(pub i32);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cell code {}", self.0)
    }
}

impl std::error::Error for UnknownCode {}

impl TryFrom<i32> for Cell {
    type Error = UnknownCode;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownCode(code))
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.code()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Cell::Exit).unwrap(), "9");
        let back: Cell = serde_json::from_str("1").unwrap();
        assert_eq!(back, Cell::Wall);
        assert!(serde_json::from_str::<Cell>("5").is_err());
    }
}
