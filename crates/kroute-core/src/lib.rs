//! **kroute-core**: occupancy-grid model for k-shortest route search.
//!
//! This crate provides the foundational types shared across the *kroute*
//! workspace: geometry primitives, the cell codes of a maze, and the
//! immutable [`Grid`] the path searches run against.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use geom::{Bounds, Direction, Position};
pub use grid::{Grid, GridError};
