//! Per-search exclusion sets: forbidden cells and forbidden moves.

use std::collections::HashSet;

use kroute_core::Position;

/// A directed move between two adjacent cells.
///
/// `Transition { from: a, to: b }` and `Transition { from: b, to: a }` are
/// different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: Position,
    pub to: Position,
}

impl Transition {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Cells a search must not enter and moves it must not take.
///
/// An exclusion set belongs to a single search call. The default value
/// excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    cells: HashSet<Position>,
    transitions: HashSet<Transition>,
}

impl Exclusions {
    /// An empty exclusion set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid entering `p`.
    pub fn block_cell(&mut self, p: Position) {
        self.cells.insert(p);
    }

    /// Forbid the move `from -> to`.
    pub fn block_transition(&mut self, from: Position, to: Position) {
        self.transitions.insert(Transition::new(from, to));
    }

    /// Builder form of [`block_cell`](Self::block_cell) for many cells.
    pub fn with_cells(mut self, cells: impl IntoIterator<Item = Position>) -> Self {
        self.cells.extend(cells);
        self
    }

    /// Builder form of [`block_transition`](Self::block_transition) for
    /// many moves.
    pub fn with_transitions(mut self, moves: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions.extend(moves);
        self
    }

    #[inline]
    pub fn is_cell_blocked(&self, p: Position) -> bool {
        self.cells.contains(&p)
    }

    #[inline]
    pub fn is_transition_blocked(&self, from: Position, to: Position) -> bool {
        self.transitions.contains(&Transition::new(from, to))
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.transitions.is_empty()
    }

    pub fn blocked_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn blocked_transitions(&self) -> usize {
        self.transitions.len()
    }
}
