use kroute_core::{Grid, Position};

/// Minimal search interface: which cells a route may occupy.
pub trait Pather {
    /// Whether `p` is in bounds and may be entered.
    fn passable(&self, p: Position) -> bool;

    /// Append the passable neighbours of `p` into `buf`, in the order
    /// up, down, left, right. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.passable(n)));
    }
}

impl Pather for Grid {
    #[inline]
    fn passable(&self, p: Position) -> bool {
        self.is_traversable(p)
    }
}
