//! Fixed-order move selection.

use super::Strategy;
use crate::game::Cell;

/// Proposes cells in fixed row-major order, wrapping indefinitely.
pub struct Sequential {
    next: usize,
}

impl Sequential {
    /// Creates a scan starting at the top-left cell.
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl Default for Sequential {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Sequential {
    fn next_candidate(&mut self) -> Cell {
        let cell = Cell::ALL[self.next];
        self.next = (self.next + 1) % Cell::ALL.len();
        cell
    }
}
