//! Rendering collaborators.
//!
//! A renderer observes the board after every accepted placement. It is
//! invoked from inside the game's critical section, so implementations
//! must not hold up the caller beyond a trivial output operation and
//! must never call back into the game.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::game::Board;

/// Observes board snapshots. Purely observational.
pub trait Render: Send + Sync {
    /// Draws one snapshot of the board.
    fn draw(&self, board: &Board);
}

/// Writes each snapshot to stdout.
///
/// Serializes output behind its own lock, independent of the game lock,
/// so a concurrent result printout never tears a frame.
pub struct ConsoleRender {
    out: Mutex<io::Stdout>,
}

impl ConsoleRender {
    /// Creates a renderer bound to stdout.
    pub fn new() -> Self {
        Self {
            out: Mutex::new(io::stdout()),
        }
    }
}

impl Default for ConsoleRender {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for ConsoleRender {
    fn draw(&self, board: &Board) {
        let mut out = self.out.lock().expect("poisoned stdout lock");
        // Output failure is not a game event; drop the frame.
        let _ = writeln!(out, "{}", board.display());
    }
}

/// Discards every snapshot. Used by tests and `--quiet`.
pub struct SilentRender;

impl Render for SilentRender {
    fn draw(&self, _board: &Board) {}
}
