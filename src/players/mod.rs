//! Actor loop and move-selection strategies.

mod sequential;
mod stochastic;

pub use sequential::Sequential;
pub use stochastic::Stochastic;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::coordinator::GameState;
use crate::game::{Cell, Player};

/// Produces candidate cells for one player.
///
/// Implementations may be stateful; the actor keeps asking for
/// candidates until the game ends, so a strategy must be able to
/// produce cells indefinitely.
pub trait Strategy: Send {
    /// Returns the next candidate cell to propose.
    fn next_candidate(&mut self) -> Cell;
}

/// Drives one player's proposals against the shared game.
///
/// The actor owns no game state of its own: it loops over its strategy,
/// funnels each candidate into [`GameState::attempt_move`], and pauses
/// briefly after each accepted non-terminal move so one actor cannot
/// monopolize the schedule. Rejected proposals retry immediately with
/// the next candidate.
pub struct Actor {
    game: Arc<GameState>,
    player: Player,
    strategy: Box<dyn Strategy>,
    pause: Duration,
}

impl Actor {
    /// Binds a player and strategy to the shared game.
    pub fn new(
        game: Arc<GameState>,
        player: Player,
        strategy: Box<dyn Strategy>,
        pause: Duration,
    ) -> Self {
        Self {
            game,
            player,
            strategy,
            pause,
        }
    }

    /// Runs the proposal loop until the game ends.
    pub fn run(&mut self) {
        debug!(player = %self.player, "actor started");
        while !self.game.is_over() {
            let cell = self.strategy.next_candidate();
            if self.game.attempt_move(self.player, cell) && !self.game.is_over() {
                thread::sleep(self.pause);
            }
        }
        debug!(player = %self.player, "actor done");
    }
}
