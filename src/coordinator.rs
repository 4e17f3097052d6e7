//! Shared game state and the turn-synchronization protocol.
//!
//! `GameState` is the single synchronization boundary of the system:
//! the board, the turn holder, the outcome, and the move log all live
//! behind one mutex, paired with a condition variable for turn handoff.
//! Board mutation, outcome evaluation, and the handoff form one
//! indivisible critical section; no two accepted moves ever interleave
//! at the field level.

use std::sync::{Condvar, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::game::{self, Board, Cell, Move, Outcome, Player, Square};
use crate::render::Render;

struct Shared {
    board: Board,
    turn: Player,
    outcome: Outcome,
    log: Vec<Move>,
}

/// The shared board and turn arbiter.
///
/// Created once before the actors start and read one final time after
/// both have stopped; never reset mid-game. Both actors hold it through
/// an `Arc` and funnel every mutation through [`attempt_move`].
///
/// [`attempt_move`]: GameState::attempt_move
pub struct GameState {
    shared: Mutex<Shared>,
    turn_cv: Condvar,
    render: Box<dyn Render>,
}

impl GameState {
    /// Creates a fresh game with an empty board. X moves first.
    pub fn new(render: Box<dyn Render>) -> Self {
        Self {
            shared: Mutex::new(Shared {
                board: Board::new(),
                turn: Player::X,
                outcome: Outcome::Undecided,
                log: Vec::new(),
            }),
            turn_cv: Condvar::new(),
            render,
        }
    }

    // A poisoned lock means an actor panicked mid-move; propagating the
    // panic is the only sound continuation.
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().expect("poisoned game lock")
    }

    /// Attempts to place `player`'s mark at `cell`.
    ///
    /// Blocks while it is not `player`'s turn and the game is still
    /// running; the wait predicate is re-checked after every wake, so
    /// spurious wakeups are harmless. Returns `false` if the game is
    /// already over (immediately, never blocking) or if the cell is
    /// occupied (board and turn unchanged; the caller retries with a
    /// different cell). Returns `true` for every accepted placement,
    /// terminal or not.
    ///
    /// An accepted placement is rendered, logged, and then resolved: a
    /// completed line wins for `player` (win takes priority over a
    /// simultaneous board fill), a full board without a line is a draw,
    /// and otherwise the turn passes to the opponent. Every resolution
    /// notifies the condition variable so an actor parked on its turn is
    /// released, in particular when the game just ended.
    pub fn attempt_move(&self, player: Player, cell: Cell) -> bool {
        let mut shared = self.lock();

        while !shared.outcome.is_terminal() && shared.turn != player {
            shared = self.turn_cv.wait(shared).expect("poisoned game lock");
        }

        if shared.outcome.is_terminal() {
            return false;
        }

        if !shared.board.is_empty(cell) {
            debug!(%player, %cell, "proposal rejected: cell occupied");
            return false;
        }

        shared.board.set(cell, Square::Occupied(player));
        shared.log.push(Move { player, cell });
        debug!(%player, %cell, "move accepted");
        self.render.draw(&shared.board);

        if let Some(winner) = game::winner(&shared.board) {
            shared.outcome = Outcome::Won(winner);
            info!(%winner, moves = shared.log.len(), "game over");
        } else if shared.board.is_full() {
            shared.outcome = Outcome::Draw;
            info!(moves = shared.log.len(), "game over: draw");
        } else {
            shared.turn = player.opponent();
        }

        self.turn_cv.notify_all();
        true
    }

    /// True iff the game has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.lock().outcome.is_terminal()
    }

    /// Momentary snapshot of the outcome.
    ///
    /// `Undecided` before termination, the final value forever after.
    pub fn outcome(&self) -> Outcome {
        self.lock().outcome
    }

    /// Momentary snapshot of the board.
    pub fn board(&self) -> Board {
        self.lock().board
    }

    /// Snapshot of all accepted moves, in acceptance order.
    pub fn moves(&self) -> Vec<Move> {
        self.lock().log.clone()
    }
}
