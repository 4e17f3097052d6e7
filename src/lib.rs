//! Gridlock - two-player tic-tac-toe coordinated across threads.
//!
//! # Architecture
//!
//! - **Coordinator**: [`GameState`], the shared board and turn arbiter.
//!   All mutation goes through one critical section; the out-of-turn
//!   actor parks on a condition variable instead of spinning.
//! - **Players**: [`Actor`] drives a [`Strategy`] (sequential scan or
//!   random pick) against the shared game until it terminates.
//! - **Render**: observational board output, serialized independently
//!   of the game lock.
//!
//! # Example
//!
//! ```
//! use gridlock::{Cell, GameState, Outcome, Player, SilentRender};
//!
//! let game = GameState::new(Box::new(SilentRender));
//! assert!(game.attempt_move(Player::X, Cell::new(1, 1)));
//! assert_eq!(game.outcome(), Outcome::Undecided);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod coordinator;
mod game;
mod players;
mod render;

// Crate-level exports - coordinator
pub use coordinator::GameState;

// Crate-level exports - game types
pub use game::{winner, Board, Cell, Move, Outcome, Player, Square};

// Crate-level exports - players
pub use players::{Actor, Sequential, Stochastic, Strategy};

// Crate-level exports - rendering
pub use render::{ConsoleRender, Render, SilentRender};
