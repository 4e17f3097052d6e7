//! Game domain: board, players, and the rules of the grid.

mod rules;
mod types;

pub use rules::winner;
pub use types::{Board, Cell, Move, Outcome, Player, Square};
