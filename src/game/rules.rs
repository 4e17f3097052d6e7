//! Win detection for the 3x3 grid.

use super::types::{Board, Cell, Player, Square};

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds a full row, column, or
/// diagonal, `None` otherwise.
pub fn winner(board: &Board) -> Option<Player> {
    const LINES: [[Cell; 3]; 8] = [
        // Rows
        [Cell::ALL[0], Cell::ALL[1], Cell::ALL[2]],
        [Cell::ALL[3], Cell::ALL[4], Cell::ALL[5]],
        [Cell::ALL[6], Cell::ALL[7], Cell::ALL[8]],
        // Columns
        [Cell::ALL[0], Cell::ALL[3], Cell::ALL[6]],
        [Cell::ALL[1], Cell::ALL[4], Cell::ALL[7]],
        [Cell::ALL[2], Cell::ALL[5], Cell::ALL[8]],
        // Diagonals
        [Cell::ALL[0], Cell::ALL[4], Cell::ALL[8]],
        [Cell::ALL[2], Cell::ALL[4], Cell::ALL[6]],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
