//! Core domain types for the duel.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A coordinate on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// All nine cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Creates a cell.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, 2]`. Strategies are
    /// contractually bound to the 3x3 grid, so an out-of-range
    /// coordinate is a programming error, not a game event.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < 3 && col < 3,
            "cell ({row}, {col}) outside the 3x3 grid"
        );
        Self { row, col }
    }

    /// Returns the row coordinate (0-2).
    pub fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-2).
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into the board (0-8).
    pub(crate) fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 board, squares stored in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Sets the square at the given cell.
    pub(crate) fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ' ',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                result.push(' ');
                result.push(symbol);
                if col < 2 {
                    result.push_str(" |");
                }
            }
            result.push('\n');
            if row < 2 {
                result.push_str("---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal classification of the game.
///
/// Transitions exactly once from `Undecided` to a terminal value and is
/// immutable thereafter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Game is still in progress.
    #[display("undecided")]
    Undecided,
    /// Game ended with a winner.
    #[display("winner: {_0}")]
    Won(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// True iff the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undecided
    }
}

/// An accepted placement: a player marking a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player that made the move.
    pub player: Player,
    /// The cell that was marked.
    pub cell: Cell,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involutive() {
        for player in Player::iter() {
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_cell_all_is_row_major() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn test_out_of_range_cell_panics() {
        let _ = Cell::new(3, 0);
    }

    #[test]
    fn test_board_starts_empty() {
        let board = Board::new();
        assert!(Cell::ALL.iter().all(|c| board.is_empty(*c)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Cell::new(0, 0), Square::Occupied(Player::X));
        board.set(Cell::new(1, 1), Square::Occupied(Player::O));
        let expected = " X |   |  \n---+---+---\n   | O |  \n---+---+---\n   |   |  \n";
        assert_eq!(board.display(), expected);
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::Undecided.is_terminal());
        assert!(Outcome::Won(Player::X).is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Won(Player::O).to_string(), "winner: O");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}
