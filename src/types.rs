//! Core domain types for the tic-tac-toe match engine.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
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

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
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

/// 3x3 tic-tac-toe board.
///
/// Squares are only ever written by the engine: an occupied square
/// stays occupied until the whole board is replaced on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so a player can pick one.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert!(!board.is_empty(Position::Center));
        assert!(board.is_empty(Position::TopLeft));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_display_shows_numbers_for_empty() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        let rendered = board.display();
        assert!(rendered.starts_with("X|2|3"));
    }
}
