//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples in evaluation order: rows top-to-bottom,
/// columns left-to-right, then the two diagonals (TL-BR, TR-BL).
///
/// The order is observable: when a single move completes more than
/// one line, the first match in this order is the line reported.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed three-in-a-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player holding the line.
    pub player: Player,
    /// The three positions forming the line.
    pub positions: [Position; 3],
}

/// Checks for a completed line on the board.
///
/// Returns the first triple (in [`WIN_LINES`] order) whose three
/// squares are occupied by the same player, `None` otherwise.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(WinningLine {
                    player,
                    positions: line,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        let line = winning_line(&board).expect("top row should win");
        assert_eq!(line.player, Player::X);
        assert_eq!(
            line.positions,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        let line = winning_line(&board).expect("diagonal should win");
        assert_eq!(line.player, Player::O);
        assert_eq!(
            line.positions,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_reported() {
        // X holds both the top row and the left column; the row comes
        // first in WIN_LINES so it must be the one reported.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        let line = winning_line(&board).expect("should find a line");
        assert_eq!(
            line.positions,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
