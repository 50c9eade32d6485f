//! Draw detection logic.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winning line is a draw. Callers must check
/// [`super::winning_line`] first; fullness alone does not decide.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
