//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Mark;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|m| *m != Mark::Empty)
}
