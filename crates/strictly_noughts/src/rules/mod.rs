//! Game rules for tic-tac-toe.
//!
//! Rules are organized into modules by concern:
//! - `win`: Win detection logic
//! - `draw`: Draw detection logic

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_line, WinningLine, LINES};

use crate::board::Board;
use crate::types::GameStatus;

/// Derives the game status from the board contents.
///
/// A completed line wins, otherwise a full board is a draw.
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
