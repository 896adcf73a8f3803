//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Sides in the order wins are looked for.
///
/// Boards with two completed owners cannot arise from alternating play.
/// When one is built by hand, X is reported.
const DETECTION_ORDER: [Player; 2] = [Player::X, Player::O];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of the line.
    pub player: Player,
    /// The three cells of the line, in board order.
    pub positions: [Position; 3],
}

fn owns_line(board: &Board, player: Player, line: &[Position; 3]) -> bool {
    line.iter().all(|&pos| board.get(pos) == player.mark())
}

/// Returns the first completed line on the board, if any.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    DETECTION_ORDER.iter().find_map(|&player| {
        LINES
            .iter()
            .find(|line| owns_line(board, player, line))
            .map(|line| WinningLine {
                player,
                positions: *line,
            })
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    DETECTION_ORDER
        .iter()
        .copied()
        .find(|&player| LINES.iter().any(|line| owns_line(board, player, line)))
}
