//! Free-function entry points for presentation layers.
//!
//! These mirror the board and search methods for callers that manage a
//! bare [`Board`] themselves instead of using a [`crate::Session`].

use crate::board::Board;
use crate::error::{PlaceError, SearchError};
use crate::position::Position;
use crate::search;
use crate::types::{GameStatus, Player};
use tracing::instrument;

/// Starts a new game: a board with every cell empty.
#[instrument]
pub fn new_game() -> Board {
    Board::new()
}

/// Places `player`'s mark at `pos` on `board`.
///
/// # Errors
///
/// Returns [`PlaceError::OccupiedCell`] if the cell is taken.
pub fn place(board: &mut Board, pos: Position, player: Player) -> Result<(), PlaceError> {
    board.place(pos, player)
}

/// Derives the status of `board`.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn status(board: &Board) -> GameStatus {
    board.status()
}

/// Computes the optimal move for `player`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidState`] if the game is already over.
pub fn best_move(board: &Board, player: Player) -> Result<Position, SearchError> {
    search::best_move(board, player)
}
