//! Error types for board, search, session and configuration.

use crate::position::Position;
use crate::types::{GameStatus, Player};
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Error that can occur when placing a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlaceError {
    /// The index does not name a cell (valid range is 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidPosition(usize),

    /// The cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(Position),
}

impl std::error::Error for PlaceError {}

/// Error returned by the move search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// The search was asked for a move on a finished game.
    #[display("Cannot search a finished game ({})", _0)]
    InvalidState(GameStatus),
}

impl std::error::Error for SearchError {}

/// Error returned by session-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The move was rejected by the board.
    #[display("Invalid move: {}", _0)]
    Place(PlaceError),

    /// The move search failed.
    #[display("Search failed: {}", _0)]
    Search(SearchError),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    #[from(ignore)]
    GameOver,

    /// A human tried to move while the computer is to play.
    #[display("It's the computer's turn ({})", _0)]
    #[from(ignore)]
    ComputerToMove(Player),

    /// The computer was asked to move on a human's turn.
    #[display("It's the human's turn ({})", _0)]
    #[from(ignore)]
    HumanToMove(Player),

    /// The session is configured for two humans.
    #[display("Session has no computer opponent")]
    #[from(ignore)]
    NoComputerOpponent,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Place(e) => Some(e),
            SessionError::Search(e) => Some(e),
            _ => None,
        }
    }
}

/// Error produced when parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// The text contained a character that is not a cell.
    #[display("Unexpected character {:?} in board", _0)]
    BadCell(char),
}

impl std::error::Error for ParseBoardError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
