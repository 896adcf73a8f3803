//! A single game session: board, turn order and opponent mode.

use crate::action::Move;
use crate::board::Board;
use crate::config::{Opponent, SessionConfig};
use crate::error::SessionError;
use crate::position::Position;
use crate::rules::WinningLine;
use crate::search;
use crate::types::{GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// One game between a human and either a second human or the computer.
///
/// The session owns its board exclusively. Independent games use
/// independent sessions.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Session {
    /// Creates a new session with an empty board.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        info!(opponent = ?config.opponent(), "Creating new game session");
        Self {
            to_move: *config.first_player(),
            config,
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Derives the game status from the board.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    /// Checks if the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.config.computer_player() == Some(self.to_move)
    }

    /// Places the current human player's mark.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] if the game has finished
    /// - [`SessionError::ComputerToMove`] if the computer is to play
    /// - [`SessionError::Place`] if the cell is occupied
    ///
    /// The session is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, SessionError> {
        self.ensure_ongoing()?;

        if self.is_computer_turn() {
            warn!("Human tried to move on the computer's turn");
            return Err(SessionError::ComputerToMove(self.to_move));
        }

        self.apply(pos)
    }

    /// Same as [`Session::play`], taking a raw cell index.
    ///
    /// # Errors
    ///
    /// Adds [`SessionError::Place`] with an invalid-position cause for
    /// indices outside 0-8.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<GameStatus, SessionError> {
        let pos = Position::try_from(index)?;
        self.play(pos)
    }

    /// Lets the computer choose and play its move.
    ///
    /// # Errors
    ///
    /// - [`SessionError::GameOver`] if the game has finished
    /// - [`SessionError::NoComputerOpponent`] for two-human sessions
    /// - [`SessionError::HumanToMove`] if a human is to play
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn computer_move(&mut self) -> Result<Move, SessionError> {
        self.ensure_ongoing()?;

        let computer = self
            .config
            .computer_player()
            .ok_or(SessionError::NoComputerOpponent)?;
        if computer != self.to_move {
            return Err(SessionError::HumanToMove(self.to_move));
        }

        let pos = search::best_move(&self.board, computer)?;
        self.apply(pos)?;
        Ok(Move::new(computer, pos))
    }

    /// Clears the board for a new game with the same configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting session");
        self.board = Board::new();
        self.to_move = *self.config.first_player();
        self.history.clear();
    }

    /// Switches between a human and a computer opponent and starts over.
    #[instrument(skip(self))]
    pub fn set_opponent(&mut self, opponent: Opponent) {
        self.config = self.config.with_opponent(opponent);
        self.reset();
    }

    fn ensure_ongoing(&self) -> Result<(), SessionError> {
        if self.is_over() {
            debug!(status = %self.status(), "Move after game end rejected");
            return Err(SessionError::GameOver);
        }
        Ok(())
    }

    fn apply(&mut self, pos: Position) -> Result<GameStatus, SessionError> {
        let player = self.to_move;
        self.board.place(pos, player)?;
        self.history.push(Move::new(player, pos));

        let status = self.status();
        if !status.is_terminal() {
            self.to_move = player.opponent();
        }

        info!(%player, position = %pos, %status, "Move completed successfully");
        Ok(status)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
