//! Optimal move selection by exhaustive minimax.
//!
//! The search is full width and unpruned: the 3x3 tree is small enough to
//! walk completely. Scores are absolute, from X's point of view:
//!
//! | outcome  | score |
//! |----------|-------|
//! | X wins   | +10   |
//! | draw     | 0     |
//! | O wins   | -10   |
//!
//! Scores are not discounted by depth, so a win now and a win in three moves
//! look the same to the recursion. [`best_move`] therefore takes an
//! immediate win, or blocks an immediate loss, before searching. Both
//! shortcuts pick a move whose minimax value is already optimal.

use crate::board::Board;
use crate::error::SearchError;
use crate::position::Position;
use crate::rules;
use crate::types::{GameStatus, Player};
use tracing::{debug, instrument, warn};

/// Score of a position X has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;
/// Score of a position O has won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// A candidate move with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchResult {
    position: Option<Position>,
    score: i32,
}

/// Owns the scratch board that the recursion mutates.
///
/// Every placement is undone before the next sibling is tried, so the
/// scratch board is back in its starting state whenever a call returns.
struct Searcher {
    scratch: Board,
    nodes: u64,
}

impl Searcher {
    fn new(board: &Board) -> Self {
        Self {
            scratch: board.clone(),
            nodes: 0,
        }
    }

    fn terminal_score(status: GameStatus) -> Option<i32> {
        match status {
            GameStatus::Won(Player::O) => Some(LOSS_SCORE),
            GameStatus::Won(Player::X) => Some(WIN_SCORE),
            GameStatus::Draw => Some(DRAW_SCORE),
            GameStatus::InProgress => None,
        }
    }

    fn minimax(&mut self, to_move: Player) -> SearchResult {
        self.nodes += 1;

        if let Some(score) = Self::terminal_score(rules::evaluate_status(&self.scratch)) {
            return SearchResult {
                position: None,
                score,
            };
        }

        let maximizing = to_move.is_maximizing();
        let mut best = SearchResult {
            position: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for pos in Position::ALL {
            if !self.scratch.is_empty(pos) {
                continue;
            }

            self.scratch.set(pos, to_move);
            let score = self.minimax(to_move.opponent()).score;
            self.scratch.clear(pos);

            // Strict comparison keeps the lowest index among equal scores.
            let improves = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if improves {
                best = SearchResult {
                    position: Some(pos),
                    score,
                };
            }
        }

        best
    }

    /// First empty cell that completes a line for `player`.
    fn winning_cell(&mut self, player: Player) -> Option<Position> {
        for pos in Position::ALL {
            if !self.scratch.is_empty(pos) {
                continue;
            }

            self.scratch.set(pos, player);
            let wins = rules::check_winner(&self.scratch) == Some(player);
            self.scratch.clear(pos);

            if wins {
                return Some(pos);
            }
        }
        None
    }
}

fn require_in_progress(board: &Board) -> Result<(), SearchError> {
    match board.status() {
        GameStatus::InProgress => Ok(()),
        status => {
            warn!(%status, "Search requested on a finished game");
            Err(SearchError::InvalidState(status))
        }
    }
}

/// Computes the optimal move for `player` on `board`.
///
/// The caller's board is never modified. Among equally scored moves the
/// lowest position wins, so results are deterministic.
///
/// # Errors
///
/// Returns [`SearchError::InvalidState`] if the game is already won or drawn.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn best_move(board: &Board, player: Player) -> Result<Position, SearchError> {
    require_in_progress(board)?;
    let mut searcher = Searcher::new(board);

    if let Some(pos) = searcher.winning_cell(player) {
        debug!(position = %pos, "Completing a line");
        return Ok(pos);
    }

    if let Some(pos) = searcher.winning_cell(player.opponent()) {
        debug!(position = %pos, "Blocking opponent's line");
        return Ok(pos);
    }

    let result = searcher.minimax(player);
    debug!(
        position = ?result.position,
        score = result.score,
        nodes = searcher.nodes,
        "Search complete"
    );

    result
        .position
        .ok_or(SearchError::InvalidState(board.status()))
}

/// Returns the minimax value of `board` with `to_move` to play.
///
/// # Errors
///
/// Returns [`SearchError::InvalidState`] if the game is already won or drawn.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn evaluate(board: &Board, to_move: Player) -> Result<i32, SearchError> {
    require_in_progress(board)?;
    let mut searcher = Searcher::new(board);
    let result = searcher.minimax(to_move);
    debug!(score = result.score, nodes = searcher.nodes, "Evaluation complete");
    Ok(result.score)
}
