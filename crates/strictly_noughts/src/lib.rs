//! Strictly Noughts - a pure tic-tac-toe engine
//!
//! The engine holds the 3x3 board, detects wins and draws, and computes
//! optimal moves for a computer opponent by exhaustive minimax search.
//! Rendering and input handling belong to the caller.
//!
//! # Architecture
//!
//! - **Board**: cell storage, move validation, status derivation
//! - **Search**: full-width minimax over private scratch copies
//! - **Session**: turn order, game-over gating and opponent mode for one game
//! - **Config**: TOML-loadable session settings
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{best_move, new_game, place, status, GameStatus, Player, Position};
//!
//! let mut board = new_game();
//! place(&mut board, Position::Center, Player::O).unwrap();
//! assert_eq!(status(&board), GameStatus::InProgress);
//!
//! let reply = best_move(&board, Player::X).unwrap();
//! assert!(board.is_empty(reply));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod config;
mod engine;
mod error;
mod position;
mod rules;
mod search;
mod session;
mod types;

// Crate-level exports - Game types
pub use action::Move;
pub use board::{Board, EmptyPositions};
pub use position::Position;
pub use rules::{WinningLine, LINES};
pub use types::{GameStatus, Mark, Player};

// Crate-level exports - Engine entry points
pub use engine::{best_move, new_game, place, status};
pub use search::{evaluate, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

// Crate-level exports - Session management
pub use config::{Opponent, SessionConfig};
pub use session::Session;

// Crate-level exports - Errors
pub use error::{ConfigError, ParseBoardError, PlaceError, SearchError, SessionError};
