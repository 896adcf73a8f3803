//! The 3x3 board: cell storage, move validation and terminal detection.

use crate::error::{ParseBoardError, PlaceError};
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::types::{GameStatus, Mark, Player};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use std::str::FromStr;
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// The board only knows cell contents. Whose turn it is, and whether a
/// finished game may continue, are decided by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; 9],
        }
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells as an array.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OccupiedCell`] if the cell already holds a mark.
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(board = %self.compact()))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            debug!(occupant = ?self.get(pos), "Rejected move on occupied cell");
            return Err(PlaceError::OccupiedCell(pos));
        }
        self.cells[pos.to_index()] = player.mark();
        Ok(())
    }

    /// Places `player`'s mark at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::InvalidPosition`] for indices outside 0-8, or
    /// [`PlaceError::OccupiedCell`] as [`Board::place`].
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize, player: Player) -> Result<(), PlaceError> {
        let pos = Position::try_from(index)?;
        self.place(pos, player)
    }

    /// Empties a cell. Only the search's private scratch board uses this.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Mark::Empty;
    }

    /// Writes a mark without validation. Only the search's private scratch
    /// board uses this, paired with [`Board::clear`].
    pub(crate) fn set(&mut self, pos: Position, player: Player) {
        self.cells[pos.to_index()] = player.mark();
    }

    /// Derives the current status from the cells.
    pub fn status(&self) -> GameStatus {
        rules::evaluate_status(self)
    }

    /// Returns the winner, if any line is complete.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Returns the first completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Counts the cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&m| m == player.mark()).count()
    }

    /// Iterates the empty positions in ascending order.
    ///
    /// The iterator borrows the board and can be cloned to restart.
    pub fn empty_positions(&self) -> EmptyPositions<'_> {
        EmptyPositions {
            board: self,
            next: 0,
        }
    }

    /// Renders the board as nine characters, `.` for empty cells.
    pub fn compact(&self) -> String {
        self.cells
            .iter()
            .map(|m| match m {
                Mark::Empty => '.',
                Mark::X => 'X',
                Mark::O => 'O',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator over the empty cells of a [`Board`].
#[derive(Debug, Clone)]
pub struct EmptyPositions<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for EmptyPositions<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos) = Position::from_index(self.next) {
            self.next += 1;
            if self.board.is_empty(pos) {
                return Some(pos);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(9usize.saturating_sub(self.next)))
    }
}

impl FusedIterator for EmptyPositions<'_> {}

/// Formats the board as a human-readable grid, numbering empty cells 1-9.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Mark::Empty => write!(f, "{}", pos + 1)?,
                    Mark::X => write!(f, "X")?,
                    Mark::O => write!(f, "O")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells from text.
///
/// `X`/`O` (any case) are marks; `.`, `_` and the digits 1-9 are empty
/// cells; whitespace and the grid characters `|`, `+`, `-`, `/` are skipped.
/// The output of [`Board`]'s `Display` parses back to the same board.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars() {
            let mark = match c {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' | '1'..='9' => Mark::Empty,
                '|' | '+' | '-' | '/' => continue,
                c if c.is_whitespace() => continue,
                other => return Err(ParseBoardError::BadCell(other)),
            };
            cells.push(mark);
        }

        let cells: [Mark; 9] = cells
            .try_into()
            .map_err(|v: Vec<Mark>| ParseBoardError::WrongLength(v.len()))?;
        Ok(Self { cells })
    }
}
