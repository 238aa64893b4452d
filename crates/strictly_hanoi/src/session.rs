//! Game session management: the narrow contract a host calls through.
//!
//! A host (HTTP layer, TUI, agent harness) holds one [`GameSession`] as
//! its current-game state and drives it through four operations: reset,
//! read, apply a move, request a hint. The session does no locking;
//! serializing access to a shared session is the host's concern.

use crate::action::{Move, MoveError};
use crate::board::{Board, BoardError};
use crate::solver::{self, HintError};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Disk count of the board a fresh session starts with.
pub const DEFAULT_SIZE: usize = 5;

/// A running Tower of Hanoi game: one board, mutated move by move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
}

impl GameSession {
    /// Creates a session with a fresh canonical board of `size` disks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        info!(size, "Creating new game session");
        Ok(Self {
            board: Board::with_size(size)?,
        })
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board with a fresh canonical one of `size` disks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero; the
    /// current board is kept in that case.
    #[instrument(skip(self))]
    pub fn reset(&mut self, size: usize) -> Result<&Board, BoardError> {
        self.board = Board::with_size(size)?;
        info!(size, "Reset game session");
        Ok(&self.board)
    }

    /// Applies a move to the current board and returns the new state.
    ///
    /// # Errors
    ///
    /// Propagates the [`MoveError`] from [`Board::apply_move`]; the
    /// board is unchanged on failure.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn apply_move(&mut self, mov: Move) -> Result<&Board, MoveError> {
        if let Err(err) = self.board.apply_move(mov) {
            warn!(%mov, %err, "Rejected move");
            return Err(err);
        }
        Ok(&self.board)
    }

    /// Computes the next move of the canonical strategy for the current
    /// board, without applying it.
    ///
    /// # Errors
    ///
    /// Returns [`HintError::AlreadySolved`] if the board is solved.
    /// Boards built by this session always carry the complete disk
    /// range, so the solver's gap error cannot occur here.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn hint(&self) -> Result<Move, HintError> {
        solver::next_move(&self.board)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            // DEFAULT_SIZE is nonzero, so construction cannot fail.
            board: Board::with_size(DEFAULT_SIZE).expect("default board size must be nonzero"),
        }
    }
}
