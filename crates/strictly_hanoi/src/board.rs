//! The Tower of Hanoi board: three ordered disk stacks.
//!
//! The board is the sole gate through which state changes are validated
//! and applied. Peg stacks are never handed out mutably; the only
//! mutation entry point is [`Board::apply_move`].

use crate::action::{Move, MoveError};
use crate::peg::{Disk, Peg};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A mutable Tower of Hanoi position.
///
/// Each disk is a unique integer from 0 (smallest) to `n - 1` (largest).
/// Each peg is an ordered stack where the first element is the disk
/// lowest in the stack; disks are pushed and popped at the top end.
///
/// Two invariants hold after construction and after every mutation:
/// disks within a peg strictly decrease in size from bottom to top, and
/// no disk appears on more than one peg. Construction fails rather than
/// repairing a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    peg_a: Vec<Disk>,
    peg_b: Vec<Disk>,
    peg_c: Vec<Disk>,
}

impl Board {
    /// Creates a board from explicit peg stacks, bottom-to-top.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MisorderedPeg`] if any peg stacks a larger
    /// disk on a smaller one, or [`BoardError::DuplicateDisk`] if a disk
    /// identifier appears more than once across the three pegs.
    #[instrument]
    pub fn new(peg_a: Vec<Disk>, peg_b: Vec<Disk>, peg_c: Vec<Disk>) -> Result<Self, BoardError> {
        for (peg, stack) in Peg::iter().zip([&peg_a, &peg_b, &peg_c]) {
            if !stack.windows(2).all(|pair| pair[0] > pair[1]) {
                return Err(BoardError::MisorderedPeg { peg });
            }
        }

        let mut seen = HashSet::new();
        for &disk in peg_a.iter().chain(&peg_b).chain(&peg_c) {
            if !seen.insert(disk) {
                return Err(BoardError::DuplicateDisk { disk });
            }
        }

        Ok(Self {
            peg_a,
            peg_b,
            peg_c,
        })
    }

    /// Creates a board with all disks stacked on peg A.
    ///
    /// Peg A is filled from the largest disk first to the smallest last:
    /// `[n - 1, ..., 1, 0]`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            peg_a: (0..size).rev().collect(),
            peg_b: Vec::new(),
            peg_c: Vec::new(),
        })
    }

    /// Creates a board with randomly distributed disks.
    ///
    /// Starts from the ordered board and assigns each disk, largest
    /// first, to one of the three pegs drawn uniformly from the given
    /// generator. Disks assigned to the same peg keep their relative
    /// size order, so the result is always a valid board. This is a
    /// per-disk assignment policy, not a uniform draw over reachable
    /// game states.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero.
    #[instrument(skip(rng))]
    pub fn random_with_size<R: rand::Rng>(size: usize, rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::with_size(size)?;
        for disk in std::mem::take(&mut board.peg_a) {
            let target = Peg::ALL[rng.random_range(0..3)];
            board.stack_mut(target).push(disk);
        }
        Ok(board)
    }

    /// Returns true in case all disks are on peg C.
    pub fn is_solved(&self) -> bool {
        self.peg_a.is_empty() && self.peg_b.is_empty()
    }

    /// Returns the total number of disks across all three pegs.
    ///
    /// Constant for the life of a board: moves relocate disks, they
    /// never add or remove them.
    pub fn piece_count(&self) -> usize {
        self.peg_a.len() + self.peg_b.len() + self.peg_c.len()
    }

    /// Returns the peg currently holding the given disk.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoSuchDisk`] if no peg contains the disk.
    pub fn peg_of(&self, disk: Disk) -> Result<Peg, BoardError> {
        Peg::ALL
            .into_iter()
            .find(|&peg| self.stack(peg).contains(&disk))
            .ok_or(BoardError::NoSuchDisk { disk })
    }

    /// Returns the disk stack of a peg, bottom-to-top.
    pub fn stack(&self, peg: Peg) -> &[Disk] {
        match peg {
            Peg::A => &self.peg_a,
            Peg::B => &self.peg_b,
            Peg::C => &self.peg_c,
        }
    }

    fn stack_mut(&mut self, peg: Peg) -> &mut Vec<Disk> {
        match peg {
            Peg::A => &mut self.peg_a,
            Peg::B => &mut self.peg_b,
            Peg::C => &mut self.peg_c,
        }
    }

    /// Applies a move, relocating the top disk of `from` onto `to`.
    ///
    /// On any failure the board is left exactly as it was before the
    /// call. A solved board still accepts moves; there is no terminal
    /// lock-out.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::EmptySource`] if the source peg holds no
    /// disks, or [`MoveError::IllegalSizeOrder`] if the target peg's top
    /// disk is smaller than the disk being moved.
    #[instrument(skip(self), fields(board = %self))]
    pub fn apply_move(&mut self, mov: Move) -> Result<(), MoveError> {
        let disk = self
            .stack_mut(mov.from())
            .pop()
            .ok_or(MoveError::EmptySource { peg: mov.from() })?;

        if let Some(&onto) = self.stack(mov.to()).last() {
            if onto < disk {
                // Roll back the removal so the board is untouched.
                self.stack_mut(mov.from()).push(disk);
                return Err(MoveError::IllegalSizeOrder { disk, onto });
            }
        }

        self.stack_mut(mov.to()).push(disk);
        debug!(%mov, disk, "Applied move");
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A:{:?}, B:{:?}, C:{:?}",
            self.peg_a, self.peg_b, self.peg_c
        )
    }
}

/// Shadow struct for serde, so deserialized boards pass the same
/// validation as constructed ones.
#[derive(Serialize, Deserialize)]
struct RawBoard {
    peg_a: Vec<Disk>,
    peg_b: Vec<Disk>,
    peg_c: Vec<Disk>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::new(raw.peg_a, raw.peg_b, raw.peg_c)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        Self {
            peg_a: board.peg_a,
            peg_b: board.peg_b,
            peg_c: board.peg_c,
        }
    }
}

/// Error that can occur when constructing or querying a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A peg stacks a larger disk on a smaller one.
    #[display("Invalid peg {peg}: cannot stack large disks on small ones")]
    MisorderedPeg {
        /// The offending peg.
        peg: Peg,
    },

    /// A disk identifier appears on more than one peg.
    #[display("Duplicate disk found: {disk}")]
    DuplicateDisk {
        /// The duplicated disk identifier.
        disk: Disk,
    },

    /// A board was requested with no disks.
    #[display("Must use at least one disk (got {size})")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },

    /// No peg holds the requested disk.
    #[display("There is no disk with size {disk}")]
    NoSuchDisk {
        /// The missing disk identifier.
        disk: Disk,
    },
}
