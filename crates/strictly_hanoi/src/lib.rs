//! Strictly Hanoi - pure Tower of Hanoi game logic.
//!
//! A fixed set of uniquely-sized disks on three pegs, mutated one
//! validated move at a time, with an on-demand solver computing the
//! next optimal move toward the solved state.
//!
//! # Architecture
//!
//! - **Board**: the authoritative puzzle state; validates construction
//!   and validates/applies single-disk moves.
//! - **Solver**: pure recursive hint algorithm converging any valid
//!   board toward "all disks on peg C".
//! - **Session**: the four-operation contract a host holds game state
//!   through (reset, read, move, hint).
//! - **Invariants**: first-class checkable board properties.
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::GameSession;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = GameSession::new(3)?;
//! while !session.board().is_solved() {
//!     let mov = session.hint()?;
//!     session.apply_move(mov)?;
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod invariants;
mod peg;
mod session;
mod solver;

// Crate-level exports - domain types
pub use action::{Move, MoveError};
pub use board::{Board, BoardError};
pub use peg::{Disk, Peg};

// Crate-level exports - solver
pub use solver::{HintError, next_move};

// Crate-level exports - session management
pub use session::{DEFAULT_SIZE, GameSession};

// Crate-level exports - invariants
pub use invariants::{
    BoardInvariants, CompleteDiskSet, DistinctDisks, Invariant, InvariantSet, InvariantViolation,
    OrderedPegs,
};
