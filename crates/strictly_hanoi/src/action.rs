//! First-class move actions for Tower of Hanoi.
//!
//! Moves are domain events, not side effects. They name the source and
//! target peg of a single-disk relocation and can be validated
//! independently of execution.

use crate::peg::{Disk, Peg};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: relocate the top disk of one peg onto another.
///
/// The pair of peg identities is the whole move; which disk travels is
/// determined by the board the move is applied to. `from != to` is
/// guaranteed by construction, including deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove", into = "RawMove")]
pub struct Move {
    from: Peg,
    to: Peg,
}

impl Move {
    /// Creates a new move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SameSourceTarget`] if `from` and `to` name
    /// the same peg.
    #[instrument]
    pub fn new(from: Peg, to: Peg) -> Result<Self, MoveError> {
        if from == to {
            return Err(MoveError::SameSourceTarget { peg: from });
        }
        Ok(Self { from, to })
    }

    /// Returns the source peg.
    pub fn from(&self) -> Peg {
        self.from
    }

    /// Returns the target peg.
    pub fn to(&self) -> Peg {
        self.to
    }

    /// Crate-internal constructor for endpoints already known distinct.
    pub(crate) fn between(from: Peg, to: Peg) -> Self {
        debug_assert_ne!(from, to);
        Self { from, to }
    }

    /// Relabels both endpoints by exchanging peg identities `p1` and `p2`.
    ///
    /// Swapping is a bijection on pegs, so the endpoints stay distinct.
    pub(crate) fn swapped(self, p1: Peg, p2: Peg) -> Self {
        Self {
            from: self.from.swapped(p1, p2),
            to: self.to.swapped(p1, p2),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Shadow struct for serde, so deserialized moves pass the same
/// constructor check as programmatic ones.
#[derive(Serialize, Deserialize)]
struct RawMove {
    from: Peg,
    to: Peg,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::new(raw.from, raw.to)
    }
}

impl From<Move> for RawMove {
    fn from(mov: Move) -> Self {
        Self {
            from: mov.from,
            to: mov.to,
        }
    }
}

/// Error that can occur when constructing or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Source and target name the same peg.
    #[display("Cannot move from peg {peg} to itself")]
    SameSourceTarget {
        /// The peg named twice.
        peg: Peg,
    },

    /// The source peg has no disks.
    #[display("Cannot move from an empty peg: {peg}")]
    EmptySource {
        /// The empty source peg.
        peg: Peg,
    },

    /// The move would place a larger disk on a smaller one.
    #[display("Cannot place larger disk ({disk}) on smaller disk ({onto})")]
    IllegalSizeOrder {
        /// The disk that was to be moved.
        disk: Disk,
        /// The smaller disk blocking the target peg.
        onto: Disk,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_same_peg() {
        assert_eq!(
            Move::new(Peg::B, Peg::B),
            Err(MoveError::SameSourceTarget { peg: Peg::B })
        );
    }

    #[test]
    fn test_deserialize_rejects_same_peg() {
        let result: Result<Move, _> = serde_json::from_str(r#"{"from":"A","to":"A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let mov = Move::new(Peg::A, Peg::C).unwrap();
        let json = serde_json::to_string(&mov).unwrap();
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mov);
    }

    #[test]
    fn test_swapped_relabels_endpoints() {
        let mov = Move::new(Peg::A, Peg::C).unwrap();
        let swapped = mov.swapped(Peg::B, Peg::C);
        assert_eq!(swapped.from(), Peg::A);
        assert_eq!(swapped.to(), Peg::B);
    }
}
