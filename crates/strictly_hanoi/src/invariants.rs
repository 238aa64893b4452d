//! First-class invariants for the Hanoi board.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

use crate::board::Board;
use crate::peg::Peg;
use std::collections::HashSet;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: within each peg, disks strictly decrease in size from
/// bottom to top. No larger disk ever sits above a smaller one.
pub struct OrderedPegs;

impl Invariant<Board> for OrderedPegs {
    fn holds(board: &Board) -> bool {
        Peg::ALL
            .into_iter()
            .all(|peg| board.stack(peg).windows(2).all(|pair| pair[0] > pair[1]))
    }

    fn description() -> &'static str {
        "Disks within each peg strictly decrease from bottom to top"
    }
}

/// Invariant: no disk identifier appears on more than one peg.
pub struct DistinctDisks;

impl Invariant<Board> for DistinctDisks {
    fn holds(board: &Board) -> bool {
        let mut seen = HashSet::new();
        Peg::ALL
            .into_iter()
            .flat_map(|peg| board.stack(peg).iter().copied())
            .all(|disk| seen.insert(disk))
    }

    fn description() -> &'static str {
        "No disk identifier appears on more than one peg"
    }
}

/// Invariant: the disks across all pegs are exactly `0..n` for a board
/// of `n` pieces. Holds for every board reachable from the public
/// constructors; moves relocate disks without adding or removing any.
pub struct CompleteDiskSet;

impl Invariant<Board> for CompleteDiskSet {
    fn holds(board: &Board) -> bool {
        let mut disks: Vec<_> = Peg::ALL
            .into_iter()
            .flat_map(|peg| board.stack(peg).iter().copied())
            .collect();
        disks.sort_unstable();
        disks.into_iter().eq(0..board.piece_count())
    }

    fn description() -> &'static str {
        "Disk identifiers form the complete range 0..n"
    }
}

/// The full invariant set for a Hanoi board.
pub type BoardInvariants = (OrderedPegs, DistinctDisks, CompleteDiskSet);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board_holds() {
        let board = Board::with_size(4).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_mid_game_board_holds() {
        let board = Board::new(vec![3, 2], vec![0], vec![1]).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_gapped_disk_set_violates_completeness() {
        // Constructible (ordering and uniqueness hold) but the id range
        // has a gap, which the completeness invariant flags.
        let board = Board::new(vec![5], vec![0], vec![]).unwrap();
        assert!(OrderedPegs::holds(&board));
        assert!(DistinctDisks::holds(&board));
        assert!(!CompleteDiskSet::holds(&board));

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0],
            InvariantViolation::new(CompleteDiskSet::description())
        );
    }
}
