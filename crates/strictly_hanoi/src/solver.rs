//! Recursive hint solver.
//!
//! Computes the single next move that advances an arbitrary valid board
//! toward "all disks on peg C". Rather than enumerating explicit
//! sub-cases per peg assignment, any configuration is canonicalized to
//! the frame "largest disk on A, moving toward C, B auxiliary" by
//! relabeling peg identities; the canonical frame is solved recursively
//! and the answer is relabeled back. Each recursive call strips the
//! largest remaining disk (or bottoms out at a single disk), so the
//! recursion terminates in at most one level per disk.

use crate::action::Move;
use crate::board::Board;
use crate::peg::{Disk, Peg};
use derive_more::{Display, Error};
use tracing::instrument;

/// Computes the next move of the canonical recursive strategy.
///
/// Never mutates the board; repeatedly applying the returned move to a
/// freshly initialized board of `n` disks solves it in `2^n - 1` moves.
///
/// # Errors
///
/// Returns [`HintError::AlreadySolved`] if the board is solved, since no
/// further move exists. Returns [`HintError::NoSuchDisk`] if the
/// board's disk identifiers have a gap: the strategy resolves disks by
/// size rank, so it needs the complete `0..n` range, which every board
/// built through the size-based constructors has.
#[instrument(fields(board = %board))]
pub fn next_move(board: &Board) -> Result<Move, HintError> {
    if board.is_solved() {
        return Err(HintError::AlreadySolved);
    }
    solve(
        board.stack(Peg::A).to_vec(),
        board.stack(Peg::B).to_vec(),
        board.stack(Peg::C).to_vec(),
    )
}

/// Solves one frame of the relabeling recursion.
///
/// The arguments are the disk stacks playing the roles of source (A),
/// auxiliary (B) and target (C) in the current frame. At least one disk
/// is off the target peg.
fn solve(peg_a: Vec<Disk>, peg_b: Vec<Disk>, peg_c: Vec<Disk>) -> Result<Move, HintError> {
    let largest = peg_a.len() + peg_b.len() + peg_c.len() - 1;

    // The largest disk is already home: it is irrelevant to the
    // remaining subproblem, so strip it and recurse.
    if peg_c.contains(&largest) {
        return solve(peg_a, peg_b, without(peg_c, largest));
    }

    // The largest disk sits on the auxiliary peg: solve the mirrored
    // board with the roles of A and B exchanged, then translate the
    // answer back into the original labels.
    if peg_b.contains(&largest) {
        return Ok(solve(peg_b, peg_a, peg_c)?.swapped(Peg::A, Peg::B));
    }

    // The largest disk must now be on A; a gapped identifier set means
    // no peg holds it, which is a reported condition, not a loop.
    if !peg_a.contains(&largest) {
        return Err(HintError::NoSuchDisk { disk: largest });
    }

    // Base case: the largest disk is alone on A and C is free.
    if peg_c.is_empty() && peg_a.len() == 1 {
        return Ok(Move::between(Peg::A, Peg::C));
    }

    // The largest disk is on A with others in the way: first clear the
    // remaining disks onto B, expressed by treating B as the target and
    // C as the auxiliary for the sub-board without the largest disk.
    Ok(solve(without(peg_a, largest), peg_c, peg_b)?.swapped(Peg::B, Peg::C))
}

fn without(mut stack: Vec<Disk>, disk: Disk) -> Vec<Disk> {
    stack.retain(|&d| d != disk);
    stack
}

/// Error that can occur when requesting a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HintError {
    /// The board is solved; no further move exists.
    #[display("Board is solved. No hint available.")]
    AlreadySolved,

    /// No peg holds the disk of the given size rank.
    #[display("There is no disk with size {disk}")]
    NoSuchDisk {
        /// The missing disk identifier.
        disk: Disk,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_disk_moves_straight_home() {
        let board = Board::with_size(1).unwrap();
        let mov = next_move(&board).unwrap();
        assert_eq!(mov, Move::new(Peg::A, Peg::C).unwrap());
    }

    #[test]
    fn test_solved_board_has_no_hint() {
        let board = Board::new(vec![], vec![], vec![2, 1, 0]).unwrap();
        assert_eq!(next_move(&board), Err(HintError::AlreadySolved));
    }

    #[test]
    fn test_hint_does_not_mutate() {
        let board = Board::with_size(3).unwrap();
        let snapshot = board.clone();
        let _ = next_move(&board).unwrap();
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_largest_on_auxiliary_remaps_answer() {
        // Largest disk free on B with C open: the mirrored base case
        // sends it straight home, remapped back to B -> C.
        let board = Board::new(vec![0], vec![1], vec![]).unwrap();
        let mov = next_move(&board).unwrap();
        assert_eq!(mov, Move::new(Peg::B, Peg::C).unwrap());
    }
}
