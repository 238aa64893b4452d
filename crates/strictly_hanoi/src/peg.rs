//! Peg identities and disk identifiers.

use serde::{Deserialize, Serialize};

/// A disk identifier: 0 is the smallest disk, `n - 1` the largest on a
/// board of `n` disks. The identifier doubles as the disk's size rank.
pub type Disk = usize;

/// Identifies one of the three pegs (rods/poles/sticks).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Peg {
    /// Usually the starting location.
    A,
    /// Usually the auxiliary pole.
    B,
    /// Usually the target location.
    C,
}

impl Peg {
    /// All three pegs, in order.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Get the label for this peg (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        }
    }

    /// Relabels this peg by exchanging the identities `p1` and `p2`.
    ///
    /// Pegs other than `p1` and `p2` map to themselves. The solver uses
    /// this to translate moves out of a sub-problem whose peg roles were
    /// swapped.
    pub fn swapped(self, p1: Peg, p2: Peg) -> Peg {
        if self == p1 {
            p2
        } else if self == p2 {
            p1
        } else {
            self
        }
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapped_exchanges_named_pegs() {
        assert_eq!(Peg::A.swapped(Peg::A, Peg::B), Peg::B);
        assert_eq!(Peg::B.swapped(Peg::A, Peg::B), Peg::A);
    }

    #[test]
    fn test_swapped_fixes_third_peg() {
        assert_eq!(Peg::C.swapped(Peg::A, Peg::B), Peg::C);
    }
}
