//! Search scores with forced mates kept apart from centipawn values.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Legacy magnitude used when a mate has to be rendered as centipawns.
pub const MATE_VALUE: i32 = 100_000;

/// Outcome of searching a node, from white's point of view.
///
/// Ordered `NegInfinity < MaximizerMated < Centipawns < MinimizerMated < Infinity`.
/// `depth` is the search depth still remaining when the mate was found, so a
/// larger depth means a mate closer to the root: `MaximizerMated` gets worse
/// for white as depth grows and `MinimizerMated` gets better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    NegInfinity,
    /// White (the maximizing side) is checkmated.
    MaximizerMated { depth: u8 },
    Centipawns(i32),
    /// Black (the minimizing side) is checkmated.
    MinimizerMated { depth: u8 },
    Infinity,
}

impl Score {
    pub const DRAW: Score = Score::Centipawns(0);

    /// Score of a node whose side to move has been checkmated.
    pub fn mated(maximizing: bool, depth: u8) -> Score {
        if maximizing {
            Score::MaximizerMated { depth }
        } else {
            Score::MinimizerMated { depth }
        }
    }

    pub fn is_mate(self) -> bool {
        matches!(
            self,
            Score::MaximizerMated { .. } | Score::MinimizerMated { .. }
        )
    }

    /// Flattens the score to white-positive centipawns, with mates encoded as
    /// `±(100000 + depth)`.
    pub fn to_centipawns(self) -> i32 {
        match self {
            Score::NegInfinity => -i32::MAX,
            Score::MaximizerMated { depth } => -(MATE_VALUE + i32::from(depth)),
            Score::Centipawns(cp) => cp,
            Score::MinimizerMated { depth } => MATE_VALUE + i32::from(depth),
            Score::Infinity => i32::MAX,
        }
    }

    fn key(self) -> (u8, i32) {
        match self {
            Score::NegInfinity => (0, 0),
            Score::MaximizerMated { depth } => (1, -i32::from(depth)),
            Score::Centipawns(cp) => (2, cp),
            Score::MinimizerMated { depth } => (3, i32::from(depth)),
            Score::Infinity => (4, 0),
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::NegInfinity => write!(f, "-inf"),
            Score::MaximizerMated { depth } => write!(f, "white mated (depth {depth})"),
            Score::Centipawns(cp) => write!(f, "{cp:+}cp"),
            Score::MinimizerMated { depth } => write!(f, "black mated (depth {depth})"),
            Score::Infinity => write!(f, "+inf"),
        }
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
