//! Difficulty levels and the search settings they map to.
//!
//! | Difficulty | Depth | Quiescence | Root shuffle | Random move |
//! |------------|-------|------------|--------------|-------------|
//! | Easy       | 1     | no         | yes          | 60%         |
//! | Medium     | 2     | yes        | no           | never       |
//! | Hard       | 3 (4 in endgames) | yes | no     | never       |
//!
//! The Easy random move is decided by the move selector before any search
//! runs; it is not a search parameter.

use std::fmt;
use std::str::FromStr;

use chess_core::Piece;
use serde::{Deserialize, Serialize};

use crate::error::ParseDifficultyError;
use crate::eval::phase_material;

/// Non-pawn material (both colours) below which Hard searches one ply deeper.
pub const ENDGAME_MATERIAL_THRESHOLD: i32 = 1200;

const EASY_BLUNDER_CHANCE: f64 = 0.6;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Probability that the selector skips search and plays a random move.
    pub fn blunder_chance(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_BLUNDER_CHANCE,
            Difficulty::Medium | Difficulty::Hard => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Parameters for a single search, derived fresh for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched from the root, root move included.
    pub depth: u8,
    /// Extend horizon nodes with a captures-only search.
    pub use_quiescence: bool,
    /// Shuffle equally scored root moves.
    pub randomize: bool,
}

impl SearchConfig {
    pub fn for_difficulty(difficulty: Difficulty, board: &[Option<Piece>; 64]) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                depth: 1,
                use_quiescence: false,
                randomize: true,
            },
            Difficulty::Medium => Self {
                depth: 2,
                use_quiescence: true,
                randomize: false,
            },
            Difficulty::Hard => Self {
                depth: if phase_material(board) < ENDGAME_MATERIAL_THRESHOLD {
                    4
                } else {
                    3
                },
                use_quiescence: true,
                randomize: false,
            },
        }
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
