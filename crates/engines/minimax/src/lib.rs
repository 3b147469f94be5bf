//! Minimax Chess Engine
//!
//! A computer opponent with three strengths. Each request runs one
//! synchronous search and returns a single move:
//! - Static evaluation from material, piece-square tables and mobility
//! - Minimax with alpha-beta pruning over a shared rules engine
//! - Captures-only quiescence search at the horizon
//! - Difficulty levels that set depth, quiescence and root randomization
//!
//! The search talks to the game through the [`RulesEngine`] trait, which
//! [`chess_core::Game`] implements.

mod difficulty;
mod error;
mod eval;
mod ordering;
mod pst;
mod quiescence;
mod rules;
mod score;
mod search;
mod selector;

use chess_core::{Engine, Game, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::error;

pub use difficulty::{Difficulty, SearchConfig, ENDGAME_MATERIAL_THRESHOLD};
pub use error::{ParseDifficultyError, SearchError};
pub use eval::{evaluate, material_and_position, phase_material, piece_value, MOBILITY_WEIGHT};
pub use ordering::{mvv_lva, order_captures, order_moves, order_root};
pub use pst::pst_value;
pub use rules::RulesEngine;
pub use score::{Score, MATE_VALUE};
pub use search::Searcher;
pub use selector::{select_move, MoveSelector, Selection};

/// Computer opponent driven through the [`Engine`] trait.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
    rng: StdRng,
}

impl ComputerPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible play: the same seed gives the same moves.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Engine for ComputerPlayer {
    fn search(&mut self, game: &Game, limits: SearchLimits) -> SearchResult {
        limits.start();

        let selector =
            MoveSelector::new(self.difficulty).with_time_control(limits.time_control.clone());

        match selector.select_detached(game, &mut self.rng) {
            Ok(Some(selection)) => SearchResult {
                best_move: Some(selection.mv),
                score: selection.score.map_or(0, Score::to_centipawns),
                depth: selection.config.depth,
                nodes: selection.nodes,
                stopped: selection.stopped,
            },
            Ok(None) => SearchResult {
                best_move: None,
                score: 0,
                depth: 0,
                nodes: 0,
                stopped: false,
            },
            Err(err) => {
                error!(fen = %game.fen(), %err, "search aborted");
                SearchResult {
                    best_move: None,
                    score: 0,
                    depth: 0,
                    nodes: 0,
                    stopped: true,
                }
            }
        }
    }

    fn name(&self) -> &str {
        match self.difficulty {
            Difficulty::Easy => "Minimax Easy",
            Difficulty::Medium => "Minimax Medium",
            Difficulty::Hard => "Minimax Hard",
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("difficulty") {
            return false;
        }
        match value.parse() {
            Ok(difficulty) => {
                self.difficulty = difficulty;
                true
            }
            Err(err) => {
                error!(%err, "ignoring option");
                false
            }
        }
    }
}
