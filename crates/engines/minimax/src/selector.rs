//! Root driver: turns a difficulty into the move to play.

use chess_core::{move_to_uci, Color, Move, TimeControl};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::difficulty::{Difficulty, SearchConfig};
use crate::error::SearchError;
use crate::ordering::order_root;
use crate::rules::RulesEngine;
use crate::score::Score;
use crate::search::Searcher;

/// The move chosen for one request, with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mv: Move,
    /// Minimax value of `mv`; `None` when the move was not searched.
    pub score: Option<Score>,
    pub config: SearchConfig,
    pub nodes: u64,
    /// The deadline fired before every root move was searched.
    pub stopped: bool,
    /// Picked at random by the Easy blunder roll.
    pub random: bool,
}

#[derive(Debug, Clone)]
pub struct MoveSelector {
    difficulty: Difficulty,
    time_control: TimeControl,
}

impl MoveSelector {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            time_control: TimeControl::default(),
        }
    }

    /// Bound the search by a deadline. Already started clocks keep running.
    pub fn with_time_control(mut self, time_control: TimeControl) -> Self {
        self.time_control = time_control;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks a move for the side to move in `rules`.
    ///
    /// `rules` is used as the search scratchpad and is back in its original
    /// state when this returns. `Ok(None)` means there is no legal move.
    pub fn select<R, G>(&self, rules: &mut R, rng: &mut G) -> Result<Option<Selection>, SearchError>
    where
        R: RulesEngine + ?Sized,
        G: Rng + ?Sized,
    {
        let mut moves = rules.moves();
        if moves.is_empty() {
            return Ok(None);
        }

        let config = SearchConfig::for_difficulty(self.difficulty, &rules.board());

        let blunder_chance = self.difficulty.blunder_chance();
        if blunder_chance > 0.0 && rng.gen_bool(blunder_chance) {
            if let Some(detail) = moves.choose(rng) {
                info!(
                    difficulty = %self.difficulty,
                    mv = %move_to_uci(detail.mv),
                    "playing a random move"
                );
                return Ok(Some(Selection {
                    mv: detail.mv,
                    score: None,
                    config,
                    nodes: 0,
                    stopped: false,
                    random: true,
                }));
            }
        }

        order_root(&mut moves, config.randomize, rng);

        let maximizing = rules.turn() == Color::White;
        let mut searcher = Searcher::new(config).with_time_control(self.time_control.clone());
        let mut best_score = if maximizing {
            Score::NegInfinity
        } else {
            Score::Infinity
        };
        let mut best: Option<(Move, Score)> = None;

        for detail in &moves {
            if searcher.deadline_passed(true) {
                warn!(
                    searched = ?best.map(|(mv, _)| move_to_uci(mv)),
                    "deadline reached, keeping the best finished root move"
                );
                break;
            }

            let score = searcher.descend(rules, detail.mv, |s, r| {
                s.minimax(
                    r,
                    config.depth.saturating_sub(1),
                    Score::NegInfinity,
                    Score::Infinity,
                    !maximizing,
                )
            })?;
            if searcher.stopped() {
                break;
            }
            debug!(mv = %move_to_uci(detail.mv), %score, "root move");

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves {
                best_score = score;
                best = Some((detail.mv, score));
            }
        }

        let (mv, score) = match best {
            Some((mv, score)) => (mv, Some(score)),
            None => (moves[0].mv, None),
        };

        info!(
            difficulty = %self.difficulty,
            depth = config.depth,
            mv = %move_to_uci(mv),
            score = ?score,
            nodes = searcher.nodes(),
            "move selected"
        );

        Ok(Some(Selection {
            mv,
            score,
            config,
            nodes: searcher.nodes(),
            stopped: searcher.stopped(),
            random: false,
        }))
    }

    /// Like [`MoveSelector::select`], but searches a copy so `rules` is never
    /// touched.
    pub fn select_detached<R, G>(&self, rules: &R, rng: &mut G) -> Result<Option<Selection>, SearchError>
    where
        R: RulesEngine + Clone,
        G: Rng + ?Sized,
    {
        let mut scratch = rules.clone();
        self.select(&mut scratch, rng)
    }
}

/// Chooses the next move for the side to move, or `None` when the game is
/// already over.
pub fn select_move<R, G>(
    rules: &mut R,
    difficulty: Difficulty,
    rng: &mut G,
) -> Result<Option<Move>, SearchError>
where
    R: RulesEngine + ?Sized,
    G: Rng + ?Sized,
{
    let selection = MoveSelector::new(difficulty).select(rules, rng)?;
    Ok(selection.map(|s| s.mv))
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
