//! Minimax search with alpha-beta pruning.
//!
//! The search walks one shared rules engine depth first: every child is
//! entered with `push` and left with `undo` before its result is looked at,
//! so no sibling ever sees another sibling's moves, even on a cutoff or an
//! error.

use chess_core::{move_to_uci, Move, TimeControl};

use crate::difficulty::SearchConfig;
use crate::error::SearchError;
use crate::eval::evaluate;
use crate::ordering::order_moves;
use crate::rules::RulesEngine;
use crate::score::Score;

/// Nodes between two reads of the clock.
const CLOCK_CHECK_INTERVAL: u64 = 256;

/// Search state for a single move request.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    time_control: TimeControl,
    nodes: u64,
    next_clock_check: u64,
    stopped: bool,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            time_control: TimeControl::default(),
            nodes: 0,
            next_clock_check: 0,
            stopped: false,
        }
    }

    /// Attach a deadline. The caller starts the clock.
    pub fn with_time_control(mut self, time_control: TimeControl) -> Self {
        self.time_control = time_control;
        self
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Positions entered so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// True once the deadline fired; scores returned after that are partial.
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Checks the deadline between sibling moves. The clock is only read
    /// every few hundred nodes unless `poll_clock` is set.
    pub(crate) fn deadline_passed(&mut self, poll_clock: bool) -> bool {
        if self.stopped {
            return true;
        }
        let expired = if poll_clock || self.nodes >= self.next_clock_check {
            self.next_clock_check = self.nodes + CLOCK_CHECK_INTERVAL;
            self.time_control.check_time()
        } else {
            self.time_control.is_stopped()
        };
        self.stopped = expired;
        expired
    }

    /// Plays `mv`, runs `child` on the resulting position and takes the move
    /// back before handing over the child's result.
    pub(crate) fn descend<R, F>(
        &mut self,
        rules: &mut R,
        mv: Move,
        child: F,
    ) -> Result<Score, SearchError>
    where
        R: RulesEngine + ?Sized,
        F: FnOnce(&mut Self, &mut R) -> Result<Score, SearchError>,
    {
        rules
            .push(mv)
            .map_err(|source| SearchError::RulesEngineInvariantViolation {
                mv: move_to_uci(mv),
                source,
            })?;
        self.nodes += 1;
        let result = child(self, rules);
        rules.undo();
        result
    }

    /// Scores the current position `depth` plies deep.
    ///
    /// `maximizing` is true when white is to move. Returns the best value
    /// found at this node, which is only a bound when a cutoff happened.
    pub fn minimax<R: RulesEngine + ?Sized>(
        &mut self,
        rules: &mut R,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<Score, SearchError> {
        if depth == 0 {
            return if self.config.use_quiescence {
                self.quiescence(rules, alpha, beta, maximizing)
            } else {
                Ok(Score::Centipawns(evaluate(rules)))
            };
        }

        if rules.is_game_over() {
            return Ok(if rules.is_checkmate() {
                Score::mated(maximizing, depth)
            } else {
                Score::DRAW
            });
        }

        let mut moves = rules.moves();
        order_moves(&mut moves);

        let mut best = if maximizing {
            Score::NegInfinity
        } else {
            Score::Infinity
        };

        for detail in moves {
            if self.deadline_passed(false) {
                break;
            }

            let score = self.descend(rules, detail.mv, |s, r| {
                s.minimax(r, depth - 1, alpha, beta, !maximizing)
            })?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok(best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
