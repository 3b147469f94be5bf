//! Captures-only search run at the horizon.

use crate::error::SearchError;
use crate::eval::material_and_position;
use crate::ordering::order_captures;
use crate::rules::RulesEngine;
use crate::score::Score;
use crate::search::Searcher;

impl Searcher {
    /// Resolves pending captures below the horizon.
    ///
    /// The stand-pat score is material plus piece-square bonus (no mobility).
    /// Fail-hard: a cutoff returns the bound that was crossed. Terminates
    /// because every capture removes a piece.
    pub fn quiescence<R: RulesEngine + ?Sized>(
        &mut self,
        rules: &mut R,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<Score, SearchError> {
        let stand_pat = Score::Centipawns(material_and_position(&rules.board()));

        if maximizing {
            if stand_pat >= beta {
                return Ok(beta);
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                return Ok(alpha);
            }
            beta = beta.min(stand_pat);
        }

        let mut captures = rules.captures();
        order_captures(&mut captures);

        for detail in captures {
            let score = self.descend(rules, detail.mv, |s, r| {
                s.quiescence(r, alpha, beta, !maximizing)
            })?;

            if maximizing {
                if score >= beta {
                    return Ok(beta);
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    return Ok(alpha);
                }
                beta = beta.min(score);
            }
        }

        Ok(if maximizing { alpha } else { beta })
    }
}

#[cfg(test)]
#[path = "quiescence_tests.rs"]
mod quiescence_tests;
