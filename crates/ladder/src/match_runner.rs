//! Match runner for playing games between engines

use chess_core::{move_to_san, Color, Engine, Game, Outcome, SearchLimits};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::elo::{GameResult, PairingScore};

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before declaring a draw
    pub max_plies: u32,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 200,
            time_per_move: None,
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    /// Fresh limits for one move; each call gets its own clock.
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::move_time(time),
            None => SearchLimits::unlimited(),
        }
    }
}

/// Why a game stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    Finished(Outcome),
    MaxPlies,
    /// A player returned no move, or an illegal one, in a live position.
    Forfeit { loser: Color },
}

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// From white's point of view
    pub result: GameResult,
    pub termination: Termination,
    pub plies: u32,
    /// Moves in SAN
    pub moves: Vec<String>,
}

impl GameRecord {
    /// "1-0", "0-1" or "1/2-1/2"
    pub fn result_str(&self) -> &'static str {
        match self.result {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Score and games of one match, score from the first engine's side
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub score: PairingScore,
    pub games: Vec<GameRecord>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// The returned score is from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchReport {
        let mut report = MatchReport::default();

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let result = if engine1_white {
                record.result
            } else {
                record.result.flipped()
            };
            report.score.record(result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                white = %record.white,
                black = %record.black,
                result = record.result_str(),
                plies = record.plies,
                termination = ?record.termination,
                "game finished"
            );
            report.games.push(record);
        }

        report
    }

    /// Play a single game from the starting position
    pub fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        self.play_from(Game::new(), white, black)
    }

    /// Play out `game` until it ends or the ply limit is hit
    pub fn play_from(
        &self,
        mut game: Game,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> GameRecord {
        white.new_game();
        black.new_game();
        let white_name = white.name().to_string();
        let black_name = black.name().to_string();

        let mut moves = Vec::new();
        let mut plies = 0;

        let termination = loop {
            if let Some(outcome) = game.outcome() {
                break Termination::Finished(outcome);
            }
            if plies >= self.config.max_plies {
                break Termination::MaxPlies;
            }

            let side = game.turn();
            let engine: &mut dyn Engine = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let result = engine.search(&game, self.config.search_limits());

            let Some(mv) = result.best_move else {
                warn!(engine = engine.name(), fen = %game.fen(), "no move in a live position");
                break Termination::Forfeit { loser: side };
            };
            let san = match move_to_san(&game, mv) {
                Ok(san) => san,
                Err(err) => {
                    warn!(engine = engine.name(), error = %err, "illegal move");
                    break Termination::Forfeit { loser: side };
                }
            };
            if let Err(err) = game.play(mv) {
                warn!(engine = engine.name(), error = %err, "move rejected");
                break Termination::Forfeit { loser: side };
            }
            debug!(ply = plies + 1, san = %san, score = result.score, nodes = result.nodes);
            moves.push(san);
            plies += 1;
        };

        let result = match termination {
            Termination::Finished(outcome) => match outcome.winner() {
                Some(Color::White) => GameResult::Win,
                Some(Color::Black) => GameResult::Loss,
                None => GameResult::Draw,
            },
            Termination::MaxPlies => GameResult::Draw,
            Termination::Forfeit { loser: Color::White } => GameResult::Loss,
            Termination::Forfeit { loser: Color::Black } => GameResult::Win,
        };

        GameRecord {
            white: white_name,
            black: black_name,
            result,
            termination,
            plies,
            moves,
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
