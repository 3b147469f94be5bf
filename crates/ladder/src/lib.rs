//! Difficulty ladder for the minimax engine
//!
//! Plays every configured difficulty against every other one and tracks
//! Elo ratings across runs, which shows whether the levels are actually
//! ordered by strength.
//!
//! # Usage
//!
//! ```bash
//! # Round robin with the settings from ladder.toml
//! cargo run -p ladder -- run --config ladder.toml
//!
//! # Quick reproducible run
//! cargo run -p ladder -- run --games 4 --seed 7
//!
//! cargo run -p ladder -- leaderboard
//! ```

mod config;
mod elo;
mod error;
mod match_runner;
mod results;

pub use config::*;
pub use elo::*;
pub use error::LadderError;
pub use match_runner::*;
pub use results::*;

use chess_core::Engine;
use minimax_engine::{ComputerPlayer, Difficulty};
use tracing::info;

/// A player for `difficulty`, seeded from the ladder seed when one is set.
///
/// Every player gets its own stream so two copies of one level still differ.
fn player(config: &LadderConfig, difficulty: Difficulty, slot: u64) -> ComputerPlayer {
    match config.seed {
        Some(seed) => ComputerPlayer::with_seed(difficulty, seed.wrapping_add(slot)),
        None => ComputerPlayer::new(difficulty),
    }
}

/// Plays a full round robin and folds each pairing into `tracker`.
pub fn run_ladder(config: &LadderConfig, tracker: &mut EloTracker) -> LadderResults {
    let runner = MatchRunner::new(config.match_config());
    let participants: Vec<String> = config
        .difficulties
        .iter()
        .map(|&d| player(config, d, 0).name().to_string())
        .collect();
    let mut results = LadderResults::new(participants, config.clone());

    let mut slot = 0;
    for (i, &first) in config.difficulties.iter().enumerate() {
        for &second in &config.difficulties[i + 1..] {
            let mut engine1 = player(config, first, slot);
            let mut engine2 = player(config, second, slot + 1);
            slot += 2;

            let name1 = engine1.name().to_string();
            let name2 = engine2.name().to_string();
            info!(first = %name1, second = %name2, games = config.games_per_pairing, "pairing started");

            let report = runner.run_match(&mut engine1, &mut engine2);
            info!(
                first = %name1,
                second = %name2,
                wins = report.score.wins,
                losses = report.score.losses,
                draws = report.score.draws,
                "pairing finished"
            );

            tracker.update_ratings(&name1, &name2, &report.score);
            results.add_pairing(&name1, &name2, report.score);
            results.games.extend(report.games);
        }
    }

    results
}
