//! Ladder configuration, read from TOML.
//!
//! ```toml
//! name = "nightly"
//! difficulties = ["easy", "medium", "hard"]
//! games_per_pairing = 20
//! max_plies = 160
//! move_time_ms = 500
//! seed = 7
//! results_path = "results/nightly.json"
//! elo_path = "results/elo.json"
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use minimax_engine::Difficulty;
use serde::{Deserialize, Serialize};

use crate::error::LadderError;
use crate::match_runner::MatchConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LadderConfig {
    pub name: String,
    /// Levels taking part; every pair plays one match.
    pub difficulties: Vec<Difficulty>,
    pub games_per_pairing: u32,
    /// Games still running after this many plies are drawn.
    pub max_plies: u32,
    /// Per-move deadline (None = every search runs to completion).
    pub move_time_ms: Option<u64>,
    /// Seeds the players' random choices for reproducible ladders.
    pub seed: Option<u64>,
    pub results_path: PathBuf,
    pub elo_path: PathBuf,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            name: "difficulty ladder".to_string(),
            difficulties: Difficulty::ALL.to_vec(),
            games_per_pairing: 10,
            max_plies: 200,
            move_time_ms: None,
            seed: None,
            results_path: PathBuf::from("ladder_results.json"),
            elo_path: PathBuf::from("ladder_elo.json"),
        }
    }
}

impl LadderConfig {
    pub fn load(path: &Path) -> Result<Self, LadderError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LadderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, LadderError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LadderError> {
        let mut levels = self.difficulties.clone();
        levels.sort();
        levels.dedup();
        if levels.len() != self.difficulties.len() {
            return Err(LadderError::Invalid("difficulties repeat".to_string()));
        }
        if levels.len() < 2 {
            return Err(LadderError::Invalid(
                "at least two difficulties are needed".to_string(),
            ));
        }
        if self.games_per_pairing == 0 {
            return Err(LadderError::Invalid(
                "games_per_pairing must be positive".to_string(),
            ));
        }
        if self.max_plies == 0 {
            return Err(LadderError::Invalid("max_plies must be positive".to_string()));
        }
        Ok(())
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            num_games: self.games_per_pairing,
            max_plies: self.max_plies,
            time_per_move: self.move_time(),
            alternate_colors: true,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
