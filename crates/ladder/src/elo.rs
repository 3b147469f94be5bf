//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LadderError;

/// Default starting Elo for new players
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Result of a single game for one player
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the opponent's side.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Running score of a pairing, from the first player's point of view
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PairingScore {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl PairingScore {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of points won (1 per win, 0.5 per draw)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One rating update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairingRecord {
    pub first: String,
    pub second: String,
    pub score: PairingScore,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
    pub elo_change: f64,
}

/// Ratings of every player seen so far
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EloTracker {
    pub ratings: BTreeMap<String, f64>,
    pub games_played: BTreeMap<String, u32>,
    pub history: Vec<PairingRecord>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, LadderError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LadderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| LadderError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`EloTracker::load`], but a missing file starts a fresh table.
    pub fn load_or_default(path: &Path) -> Result<Self, LadderError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), LadderError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| LadderError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Current rating, [`DEFAULT_ELO`] for unknown players
    pub fn rating(&self, player: &str) -> f64 {
        self.ratings.get(player).copied().unwrap_or(DEFAULT_ELO)
    }

    /// Expected score of `first` against `second`
    pub fn expected_score(&self, first: &str, second: &str) -> f64 {
        let r1 = self.rating(first);
        let r2 = self.rating(second);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Moves rating points between the two players after a pairing
    pub fn update_ratings(&mut self, first: &str, second: &str, score: &PairingScore) {
        let expected = self.expected_score(first, second);
        let games = score.total_games() as f64;
        let elo_change = K_FACTOR * games * (score.score() - expected);

        let r1 = self.rating(first);
        let r2 = self.rating(second);
        self.ratings.insert(first.to_string(), r1 + elo_change);
        self.ratings.insert(second.to_string(), r2 - elo_change);

        *self.games_played.entry(first.to_string()).or_insert(0) += score.total_games();
        *self.games_played.entry(second.to_string()).or_insert(0) += score.total_games();

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        self.history.push(PairingRecord {
            first: first.to_string(),
            second: second.to_string(),
            score: *score,
            timestamp,
            elo_change,
        });
    }

    /// Players sorted by rating, best first
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        entries
    }

    pub fn format_leaderboard(&self) -> String {
        let mut out = String::from("=== Leaderboard ===\n");
        out.push_str(&format!("{:<20} {:>8} {:>8}\n", "Player", "Elo", "Games"));
        out.push_str(&"-".repeat(38));
        out.push('\n');
        for (name, rating, games) in self.leaderboard() {
            out.push_str(&format!("{:<20} {:>8.1} {:>8}\n", name, rating, games));
        }
        out
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
