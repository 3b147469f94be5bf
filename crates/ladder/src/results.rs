//! Ladder results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::LadderConfig;
use crate::elo::PairingScore;
use crate::error::LadderError;
use crate::match_runner::GameRecord;

/// Complete ladder results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LadderResults {
    pub name: String,
    /// Engine names in ladder order
    pub participants: Vec<String>,
    pub pairings: Vec<PairingEntry>,
    pub games: Vec<GameRecord>,
    /// Configuration used
    pub config: LadderConfig,
}

/// One pairing, scored from `first`'s side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PairingEntry {
    pub first: String,
    pub second: String,
    pub score: PairingScore,
}

impl LadderResults {
    pub fn new(participants: Vec<String>, config: LadderConfig) -> Self {
        Self {
            name: config.name.clone(),
            participants,
            pairings: Vec::new(),
            games: Vec::new(),
            config,
        }
    }

    pub fn add_pairing(&mut self, first: &str, second: &str, score: PairingScore) {
        self.pairings.push(PairingEntry {
            first: first.to_string(),
            second: second.to_string(),
            score,
        });
    }

    pub fn save(&self, path: &Path) -> Result<(), LadderError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| LadderError::Write {
            path: path.to_path_buf(),
            source,
        })
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

    /// Total points per participant, best first
    pub fn standings(&self) -> Vec<(String, f64)> {
        let mut standings: Vec<(String, f64)> = self
            .participants
            .iter()
            .map(|name| (name.clone(), 0.0))
            .collect();
        for entry in &self.pairings {
            let s = entry.score;
            let first_points = s.wins as f64 + 0.5 * s.draws as f64;
            let second_points = s.losses as f64 + 0.5 * s.draws as f64;
            for (name, points) in standings.iter_mut() {
                if *name == entry.first {
                    *points += first_points;
                } else if *name == entry.second {
                    *points += second_points;
                }
            }
        }
        standings.sort_by(|a, b| b.1.total_cmp(&a.1));
        standings
    }

    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Ladder: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        let move_time = match self.config.move_time_ms {
            Some(ms) => format!("{ms} ms/move"),
            None => "no move time".to_string(),
        };
        report.push_str(&format!(
            "Config: {} games/pairing, {} plies max, {}\n\n",
            self.config.games_per_pairing, self.config.max_plies, move_time
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<16} vs {:<16} {:>5}-{:<5}-{:<5}\n",
            "Engine 1", "Engine 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(56));
        report.push('\n');
        for entry in &self.pairings {
            report.push_str(&format!(
                "{:<16} vs {:<16} {:>5}-{:<5}-{:<5}\n",
                entry.first, entry.second, entry.score.wins, entry.score.losses, entry.score.draws
            ));
        }

        report.push_str("\nStandings:\n");
        for (rank, (name, points)) in self.standings().iter().enumerate() {
            report.push_str(&format!("{:>2}. {:<16} {:>5.1}\n", rank + 1, name, points));
        }
        report
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
