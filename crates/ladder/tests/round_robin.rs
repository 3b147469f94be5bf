use ladder::{run_ladder, EloTracker, LadderConfig, DEFAULT_ELO};
use minimax_engine::Difficulty;

fn small_config(seed: u64) -> LadderConfig {
    LadderConfig {
        difficulties: vec![Difficulty::Easy, Difficulty::Medium],
        games_per_pairing: 2,
        max_plies: 8,
        seed: Some(seed),
        ..LadderConfig::default()
    }
}

#[test]
fn every_pair_plays_once() {
    let config = LadderConfig {
        difficulties: Difficulty::ALL.to_vec(),
        games_per_pairing: 1,
        max_plies: 2,
        seed: Some(1),
        ..LadderConfig::default()
    };
    let mut tracker = EloTracker::new();
    let results = run_ladder(&config, &mut tracker);

    assert_eq!(results.pairings.len(), 3);
    assert_eq!(results.games.len(), 3);
    assert_eq!(
        results.participants,
        vec!["Minimax Easy", "Minimax Medium", "Minimax Hard"]
    );
    for name in &results.participants {
        assert_eq!(tracker.games_played[name], 2);
    }
    let total: f64 = tracker.ratings.values().sum();
    assert!((total - 3.0 * DEFAULT_ELO).abs() < 1e-6);
}

#[test]
fn seeded_ladders_replay_exactly() {
    let first = run_ladder(&small_config(42), &mut EloTracker::new());
    let second = run_ladder(&small_config(42), &mut EloTracker::new());
    assert_eq!(first.games, second.games);
    assert_eq!(first.pairings, second.pairings);
}
