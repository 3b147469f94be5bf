use super::*;

fn sample() -> LadderResults {
    let mut results = LadderResults::new(
        vec![
            "Minimax Easy".to_string(),
            "Minimax Medium".to_string(),
            "Minimax Hard".to_string(),
        ],
        LadderConfig::default(),
    );
    results.add_pairing(
        "Minimax Easy",
        "Minimax Medium",
        PairingScore {
            wins: 1,
            losses: 7,
            draws: 2,
        },
    );
    results.add_pairing(
        "Minimax Medium",
        "Minimax Hard",
        PairingScore {
            wins: 0,
            losses: 6,
            draws: 4,
        },
    );
    results
}

#[test]
fn test_standings() {
    let standings = sample().standings();
    assert_eq!(standings[0], ("Minimax Medium".to_string(), 10.0));
    assert_eq!(standings[1], ("Minimax Hard".to_string(), 8.0));
    assert_eq!(standings[2], ("Minimax Easy".to_string(), 2.0));
}

#[test]
fn test_report_lists_every_pairing() {
    let report = sample().generate_report();
    assert!(report.starts_with("=== Ladder: difficulty ladder ==="));
    assert!(report.contains("10 games/pairing, 200 plies max, no move time"));
    assert_eq!(report.matches(" vs ").count(), 3);
}

#[test]
fn test_save_and_load() {
    let path = std::env::temp_dir().join(format!("ladder_results_{}.json", std::process::id()));
    let results = sample();
    results.save(&path).unwrap();
    let loaded = LadderResults::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, results);
}
