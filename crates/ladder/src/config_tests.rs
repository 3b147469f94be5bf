use super::*;

#[test]
fn test_empty_file_uses_defaults() {
    let config = LadderConfig::from_toml_str("").unwrap();
    assert_eq!(config, LadderConfig::default());
    assert_eq!(config.difficulties.len(), 3);
    assert_eq!(config.move_time(), None);
}

#[test]
fn test_partial_file_overrides_some_keys() {
    let config = LadderConfig::from_toml_str(
        r#"
        difficulties = ["easy", "hard"]
        games_per_pairing = 4
        move_time_ms = 250
        seed = 7
        "#,
    )
    .unwrap();
    assert_eq!(config.difficulties, vec![Difficulty::Easy, Difficulty::Hard]);
    assert_eq!(config.games_per_pairing, 4);
    assert_eq!(config.max_plies, 200);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.move_time(), Some(Duration::from_millis(250)));

    let match_config = config.match_config();
    assert_eq!(match_config.num_games, 4);
    assert_eq!(match_config.time_per_move, Some(Duration::from_millis(250)));
}

#[test]
fn test_rejects_bad_configs() {
    for bad in [
        "difficulties = [\"easy\"]",
        "difficulties = [\"easy\", \"easy\"]",
        "games_per_pairing = 0",
        "max_plies = 0",
    ] {
        assert!(
            matches!(LadderConfig::from_toml_str(bad), Err(LadderError::Invalid(_))),
            "{bad}"
        );
    }
    assert!(matches!(
        LadderConfig::from_toml_str("difficulties = [\"expert\"]"),
        Err(LadderError::Toml(_))
    ));
    assert!(matches!(
        LadderConfig::from_toml_str("depth = 5"),
        Err(LadderError::Toml(_))
    ));
}

#[test]
fn test_missing_file_reports_the_path() {
    let err = LadderConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.toml"));
}
