use super::*;
use chess_core::{coord_to_sq, Move, SearchResult};
use minimax_engine::{ComputerPlayer, Difficulty};

/// Always answers with the same move, legal or not.
struct Stubborn(Option<Move>);

impl Engine for Stubborn {
    fn search(&mut self, _game: &Game, _limits: SearchLimits) -> SearchResult {
        SearchResult {
            best_move: self.0,
            score: 0,
            depth: 0,
            nodes: 0,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Stubborn"
    }
}

fn square(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

#[test]
fn test_self_play() {
    let mut engine1 = ComputerPlayer::with_seed(Difficulty::Easy, 1);
    let mut engine2 = ComputerPlayer::with_seed(Difficulty::Easy, 2);

    let config = MatchConfig {
        num_games: 2,
        max_plies: 12,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let report = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(report.score.total_games(), 2);
    assert_eq!(report.games.len(), 2);
    for game in &report.games {
        assert!(game.plies <= 12);
        assert_eq!(game.moves.len() as u32, game.plies);
    }
}

#[test]
fn test_colors_alternate() {
    let mut engine1 = ComputerPlayer::with_seed(Difficulty::Easy, 3);
    let mut engine2 = ComputerPlayer::with_seed(Difficulty::Medium, 4);

    let runner = MatchRunner::new(MatchConfig {
        num_games: 2,
        max_plies: 2,
        ..Default::default()
    });
    let report = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(report.games[0].white, "Minimax Easy");
    assert_eq!(report.games[1].white, "Minimax Medium");
    // Two plies can't finish a game
    assert_eq!(report.score.draws, 2);
    assert!(report
        .games
        .iter()
        .all(|g| g.termination == Termination::MaxPlies));
}

#[test]
fn test_mate_is_scored_for_the_winner() {
    let game = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/4R1K1 w - - 0 1").unwrap();
    let mut white = ComputerPlayer::with_seed(Difficulty::Hard, 5);
    let mut black = ComputerPlayer::with_seed(Difficulty::Hard, 6);

    let runner = MatchRunner::new(MatchConfig::default());
    let record = runner.play_from(game, &mut white, &mut black);

    assert_eq!(record.result, GameResult::Win);
    assert_eq!(
        record.termination,
        Termination::Finished(Outcome::Checkmate {
            winner: Color::White
        })
    );
    assert_eq!(record.moves, vec!["Re8#".to_string()]);
    assert_eq!(record.result_str(), "1-0");
}

#[test]
fn test_finished_position_plays_no_moves() {
    let game = Game::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let mut white = Stubborn(None);
    let mut black = Stubborn(None);

    let runner = MatchRunner::new(MatchConfig::default());
    let record = runner.play_from(game, &mut white, &mut black);

    assert_eq!(record.termination, Termination::Finished(Outcome::Stalemate));
    assert_eq!(record.result, GameResult::Draw);
    assert_eq!(record.plies, 0);
}

#[test]
fn test_missing_or_illegal_moves_forfeit() {
    let runner = MatchRunner::new(MatchConfig::default());

    let mut silent = Stubborn(None);
    let mut player = ComputerPlayer::with_seed(Difficulty::Easy, 7);
    let record = runner.play_game(&mut silent, &mut player);
    assert_eq!(
        record.termination,
        Termination::Forfeit {
            loser: Color::White
        }
    );
    assert_eq!(record.result, GameResult::Loss);

    // e2e5 is never legal from the start
    let mut cheat = Stubborn(Some(Move::new(square("e2"), square("e5"))));
    let mut player = ComputerPlayer::with_seed(Difficulty::Easy, 8);
    let record = runner.play_game(&mut player, &mut cheat);
    assert_eq!(
        record.termination,
        Termination::Forfeit {
            loser: Color::Black
        }
    );
    assert_eq!(record.result, GameResult::Win);
    assert_eq!(record.plies, 1);
}

#[test]
fn test_move_time_is_honoured() {
    let mut engine1 = ComputerPlayer::with_seed(Difficulty::Hard, 9);
    let mut engine2 = ComputerPlayer::with_seed(Difficulty::Hard, 10);
    let runner = MatchRunner::new(MatchConfig {
        num_games: 1,
        max_plies: 4,
        time_per_move: Some(Duration::from_millis(20)),
        alternate_colors: false,
    });
    let report = runner.run_match(&mut engine1, &mut engine2);
    let game = &report.games[0];
    assert_eq!(game.moves.len() as u32, game.plies);
    assert!(!matches!(game.termination, Termination::Forfeit { .. }));
}
