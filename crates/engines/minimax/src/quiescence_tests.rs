use super::*;
use crate::difficulty::SearchConfig;
use chess_core::Game;

fn searcher() -> Searcher {
    Searcher::new(SearchConfig {
        depth: 0,
        use_quiescence: true,
        randomize: false,
    })
}

fn stand_pat(g: &Game) -> Score {
    Score::Centipawns(material_and_position(&g.board()))
}

#[test]
fn test_quiet_position_returns_stand_pat() {
    for fen in [
        chess_core::START_FEN,
        "4k3/8/8/8/8/8/8/R3K3 w - - 0 1",
        "4k3/pppp4/8/8/8/8/PPPP4/4K3 b - - 0 1",
    ] {
        let mut g = Game::from_fen(fen).unwrap();
        for maximizing in [true, false] {
            let score = searcher()
                .quiescence(&mut g, Score::NegInfinity, Score::Infinity, maximizing)
                .unwrap();
            assert_eq!(score, stand_pat(&g), "{fen}");
        }
    }
}

#[test]
fn test_free_capture_raises_the_score() {
    // the rook on d1 can take the loose queen on d5
    let mut g = Game::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").unwrap();
    let mut s = searcher();
    let score = s
        .quiescence(&mut g, Score::NegInfinity, Score::Infinity, true)
        .unwrap();
    assert!(score > stand_pat(&g));
    assert!(score > Score::Centipawns(0));
    assert!(s.nodes() > 0);
    assert_eq!(g.history().count(), 0);
}

#[test]
fn test_defended_pawn_is_not_grabbed_with_the_queen() {
    // Qxd5 exd5 loses the queen, so standing pat is best for white
    let mut g = Game::from_fen("4k3/8/4p3/3p4/8/8/8/3QK3 w - - 0 1").unwrap();
    let score = searcher()
        .quiescence(&mut g, Score::NegInfinity, Score::Infinity, true)
        .unwrap();
    assert_eq!(score, stand_pat(&g));
}

#[test]
fn test_fail_hard_returns_the_bound() {
    let mut g = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let pat = stand_pat(&g);
    let Score::Centipawns(cp) = pat else {
        unreachable!()
    };

    // stand pat already beats beta for the maximizer
    let beta = Score::Centipawns(cp - 10);
    let score = searcher()
        .quiescence(&mut g, Score::NegInfinity, beta, true)
        .unwrap();
    assert_eq!(score, beta);

    // and is already below alpha for the minimizer
    let alpha = Score::Centipawns(cp + 10);
    let score = searcher()
        .quiescence(&mut g, alpha, Score::Infinity, false)
        .unwrap();
    assert_eq!(score, alpha);
}
