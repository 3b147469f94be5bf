use super::*;
use crate::uci::parse_uci_move;

fn play_uci(game: &mut Game, moves: &[&str]) {
    for txt in moves {
        let mv = parse_uci_move(game.position(), txt).expect("legal move");
        game.play(mv).unwrap();
    }
}

#[test]
fn play_and_undo_restore_the_position() {
    let mut game = Game::new();
    let start = game.fen();
    play_uci(&mut game, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"]);
    assert_ne!(game.fen(), start);

    while game.undo().is_some() {}
    assert_eq!(game.fen(), start);
    assert_eq!(game.history().count(), 0);
}

#[test]
fn play_rejects_move_into_check() {
    // The e2 bishop is pinned against the king by the e8 rook.
    let mut game = Game::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    let before = game.fen();
    let pinned = Move::new(coord_to_sq("e2").unwrap(), coord_to_sq("d3").unwrap());

    assert!(matches!(game.play(pinned), Err(MoveError::Illegal(_))));
    assert_eq!(game.fen(), before);
}

#[test]
fn play_rejects_empty_square() {
    let mut game = Game::new();
    let mv = Move::new(coord_to_sq("e4").unwrap(), coord_to_sq("e5").unwrap());
    assert!(matches!(game.play(mv), Err(MoveError::NoPiece(_))));
}

#[test]
fn fools_mate_is_checkmate() {
    let mut game = Game::new();
    play_uci(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(game.is_check());
    assert!(game.is_checkmate());
    assert!(!game.is_draw());
    assert_eq!(
        game.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn stalemate_counts_as_draw() {
    let game = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(game.is_stalemate());
    assert!(game.is_draw());
    assert!(game.is_game_over());
    assert_eq!(game.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn knight_shuffle_reaches_threefold_repetition() {
    let mut game = Game::new();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    play_uci(&mut game, &shuffle);
    assert!(!game.is_threefold_repetition());
    play_uci(&mut game, &shuffle);
    assert!(game.is_threefold_repetition());
    assert_eq!(game.outcome(), Some(Outcome::Repetition));

    game.undo();
    assert!(!game.is_threefold_repetition());
}

#[test]
fn moves_from_filters_by_square() {
    let game = Game::new();
    let knight = game.moves_from(coord_to_sq("b1").unwrap());
    assert_eq!(knight.len(), 2);
    assert!(knight.iter().all(|d| d.piece == PieceKind::Knight));
}

#[test]
fn fen_round_trip() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 3 17";
    let game = Game::from_fen(fen).unwrap();
    assert_eq!(game.fen(), fen);
}

#[test]
fn fen_errors_are_reported() {
    assert_eq!(
        Game::from_fen("8/8/8 w - -").unwrap_err(),
        FenError::RankCount(3)
    );
    assert_eq!(
        Game::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap_err(),
        FenError::Kings("white")
    );
    assert!(matches!(
        Game::from_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1"),
        Err(FenError::SideToMove(_))
    ));
}

#[test]
fn king_capturing_positions_are_rejected() {
    // the rook on e1 attacks the black king with white to move
    assert_eq!(
        Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").unwrap_err(),
        FenError::WaitingSideInCheck
    );
    // same position with black to move is an ordinary check
    let game = Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").unwrap();
    assert!(game.is_check());
    assert_eq!(game.legal_move_count(), 4);
}
