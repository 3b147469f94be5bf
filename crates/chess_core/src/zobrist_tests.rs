use super::*;
use crate::board::Position;
use crate::types::{Color, PieceKind};

#[test]
fn test_zobrist_keys_unique() {
    let mut seen = std::collections::HashSet::new();
    for &key in ZOBRIST.all() {
        assert!(seen.insert(key), "Duplicate Zobrist key found");
    }
    assert_eq!(seen.len(), KEY_COUNT);
}

#[test]
fn test_zobrist_piece_key() {
    let piece = Piece::new(Color::White, PieceKind::Pawn);
    assert_ne!(ZOBRIST.piece_key(piece, 0), ZOBRIST.piece_key(piece, 1));
    let black = Piece::new(Color::Black, PieceKind::Pawn);
    assert_ne!(ZOBRIST.piece_key(piece, 0), ZOBRIST.piece_key(black, 0));
}

#[test]
fn test_hash_ignores_move_counters() {
    let a = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
        .unwrap();
    let b = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5")
        .unwrap();
    assert_eq!(a.position_hash(), b.position_hash());
}

#[test]
fn test_hash_sees_side_castling_and_en_passant() {
    let base = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR";
    let h = |rest: &str| {
        Position::from_fen(&format!("{base} {rest}"))
            .unwrap()
            .position_hash()
    };
    assert_ne!(h("b KQkq - 0 1"), h("w KQkq - 0 1"));
    assert_ne!(h("b KQkq - 0 1"), h("b Kkq - 0 1"));
    assert_ne!(h("b KQkq - 0 1"), h("b KQkq e3 0 1"));
}
