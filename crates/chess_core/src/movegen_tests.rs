use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_castle).count(), 2);
}

#[test]
fn test_describe_capture_and_check() {
    // Rook on e1 can take the e7 pawn, which also checks the king on e8.
    let mut pos = Position::from_fen("4k3/4p3/8/8/8/8/8/K3R3 w - - 0 1").unwrap();
    let mv = Move::new(coord_to_sq("e1").unwrap(), coord_to_sq("e7").unwrap());
    let detail = describe_move(&mut pos, mv);

    assert_eq!(detail.piece, PieceKind::Rook);
    assert_eq!(detail.captured, Some(PieceKind::Pawn));
    assert!(detail.gives_check);
    assert!(detail.is_capture());
    // The position is left untouched.
    assert_eq!(
        pos,
        Position::from_fen("4k3/4p3/8/8/8/8/8/K3R3 w - - 0 1").unwrap()
    );
}

#[test]
fn test_describe_en_passant() {
    let mut pos =
        Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let ep = legal_moves(&pos)
        .into_iter()
        .find(|m| m.is_en_passant)
        .expect("en passant should be available");
    let detail = describe_move(&mut pos, ep);

    assert!(detail.is_en_passant());
    assert_eq!(detail.captured, Some(PieceKind::Pawn));
}

#[test]
fn test_promotions_generate_four_moves() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/8/k3K3 w - - 0 1").unwrap();
    let promos = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.promo.is_some())
        .count();
    assert_eq!(promos, 4);
}
