use super::*;
use chess_core::{coord_to_sq, Game, Move};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn details(fen: &str) -> Vec<MoveDetail> {
    Game::from_fen(fen).unwrap().moves()
}

fn uci(detail: &MoveDetail) -> String {
    chess_core::move_to_uci(detail.mv)
}

// White queen d1 can take the d5 rook, the knight on c3 can take it too, and
// Qxh5 or Qa4 give check to the e8 king.
const TACTICAL: &str = "4k3/8/8/3r3p/8/2N5/8/3QK3 w - - 0 1";

#[test]
fn test_order_moves_puts_captures_then_checks_first() {
    let mut moves = details(TACTICAL);
    let total = moves.len();
    order_moves(&mut moves);
    assert_eq!(moves.len(), total);

    let first_quiet = moves
        .iter()
        .position(|d| !d.is_capture())
        .expect("quiet moves exist");
    assert!(moves[..first_quiet].iter().all(MoveDetail::is_capture));
    assert!(moves[first_quiet..].iter().all(|d| !d.is_capture()));

    // among non-captures, checks lead
    let quiet = &moves[first_quiet..];
    let first_non_check = quiet.iter().position(|d| !d.gives_check).unwrap();
    assert!(quiet[..first_non_check].iter().all(|d| d.gives_check));
    assert!(quiet[..first_non_check].iter().any(|d| uci(d) == "d1a4"));
}

#[test]
fn test_order_moves_is_stable_for_equal_scores() {
    let original = details("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let mut sorted = original.clone();
    order_moves(&mut sorted);
    let quiet_original: Vec<_> = original.iter().filter(|d| !d.gives_check).collect();
    let quiet_sorted: Vec<_> = sorted.iter().filter(|d| !d.gives_check).collect();
    assert_eq!(quiet_original, quiet_sorted);
}

#[test]
fn test_mvv_lva_prefers_cheap_attackers_and_big_victims() {
    let mut moves = details(TACTICAL);
    order_captures(&mut moves);
    // NxR (5000 - 320) beats QxR (5000 - 900) beats QxP (1000 - 900)
    assert_eq!(uci(&moves[0]), "c3d5");
    assert_eq!(uci(&moves[1]), "d1d5");
    assert_eq!(mvv_lva(&moves[0]), 10 * 500 - 320);
}

#[test]
fn test_king_captures_go_last() {
    // the king and the rook can both take the pawn on e2
    let mut moves: Vec<_> = details("4k3/8/8/8/8/8/R3p3/4K3 w - - 0 1")
        .into_iter()
        .filter(MoveDetail::is_capture)
        .collect();
    order_captures(&mut moves);
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[1].piece, PieceKind::King);
    assert!(mvv_lva(&moves[1]) < 0);
}

#[test]
fn test_en_passant_counts_as_capture() {
    let moves = details("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    let ep = moves
        .iter()
        .find(|d| d.mv.from == coord_to_sq("e5").unwrap() && d.mv.to == coord_to_sq("d6").unwrap())
        .expect("en passant available");
    assert!(ep.is_en_passant());
    assert_eq!(ep.captured, Some(PieceKind::Pawn));
    assert_eq!(mvv_lva(ep), 10 * 100 - 100);
}

#[test]
fn test_order_root_without_randomize_is_stable() {
    let original = details(TACTICAL);
    let mut a = original.clone();
    let mut b = original.clone();
    order_root(&mut a, false, &mut StdRng::seed_from_u64(1));
    order_root(&mut b, false, &mut StdRng::seed_from_u64(2));
    assert_eq!(a, b);
    assert!(a[0].is_capture());
}

#[test]
fn test_order_root_keeps_captures_first_and_shuffles_the_rest() {
    let original = details(TACTICAL);
    let captures = original.iter().filter(|d| d.is_capture()).count();

    let mut seen_first_quiet = std::collections::HashSet::new();
    for seed in 0..32 {
        let mut moves = original.clone();
        order_root(&mut moves, true, &mut StdRng::seed_from_u64(seed));
        assert_eq!(moves.len(), original.len());
        assert!(moves[..captures].iter().all(MoveDetail::is_capture));
        seen_first_quiet.insert(moves[captures].mv);
    }
    // different seeds surface different quiet moves first
    assert!(seen_first_quiet.len() > 1);
}

#[test]
fn test_order_root_is_reproducible_for_a_seed() {
    let original = details(TACTICAL);
    let order = |seed| {
        let mut moves = original.clone();
        order_root(&mut moves, true, &mut StdRng::seed_from_u64(seed));
        moves.into_iter().map(|d| d.mv).collect::<Vec<Move>>()
    };
    assert_eq!(order(7), order(7));
}
