//! Move ordering heuristics.
//!
//! Ordering never adds or drops moves; it only decides which siblings the
//! search visits first so alpha-beta can cut the rest.

use std::cmp::Reverse;

use chess_core::{MoveDetail, PieceKind};
use rand::Rng;

use crate::eval::piece_value;

const CAPTURE_BONUS: i32 = 100;
const CHECK_BONUS: i32 = 50;
const ROOT_CAPTURE_BONUS: i32 = 10;

/// Aggressor value for the king in MVV/LVA, so king captures are tried last.
const KING_AGGRESSOR_VALUE: i32 = 20_000;

fn interior_score(detail: &MoveDetail) -> i32 {
    let mut score = 0;
    if detail.is_capture() || detail.is_en_passant() {
        score += CAPTURE_BONUS;
    }
    if detail.gives_check {
        score += CHECK_BONUS;
    }
    score
}

/// Captures first, then checks. Stable, so equal moves keep generation order.
pub fn order_moves(moves: &mut [MoveDetail]) {
    moves.sort_by_key(|d| Reverse(interior_score(d)));
}

/// Most valuable victim, least valuable aggressor.
pub fn mvv_lva(detail: &MoveDetail) -> i32 {
    let victim = detail.captured.map_or(0, piece_value);
    let aggressor = match detail.piece {
        PieceKind::King => KING_AGGRESSOR_VALUE,
        kind => piece_value(kind),
    };
    10 * victim - aggressor
}

/// Quiescence ordering by descending [`mvv_lva`].
pub fn order_captures(moves: &mut [MoveDetail]) {
    moves.sort_by_key(|d| Reverse(mvv_lva(d)));
}

/// Root ordering: captures first, and with `randomize` every move draws one
/// random key that shuffles it among moves of equal score.
pub fn order_root<G: Rng + ?Sized>(moves: &mut [MoveDetail], randomize: bool, rng: &mut G) {
    let root_score = |d: &MoveDetail| {
        if d.is_capture() || d.is_en_passant() {
            ROOT_CAPTURE_BONUS
        } else {
            0
        }
    };
    if randomize {
        moves.sort_by_cached_key(|d| (Reverse(root_score(d)), rng.gen::<u32>()));
    } else {
        moves.sort_by_key(|d| Reverse(root_score(d)));
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
