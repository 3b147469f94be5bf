//! Static evaluation: material, piece-square tables and mobility.

use chess_core::{Color, Piece, PieceKind};

use crate::pst::pst_value;
use crate::rules::RulesEngine;

/// Centipawns per legal move of the side to move.
pub const MOBILITY_WEIGHT: i32 = 5;

/// Material value in centipawns. The king is scored through mate results,
/// never through material.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Material plus piece-square bonus, white minus black.
///
/// This is the stand-pat score of quiescence search.
pub fn material_and_position(board: &[Option<Piece>; 64]) -> i32 {
    board
        .iter()
        .zip(0u8..)
        .filter_map(|(slot, square)| slot.map(|piece| (piece, square)))
        .map(|(piece, square)| {
            let value = piece_value(piece.kind) + pst_value(piece, square);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Full static evaluation in white-positive centipawns.
///
/// Mobility counts the side to move only and is signed by it.
pub fn evaluate<R: RulesEngine + ?Sized>(rules: &R) -> i32 {
    let mobility = rules.legal_move_count() as i32 * MOBILITY_WEIGHT;
    let mobility = match rules.turn() {
        Color::White => mobility,
        Color::Black => -mobility,
    };
    material_and_position(&rules.board()) + mobility
}

/// Non-pawn, non-king material of both colours, used to detect endgames.
pub fn phase_material(board: &[Option<Piece>; 64]) -> i32 {
    board
        .iter()
        .flatten()
        .filter(|piece| !matches!(piece.kind, PieceKind::Pawn | PieceKind::King))
        .map(|piece| piece_value(piece.kind))
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
