//! Move notation: UCI coordinates for engines, SAN for people.

use crate::{board::Position, error::MoveError, game::Game, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.to_char());
    }
    s
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    // We parse and then match against legal moves so flags (castle/ep) are correct.
    if txt.len() < 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.as_bytes().get(4) {
        Some(&b) => match PieceKind::from_char(b as char)? {
            PieceKind::Pawn | PieceKind::King => return None,
            kind => Some(kind),
        },
        None => None,
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

/// Applies a UCI `position` command body: `startpos | fen <6 fields>`
/// optionally followed by `moves m1 m2 ...`.
pub fn set_position_from_uci(args: &[&str]) -> Result<Game, MoveError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let setup = &args[..moves_at.unwrap_or(args.len())];

    let mut game = match setup {
        ["fen", fields @ ..] if !fields.is_empty() => Game::from_fen(&fields.join(" "))
            .map_err(|e| MoveError::Parse(format!("fen: {e}")))?,
        _ => Game::new(),
    };

    if let Some(idx) = moves_at {
        for txt in &args[idx + 1..] {
            let mv = parse_uci_move(game.position(), txt)
                .ok_or_else(|| MoveError::Parse(txt.to_string()))?;
            game.play(mv)?;
        }
    }
    Ok(game)
}

/// Standard Algebraic Notation for a legal move in `game`, with `+`/`#` suffix.
pub fn move_to_san(game: &Game, mv: Move) -> Result<String, MoveError> {
    let pos = game.position();
    let legals = legal_moves(pos);
    if !legals.contains(&mv) {
        return Err(MoveError::Illegal(move_to_uci(mv)));
    }
    let piece = pos
        .piece_at(mv.from)
        .ok_or_else(|| MoveError::NoPiece(sq_to_coord(mv.from)))?;

    let mut san = String::new();
    if mv.is_castle {
        san.push_str(if file_of(mv.to) == 6 { "O-O" } else { "O-O-O" });
    } else {
        let capture = mv.is_en_passant || pos.piece_at(mv.to).is_some();
        if piece.kind == PieceKind::Pawn {
            if capture {
                san.push((b'a' + file_of(mv.from) as u8) as char);
            }
        } else {
            san.push(piece.kind.to_char().to_ascii_uppercase());
            san.push_str(&disambiguation(pos, &legals, mv, piece.kind));
        }
        if capture {
            san.push('x');
        }
        san.push_str(&sq_to_coord(mv.to));
        if let Some(p) = mv.promo {
            san.push('=');
            san.push(p.to_char().to_ascii_uppercase());
        }
    }

    let mut after = game.clone();
    after.play(mv)?;
    if after.is_checkmate() {
        san.push('#');
    } else if after.is_check() {
        san.push('+');
    }
    Ok(san)
}

fn disambiguation(pos: &Position, legals: &[Move], mv: Move, kind: PieceKind) -> String {
    let rivals: Vec<u8> = legals
        .iter()
        .filter(|m| m.to == mv.to && m.from != mv.from)
        .filter(|m| pos.piece_at(m.from).is_some_and(|pc| pc.kind == kind))
        .map(|m| m.from)
        .collect();
    if rivals.is_empty() {
        return String::new();
    }
    let coord = sq_to_coord(mv.from);
    if rivals.iter().all(|&s| file_of(s) != file_of(mv.from)) {
        coord[..1].to_string()
    } else if rivals.iter().all(|&s| rank_of(s) != rank_of(mv.from)) {
        coord[1..].to_string()
    } else {
        coord
    }
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
