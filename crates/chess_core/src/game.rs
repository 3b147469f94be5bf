//! A position plus its history: the stateful rules engine that search and
//! front ends drive with `play`/`undo`.

use serde::{Deserialize, Serialize};

use crate::{
    board::Position,
    error::{FenError, MoveError},
    movegen::{describe_move, legal_moves, legal_moves_into},
    types::*,
    uci::move_to_uci,
};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoves,
    Repetition,
    InsufficientMaterial,
}

impl Outcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct PlayedMove {
    mv: Move,
    undo: crate::board::Undo,
}

/// Game state with strict push/pop move history.
///
/// Every [`Game::play`] must be matched by one [`Game::undo`] when used as a
/// search scratchpad; the history also backs threefold repetition detection.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    played: Vec<PlayedMove>,
    /// Zobrist keys of every position reached, current one last.
    keys: Vec<u64>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    pub fn from_position(position: Position) -> Self {
        let key = position.position_hash();
        Self {
            position,
            played: Vec::new(),
            keys: vec![key],
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    pub fn turn(&self) -> Color {
        self.position.side_to_move
    }

    pub fn board(&self) -> [Option<Piece>; 64] {
        self.position.board
    }

    pub fn get(&self, square: u8) -> Option<Piece> {
        self.position.piece_at(square)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.position)
    }

    pub fn legal_move_count(&self) -> usize {
        self.legal_moves().len()
    }

    /// All legal moves with their verbose details.
    pub fn moves(&self) -> Vec<MoveDetail> {
        let mut scratch = self.position.clone();
        let mut moves = Vec::with_capacity(64);
        legal_moves_into(&mut scratch, &mut moves);
        moves
            .into_iter()
            .map(|mv| describe_move(&mut scratch, mv))
            .collect()
    }

    /// Legal moves of the piece standing on `square`.
    pub fn moves_from(&self, square: u8) -> Vec<MoveDetail> {
        self.moves()
            .into_iter()
            .filter(|d| d.mv.from == square)
            .collect()
    }

    /// Plays `mv`, rejecting moves that would leave the mover in check or
    /// that do not start on one of the mover's pieces.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        let mover = self.position.side_to_move;
        match self.position.piece_at(mv.from) {
            Some(pc) if pc.color == mover => {}
            _ => return Err(MoveError::NoPiece(sq_to_coord(mv.from))),
        }
        if mv.to > 63 {
            return Err(MoveError::Illegal(move_to_uci(mv)));
        }

        let undo = self.position.make_move(mv);
        if self.position.in_check(mover) {
            self.position.unmake_move(mv, undo);
            return Err(MoveError::Illegal(move_to_uci(mv)));
        }
        self.keys.push(self.position.position_hash());
        self.played.push(PlayedMove { mv, undo });
        Ok(())
    }

    /// Plays `mv` only if it is in the legal move list.
    pub fn play_checked(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.legal_moves().contains(&mv) {
            return Err(MoveError::Illegal(move_to_uci(mv)));
        }
        self.play(mv)
    }

    /// Reverses the most recent move.
    pub fn undo(&mut self) -> Option<Move> {
        let PlayedMove { mv, undo } = self.played.pop()?;
        self.keys.pop();
        self.position.unmake_move(mv, undo);
        Some(mv)
    }

    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.played.iter().map(|p| p.mv)
    }

    pub fn is_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let Some(&current) = self.keys.last() else {
            return false;
        };
        self.keys.iter().filter(|&&k| k == current).count() >= 3
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    /// Stalemate, fifty-move rule, threefold repetition or insufficient material.
    pub fn is_draw(&self) -> bool {
        self.position.is_fifty_move_draw()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
            || self.is_stalemate()
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.legal_moves().is_empty() {
            return Some(if self.is_check() {
                Outcome::Checkmate {
                    winner: self.turn().other(),
                }
            } else {
                Outcome::Stalemate
            });
        }
        if self.is_insufficient_material() {
            Some(Outcome::InsufficientMaterial)
        } else if self.position.is_fifty_move_draw() {
            Some(Outcome::FiftyMoves)
        } else if self.is_threefold_repetition() {
            Some(Outcome::Repetition)
        } else {
            None
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
