//! The rules engine contract the search drives.
//!
//! The search never derives legality itself: it asks for moves, applies them
//! with [`RulesEngine::push`] and reverses them with [`RulesEngine::undo`] in
//! strict stack order.

use chess_core::{Color, Game, Move, MoveDetail, MoveError, Piece};

pub trait RulesEngine {
    fn board(&self) -> [Option<Piece>; 64];

    fn get(&self, square: u8) -> Option<Piece>;

    /// Every legal move for the side to move, with verbose details.
    fn moves(&self) -> Vec<MoveDetail>;

    /// Legal captures only, en passant included.
    fn captures(&self) -> Vec<MoveDetail> {
        self.moves().into_iter().filter(MoveDetail::is_capture).collect()
    }

    fn legal_move_count(&self) -> usize;

    /// Applies `mv` in place.
    fn push(&mut self, mv: Move) -> Result<(), MoveError>;

    /// Reverses the most recent push.
    fn undo(&mut self) -> Option<Move>;

    fn turn(&self) -> Color;

    fn is_check(&self) -> bool;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_draw(&self) -> bool;

    fn is_game_over(&self) -> bool;

    fn fen(&self) -> String;
}

impl RulesEngine for Game {
    fn board(&self) -> [Option<Piece>; 64] {
        Game::board(self)
    }

    fn get(&self, square: u8) -> Option<Piece> {
        Game::get(self, square)
    }

    fn moves(&self) -> Vec<MoveDetail> {
        Game::moves(self)
    }

    fn legal_move_count(&self) -> usize {
        Game::legal_move_count(self)
    }

    fn push(&mut self, mv: Move) -> Result<(), MoveError> {
        self.play(mv)
    }

    fn undo(&mut self) -> Option<Move> {
        Game::undo(self)
    }

    fn turn(&self) -> Color {
        Game::turn(self)
    }

    fn is_check(&self) -> bool {
        Game::is_check(self)
    }

    fn is_checkmate(&self) -> bool {
        Game::is_checkmate(self)
    }

    fn is_stalemate(&self) -> bool {
        Game::is_stalemate(self)
    }

    fn is_draw(&self) -> bool {
        Game::is_draw(self)
    }

    fn is_game_over(&self) -> bool {
        Game::is_game_over(self)
    }

    fn fen(&self) -> String {
        Game::fen(self)
    }
}
