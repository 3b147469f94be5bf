//! Chess rules: positions, legal moves, game status and notation.
//!
//! Engines consume this crate; it knows nothing about searching.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod time_control;
pub mod types;
pub mod uci;
pub mod zobrist;

pub use board::*;
pub use error::{FenError, MoveError};
pub use game::{Game, Outcome};
pub use movegen::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;
pub use uci::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Engine trait: move pickers driven by the UCI front end and
// the ladder
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation in centipawns, positive favours white
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
}

/// A player that picks moves for whichever side is to move.
pub trait Engine: Send {
    /// Pick a move in `game`. The game itself is left untouched.
    fn search(&mut self, game: &Game, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}

    /// Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
