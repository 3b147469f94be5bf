//! Errors reported by the rules engine.

use thiserror::Error;

/// A FEN string could not be turned into a position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 space-separated fields, found {0}")]
    MissingFields(usize),
    #[error("board section must have 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {files} files")]
    FileCount { rank: usize, files: usize },
    #[error("invalid piece character '{0}'")]
    Piece(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling character '{0}'")]
    Castling(char),
    #[error("invalid en passant square '{0}'")]
    EnPassant(String),
    #[error("invalid move counter '{0}'")]
    Counter(String),
    #[error("{0} king missing or duplicated")]
    Kings(&'static str),
    #[error("the side not to move is in check")]
    WaitingSideInCheck,
}

/// A move was rejected by [`crate::Game::play`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece of the side to move on {0}")]
    NoPiece(String),
    #[error("move {0} is not legal in this position")]
    Illegal(String),
    #[error("cannot parse move '{0}'")]
    Parse(String),
}
