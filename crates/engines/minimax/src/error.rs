use chess_core::MoveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A move the rules engine generated as legal could not be applied.
    #[error("rules engine refused its own legal move {mv}")]
    RulesEngineInvariantViolation {
        mv: String,
        #[source]
        source: MoveError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(pub String);
