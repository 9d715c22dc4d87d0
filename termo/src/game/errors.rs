//! Game error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::WORD_LEN;

/// Errors reported to callers of game operations.
///
/// These are structured results rather than failures: a rejected operation
/// leaves session state untouched, and transports map each variant to a
/// distinct user-facing message and status.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("word must have exactly {} letters, got {found}", WORD_LEN)]
    InvalidLength { found: usize },
    #[error("word must contain only letters")]
    InvalidCharacters,
    #[error("game has not been started")]
    NotStarted,
    #[error("round is already over")]
    AlreadyFinished,
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error("round has not been finalized")]
    RoundNotFinalized,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
