//! Word source error types.

use thiserror::Error;

/// Errors from the remote dictionary lookup.
///
/// These are recovered internally by falling back to the local word list and
/// are never surfaced to game callers; they exist so retries and fallbacks
/// can be logged with a precise cause.
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// Request construction or transport failure.
    #[error("dictionary request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The dictionary answered with a word that is not five letters.
    #[error("dictionary word {0:?} is not a five-letter word")]
    NotFiveLetters(String),

    /// No usable word after the configured number of attempts.
    #[error("dictionary gave no usable word after {0} attempts")]
    RetriesExhausted(u32),
}
