//! Game rule configuration models.
//!
//! The observed variants of this game disagree on several policies (attempt
//! budget, whether a winning guess costs an attempt, restart behavior,
//! diacritic handling). Each policy is a named field here so the choice is
//! visible and testable instead of hard-coded.

use serde::{Deserialize, Serialize};

/// Default number of guesses per round.
pub const DEFAULT_ATTEMPTS: u8 = 6;

/// Default points awarded per correctly placed letter.
pub const DEFAULT_POINTS_PER_LETTER: u32 = 10;

/// Behavior of a plain start request while a round is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestartPolicy {
    /// Re-roll unconditionally, discarding the running round.
    Force,
    /// Reject the start until the running round is over.
    Reject,
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestartPolicy::Force => write!(f, "force"),
            RestartPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Game rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Guesses allowed per round.
    pub attempts: u8,

    /// Whether a winning guess also decrements the attempt counter.
    pub win_consumes_attempt: bool,

    /// What a start request does while a round is in progress.
    pub restart: RestartPolicy,

    /// Fold accented letters to their ASCII base before comparison.
    pub normalize_diacritics: bool,

    /// Points awarded per correctly placed letter of the latest guess.
    pub points_per_letter: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_ATTEMPTS,
            false,
            RestartPolicy::Force,
            true,
            DEFAULT_POINTS_PER_LETTER,
        )
    }
}

impl GameRules {
    #[must_use]
    pub const fn new(
        attempts: u8,
        win_consumes_attempt: bool,
        restart: RestartPolicy,
        normalize_diacritics: bool,
        points_per_letter: u32,
    ) -> Self {
        Self {
            attempts,
            win_consumes_attempt,
            restart,
            normalize_diacritics,
            points_per_letter,
        }
    }
}
