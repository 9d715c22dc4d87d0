//! Word game engine - session state machine, scoring, and rules.
//!
//! This module provides:
//! - [`GameSession`]: the per-player round state machine
//! - [`score_guess`]: letter-by-letter guess classification
//! - [`GameRules`]: named policy knobs covering the divergent game variants
//! - [`GameManager`]: async coordinator that serializes session access

pub mod entities;
pub mod errors;
pub mod manager;
pub mod rules;
pub mod session;

pub use entities::{
    GameStatus, GuessOutcome, GuessRecord, LetterScore, LetterStatus, RoundOutcome, SessionView,
    ShareCard, WORD_LEN, Word,
};
pub use errors::{GameError, GameResult};
pub use manager::GameManager;
pub use rules::{DEFAULT_ATTEMPTS, DEFAULT_POINTS_PER_LETTER, GameRules, RestartPolicy};
pub use session::{GameSession, score_guess};
