//! # Termo
//!
//! A five-letter word-guessing game engine with a pluggable word source.
//!
//! A round picks a secret word, the player submits guesses, and each guess is
//! scored letter by letter: right letter in the right position, right letter
//! in the wrong position, or not in the word at all. Duplicate letters are
//! only credited while unconsumed instances remain in the secret, which is
//! the one genuinely subtle piece of the scoring logic.
//!
//! ## Architecture
//!
//! - [`game`]: the per-round state machine ([`game::GameSession`]), the
//!   scoring algorithm ([`game::score_guess`]), rule configuration, and an
//!   async [`game::GameManager`] that serializes access for concurrent
//!   callers such as an HTTP server.
//! - [`words`]: the word-selection capability. The production source queries
//!   an open dictionary with bounded retries and falls back to a built-in
//!   list; tests inject a deterministic source instead.
//!
//! ## Example
//!
//! ```
//! use termo::game::{GameRules, GameSession, Word};
//!
//! let mut session = GameSession::new(GameRules::default());
//! session.begin_round(Word::parse("CASAL", true)?)?;
//!
//! let outcome = session.guess("carro")?;
//! assert!(!outcome.won);
//! # Ok::<(), termo::game::GameError>(())
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    GameError, GameManager, GameRules, GameSession, GameStatus, GuessOutcome, GuessRecord,
    LetterScore, LetterStatus, RestartPolicy, RoundOutcome, SessionView, ShareCard, Word,
    score_guess,
};

/// Word selection sources (remote dictionary, fallback list, test stubs).
pub mod words;
pub use words::{
    DictionaryConfig, DictionaryWordSource, FALLBACK_WORDS, FixedWordSource, WordSource,
    WordSourceError,
};
