//! Word selection for the game.
//!
//! This module implements:
//! - [`WordSource`]: the injectable capability the game draws secrets from
//! - [`DictionaryWordSource`]: remote dictionary lookup with bounded retries
//!   and a local fallback list
//! - [`FixedWordSource`]: deterministic source for tests and offline play

pub mod dictionary;
pub mod errors;
pub mod source;

pub use dictionary::{
    DEFAULT_DICTIONARY_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_SECS,
    DictionaryConfig, DictionaryWordSource,
};
pub use errors::WordSourceError;
pub use source::{FALLBACK_WORDS, FixedWordSource, WordSource, fallback_word};
