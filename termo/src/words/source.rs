//! Word source trait and the built-in fallback list.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rand::seq::IndexedRandom;

use crate::game::Word;

/// Local five-letter words used when the dictionary cannot be reached.
pub const FALLBACK_WORDS: [&str; 10] = [
    "MUNDO", "TEMPO", "LUGAR", "CASAL", "PONTE", "VERDE", "LIVRO", "PRAIA", "CAMPO", "NOITE",
];

/// Capability the game draws secret words from.
///
/// Implementations must not fail: a source that cannot reach its backing
/// store recovers internally, e.g. by picking from [`FALLBACK_WORDS`].
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Draw a five-letter secret word.
    async fn draw(&self) -> Word;
}

/// Pick a random word from the built-in fallback list.
#[must_use]
pub fn fallback_word() -> Word {
    let mut rng = rand::rng();
    let raw = FALLBACK_WORDS
        .choose(&mut rng)
        .copied()
        .unwrap_or(FALLBACK_WORDS[0]);
    Word::parse(raw, true).expect("fallback words are valid five-letter words")
}

/// Deterministic word source cycling over a fixed list.
///
/// Used by tests to pin the secret word, and by offline mode to play
/// without the remote dictionary.
pub struct FixedWordSource {
    words: Vec<Word>,
    cursor: AtomicUsize,
}

impl FixedWordSource {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Source that always serves the one given word.
    pub fn single(raw: &str) -> Result<Self, crate::game::GameError> {
        Ok(Self::new(vec![Word::parse(raw, true)?]))
    }

    /// Source cycling through the built-in fallback list.
    #[must_use]
    pub fn offline() -> Self {
        let words = FALLBACK_WORDS
            .iter()
            .map(|raw| Word::parse(raw, true).expect("fallback words are valid five-letter words"))
            .collect();
        Self::new(words)
    }
}

#[async_trait]
impl WordSource for FixedWordSource {
    async fn draw(&self) -> Word {
        if self.words.is_empty() {
            return fallback_word();
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.words.len();
        self.words[idx].clone()
    }
}
