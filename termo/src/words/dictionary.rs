//! Remote dictionary client with bounded retries and local fallback.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use super::errors::WordSourceError;
use super::source::{WordSource, fallback_word};
use crate::game::Word;

/// Random-word endpoint of the open Portuguese dictionary.
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dicionario-aberto.net/random";

/// Default number of lookup attempts before falling back.
pub const DEFAULT_MAX_RETRIES: u32 = 50;

/// Default pause between lookup attempts, in milliseconds.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 100;

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Dictionary client configuration.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Random-word endpoint URL.
    pub url: String,

    /// Lookup attempts before giving up and falling back.
    pub max_retries: u32,

    /// Pause between attempts.
    pub retry_delay: Duration,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DICTIONARY_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RandomWordPayload {
    word: String,
}

/// Word source backed by a remote dictionary's random-word endpoint.
///
/// Most random dictionary words are not five letters, so a draw retries up
/// to `max_retries` times with a short pause between attempts. Transport
/// failures and retry exhaustion are not surfaced: the source logs the cause
/// and serves a word from the local fallback list instead.
pub struct DictionaryWordSource {
    config: DictionaryConfig,
    client: reqwest::Client,
}

impl DictionaryWordSource {
    /// Build the source and its HTTP client.
    ///
    /// # Errors
    ///
    /// [`WordSourceError::Transport`] when the client cannot be constructed.
    pub fn new(config: DictionaryConfig) -> Result<Self, WordSourceError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { config, client })
    }

    async fn fetch_once(&self) -> Result<Word, WordSourceError> {
        let response = self.client.get(&self.config.url).send().await?;
        let payload: RandomWordPayload = response.error_for_status()?.json().await?;
        validate_candidate(&payload.word)
    }

    async fn fetch_with_retries(&self) -> Result<Word, WordSourceError> {
        for attempt in 1..=self.config.max_retries {
            match self.fetch_once().await {
                Ok(word) => {
                    debug!("dictionary served {word} on attempt {attempt}");
                    return Ok(word);
                }
                Err(err) => debug!("dictionary attempt {attempt} failed: {err}"),
            }
            tokio::time::sleep(self.config.retry_delay).await;
        }
        Err(WordSourceError::RetriesExhausted(self.config.max_retries))
    }
}

#[async_trait]
impl WordSource for DictionaryWordSource {
    async fn draw(&self) -> Word {
        match self.fetch_with_retries().await {
            Ok(word) => word,
            Err(err) => {
                warn!("dictionary unavailable, serving local fallback: {err}");
                fallback_word()
            }
        }
    }
}

/// Accept a dictionary answer only if it folds to five ASCII letters.
fn validate_candidate(raw: &str) -> Result<Word, WordSourceError> {
    Word::parse(raw, true).map_err(|_| WordSourceError::NotFiveLetters(raw.to_string()))
}
