//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated
//! configuration.

use std::net::SocketAddr;
use std::time::Duration;

use termo::game::{DEFAULT_ATTEMPTS, DEFAULT_POINTS_PER_LETTER, GameRules, RestartPolicy};
use termo::words::{
    DEFAULT_DICTIONARY_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_SECS,
    DictionaryConfig,
};

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Game rule policies
    pub rules: GameRules,
    /// Remote dictionary configuration
    pub dictionary: DictionaryConfig,
    /// Serve words from the built-in list instead of the remote dictionary
    pub offline: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Every variable has a default, so loading cannot fail; call
    /// [`Self::validate`] afterwards to reject nonsensical values.
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    /// * `offline_override` - Force offline words (from CLI flag)
    #[must_use]
    pub fn from_env(bind_override: Option<SocketAddr>, offline_override: bool) -> Self {
        let bind = bind_override
            .or_else(|| {
                std::env::var("SERVER_BIND")
                    .ok()
                    .and_then(|s| s.parse().ok())
            })
            .unwrap_or_else(|| {
                "127.0.0.1:7878"
                    .parse()
                    .expect("Default bind address is valid")
            });

        let restart = std::env::var("GAME_RESTART_POLICY")
            .ok()
            .and_then(|v| match v.to_lowercase().as_str() {
                "force" => Some(RestartPolicy::Force),
                "reject" => Some(RestartPolicy::Reject),
                _ => None,
            })
            .unwrap_or(RestartPolicy::Force);

        let rules = GameRules {
            attempts: parse_env_or("GAME_ATTEMPTS", DEFAULT_ATTEMPTS),
            win_consumes_attempt: parse_env_or("GAME_WIN_CONSUMES_ATTEMPT", false),
            restart,
            normalize_diacritics: parse_env_or("GAME_FOLD_DIACRITICS", true),
            points_per_letter: parse_env_or("GAME_POINTS_PER_LETTER", DEFAULT_POINTS_PER_LETTER),
        };

        let dictionary = DictionaryConfig {
            url: std::env::var("DICTIONARY_URL")
                .unwrap_or_else(|_| DEFAULT_DICTIONARY_URL.to_string()),
            max_retries: parse_env_or("DICTIONARY_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            retry_delay: Duration::from_millis(parse_env_or(
                "DICTIONARY_RETRY_DELAY_MS",
                DEFAULT_RETRY_DELAY_MS,
            )),
            request_timeout: Duration::from_secs(parse_env_or(
                "DICTIONARY_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )),
        };

        let offline = offline_override || parse_env_or("WORDS_OFFLINE", false);

        Self {
            bind,
            rules,
            dictionary,
            offline,
        }
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.attempts == 0 {
            return Err(ConfigError::Invalid {
                var: "GAME_ATTEMPTS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.rules.points_per_letter == 0 {
            return Err(ConfigError::Invalid {
                var: "GAME_POINTS_PER_LETTER".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if !self.offline {
            if self.dictionary.url.is_empty() {
                return Err(ConfigError::Invalid {
                    var: "DICTIONARY_URL".to_string(),
                    reason: "Must not be empty".to_string(),
                });
            }

            if self.dictionary.max_retries == 0 {
                return Err(ConfigError::Invalid {
                    var: "DICTIONARY_MAX_RETRIES".to_string(),
                    reason: "Must be greater than 0".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
