//! Integration tests for word source fallback behavior.

use std::time::Duration;

use termo::words::{DictionaryConfig, DictionaryWordSource, FALLBACK_WORDS, WordSource};

#[tokio::test]
async fn test_unreachable_dictionary_falls_back_to_local_list() {
    // Nothing listens on the discard port, so every attempt fails fast.
    let config = DictionaryConfig {
        url: "http://127.0.0.1:9/random".to_string(),
        max_retries: 2,
        retry_delay: Duration::from_millis(1),
        request_timeout: Duration::from_millis(250),
    };

    let source = DictionaryWordSource::new(config).expect("client builds");
    let word = source.draw().await;

    assert!(FALLBACK_WORDS.contains(&word.as_str()));
}

#[tokio::test]
async fn test_fallback_draws_are_valid_words() {
    let config = DictionaryConfig {
        url: "http://127.0.0.1:9/random".to_string(),
        max_retries: 1,
        retry_delay: Duration::from_millis(1),
        request_timeout: Duration::from_millis(250),
    };
    let source = DictionaryWordSource::new(config).expect("client builds");

    for _ in 0..3 {
        let word = source.draw().await;
        assert_eq!(word.as_str().len(), 5);
        assert!(word.as_str().chars().all(|c| c.is_ascii_uppercase()));
    }
}
