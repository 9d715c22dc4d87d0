//! Word-guessing game server.
//!
//! Exposes a single shared game session over a REST API with permissive
//! CORS for a browser-based client. Secret words come from a remote
//! dictionary with a local fallback, or from the built-in list in offline
//! mode.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use log::info;
use pico_args::Arguments;
use termo::game::{GameManager, GameSession};
use termo::words::{DictionaryWordSource, FixedWordSource, WordSource};
use termo_server::api;
use termo_server::config::ServerConfig;

const HELP: &str = "\
Run a Termo word-guessing game server

USAGE:
  termo_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:7878]

FLAGS:
  --offline                Serve words from the built-in list, skipping the remote dictionary
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  GAME_ATTEMPTS            Guesses allowed per round  [default: 6]
  GAME_RESTART_POLICY      force | reject  [default: force]
  GAME_WIN_CONSUMES_ATTEMPT  Winning guess also costs an attempt  [default: false]
  GAME_FOLD_DIACRITICS     Fold accents before comparison  [default: true]
  GAME_POINTS_PER_LETTER   Points per correct letter  [default: 10]
  DICTIONARY_URL           Random-word endpoint
  DICTIONARY_MAX_RETRIES   Lookup attempts before fallback  [default: 50]
  WORDS_OFFLINE            Set to true to skip the remote dictionary
";

struct Args {
    bind: Option<SocketAddr>,
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        offline: pargs.contains("--offline"),
    };

    env_logger::builder().format_target(false).init();

    let config = ServerConfig::from_env(args.bind, args.offline);
    config.validate()?;

    info!("Starting word game server at {}", config.bind);
    info!(
        "Game rules: {} attempts, restart={}, {} pts per letter",
        config.rules.attempts, config.rules.restart, config.rules.points_per_letter
    );

    let words: Arc<dyn WordSource> = if config.offline {
        info!("Word source: built-in offline list");
        Arc::new(FixedWordSource::offline())
    } else {
        info!("Word source: {}", config.dictionary.url);
        Arc::new(DictionaryWordSource::new(config.dictionary.clone())?)
    };

    let session = GameSession::new(config.rules.clone());
    let game = Arc::new(GameManager::new(session, words));

    let state = api::AppState {
        game,
        offline_words: config.offline,
    };
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
