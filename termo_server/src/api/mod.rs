//! HTTP API for the word-guessing game server.
//!
//! One shared game session is exposed over REST for a browser client. CORS
//! is permissive so the frontend can be served from any origin during
//! development.
//!
//! # Endpoints
//!
//! ```text
//! GET  /health                  - Server health status (public)
//! POST /api/v1/game/start       - Start a round (restart policy applies)
//! GET  /api/v1/game/state       - Current session snapshot
//! POST /api/v1/game/guess       - Submit a guess (plain-text body)
//! POST /api/v1/game/finalize    - Acknowledge the round's result
//! POST /api/v1/game/new-round   - Start the next round (requires finalize)
//! GET  /api/v1/game/score       - Points for the latest guess
//! GET  /api/v1/game/share       - Copy-ready summary of a finished round
//! ```
//!
//! The snapshot returned by `/game/state` never contains the secret word
//! while a round is in progress; it appears once the round is won or lost.

pub mod game;

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde_json::json;
use termo::game::GameManager;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned per request; the manager is behind an `Arc` and serializes session
/// access internally.
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<GameManager>,
    /// Whether words come from the built-in list instead of the dictionary.
    pub offline_words: bool,
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let root_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(root_routes)
        .nest("/api/v1", create_v1_router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create API v1 router with all versioned endpoints.
fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/game/start", post(game::start_game))
        .route("/game/state", get(game::game_state))
        .route("/game/guess", post(game::submit_guess))
        .route("/game/finalize", post(game::finalize_round))
        .route("/game/new-round", post(game::start_new_round))
        .route("/game/score", get(game::score))
        .route("/game/share", get(game::share))
}

/// Health check endpoint for monitoring and load balancers.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "words": if state.offline_words { "offline" } else { "dictionary" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
