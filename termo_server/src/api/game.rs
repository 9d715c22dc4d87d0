//! Game API handlers.
//!
//! Every game error maps to a distinct HTTP status and message so the
//! browser client can render precise feedback: malformed guesses are `422`,
//! out-of-phase operations are `409`.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use termo::game::{GameError, GuessOutcome, SessionView, ShareCard};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub points: u32,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn game_error(err: GameError) -> ApiError {
    let status = match err {
        GameError::InvalidLength { .. } | GameError::InvalidCharacters => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        GameError::NotStarted
        | GameError::AlreadyFinished
        | GameError::RoundInProgress
        | GameError::RoundNotFinalized => StatusCode::CONFLICT,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Start a round.
///
/// Under the `reject` restart policy this fails with `409 Conflict` while a
/// round is running; under `force` it always re-rolls.
pub async fn start_game(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    state.game.start().await.map(Json).map_err(game_error)
}

/// Current session snapshot. Never reveals the secret mid-round.
pub async fn game_state(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.game.view().await)
}

/// Submit a guess. The request body is the guessed word as plain text.
///
/// # Response
///
/// Returns `200 OK` with the outcome and per-letter feedback:
/// ```json
/// {
///   "won": false,
///   "feedback": [
///     { "letter": "C", "status": "correct" },
///     { "letter": "A", "status": "correct" },
///     { "letter": "R", "status": "inexistent" },
///     { "letter": "R", "status": "inexistent" },
///     { "letter": "O", "status": "inexistent" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: not five letters, or non-letter characters
/// - `409 Conflict`: round not started or already over
pub async fn submit_guess(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GuessOutcome>, ApiError> {
    state.game.guess(&body).await.map(Json).map_err(game_error)
}

/// Acknowledge the round's result, unlocking `new-round`.
pub async fn finalize_round(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.game.finalize().await)
}

/// Start the next round. Fails with `409 Conflict` until the previous round
/// was finalized.
pub async fn start_new_round(State(state): State<AppState>) -> Result<Json<SessionView>, ApiError> {
    state
        .game
        .start_new_round(None)
        .await
        .map(Json)
        .map_err(game_error)
}

/// Points for the latest guess.
pub async fn score(State(state): State<AppState>) -> Json<ScoreResponse> {
    Json(ScoreResponse {
        points: state.game.score().await,
    })
}

/// Copy-ready summary of a finished round.
pub async fn share(State(state): State<AppState>) -> Result<Json<ShareCard>, ApiError> {
    state.game.share_card().await.map(Json).map_err(game_error)
}
