//! Async game coordinator for shared sessions.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::entities::{GameStatus, GuessOutcome, RoundOutcome, SessionView, ShareCard};
use super::errors::GameResult;
use super::session::GameSession;
use crate::words::WordSource;

/// Serializes access to one [`GameSession`] and owns its word source.
///
/// A session is a single player's game and its board/attempts/status updates
/// are a composite read-modify-write, so concurrent callers (e.g. parallel
/// HTTP requests) must not interleave them. All session access goes through
/// an async mutex here. Word drawing happens before the lock is taken: the
/// dictionary lookup can retry for seconds and must never stall readers.
pub struct GameManager {
    session: Mutex<GameSession>,
    words: Arc<dyn WordSource>,
}

impl GameManager {
    #[must_use]
    pub fn new(session: GameSession, words: Arc<dyn WordSource>) -> Self {
        Self {
            session: Mutex::new(session),
            words,
        }
    }

    /// Draw a secret word and start a round, applying the restart policy.
    ///
    /// The precondition is checked before the draw and again once the lock
    /// is reacquired, since the lock is dropped across the draw.
    pub async fn start(&self) -> GameResult<SessionView> {
        self.session.lock().await.check_begin_round()?;

        let secret = self.words.draw().await;

        let mut session = self.session.lock().await;
        session.begin_round(secret)?;
        Ok(session.view(false))
    }

    /// Draw a secret word and start the next round after finalization.
    pub async fn start_new_round(&self, attempts: Option<u8>) -> GameResult<SessionView> {
        self.session.lock().await.check_begin_new_round()?;

        let secret = self.words.draw().await;

        let mut session = self.session.lock().await;
        session.begin_new_round(secret, attempts)?;
        Ok(session.view(false))
    }

    pub async fn guess(&self, raw: &str) -> GameResult<GuessOutcome> {
        self.session.lock().await.guess(raw)
    }

    pub async fn view(&self) -> SessionView {
        self.session.lock().await.view(false)
    }

    /// Finalize the round, recording the outcome the session reached.
    pub async fn finalize(&self) -> SessionView {
        let mut session = self.session.lock().await;
        let outcome = match session.status() {
            GameStatus::Won => RoundOutcome::Victory,
            GameStatus::Lost => RoundOutcome::Defeat,
            _ => RoundOutcome::Abandoned,
        };
        session.finalize(outcome);
        session.view(false)
    }

    pub async fn score(&self) -> u32 {
        self.session.lock().await.score()
    }

    pub async fn share_card(&self) -> GameResult<ShareCard> {
        self.session.lock().await.share_card()
    }
}
