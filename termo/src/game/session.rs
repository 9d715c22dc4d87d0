//! Game session state machine and guess scoring.

use log::debug;

use super::entities::{
    GameStatus, GuessOutcome, GuessRecord, LetterScore, LetterStatus, RoundOutcome, SessionView,
    ShareCard, WORD_LEN, Word,
};
use super::errors::{GameError, GameResult};
use super::rules::{GameRules, RestartPolicy};

/// A single player's game: the secret word, attempt budget, board history,
/// and lifecycle status for one round at a time.
///
/// The session is a pure, synchronous state machine: it never performs I/O
/// and takes already-drawn secret words. Drawing words (and serializing
/// concurrent access) is [`GameManager`](super::manager::GameManager)'s job.
#[derive(Debug)]
pub struct GameSession {
    rules: GameRules,
    secret: Option<Word>,
    remaining_attempts: u8,
    round_attempts: u8,
    board: Vec<GuessRecord>,
    status: GameStatus,
    outcome: Option<RoundOutcome>,
}

impl GameSession {
    #[must_use]
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            secret: None,
            remaining_attempts: 0,
            round_attempts: 0,
            board: Vec::new(),
            status: GameStatus::NotStarted,
            outcome: None,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    /// Attempt budget the current round started with.
    #[must_use]
    pub fn attempt_budget(&self) -> u8 {
        self.round_attempts
    }

    /// Precondition half of [`Self::begin_round`], usable before the secret
    /// word has been drawn.
    pub fn check_begin_round(&self) -> GameResult<()> {
        if self.rules.restart == RestartPolicy::Reject && self.status == GameStatus::InProgress {
            return Err(GameError::RoundInProgress);
        }
        Ok(())
    }

    /// Start a round with the given secret word.
    ///
    /// Under [`RestartPolicy::Reject`] this fails with
    /// [`GameError::RoundInProgress`] while a round is running; under
    /// [`RestartPolicy::Force`] it always re-rolls.
    pub fn begin_round(&mut self, secret: Word) -> GameResult<()> {
        self.check_begin_round()?;
        self.reset(secret, self.rules.attempts);
        Ok(())
    }

    /// Precondition half of [`Self::begin_new_round`].
    pub fn check_begin_new_round(&self) -> GameResult<()> {
        if self.status != GameStatus::Finalized {
            return Err(GameError::RoundNotFinalized);
        }
        Ok(())
    }

    /// Start the next round after the previous one was finalized.
    ///
    /// Stricter than [`Self::begin_round`]: fails with
    /// [`GameError::RoundNotFinalized`] unless the session is finalized.
    /// `attempts` overrides the configured budget for this round only.
    pub fn begin_new_round(&mut self, secret: Word, attempts: Option<u8>) -> GameResult<()> {
        self.check_begin_new_round()?;
        self.reset(secret, attempts.unwrap_or(self.rules.attempts));
        Ok(())
    }

    fn reset(&mut self, secret: Word, attempts: u8) {
        debug!("starting round with {attempts} attempts");
        self.secret = Some(secret);
        self.remaining_attempts = attempts;
        self.round_attempts = attempts;
        self.board.clear();
        self.status = GameStatus::InProgress;
        self.outcome = None;
    }

    /// Submit a guess and record its per-letter feedback.
    ///
    /// Validation never mutates state: phase errors ([`GameError::NotStarted`],
    /// [`GameError::AlreadyFinished`]) are checked first, then the word shape.
    /// A winning guess sets [`GameStatus::Won`]; a miss consumes an attempt
    /// and sets [`GameStatus::Lost`] when the budget runs out.
    pub fn guess(&mut self, raw: &str) -> GameResult<GuessOutcome> {
        let secret = match self.status {
            GameStatus::InProgress => match &self.secret {
                Some(secret) => secret.clone(),
                None => return Err(GameError::NotStarted),
            },
            GameStatus::NotStarted => return Err(GameError::NotStarted),
            GameStatus::Won | GameStatus::Lost | GameStatus::Finalized => {
                return Err(GameError::AlreadyFinished);
            }
        };

        let word = Word::parse(raw, self.rules.normalize_diacritics)?;
        let feedback = score_guess(&word, &secret);
        let won = word == secret;

        self.board.push(GuessRecord {
            word,
            feedback: feedback.clone(),
        });

        if won {
            self.status = GameStatus::Won;
            if self.rules.win_consumes_attempt {
                self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            }
        } else {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
            if self.remaining_attempts == 0 {
                self.status = GameStatus::Lost;
            }
        }

        Ok(GuessOutcome { won, feedback })
    }

    /// Read-only snapshot of the session.
    ///
    /// The secret appears only once the round is won or lost, or when
    /// `reveal` is set; it never leaks while a round is in progress.
    #[must_use]
    pub fn view(&self, reveal: bool) -> SessionView {
        let show_secret = reveal || matches!(self.status, GameStatus::Won | GameStatus::Lost);
        SessionView {
            remaining_attempts: self.remaining_attempts,
            board: self.board.clone(),
            status: self.status,
            secret: if show_secret {
                self.secret.as_ref().map(Word::to_string)
            } else {
                None
            },
        }
    }

    /// Acknowledge the round's result and move to [`GameStatus::Finalized`].
    ///
    /// Idempotent: once finalized, later calls keep the first recorded
    /// outcome.
    pub fn finalize(&mut self, outcome: RoundOutcome) {
        if self.status == GameStatus::Finalized {
            return;
        }
        self.status = GameStatus::Finalized;
        self.outcome = Some(outcome);
    }

    /// Points for the most recent guess: correct letters times the
    /// configured per-letter value. Zero while the board is empty.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.board.last().map_or(0, |entry| {
            let correct = entry
                .feedback
                .iter()
                .filter(|score| score.status == LetterStatus::Correct)
                .count() as u32;
            correct * self.rules.points_per_letter
        })
    }

    /// Build the copy-ready summary of a finished round.
    ///
    /// # Errors
    ///
    /// [`GameError::RoundNotFinalized`] while a round is still running or
    /// before the first round.
    pub fn share_card(&self) -> GameResult<ShareCard> {
        let outcome = match (self.status, self.outcome) {
            (GameStatus::Won, _) => RoundOutcome::Victory,
            (GameStatus::Lost, _) => RoundOutcome::Defeat,
            (GameStatus::Finalized, Some(outcome)) => outcome,
            (GameStatus::Finalized, None) => RoundOutcome::Abandoned,
            (GameStatus::NotStarted | GameStatus::InProgress, _) => {
                return Err(GameError::RoundNotFinalized);
            }
        };

        let grid = self
            .board
            .iter()
            .map(|entry| entry.feedback.iter().map(|s| s.status.square()).collect())
            .collect();

        Ok(ShareCard {
            outcome,
            attempts_used: self.board.len() as u8,
            attempts_budget: self.round_attempts,
            points: self.score(),
            grid,
        })
    }
}

/// Classify each guessed letter against the secret.
///
/// Two passes with per-letter remaining-count bookkeeping: exact positional
/// matches are consumed first, then a left-to-right pass credits
/// [`LetterStatus::WrongPosition`] only while unconsumed instances of the
/// letter remain. A single membership test instead of the second pass would
/// over-credit duplicate letters whenever the guess repeats a letter more
/// often than the secret contains it.
#[must_use]
pub fn score_guess(guess: &Word, secret: &Word) -> Vec<LetterScore> {
    let g = guess.as_str().as_bytes();
    let s = secret.as_str().as_bytes();

    let mut statuses = [LetterStatus::Inexistent; WORD_LEN];
    let mut remaining = [0u8; 26];

    for i in 0..WORD_LEN {
        if g[i] == s[i] {
            statuses[i] = LetterStatus::Correct;
        } else {
            remaining[(s[i] - b'A') as usize] += 1;
        }
    }

    for i in 0..WORD_LEN {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        let slot = &mut remaining[(g[i] - b'A') as usize];
        if *slot > 0 {
            statuses[i] = LetterStatus::WrongPosition;
            *slot -= 1;
        }
    }

    g.iter()
        .zip(statuses)
        .map(|(&letter, status)| LetterScore {
            letter: letter as char,
            status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(raw: &str) -> Word {
        Word::parse(raw, true).unwrap()
    }

    fn started_session(secret: &str) -> GameSession {
        let mut session = GameSession::new(GameRules::default());
        session.begin_round(word(secret)).unwrap();
        session
    }

    fn statuses(feedback: &[LetterScore]) -> Vec<LetterStatus> {
        feedback.iter().map(|score| score.status).collect()
    }

    // === Feedback Tests ===

    #[test]
    fn test_feedback_exact_match() {
        let feedback = score_guess(&word("CASAL"), &word("CASAL"));
        assert_eq!(feedback.len(), 5);
        assert!(feedback.iter().all(|s| s.status == LetterStatus::Correct));
    }

    #[test]
    fn test_feedback_disjoint_letters() {
        let feedback = score_guess(&word("PORTO"), &word("CASAL"));
        assert!(feedback.iter().all(|s| s.status == LetterStatus::Inexistent));
    }

    #[test]
    fn test_feedback_mixed() {
        let feedback = score_guess(&word("CARRO"), &word("CASAL"));
        assert_eq!(
            statuses(&feedback),
            vec![
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Inexistent,
                LetterStatus::Inexistent,
                LetterStatus::Inexistent,
            ]
        );
    }

    #[test]
    fn test_feedback_duplicate_letters() {
        // Secret CASAL has two As; each guessed A earns credit only while
        // an unconsumed A remains.
        let feedback = score_guess(&word("ALCAR"), &word("CASAL"));
        assert_eq!(
            statuses(&feedback),
            vec![
                LetterStatus::WrongPosition,
                LetterStatus::WrongPosition,
                LetterStatus::WrongPosition,
                LetterStatus::Correct,
                LetterStatus::Inexistent,
            ]
        );
    }

    #[test]
    fn test_feedback_duplicates_not_over_credited() {
        let feedback = score_guess(&word("AMADA"), &word("CASAL"));
        assert_eq!(
            statuses(&feedback),
            vec![
                LetterStatus::WrongPosition,
                LetterStatus::Inexistent,
                LetterStatus::WrongPosition,
                LetterStatus::Inexistent,
                LetterStatus::Inexistent,
            ]
        );
    }

    #[test]
    fn test_feedback_correct_consumes_before_wrong_position() {
        // The L at position 4 is an exact match; the earlier L must not
        // steal it as a wrong-position credit.
        let feedback = score_guess(&word("LEGAL"), &word("CASAL"));
        assert_eq!(
            statuses(&feedback),
            vec![
                LetterStatus::Inexistent,
                LetterStatus::Inexistent,
                LetterStatus::Inexistent,
                LetterStatus::Correct,
                LetterStatus::Correct,
            ]
        );
    }

    #[test]
    fn test_feedback_preserves_guessed_letters() {
        let feedback = score_guess(&word("PORTO"), &word("CASAL"));
        let letters: String = feedback.iter().map(|s| s.letter).collect();
        assert_eq!(letters, "PORTO");
    }

    // === Lifecycle Tests ===

    #[test]
    fn test_new_session_is_not_started() {
        let session = GameSession::new(GameRules::default());
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn test_begin_round_resets_state() {
        let mut session = started_session("CASAL");
        session.guess("porto").unwrap();
        session.begin_round(word("TEMPO")).unwrap();

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.remaining_attempts(), 6);
        assert!(session.view(false).board.is_empty());
    }

    #[test]
    fn test_guess_before_start_rejected() {
        let mut session = GameSession::new(GameRules::default());
        assert_eq!(session.guess("casal"), Err(GameError::NotStarted));
    }

    #[test]
    fn test_guess_after_win_rejected() {
        let mut session = started_session("CASAL");
        session.guess("casal").unwrap();
        assert_eq!(session.guess("porto"), Err(GameError::AlreadyFinished));
    }

    #[test]
    fn test_invalid_guess_leaves_state_unchanged() {
        let mut session = started_session("CASAL");
        assert_eq!(
            session.guess("casa"),
            Err(GameError::InvalidLength { found: 4 })
        );
        assert_eq!(session.guess("cas4l"), Err(GameError::InvalidCharacters));

        let view = session.view(false);
        assert!(view.board.is_empty());
        assert_eq!(view.remaining_attempts, 6);
        assert_eq!(view.status, GameStatus::InProgress);
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut session = started_session("CASAL");
        assert!(session.guess("casal").unwrap().won);
    }

    #[test]
    fn test_guess_folds_diacritics() {
        let mut session = started_session("CASAL");
        assert!(session.guess("cásal").unwrap().won);
    }

    #[test]
    fn test_win_does_not_consume_attempt() {
        let mut session = started_session("CASAL");
        session.guess("porto").unwrap();
        session.guess("casal").unwrap();

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.remaining_attempts(), 5);
    }

    #[test]
    fn test_win_consumes_attempt_when_configured() {
        let rules = GameRules {
            win_consumes_attempt: true,
            ..GameRules::default()
        };
        let mut session = GameSession::new(rules);
        session.begin_round(word("CASAL")).unwrap();
        session.guess("casal").unwrap();

        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.remaining_attempts(), 5);
    }

    #[test]
    fn test_budget_invariant_while_no_win() {
        let mut session = started_session("CASAL");
        for guess in ["PORTO", "LINDO", "FESTA"] {
            session.guess(guess).unwrap();
            let view = session.view(false);
            assert_eq!(
                view.board.len() as u8 + view.remaining_attempts,
                session.attempt_budget()
            );
        }
    }

    #[test]
    fn test_lost_after_budget_exhausted() {
        let mut session = started_session("CASAL");
        for guess in ["PORTO", "LINDO", "FESTA", "TRONO", "MUITO", "PONTE"] {
            session.guess(guess).unwrap();
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.remaining_attempts(), 0);
        assert_eq!(session.guess("casal"), Err(GameError::AlreadyFinished));
    }

    #[test]
    fn test_board_never_exceeds_budget() {
        let rules = GameRules {
            attempts: 2,
            ..GameRules::default()
        };
        let mut session = GameSession::new(rules);
        session.begin_round(word("CASAL")).unwrap();
        session.guess("porto").unwrap();
        session.guess("lindo").unwrap();
        let _ = session.guess("festa");

        assert_eq!(session.view(false).board.len(), 2);
    }

    // === Restart Policy Tests ===

    #[test]
    fn test_force_restart_rerolls_mid_round() {
        let mut session = started_session("CASAL");
        session.guess("porto").unwrap();
        assert!(session.begin_round(word("TEMPO")).is_ok());
        assert_eq!(session.remaining_attempts(), 6);
    }

    #[test]
    fn test_reject_restart_mid_round() {
        let rules = GameRules {
            restart: RestartPolicy::Reject,
            ..GameRules::default()
        };
        let mut session = GameSession::new(rules);
        session.begin_round(word("CASAL")).unwrap();

        assert_eq!(
            session.begin_round(word("TEMPO")),
            Err(GameError::RoundInProgress)
        );

        session.guess("casal").unwrap();
        assert!(session.begin_round(word("TEMPO")).is_ok());
    }

    // === Finalize / New Round Tests ===

    #[test]
    fn test_new_round_requires_finalize() {
        let mut session = started_session("CASAL");
        session.guess("casal").unwrap();

        assert_eq!(
            session.begin_new_round(word("TEMPO"), None),
            Err(GameError::RoundNotFinalized)
        );

        session.finalize(RoundOutcome::Victory);
        assert!(session.begin_new_round(word("TEMPO"), None).is_ok());
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_new_round_attempt_override() {
        let mut session = started_session("CASAL");
        session.finalize(RoundOutcome::Abandoned);
        session.begin_new_round(word("TEMPO"), Some(3)).unwrap();

        assert_eq!(session.remaining_attempts(), 3);
        assert_eq!(session.attempt_budget(), 3);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut session = started_session("CASAL");
        session.guess("casal").unwrap();
        session.finalize(RoundOutcome::Victory);
        session.finalize(RoundOutcome::Abandoned);

        assert_eq!(session.status(), GameStatus::Finalized);
        assert_eq!(session.share_card().unwrap().outcome, RoundOutcome::Victory);
    }

    // === View Tests ===

    #[test]
    fn test_view_hides_secret_in_progress() {
        let session = started_session("CASAL");
        assert!(session.view(false).secret.is_none());
    }

    #[test]
    fn test_view_reveals_secret_on_request() {
        let session = started_session("CASAL");
        assert_eq!(session.view(true).secret.as_deref(), Some("CASAL"));
    }

    #[test]
    fn test_view_reveals_secret_after_loss() {
        let mut session = started_session("CASAL");
        for guess in ["PORTO", "LINDO", "FESTA", "TRONO", "MUITO", "PONTE"] {
            session.guess(guess).unwrap();
        }
        assert_eq!(session.view(false).secret.as_deref(), Some("CASAL"));
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut session = started_session("CASAL");
        session.guess("carro").unwrap();
        assert_eq!(session.view(false), session.view(false));
    }

    // === Score and Share Tests ===

    #[test]
    fn test_score_zero_on_empty_board() {
        let session = started_session("CASAL");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_score_counts_latest_guess() {
        let mut session = started_session("CASAL");
        session.guess("carro").unwrap();
        assert_eq!(session.score(), 20);
        session.guess("casal").unwrap();
        assert_eq!(session.score(), 50);
    }

    #[test]
    fn test_share_card_rejected_mid_round() {
        let session = started_session("CASAL");
        assert_eq!(session.share_card(), Err(GameError::RoundNotFinalized));
    }

    #[test]
    fn test_share_card_after_win() {
        let mut session = started_session("CASAL");
        session.guess("carro").unwrap();
        session.guess("casal").unwrap();

        let card = session.share_card().unwrap();
        assert_eq!(card.outcome, RoundOutcome::Victory);
        assert_eq!(card.attempts_used, 2);
        assert_eq!(card.attempts_budget, 6);
        assert_eq!(card.points, 50);
        assert_eq!(card.grid, vec!["🟩🟩⬛⬛⬛", "🟩🟩🟩🟩🟩"]);
    }
}
