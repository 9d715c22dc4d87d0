//! Game entities: words, letter feedback, board records, and view snapshots.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::errors::GameError;

/// Number of letters in every secret word and guess.
pub const WORD_LEN: usize = 5;

/// A validated word: exactly [`WORD_LEN`] uppercase ASCII letters.
///
/// Construction goes through [`Word::parse`], so every instance upholds the
/// length and alphabet invariants the scoring algorithm relies on.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Parse a raw guess or dictionary word.
    ///
    /// Input is trimmed and upper-cased; with `fold_diacritics`, accented
    /// letters are folded to their ASCII base (Á→A, Ç→C) before validation.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidLength`] when the trimmed input is not exactly
    /// five characters, [`GameError::InvalidCharacters`] when any character
    /// is not a letter after folding.
    pub fn parse(raw: &str, fold_diacritics: bool) -> Result<Self, GameError> {
        let raw = raw.trim();
        let found = raw.chars().count();
        if found != WORD_LEN {
            return Err(GameError::InvalidLength { found });
        }

        let mut letters = String::with_capacity(WORD_LEN);
        for c in raw.chars() {
            let c = if fold_diacritics { fold_diacritic(c) } else { c };
            let c = c.to_ascii_uppercase();
            if !c.is_ascii_alphabetic() {
                return Err(GameError::InvalidCharacters);
            }
            letters.push(c);
        }
        Ok(Self(letters))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for Word {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s, true).map_err(serde::de::Error::custom)
    }
}

/// Fold a Portuguese accented letter to its ASCII base; other characters
/// pass through unchanged.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        _ => c,
    }
}

/// Classification of a single guessed letter.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    /// Right letter in the right position.
    Correct,
    /// Letter occurs in the secret, but at a different position.
    WrongPosition,
    /// Letter is absent, or all its instances are already accounted for.
    Inexistent,
}

impl LetterStatus {
    /// Colored square used in share grids.
    #[must_use]
    pub const fn square(self) -> char {
        match self {
            LetterStatus::Correct => '🟩',
            LetterStatus::WrongPosition => '🟨',
            LetterStatus::Inexistent => '⬛',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterStatus::Correct => write!(f, "correct"),
            LetterStatus::WrongPosition => write!(f, "wrong_position"),
            LetterStatus::Inexistent => write!(f, "inexistent"),
        }
    }
}

/// One guessed letter together with its classification.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LetterScore {
    pub letter: char,
    pub status: LetterStatus,
}

/// A recorded guess: the submitted word and its per-letter feedback.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: Vec<LetterScore>,
}

/// Result of a single guess returned to the caller.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GuessOutcome {
    pub won: bool,
    pub feedback: Vec<LetterScore>,
}

/// Lifecycle status of a game session.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
    Finalized,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::NotStarted => write!(f, "not_started"),
            GameStatus::InProgress => write!(f, "in_progress"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
            GameStatus::Finalized => write!(f, "finalized"),
        }
    }
}

/// Recorded result of a finished round.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Victory,
    Defeat,
    /// The round was finalized before reaching a win or loss.
    Abandoned,
}

/// Read-only snapshot of a session.
///
/// The secret word is populated only once the round is over (won or lost) or
/// when the caller explicitly asked for a revealing view; it is never present
/// while the round is in progress.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionView {
    pub remaining_attempts: u8,
    pub board: Vec<GuessRecord>,
    pub status: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Copy-ready summary of a finished round.
///
/// Carries the emoji grid and score so transports and UIs can render or
/// share the result without reaching back into the session.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ShareCard {
    pub outcome: RoundOutcome,
    pub attempts_used: u8,
    pub attempts_budget: u8,
    pub points: u32,
    /// One row of colored squares per guess, in play order.
    pub grid: Vec<String>,
}

impl fmt::Display for ShareCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let used = match self.outcome {
            RoundOutcome::Victory => self.attempts_used.to_string(),
            RoundOutcome::Defeat | RoundOutcome::Abandoned => "X".to_string(),
        };
        write!(f, "Termo {used}/{} ({} pts)", self.attempts_budget, self.points)?;
        for row in &self.grid {
            write!(f, "\n{row}")?;
        }
        Ok(())
    }
}
