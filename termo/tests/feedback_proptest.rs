//! Property-based tests for guess feedback scoring.
//!
//! These verify the duplicate-letter accounting holds across randomly
//! generated word pairs, not just the handful of known tricky cases.

use proptest::prelude::*;
use termo::game::{LetterStatus, WORD_LEN, Word, score_guess};

// Narrow alphabet so duplicate letters show up often.
fn dense_word_strategy() -> impl Strategy<Value = Word> {
    prop::collection::vec(prop::char::range('A', 'E'), WORD_LEN).prop_map(|chars| {
        let raw: String = chars.into_iter().collect();
        Word::parse(&raw, false).expect("generated words are five letters")
    })
}

fn full_word_strategy() -> impl Strategy<Value = Word> {
    prop::collection::vec(prop::char::range('A', 'Z'), WORD_LEN).prop_map(|chars| {
        let raw: String = chars.into_iter().collect();
        Word::parse(&raw, false).expect("generated words are five letters")
    })
}

fn letter_count(word: &Word, letter: char) -> usize {
    word.as_str().chars().filter(|&c| c == letter).count()
}

proptest! {
    #[test]
    fn test_feedback_always_has_five_entries(
        guess in full_word_strategy(),
        secret in full_word_strategy(),
    ) {
        let feedback = score_guess(&guess, &secret);
        prop_assert_eq!(feedback.len(), WORD_LEN);
    }

    #[test]
    fn test_correct_exactly_at_positional_matches(
        guess in dense_word_strategy(),
        secret in dense_word_strategy(),
    ) {
        let feedback = score_guess(&guess, &secret);
        for (i, (g, s)) in guess.as_str().chars().zip(secret.as_str().chars()).enumerate() {
            prop_assert_eq!(feedback[i].status == LetterStatus::Correct, g == s);
        }
    }

    #[test]
    fn test_letter_credit_never_exceeds_secret_multiplicity(
        guess in dense_word_strategy(),
        secret in dense_word_strategy(),
    ) {
        let feedback = score_guess(&guess, &secret);
        for letter in 'A'..='E' {
            let credited = feedback
                .iter()
                .filter(|score| {
                    score.letter == letter && score.status != LetterStatus::Inexistent
                })
                .count();
            prop_assert!(credited <= letter_count(&secret, letter));
        }
    }

    #[test]
    fn test_all_correct_iff_words_equal(
        guess in dense_word_strategy(),
        secret in dense_word_strategy(),
    ) {
        let feedback = score_guess(&guess, &secret);
        let all_correct = feedback.iter().all(|s| s.status == LetterStatus::Correct);
        prop_assert_eq!(all_correct, guess == secret);
    }

    #[test]
    fn test_feedback_echoes_guessed_letters(
        guess in full_word_strategy(),
        secret in full_word_strategy(),
    ) {
        let feedback = score_guess(&guess, &secret);
        let letters: String = feedback.iter().map(|s| s.letter).collect();
        prop_assert_eq!(letters, guess.as_str().to_string());
    }
}
