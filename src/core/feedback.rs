//! Guess scoring and feedback representation
//!
//! A `Feedback` is the per-position outcome of comparing a guess against the
//! secret: each position is `Correct`, `Present`, or `Absent`. Scoring uses
//! two passes so that duplicate letters are handled exactly: a guessed letter
//! can only be `Present` as many times as it occurs in the secret outside of
//! exact matches.

use super::{WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashMap;
use std::fmt;

/// Outcome for a single guessed letter at a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter not in the secret (or all its occurrences already matched)
    Absent,
    /// Letter in the secret, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterStatus {
    /// Point value used by the mood tracker and keyboard hints
    /// (correct=2, present=1, absent=0)
    #[inline]
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }
}

/// Per-position feedback for one submitted guess
///
/// Immutable once produced; one entry per position of the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Score `guess` against `secret` using the game's feedback rules
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct`; every secret letter not
    ///    consumed by an exact match goes into a remaining-letter pool.
    /// 2. Second pass: for each position not already `Correct`, mark
    ///    `Present` if the pool still holds that letter (and take one from
    ///    the pool), otherwise `Absent`.
    ///
    /// # Examples
    /// ```
    /// use word_grid::core::{Feedback, LetterStatus, Word};
    ///
    /// let guess = Word::new("alley").unwrap();
    /// let secret = Word::new("smell").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// use LetterStatus::{Absent, Present};
    /// assert_eq!(
    ///     feedback.statuses(),
    ///     &[Absent, Present, Present, Present, Absent]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: exact matches; unmatched secret letters feed the pool
        // Allow: Index needed to compare guess[i] with secret[i] and set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                statuses[i] = LetterStatus::Correct;
            } else {
                *remaining.entry(secret.char_at(i)).or_insert(0) += 1;
            }
        }

        // Second pass: wrong-position matches, bounded by the pool
        // Allow: Index needed to access guess[i] and check/set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.char_at(i))
                && *count > 0
            {
                statuses[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(statuses)
    }

    /// The per-position statuses, in guess order
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Whether every position is `Correct` (the guess is the secret)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Count positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Iterate over the statuses in position order
    pub fn iter(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Feedback {
    /// Compact text form: `C` correct, `P` present, `.` absent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in self.0 {
            f.write_str(match status {
                LetterStatus::Correct => "C",
                LetterStatus::Present => "P",
                LetterStatus::Absent => ".",
            })?;
        }
        Ok(())
    }
}

/// Score a guess against a secret, validating both strings first
///
/// String-level entry point for hosts that have not yet constructed `Word`
/// values. Never truncates or pads: a wrong-length input is an error.
///
/// # Errors
/// Returns `WordError::InvalidLength` if either string is not exactly 5
/// characters, or another `WordError` for non-letter input.
///
/// # Examples
/// ```
/// use word_grid::core::{WordError, score};
///
/// assert!(score("crane", "crate").is_ok());
/// assert!(matches!(score("TOO", "SHORT"), Err(WordError::InvalidLength(3))));
/// ```
pub fn score(guess: &str, secret: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(Feedback::score(&guess, &secret))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};

    #[test]
    fn score_exact_match_positions() {
        let feedback = score("CRANE", "CRATE").unwrap();
        assert_eq!(
            feedback.statuses(),
            &[Correct, Correct, Correct, Absent, Correct]
        );
    }

    #[test]
    fn score_duplicate_letters() {
        // Secret SMELL has two L's and one E; ALLEY's A and Y miss entirely,
        // and only as many L's match as the secret still holds.
        let feedback = score("ALLEY", "SMELL").unwrap();
        assert_eq!(
            feedback.statuses(),
            &[Absent, Present, Present, Present, Absent]
        );
    }

    #[test]
    fn score_duplicate_guess_letter_single_in_secret() {
        // Guessing a letter twice when the secret holds it once yields
        // exactly one match, not two.
        let feedback = score("GEESE", "CRANE").unwrap();
        let e_matches = [0, 1, 2, 3, 4]
            .iter()
            .filter(|&&i| feedback.status_at(i) != Absent)
            .count();
        assert_eq!(e_matches, 1);
    }

    #[test]
    fn score_green_consumes_before_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let feedback = score("ROBOT", "FLOOR").unwrap();
        assert_eq!(
            feedback.statuses(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn score_self_match_is_all_correct() {
        for word in ["crane", "slate", "speed", "AAAAA"] {
            let feedback = score(word, word).unwrap();
            assert!(feedback.is_win());
            assert_eq!(feedback.count(Correct), WORD_LENGTH);
        }
    }

    #[test]
    fn score_no_common_letters() {
        let feedback = score("CRANE", "GUILT").unwrap();
        assert_eq!(feedback.count(Absent), WORD_LENGTH);
        assert!(!feedback.is_win());
    }

    #[test]
    fn score_case_insensitive() {
        assert_eq!(
            score("crane", "CRATE").unwrap(),
            score("CRANE", "crate").unwrap()
        );
    }

    #[test]
    fn score_rejects_wrong_lengths() {
        assert!(matches!(
            score("TOO", "SHORT"),
            Err(WordError::InvalidLength(3))
        ));
        assert!(matches!(
            score("CRANE", "LONGEST"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(score("", "CRANE").is_err());
    }

    #[test]
    fn score_statuses_are_tristate() {
        let feedback = score("SPEED", "ERASE").unwrap();
        for status in feedback.iter() {
            assert!(matches!(status, Correct | Present | Absent));
        }
        // S(present) P(absent) E(present) E(present) D(absent)
        assert_eq!(
            feedback.statuses(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn status_points_ranking() {
        assert_eq!(Correct.points(), 2);
        assert_eq!(Present.points(), 1);
        assert_eq!(Absent.points(), 0);
        assert!(Correct > Present && Present > Absent);
    }

    #[test]
    fn feedback_display_compact() {
        let feedback = score("CRANE", "CRATE").unwrap();
        assert_eq!(feedback.to_string(), "CCC.C");
    }
}
