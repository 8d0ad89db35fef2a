//! One-shot scoring command
//!
//! Scores a single guess against a secret and reports the per-letter
//! outcome, without starting a session.

use crate::core::{Feedback, score};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: String,
    pub secret: String,
    pub feedback: Feedback,
}

/// Score a guess against a secret
///
/// # Errors
///
/// Returns an error if either word is invalid (not 5 letters or contains
/// non-letter characters).
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult, String> {
    let feedback = score(guess, secret).map_err(|e| format!("Invalid word: {e}"))?;

    Ok(ScoreResult {
        guess: guess.to_uppercase(),
        secret: secret.to_uppercase(),
        feedback,
    })
}
