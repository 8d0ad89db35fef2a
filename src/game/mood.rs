//! Session mood scoring
//!
//! Aggregates per-letter outcomes across a session into a single normalized
//! intensity value. Each distinct letter scores once, the first time it is
//! guessed, at its best status in that guess (correct=2, present=1,
//! absent=0). Repeat guesses of a letter contribute nothing, even when the
//! status improves: the score models first discovery, not re-scoring.

use crate::core::{Feedback, MAX_GUESSES, WORD_LENGTH, Word};

/// Maximum accumulated mood score for a session
///
/// Every position of every guess at full value.
pub const MAX_MOOD_SCORE: u32 = (WORD_LENGTH * 2 * MAX_GUESSES) as u32;

/// Accumulator mapping a session's feedback into a progress ratio
#[derive(Debug, Clone, Default)]
pub struct MoodTracker {
    seen: [bool; 26],
    score: u32,
}

impl MoodTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all scored letters and reset the score to zero
    pub fn reset(&mut self) {
        self.seen = [false; 26];
        self.score = 0;
    }

    /// Record one scored guess and return the eased mood ratio
    ///
    /// For each distinct letter in the guess, its best status across the
    /// positions it appears in is found first, so a letter appearing twice
    /// in one guess is not double-counted. Only letters never scored before
    /// in this session add points.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) -> f64 {
        let mut best = [None::<u32>; 26];
        for (i, status) in feedback.iter().enumerate() {
            let idx = (guess.char_at(i) - b'A') as usize;
            let points = status.points();
            if best[idx].is_none_or(|b| points > b) {
                best[idx] = Some(points);
            }
        }

        for (idx, points) in best.iter().enumerate() {
            if let Some(points) = points
                && !self.seen[idx]
            {
                self.seen[idx] = true;
                self.score += points;
            }
        }

        self.visual_ratio()
    }

    /// Accumulated score so far (non-decreasing within a session)
    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Linear progress ratio, clamped to [0, 1]
    #[must_use]
    pub fn raw_ratio(&self) -> f64 {
        (f64::from(self.score) / f64::from(MAX_MOOD_SCORE)).clamp(0.0, 1.0)
    }

    /// Eased progress ratio in [0, 1]
    ///
    /// `min(1, (raw * 1.35)^0.8)` front-loads feedback so progress feels
    /// faster early and saturates near completion.
    #[must_use]
    pub fn visual_ratio(&self) -> f64 {
        (self.raw_ratio() * 1.35).powf(0.8).min(1.0)
    }
}
