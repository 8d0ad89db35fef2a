//! Game session lifecycle
//!
//! One `Session` per game. It owns the secret, the ordered guess history,
//! and the mood tracker, so multiple sessions can coexist without shared
//! state.
//!
//! Lifecycle: `NotStarted -> InProgress -> {Won, Lost}`. Won and Lost are
//! terminal; recording another guess there is a hard error rather than a
//! silent no-op.

use super::mood::MoodTracker;
use crate::core::{Feedback, MAX_GUESSES, Word};
use std::fmt;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{name}")
    }
}

/// Error type for session misuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No secret has been set; call `start` first
    NotStarted,
    /// The game already ended; start a new session to keep playing
    Finished(GameStatus),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Session has not been started"),
            Self::Finished(status) => {
                write!(f, "Session is already over ({status}); start a new game")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// One submitted guess and its feedback
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Mutable state for a single game
#[derive(Debug, Clone, Default)]
pub struct Session {
    secret: Option<Word>,
    history: Vec<GuessRecord>,
    mood: MoodTracker,
    status: GameStatus,
}

impl Session {
    /// Create an idle session with no secret
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new game with the given secret, discarding any prior state
    pub fn start(&mut self, secret: Word) {
        self.secret = Some(secret);
        self.history.clear();
        self.mood.reset();
        self.status = GameStatus::InProgress;
    }

    /// Drop the current game and return to `NotStarted`
    pub fn reset(&mut self) {
        self.secret = None;
        self.history.clear();
        self.mood.reset();
        self.status = GameStatus::NotStarted;
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret word, if a game has started
    #[must_use]
    pub const fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    /// Guesses submitted so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn guesses_left(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    /// Eased mood ratio in [0, 1] for the session so far
    #[must_use]
    pub fn mood_ratio(&self) -> f64 {
        self.mood.visual_ratio()
    }

    /// Accumulated mood score (non-decreasing within a game)
    #[must_use]
    pub const fn mood_score(&self) -> u32 {
        self.mood.score()
    }

    /// Score a guess against the secret and record it
    ///
    /// Convenience over [`Session::record_guess`] for hosts that let the
    /// session do the scoring. The caller is still responsible for checking
    /// that the guess is a known word.
    ///
    /// # Errors
    /// `SessionError::NotStarted` before `start`, `SessionError::Finished`
    /// after the game ends.
    pub fn submit(&mut self, guess: &Word) -> Result<Feedback, SessionError> {
        let secret = match self.status {
            GameStatus::NotStarted => return Err(SessionError::NotStarted),
            GameStatus::Won | GameStatus::Lost => return Err(SessionError::Finished(self.status)),
            GameStatus::InProgress => self
                .secret
                .as_ref()
                .ok_or(SessionError::NotStarted)?
                .clone(),
        };

        let feedback = Feedback::score(guess, &secret);
        self.record_guess(guess, feedback)?;
        Ok(feedback)
    }

    /// Record an externally scored guess and return the eased mood ratio
    ///
    /// Updates the history, the mood tracker, and the lifecycle state:
    /// an all-correct result wins, and the guess that exhausts the allowance
    /// without winning loses.
    ///
    /// # Errors
    /// `SessionError::NotStarted` before `start`, `SessionError::Finished`
    /// after the game ends. No state is mutated on error.
    pub fn record_guess(&mut self, guess: &Word, feedback: Feedback) -> Result<f64, SessionError> {
        match self.status {
            GameStatus::NotStarted => return Err(SessionError::NotStarted),
            GameStatus::Won | GameStatus::Lost => return Err(SessionError::Finished(self.status)),
            GameStatus::InProgress => {}
        }

        let ratio = self.mood.record(guess, &feedback);
        self.history.push(GuessRecord {
            guess: guess.clone(),
            feedback,
        });

        if feedback.is_win() {
            self.status = GameStatus::Won;
        } else if self.history.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        Ok(ratio)
    }
}
