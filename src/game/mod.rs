//! Session state and mood tracking
//!
//! A `Session` owns one game: the secret word, the guess history, and a
//! `MoodTracker` that turns first-discovered letter statuses into a
//! normalized progress ratio for presentation layers.

mod mood;
mod session;

pub use mood::{MAX_MOOD_SCORE, MoodTracker};
pub use session::{GameStatus, GuessRecord, Session, SessionError};
