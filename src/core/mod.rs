//! Core game-logic types
//!
//! The fundamental domain types with zero I/O: validated words and the
//! guess-scoring rules. Everything here is pure and deterministic, with
//! explicit handling of the one subtle case (duplicate letters).

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus, score};
pub use word::{Word, WordError};

/// Fixed length of every word in the game
pub const WORD_LENGTH: usize = 5;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;
