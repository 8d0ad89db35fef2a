//! Word Grid
//!
//! A single-player word-guessing game: find a 5-letter secret in six tries,
//! with difficulty tiers built from letter frequency and a session mood
//! score that tracks first-discovery progress.
//!
//! # Quick Start
//!
//! ```rust
//! use word_grid::core::{Feedback, Word};
//! use word_grid::game::Session;
//!
//! let mut session = Session::new();
//! session.start(Word::new("crate").unwrap());
//!
//! let feedback = session.submit(&Word::new("crane").unwrap()).unwrap();
//! println!("{feedback}  mood {:.2}", session.mood_ratio());
//! ```

// Core domain types
pub mod core;

// Session state and mood tracking
pub mod game;

// Vocabulary loading and difficulty tiers
pub mod vocab;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
