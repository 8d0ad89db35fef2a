//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus, MAX_GUESSES};
use crate::game::GuessRecord;

/// Emoji tile for a single letter status
#[must_use]
pub const fn status_to_emoji(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Absent => '⬛',
    }
}

/// Format one feedback row as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.iter().map(status_to_emoji).collect()
}

/// Shareable summary of a finished (or abandoned) game
///
/// A header line with the outcome and guess count, then one emoji row per
/// guess. The secret itself never appears.
#[must_use]
pub fn share_board(history: &[GuessRecord], won: bool) -> String {
    let mark = if won { "✓" } else { "✗" };
    let mut text = format!("Word Grid {mark} {}/{MAX_GUESSES}\n", history.len());
    for record in history {
        text.push_str(&feedback_to_emoji(&record.feedback));
        text.push('\n');
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a mood ratio as a bar
#[must_use]
pub fn mood_bar(ratio: f64, width: usize) -> String {
    create_progress_bar(ratio, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    #[test]
    fn feedback_to_emoji_mixed() {
        let feedback = score("CRANE", "CRATE").unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩⬛🟩");
    }

    #[test]
    fn feedback_to_emoji_all_green() {
        let feedback = score("CRANE", "CRANE").unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_board_header_and_rows() {
        let history = vec![
            GuessRecord {
                guess: Word::new("ALLEY").unwrap(),
                feedback: score("ALLEY", "SMELL").unwrap(),
            },
            GuessRecord {
                guess: Word::new("SMELL").unwrap(),
                feedback: score("SMELL", "SMELL").unwrap(),
            },
        ];

        let board = share_board(&history, true);
        let mut lines = board.lines();
        assert_eq!(lines.next(), Some("Word Grid ✓ 2/6"));
        assert_eq!(lines.next(), Some("⬛🟨🟨🟨⬛"));
        assert_eq!(lines.next(), Some("🟩🟩🟩🟩🟩"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn share_board_lost_game() {
        let board = share_board(&[], false);
        assert!(board.starts_with("Word Grid ✗ 0/6"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn mood_bar_half() {
        let bar = mood_bar(0.5, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
