//! Display functions for command results

use super::formatters::feedback_to_emoji;
use crate::commands::{BucketSummary, ScoreResult};
use crate::core::LetterStatus;
use colored::Colorize;

/// Print one scored guess as a colored row plus the emoji form
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:  {}    Secret: {}",
        result.guess.bright_white().bold(),
        result.secret.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    print!("\nResult: ");
    for (i, status) in result.feedback.iter().enumerate() {
        let letter = &result.guess[i..=i];
        let colored_letter = match status {
            LetterStatus::Correct => letter.black().on_green(),
            LetterStatus::Present => letter.black().on_yellow(),
            LetterStatus::Absent => letter.white().on_bright_black(),
        };
        print!("{colored_letter} ");
    }
    println!(" {}", feedback_to_emoji(&result.feedback));

    if result.feedback.is_win() {
        println!("\n{}", "Exact match!".green().bold());
    }
    println!();
}

/// Print the difficulty tier summary of a vocabulary
pub fn print_bucket_summary(summary: &BucketSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VOCABULARY TIERS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nTotal words: {}", summary.total.to_string().bright_yellow());

    for tier in &summary.tiers {
        let pct = if summary.total > 0 {
            tier.size as f64 / summary.total as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "\n{} {} words ({pct:.1}%)",
            format!("{}:", tier.difficulty).bright_cyan().bold(),
            tier.size
        );
        if !tier.samples.is_empty() {
            println!("  e.g. {}", tier.samples.join(", ").bright_white());
        }
    }
    println!();
}
