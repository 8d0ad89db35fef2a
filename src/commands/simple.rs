//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI.

use crate::core::{Feedback, LetterStatus, MAX_GUESSES, Word, WordError};
use crate::game::{GameStatus, Session};
use crate::output::formatters::{mood_bar, share_board};
use crate::vocab::{Difficulty, draw_secret, partition};
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::io::{self, Write};

/// In-memory win/streak counters across games in one run
#[derive(Debug, Default, Clone)]
pub struct GameStats {
    pub played: usize,
    pub wins: usize,
    pub streak: usize,
    pub max_streak: usize,
}

impl GameStats {
    fn record(&mut self, won: bool) {
        self.played += 1;
        if won {
            self.wins += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the vocabulary cannot be partitioned or on an I/O
/// error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(words: &[Word], mut difficulty: Difficulty) -> Result<(), String> {
    let buckets = partition(words).map_err(|e| e.to_string())?;
    let allowed: FxHashSet<&str> = words.iter().map(Word::text).collect();
    let mut rng = rand::rng();
    let mut stats = GameStats::default();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Grid - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find the secret 5-letter word in {MAX_GUESSES} tries.");
    println!("After each guess: green = right spot, yellow = wrong spot, gray = not in word.\n");
    println!("Commands: 'quit' to exit, 'new' for a new word, 'easy'/'medium'/'hard' to switch\n");

    'game: loop {
        let secret = draw_secret(&buckets, difficulty, words, &mut rng)
            .ok_or("Word list is empty")?
            .clone();

        let mut session = Session::new();
        session.start(secret);
        println!(
            "New {} puzzle ready. Good luck!\n",
            difficulty.to_string().bright_cyan()
        );

        while session.status() == GameStatus::InProgress {
            let turn = session.guesses_made() + 1;
            let input = get_user_input(&format!("Guess {turn}/{MAX_GUESSES}"))?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\n🔄 New game started!\n");
                    continue 'game;
                }
                "easy" | "medium" | "hard" => {
                    difficulty = Difficulty::from_name(&input);
                    println!(
                        "\nDifficulty set to {}. Starting a new game.\n",
                        difficulty.to_string().bright_cyan()
                    );
                    continue 'game;
                }
                _ => {}
            }

            let guess = match Word::new(input.as_str()) {
                Ok(word) => word,
                Err(WordError::InvalidLength(_)) => {
                    println!("{}\n", "Not enough letters.".yellow());
                    continue;
                }
                Err(_) => {
                    println!("{}\n", "Letters only, please.".yellow());
                    continue;
                }
            };

            if !allowed.contains(guess.text()) {
                println!("{}\n", "Not a known word. Try another.".yellow());
                continue;
            }

            // Session is in progress and the guess is legal
            let feedback = session.submit(&guess).map_err(|e| e.to_string())?;
            print_guess_row(&guess, &feedback);
            println!(
                "Mood:   [{}] {:>3.0}%\n",
                mood_bar(session.mood_ratio(), 20).green(),
                session.mood_ratio() * 100.0
            );
        }

        let won = session.status() == GameStatus::Won;
        stats.record(won);
        // Session always has a secret here
        let secret_text = session
            .secret()
            .map(|w| w.text().to_string())
            .unwrap_or_default();

        if won {
            let turn = session.guesses_made();
            let performance = match turn {
                1 => "🏆 Unbelievable!",
                2 => "⭐ Magnificent!",
                3 => "💫 Splendid!",
                4 => "✨ Great job!",
                5 => "👍 Nice work!",
                _ => "😅 Phew!",
            };
            println!(
                "\n{} The word was {}.",
                performance.bright_yellow().bold(),
                secret_text.bright_green().bold()
            );
        } else {
            println!(
                "\n{} The word was {}.",
                "Out of tries.".red().bold(),
                secret_text.bright_yellow().bold()
            );
        }

        println!("\n{}", share_board(session.history(), won));
        print_stats(&stats);

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!(),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_guess_row(guess: &Word, feedback: &Feedback) {
    print!("        ");
    for (i, status) in feedback.iter().enumerate() {
        let letter = &guess.text()[i..=i];
        let tile = match status {
            LetterStatus::Correct => letter.black().on_green().bold(),
            LetterStatus::Present => letter.black().on_yellow().bold(),
            LetterStatus::Absent => letter.white().on_bright_black(),
        };
        print!(" {tile} ");
    }
    println!();
}

fn print_stats(stats: &GameStats) {
    let win_pct = if stats.played > 0 {
        stats.wins as f64 / stats.played as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "Played: {} • Wins: {} ({win_pct:.0}%) • Streak: {} • Max: {}",
        stats.played, stats.wins, stats.streak, stats.max_streak
    );
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
