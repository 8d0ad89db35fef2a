//! Word Grid - CLI
//!
//! Single-player word-guessing game with difficulty tiers and mood tracking.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_grid::{
    commands::{run_simple, score_words, summarize_buckets},
    core::Word,
    output::{print_bucket_summary, print_score_result},
    vocab::{Difficulty, WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_grid",
    about = "Guess the secret 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty tier: easy (default), medium, hard
    #[arg(short, long, global = true, default_value = "easy")]
    difficulty: String,

    /// Wordlist: 'bundled' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "bundled")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based CLI game without the TUI
    Simple,

    /// Score a single guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Partition the vocabulary into difficulty tiers and summarize them
    Buckets {
        /// Number of sample words to show per tier
        #[arg(short, long, default_value = "8")]
        samples: usize,
    },
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist_mode: &str) -> Result<Vec<Word>> {
    use word_grid::vocab::loader::load_from_file;

    let words = match wordlist_mode {
        "bundled" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };

    anyhow::ensure!(!words.is_empty(), "Word list is empty after filtering");
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_vocabulary(&cli.wordlist)?;
    let difficulty = Difficulty::from_name(&cli.difficulty);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, difficulty),
        Commands::Simple => run_simple(&words, difficulty).map_err(|e| anyhow::anyhow!(e)),
        Commands::Score { guess, secret } => {
            let result = score_words(&guess, &secret).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Buckets { samples } => {
            let summary = summarize_buckets(&words, samples).map_err(|e| anyhow::anyhow!(e))?;
            print_bucket_summary(&summary);
            Ok(())
        }
    }
}

fn run_play_command(words: Vec<Word>, difficulty: Difficulty) -> Result<()> {
    use word_grid::interactive::{App, run_tui};

    let app = App::new(words, difficulty)?;
    run_tui(app)
}
