//! TUI application state and logic

use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word};
use crate::game::{GameStatus, Session};
use crate::output::formatters::share_board;
use crate::vocab::{Buckets, Difficulty, EmptyVocabularyError, draw_secret, partition};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;

/// What the input loop is currently accepting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub played: usize,
    pub wins: usize,
    pub streak: usize,
    pub max_streak: usize,
    pub guess_distribution: [usize; 7],
}

/// Application state
pub struct App {
    words: Vec<Word>,
    allowed: FxHashSet<String>,
    buckets: Buckets,
    pub difficulty: Difficulty,
    pub session: Session,
    pub entry: String,
    pub key_hints: FxHashMap<u8, LetterStatus>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

impl App {
    /// Build the app from a vocabulary and start the first game
    ///
    /// # Errors
    /// Fails if the vocabulary is empty.
    pub fn new(words: Vec<Word>, difficulty: Difficulty) -> Result<Self, EmptyVocabularyError> {
        let buckets = partition(&words)?;
        let allowed = words.iter().map(|w| w.text().to_string()).collect();

        let mut app = Self {
            words,
            allowed,
            buckets,
            difficulty,
            session: Session::new(),
            entry: String::new(),
            key_hints: FxHashMap::default(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        };
        app.start_game();
        Ok(app)
    }

    /// Start a new game, drawing a fresh secret from the current bucket
    pub fn start_game(&mut self) {
        let mut rng = rand::rng();
        if let Some(secret) = draw_secret(&self.buckets, self.difficulty, &self.words, &mut rng) {
            let secret = secret.clone();
            self.session.start(secret);
            self.entry.clear();
            self.key_hints.clear();
            self.messages.clear();
            self.input_mode = InputMode::Typing;
            self.add_message("New puzzle ready. Good luck!", MessageStyle::Info);
        } else {
            // Partition succeeded at construction, so the list is non-empty
            self.add_message("Word list is empty!", MessageStyle::Error);
        }
    }

    /// Switch difficulty and restart with a new secret
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            self.difficulty = difficulty;
            self.start_game();
            self.add_message(
                &format!("Difficulty: {difficulty}"),
                MessageStyle::Info,
            );
        }
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_mode == InputMode::Typing
            && self.entry.len() < WORD_LENGTH
            && c.is_ascii_alphabetic()
        {
            self.entry.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.entry.pop();
    }

    /// Submit the typed entry as a guess
    pub fn submit_entry(&mut self) {
        if self.entry.len() < WORD_LENGTH {
            self.add_message("Not enough letters.", MessageStyle::Error);
            return;
        }

        let Ok(guess) = Word::new(self.entry.as_str()) else {
            self.add_message("Letters only, please.", MessageStyle::Error);
            return;
        };

        if !self.allowed.contains(guess.text()) {
            self.add_message("Not a known word. Try another.", MessageStyle::Error);
            return;
        }

        match self.session.submit(&guess) {
            Ok(feedback) => {
                self.update_key_hints(&guess, &feedback);
                self.entry.clear();
                self.after_guess();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn after_guess(&mut self) {
        match self.session.status() {
            GameStatus::Won => {
                let turn = self.session.guesses_made();
                self.stats.played += 1;
                self.stats.wins += 1;
                self.stats.streak += 1;
                self.stats.max_streak = self.stats.max_streak.max(self.stats.streak);
                if turn < self.stats.guess_distribution.len() {
                    self.stats.guess_distribution[turn] += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match turn {
                    1 => "🎯 HOLE IN ONE! Extraordinary!",
                    2 => "🔥 MAGNIFICENT! Two guesses!",
                    3 => "✨ SPLENDID! Three guesses!",
                    4 => "👏 GREAT JOB! Four guesses!",
                    5 => "🎉 NICE WORK! Five guesses!",
                    _ => "😅 PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.played += 1;
                self.stats.streak = 0;
                self.input_mode = InputMode::GameOver;

                let reveal = self
                    .session
                    .secret()
                    .map_or_else(String::new, |w| w.text().to_string());
                self.add_message(
                    &format!("Out of tries. The word was {reveal}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            _ => {
                let left = self.session.guesses_left();
                self.add_message(&format!("{left} guesses left"), MessageStyle::Info);
            }
        }
    }

    /// Keep the best status seen for each guessed letter
    /// (correct > present > absent)
    fn update_key_hints(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, status) in feedback.iter().enumerate() {
            let letter = guess.char_at(i);
            let entry = self.key_hints.entry(letter).or_insert(status);
            if status.points() > entry.points() {
                *entry = status;
            }
        }
    }

    /// Shareable emoji board for the current game
    #[must_use]
    pub fn share_text(&self) -> String {
        share_board(
            self.session.history(),
            self.session.status() == GameStatus::Won,
        )
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Best-known status for a keyboard letter, if it was ever guessed
    #[must_use]
    pub fn hint_for(&self, letter: u8) -> Option<LetterStatus> {
        self.key_hints.get(&letter).copied()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.start_game();
                    }
                    KeyCode::Char(c @ '1'..='3') => {
                        app.set_difficulty(difficulty_for_digit(c));
                    }
                    _ => {
                        // Ignore other keys until a new game starts
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.start_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c @ '1'..='3') => {
                        app.set_difficulty(difficulty_for_digit(c));
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Enter => {
                        app.submit_entry();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

const fn difficulty_for_digit(c: char) -> Difficulty {
    match c {
        '2' => Difficulty::Medium,
        '3' => Difficulty::Hard,
        _ => Difficulty::Easy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::WORDS;
    use crate::vocab::loader::words_from_slice;

    fn test_app() -> App {
        App::new(words_from_slice(&WORDS[..60]), Difficulty::Easy).unwrap()
    }

    #[test]
    fn new_app_starts_a_game() {
        let app = test_app();
        assert_eq!(app.session.status(), GameStatus::InProgress);
        assert!(app.session.secret().is_some());
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn new_app_empty_vocabulary_fails() {
        assert!(App::new(Vec::new(), Difficulty::Easy).is_err());
    }

    #[test]
    fn entry_caps_at_word_length() {
        let mut app = test_app();
        for c in "abcdefgh".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.entry, "ABCDE");
    }

    #[test]
    fn pop_letter_removes_last() {
        let mut app = test_app();
        app.push_letter('a');
        app.push_letter('b');
        app.pop_letter();
        assert_eq!(app.entry, "A");
    }

    #[test]
    fn short_entry_is_rejected() {
        let mut app = test_app();
        app.push_letter('a');
        app.submit_entry();

        assert_eq!(app.session.guesses_made(), 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("Not enough letters"))
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut app = test_app();
        for c in "zzzzz".chars() {
            app.push_letter(c);
        }
        app.submit_entry();

        assert_eq!(app.session.guesses_made(), 0);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("Not a known word"))
        );
    }

    #[test]
    fn known_word_is_scored_and_entry_cleared() {
        let mut app = test_app();
        // "abide" is in the first 60 bundled words
        for c in "abide".chars() {
            app.push_letter(c);
        }
        app.submit_entry();

        assert_eq!(app.session.guesses_made(), 1);
        assert!(app.entry.is_empty());
        assert!(!app.key_hints.is_empty());
    }

    #[test]
    fn guessing_the_secret_wins_and_updates_stats() {
        let mut app = test_app();
        let secret = app.session.secret().unwrap().text().to_string();
        for c in secret.chars() {
            app.push_letter(c);
        }
        app.submit_entry();

        assert_eq!(app.session.status(), GameStatus::Won);
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.played, 1);
        assert_eq!(app.stats.wins, 1);
        assert_eq!(app.stats.streak, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn key_hints_keep_best_status() {
        let mut app = test_app();
        let guess = Word::new("ABIDE").unwrap();
        let worse = Feedback::score(&Word::new("QQQQQ").unwrap(), &Word::new("XXXXX").unwrap());
        let better = Feedback::score(&guess, &guess);

        app.update_key_hints(&guess, &better);
        app.update_key_hints(&guess, &worse);

        assert_eq!(app.hint_for(b'A'), Some(LetterStatus::Correct));
    }

    #[test]
    fn share_text_has_one_row_per_guess() {
        let mut app = test_app();
        for c in "abide".chars() {
            app.push_letter(c);
        }
        app.submit_entry();

        let share = app.share_text();
        // Header plus one emoji row
        assert_eq!(share.lines().count(), 1 + app.session.guesses_made());
    }

    #[test]
    fn new_game_resets_board_state() {
        let mut app = test_app();
        for c in "abide".chars() {
            app.push_letter(c);
        }
        app.submit_entry();
        app.start_game();

        assert_eq!(app.session.guesses_made(), 0);
        assert!(app.key_hints.is_empty());
        assert_eq!(app.input_mode, InputMode::Typing);
    }
}
