//! TUI application state and logic

use crate::core::{BOARD_COUNT, WORD_LENGTH};
use crate::error::GameError;
use crate::session::{CompletionReason, Session, SessionConfig, SessionSummary};
use crate::wordlists::Vocabulary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'v> {
    pub vocabulary: &'v Vocabulary,
    pub config: SessionConfig,
    pub session: Session<'v>,
    rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals across sessions played in this TUI run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub sessions: usize,
    pub boards_won: usize,
    pub best_score: usize,
    pub last_score: Option<usize>,
}

impl Statistics {
    fn record(&mut self, summary: &SessionSummary) {
        self.sessions += 1;
        self.boards_won += summary.boards_won;
        self.best_score = self.best_score.max(summary.score);
        self.last_score = Some(summary.score);
    }
}

impl<'v> App<'v> {
    /// Typos never end a TUI session, so any rejection cap in `config` is
    /// lifted.
    ///
    /// # Errors
    /// Returns `GameError::InsufficientVocabulary` if nine targets cannot be drawn.
    pub fn new(
        vocabulary: &'v Vocabulary,
        config: SessionConfig,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let config = config.for_human();
        let session = Session::new(vocabulary, config, &mut rng)?;

        Ok(Self {
            vocabulary,
            config,
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Nine boards, one guess for all. {} guesses.",
                        config.max_guesses
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Esc gives up.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Submit the input buffer as the next round
    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&guess) {
            Ok(result) => {
                let solved: Vec<String> = result
                    .newly_won()
                    .map(|id| (id + 1).to_string())
                    .collect();
                if solved.is_empty() {
                    let text = format!(
                        "{} scored on {} boards",
                        guess.to_uppercase(),
                        result.scored_count()
                    );
                    self.add_message(&text, MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!("Solved board {}!", solved.join(", ")),
                        MessageStyle::Success,
                    );
                }
                self.check_finished();
            }
            Err(err) => {
                self.input_buffer = guess;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Give up on the current session
    pub fn forfeit(&mut self) {
        self.session.forfeit();
        self.check_finished();
    }

    fn check_finished(&mut self) {
        let Some(summary) = self.session.summary() else {
            return;
        };

        self.stats.record(&summary);
        self.input_mode = InputMode::Finished;

        let headline = match (summary.completion, summary.boards_won) {
            (_, BOARD_COUNT) => "🎉 ALL NINE SOLVED! 🎉".to_string(),
            (CompletionReason::Forfeit, _) => "Session abandoned.".to_string(),
            (_, won) => format!("Session over: {won}/{BOARD_COUNT} boards solved."),
        };
        let style = if summary.is_perfect() {
            MessageStyle::Success
        } else {
            MessageStyle::Info
        };
        self.add_message(&headline, style);
        self.add_message(
            &format!("Score {}. Press 'n' for a new session or 'q' to quit.", summary.score),
            MessageStyle::Info,
        );
    }

    /// Start over with nine fresh targets
    ///
    /// # Errors
    /// Returns `GameError::InsufficientVocabulary` if targets cannot be drawn.
    pub fn new_session(&mut self) -> Result<(), GameError> {
        self.session = Session::new(self.vocabulary, self.config, &mut self.rng)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New session started!", MessageStyle::Info);
        Ok(())
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
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

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::Finished => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') => app.new_session()?,
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Esc => app.forfeit(),
                        KeyCode::Char(c) => app.push_char(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_guess(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardStatus;
    use rand::SeedableRng;

    fn app(vocabulary: &Vocabulary) -> App<'_> {
        App::new(vocabulary, SessionConfig::default(), StdRng::seed_from_u64(4)).unwrap()
    }

    fn type_word(app: &mut App<'_>, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn input_is_limited_to_five_letters() {
        let vocabulary = Vocabulary::embedded();
        let mut app = app(&vocabulary);

        type_word(&mut app, "Cr4nesXY");
        assert_eq!(app.input_buffer, "crnes");
    }

    #[test]
    fn short_guess_is_rejected_and_kept() {
        let vocabulary = Vocabulary::embedded();
        let mut app = app(&vocabulary);

        type_word(&mut app, "abc");
        app.submit_guess();

        assert_eq!(app.input_buffer, "abc");
        assert_eq!(app.session.boards().rounds_played(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn repeated_typos_keep_the_session_running() {
        let vocabulary = Vocabulary::embedded();
        let mut app = app(&vocabulary);

        for _ in 0..5 {
            app.input_buffer.clear();
            type_word(&mut app, "ab");
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(!app.session.is_complete());
        assert_eq!(app.session.invalid_guesses(), 5);
        assert_eq!(app.config.max_invalid_attempts, None);
    }

    #[test]
    fn solving_a_target_is_announced() {
        let vocabulary = Vocabulary::embedded();
        let mut app = app(&vocabulary);
        let target = app.session.boards().boards()[4].target().text().to_string();

        type_word(&mut app, &target);
        app.submit_guess();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.boards().boards()[4].status(), BoardStatus::Won);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
        assert!(app.messages.last().unwrap().text.contains('5'));
    }

    #[test]
    fn forfeit_then_new_session() {
        let vocabulary = Vocabulary::embedded();
        let mut app = app(&vocabulary);

        app.forfeit();
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.sessions, 1);
        assert_eq!(app.stats.last_score, Some(0));

        app.new_session().unwrap();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(!app.session.is_complete());
        assert_eq!(app.stats.sessions, 1);
    }

    #[test]
    fn running_out_of_guesses_finishes() {
        let vocabulary = Vocabulary::embedded();
        let mut app = app(&vocabulary);

        // Not words, so none of them can be a target
        for word in ["zzzzz", "qqqqq", "xxxxx", "vvvvv", "jjjjj", "kkkkk"] {
            type_word(&mut app, word);
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.sessions, 1);
        assert_eq!(app.stats.boards_won, 0);
    }
}
