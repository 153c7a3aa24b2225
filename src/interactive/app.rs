//! TUI application state and logic

use crate::core::Symbol;
use crate::game::{GameStatus, Session, SubmitError};
use crate::storage::Store;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::debug;

/// How often the screen redraws while idle (keeps the countdown ticking)
const TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App<S: Store> {
    pub session: Session<S>,
    pub share_origin: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    HowTo,
    Result,
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

impl<S: Store> App<S> {
    #[must_use]
    pub fn new(session: Session<S>, share_origin: impl Into<String>) -> Self {
        let input_mode = if session.should_show_how_to() {
            InputMode::HowTo
        } else if session.state().is_complete() {
            InputMode::Result
        } else {
            InputMode::Playing
        };

        Self {
            session,
            share_origin: share_origin.into(),
            messages: vec![Message {
                text: "Type 1-8 to place emojis, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode,
            should_quit: false,
        }
    }

    /// Place the symbol bound to `digit`, ignoring other characters
    pub fn type_digit(&mut self, digit: char) {
        if let Some(symbol) = Symbol::from_digit(digit) {
            self.session.append_symbol(symbol);
        }
    }

    pub fn delete_symbol(&mut self) {
        self.session.delete_last_symbol();
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess() {
            Ok(outcome) => match outcome.status {
                GameStatus::InProgress => {
                    let left = self.session.state().remaining_guesses();
                    self.add_message(
                        &format!("{} | {left} guesses left", outcome.feedback.to_glyphs()),
                        MessageStyle::Info,
                    );
                }
                GameStatus::Won => {
                    self.add_message("🎉 You Win!", MessageStyle::Success);
                    self.input_mode = InputMode::Result;
                }
                GameStatus::Lost => {
                    self.add_message("So Close!", MessageStyle::Error);
                    self.input_mode = InputMode::Result;
                }
            },
            Err(err @ SubmitError::InvalidLength { .. }) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(SubmitError::GameOver) => {
                self.input_mode = InputMode::Result;
            }
        }
    }

    pub fn open_how_to(&mut self) {
        self.input_mode = InputMode::HowTo;
    }

    /// Close the how-to screen, remembering that it has been seen
    pub fn close_how_to(&mut self) {
        self.session.mark_how_to_seen();
        self.input_mode = if self.session.state().is_complete() {
            InputMode::Result
        } else {
            InputMode::Playing
        };
    }

    /// Dismiss the result popup to look at the board
    pub fn close_result(&mut self) {
        self.input_mode = InputMode::Playing;
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        self.session.share_text(&self.share_origin)
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

    /// Route one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::HowTo => match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ' | '?' | 'i') => {
                    self.close_how_to();
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            InputMode::Result => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Enter => self.close_result(),
                KeyCode::Char('?' | 'i') => self.open_how_to(),
                _ => {}
            },
            InputMode::Playing => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?' | 'i') => self.open_how_to(),
                KeyCode::Char('s') if self.session.state().is_complete() => {
                    self.input_mode = InputMode::Result;
                }
                KeyCode::Char(c) => self.type_digit(c),
                KeyCode::Backspace => self.delete_symbol(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Store>(app: App<S>) -> Result<()> {
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

    match res {
        Ok(share) => {
            if let Some(share) = share {
                println!("{share}");
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Event loop; yields the share text when the player leaves a finished game
fn run_app<B: ratatui::backend::Backend, S: Store>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            debug!("leaving tui");
            break;
        }
    }

    Ok(app
        .session
        .state()
        .is_complete()
        .then(|| app.share_text()))
}
