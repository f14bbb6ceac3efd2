//! TUI application state and logic

use crate::game::{Action, Game, RoundStatus};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            messages: vec![Message {
                text: "Welcome! Press Enter to start a new game.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Translate a key press into a game action
    #[must_use]
    pub fn action_for_key(&self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('z') if ctrl => Some(Action::Undo),
            KeyCode::Char('n') if ctrl => Some(Action::StartGame),
            KeyCode::Char(c) if !ctrl => Action::from_key(c.encode_utf8(&mut [0; 4])),
            KeyCode::Backspace => Action::from_key("Backspace"),
            KeyCode::Enter => {
                let view = self.game.view();
                match view.round {
                    None => Some(Action::StartGame),
                    Some(round) if round.status.is_over() => Some(Action::StartRound),
                    Some(_) => Some(Action::Submit),
                }
            }
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            _ => {
                if let Some(action) = self.action_for_key(key) {
                    self.dispatch(action);
                }
            }
        }
    }

    /// Apply an action and report what happened
    pub fn dispatch(&mut self, action: Action) {
        let changed = self.game.apply(action);

        match action {
            Action::StartGame => {
                self.messages.clear();
                self.add_message(
                    &format!("New game: {} words to guess.", self.game.pool().len()),
                    MessageStyle::Info,
                );
            }
            Action::StartRound if self.game.is_game_over() => {
                self.add_message(
                    "Game over - you completed all words. Press Enter for a new game.",
                    MessageStyle::Success,
                );
            }
            Action::StartRound => {
                self.add_message(
                    &format!("Round {} started.", self.game.used_words().len()),
                    MessageStyle::Info,
                );
            }
            Action::Submit if !changed => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Action::Submit => self.report_round_end(),
            Action::Undo if !changed => {
                self.add_message("Nothing to undo!", MessageStyle::Error);
            }
            _ => {}
        }

        // Count the finished round once, whatever finished it
        self.game.acknowledge_round();
    }

    fn report_round_end(&mut self) {
        let Some(round) = self.game.current() else {
            return;
        };
        match round.status() {
            RoundStatus::Won => {
                let text = match round.guesses_used() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(text, MessageStyle::Success);
                self.add_message("Press Enter for the next round.", MessageStyle::Info);
            }
            RoundStatus::Lost => {
                let text = format!("The word was {}.", round.target());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press Enter for the next round.", MessageStyle::Info);
            }
            RoundStatus::Playing => {}
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
