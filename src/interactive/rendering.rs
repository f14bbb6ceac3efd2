//! TUI rendering with ratatui
//!
//! Board, scoreboard, revealed letters and on-screen keyboard.

use super::app::{App, MessageStyle};
use crate::core::LetterState;
use crate::game::{Cell, GameView, RoundStatus, RoundView};
use crate::output::formatters::{letter_list, status_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use rustc_hash::FxHashMap;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let view = app.game.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, &view, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and keyboard
            Constraint::Percentage(50), // Letters and messages
        ])
        .split(chunks[1]);

    render_play_panel(f, &view, main_chunks[0]);
    render_info_panel(f, app, &view, main_chunks[1]);

    render_status(f, &view, chunks[2]);
}

fn render_header(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🔤 WORD LOGIC   ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" Wins: {} ", view.wins),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!(" Fails: {} ", view.fails),
            Style::default().fg(Color::Red),
        ),
        Span::raw(format!(" Used: {}/{} ", view.used, view.pool_size)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_play_panel(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Board
            Constraint::Length(3),  // Round status
            Constraint::Min(5),     // Keyboard
        ])
        .split(area);

    match view.round {
        Some(round) => {
            render_board(f, &round, chunks[0]);
            render_round_status(f, &round, chunks[1]);
            render_keyboard(f, &round.grid.keyboard_hints(), chunks[2]);
        }
        None => render_idle(f, view, area),
    }
}

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Unset => Style::default().fg(Color::White),
    }
}

fn tile(cell: Cell, is_cursor: bool) -> Span<'static> {
    let text = match cell.letter() {
        Some(letter) => format!(" {letter} "),
        None if is_cursor => " _ ".to_string(),
        None => " · ".to_string(),
    };
    Span::styled(text, tile_style(cell.state()))
}

fn render_board(f: &mut Frame, round: &RoundView<'_>, area: Rect) {
    let lines: Vec<Line> = round
        .grid
        .rows()
        .enumerate()
        .map(|(r, row)| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (c, &cell) in row.iter().enumerate() {
                let is_cursor = round.status == RoundStatus::Playing
                    && r == round.row
                    && c == round.col;
                spans.push(tile(cell, is_cursor));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_round_status(f: &mut Frame, round: &RoundView<'_>, area: Rect) {
    let (text, color) = match round.status {
        RoundStatus::Playing => ("Guess the word", Color::White),
        RoundStatus::Won => (status_text(round.status), Color::Green),
        RoundStatus::Lost => (status_text(round.status), Color::Red),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_keyboard(f: &mut Frame, hints: &FxHashMap<char, LetterState>, area: Rect) {
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| {
                    let state = hints.get(&key).copied().unwrap_or_default();
                    Span::styled(format!(" {key} "), tile_style(state))
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    lines.push(Line::from("⌫ Backspace   ⏎ Enter"));

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_idle(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let content = if view.game_over {
        vec![
            Line::from(Span::styled(
                "🎉 Game Over - you completed all words.",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Wins: {}  Fails: {}", view.wins, view.fails)),
            Line::from("Press Enter to play again."),
        ]
    } else {
        vec![Line::from("Press Enter to start a new game.")]
    };

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, view: &GameView<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Letters present
            Constraint::Length(4), // Not in word
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    let sets = view
        .round
        .map(|round| round.grid.letter_sets())
        .unwrap_or_default();

    let present = Paragraph::new(letter_list(&sets.present))
        .style(Style::default().fg(Color::Green))
        .block(Block::default().title(" Letters present ").borders(Borders::ALL));
    f.render_widget(present, chunks[0]);

    let absent = Paragraph::new(letter_list(&sets.absent))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(" Not in word ").borders(Borders::ALL));
    f.render_widget(absent, chunks[1]);

    render_messages(f, app, chunks[2]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, view: &GameView<'_>, area: Rect) {
    let help_text = match view.round {
        None => "Enter: New Game | Esc: Quit",
        Some(round) if round.status.is_over() => {
            "Enter: Next Round | Ctrl+Z: Undo | Ctrl+N: New Game | Esc: Quit"
        }
        Some(_) => "A-Z: Type | Enter: Submit | Ctrl+Z: Undo | Ctrl+N: New | Esc: Quit",
    };
    let undo_text = if view.can_undo() {
        format!("Undo steps: {}", view.round.map_or(0, |r| r.history_len))
    } else {
        "Nothing to undo".to_string()
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let undo = Paragraph::new(undo_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(undo, chunks[0]);

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Game;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let pool = ["APPLE"].map(|w| Word::new(w).unwrap());
        App::new(Game::seeded(pool, 1).unwrap())
    }

    #[test]
    fn idle_screen_prompts_for_new_game() {
        let screen = render_to_string(&app());
        assert!(screen.contains("Press Enter to start a new game."));
    }

    #[test]
    fn board_shows_typed_letters_and_tally() {
        let mut app = app();
        app.game.start_game();
        app.game.type_char('x');
        app.game.type_char('y');

        let screen = render_to_string(&app);
        assert!(screen.contains(" X "));
        assert!(screen.contains("Wins: 0"));
        assert!(screen.contains("Used: 1/1"));
        assert!(screen.contains("Undo steps: 2"));
    }

    #[test]
    fn game_over_screen() {
        let mut app = app();
        app.game.start_game();
        app.game.start_round();
        assert!(app.game.is_game_over());

        let screen = render_to_string(&app);
        assert!(screen.contains("Press Enter to play again."));
    }

    #[test]
    fn tile_styles_by_state() {
        assert_eq!(tile_style(LetterState::Correct).bg, Some(Color::Green));
        assert_eq!(tile_style(LetterState::Present).bg, Some(Color::Yellow));
        assert_eq!(tile_style(LetterState::Absent).bg, Some(Color::DarkGray));
        assert_eq!(tile_style(LetterState::Unset).bg, None);
    }
}
