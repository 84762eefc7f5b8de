//! Start screen: enter both nicknames, then start the game.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::Side;
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};

/// Longest nickname the inputs accept, in characters.
pub const MAX_NAME_LEN: usize = 24;

const PLACEHOLDER: &str = "Enter nickname...";

/// State for the start screen.
///
/// Two text inputs, one per side; the focused one receives typed text.
#[derive(Debug, Getters)]
pub struct StartScreen {
    player_x: String,
    player_o: String,
    focus: Side,
}

impl StartScreen {
    /// Creates the screen with prefilled nicknames.
    #[instrument(skip(player_x, player_o))]
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        debug!("Initializing StartScreen");
        Self {
            player_x: player_x.into(),
            player_o: player_o.into(),
            focus: Side::X,
        }
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Side::X => &mut self.player_x,
            Side::O => &mut self.player_o,
        }
    }

    fn render_input(&self, frame: &mut Frame, area: ratatui::layout::Rect, side: Side) {
        let (title, value) = match side {
            Side::X => ("Nickname of X (first):", &self.player_x),
            Side::O => ("Nickname of O (second):", &self.player_o),
        };
        let focused = self.focus == side;

        let (text, style) = if value.is_empty() {
            (PLACEHOLDER.to_string(), Style::default().fg(Color::DarkGray))
        } else if focused {
            (format!("{}_", value), Style::default().fg(Color::White))
        } else {
            (value.clone(), Style::default().fg(Color::Gray))
        };
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        );
        frame.render_widget(input, area);
    }
}

impl Screen for StartScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        self.render_input(frame, chunks[1], Side::X);
        self.render_input(frame, chunks[2], Side::O);

        let help = Paragraph::new("Tab/↑↓: Switch | Enter: START | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ScreenTransition::Quit
            }
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Enter => {
                info!(player_x = %self.player_x, player_o = %self.player_o, "Starting game");
                ScreenTransition::StartGame {
                    player_x: self.player_x.trim().to_string(),
                    player_o: self.player_o.trim().to_string(),
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.opponent();
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                let input = self.focused_input();
                if input.chars().count() < MAX_NAME_LEN {
                    input.push(c);
                }
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut StartScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_input() {
        let mut screen = StartScreen::new("", "");
        type_text(&mut screen, "Ann");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Bo");
        assert_eq!(screen.player_x(), "Ann");
        assert_eq!(screen.player_o(), "Bo");
    }

    #[test]
    fn test_backspace_edits_prefill() {
        let mut screen = StartScreen::new("Alicex", "");
        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.player_x(), "Alice");
    }

    #[test]
    fn test_enter_starts_with_trimmed_names() {
        let mut screen = StartScreen::new("  Alice ", "Bob");
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenTransition::StartGame {
                player_x: "Alice".to_string(),
                player_o: "Bob".to_string(),
            }
        );
    }

    #[test]
    fn test_q_is_text_not_quit() {
        let mut screen = StartScreen::new("", "");
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Stay);
        assert_eq!(screen.player_x(), "q");
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenTransition::Quit);
    }

    #[test]
    fn test_name_length_is_capped() {
        let mut screen = StartScreen::new("", "");
        type_text(&mut screen, &"a".repeat(MAX_NAME_LEN + 5));
        assert_eq!(screen.player_x().chars().count(), MAX_NAME_LEN);
    }
}
