//! Board screen: play a game and show whose turn it is.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{CellView, GameState, Mark, Placement, Position, Side};
use tracing::{debug, info, instrument};

use crate::tui::input::{digit_position, move_cursor};
use crate::tui::screen::{Screen, ScreenTransition};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// State for the board screen.
///
/// Owns the session's [`GameState`]; leaving the screen drops the game.
#[derive(Debug, Getters)]
pub struct BoardScreen {
    game: GameState,
    cursor: Position,
    /// Names as typed on the start screen, kept for new games.
    names: [String; 2],
    /// Why the last key press did nothing, if it was a rejected placement.
    notice: Option<String>,
}

impl BoardScreen {
    /// Starts a classic game; blank names keep the players' defaults.
    #[instrument(skip(player_x, player_o))]
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        let names = [player_x.into(), player_o.into()];
        let game = new_game(&names);
        info!(player_x = %game.player(Side::X).name(), player_o = %game.player(Side::O).name(), "Board ready");
        Self {
            cursor: center(game.size()),
            game,
            names,
            notice: None,
        }
    }

    /// Replaces the game with a fresh one between the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = new_game(&self.names);
        self.cursor = center(self.game.size());
        self.notice = None;
    }

    /// Places the active player's mark at `position` and records any rejection.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position) -> Placement {
        let placement = self.game.place_mark(position);
        self.notice = match placement {
            Placement::NoOp(reason) => {
                debug!(%reason, "Placement ignored");
                Some(format!("Can't play {}: {}", position, reason))
            }
            _ => None,
        };
        placement
    }

    fn draw_board(&self, frame: &mut Frame, area: Rect) {
        let n = self.game.size();
        let width = CELL_WIDTH * n as u16 + (n as u16 - 1);
        let height = CELL_HEIGHT * n as u16 + (n as u16 - 1);
        let board_area = center_rect(area, width, height);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(interleave(n, CELL_HEIGHT))
            .split(board_area);

        let winning = self.game.winning_line();
        let cells: Vec<CellView> = self.game.cells().collect();

        for (r, row_cells) in cells.chunks(n).enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(interleave(n, CELL_WIDTH))
                .split(rows[r * 2]);

            for (c, cell) in row_cells.iter().enumerate() {
                let highlight = winning
                    .as_ref()
                    .is_some_and(|line| line.contains(cell.position));
                self.draw_cell(frame, cols[c * 2], cell, highlight);
                if c + 1 < n {
                    draw_separator_vertical(frame, cols[c * 2 + 1]);
                }
            }
            if r + 1 < n {
                draw_separator(frame, rows[r * 2 + 1]);
            }
        }
    }

    fn draw_cell(&self, frame: &mut Frame, area: Rect, cell: &CellView, highlight: bool) {
        let (symbol, base_style) = match cell.mark {
            Mark::Empty if cell.locked => (" · ", Style::default().fg(Color::DarkGray)),
            Mark::Empty => ("   ", Style::default().fg(Color::DarkGray)),
            Mark::X => (
                " X ",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Mark::O => (
                " O ",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        let style = if cell.position == self.cursor && !self.game.is_over() {
            base_style.bg(Color::White).fg(Color::Black)
        } else if highlight {
            base_style.bg(Color::Green)
        } else {
            base_style
        };

        // Vertically center the symbol in the cell.
        let paragraph = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(symbol, style)),
        ])
        .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}

impl Screen for BoardScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(11),   // Board
                Constraint::Length(3), // Status
                Constraint::Length(1), // Notice
                Constraint::Length(1), // Help
            ])
            .split(area);

        let title = Paragraph::new("Tic Tac Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        self.draw_board(frame, chunks[1]);

        let status_color = if self.game.is_over() {
            Color::Green
        } else {
            Color::Yellow
        };
        let status = Paragraph::new(self.game.status_line())
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[2]);

        if let Some(notice) = &self.notice {
            let notice = Paragraph::new(notice.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(notice, chunks[3]);
        }

        let help = Paragraph::new("←↑↓→/1-9: Select | Enter: Place | n: New game | b: BACK | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        let size = self.game.size();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ScreenTransition::Quit
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            KeyCode::Char('b') | KeyCode::Esc => ScreenTransition::BackToStart,
            KeyCode::Char('n') => {
                self.restart();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place(self.cursor);
                ScreenTransition::Stay
            }
            code => {
                if let Some(position) = digit_position(code, size) {
                    self.cursor = position;
                    self.place(position);
                } else {
                    self.cursor = move_cursor(self.cursor, code, size);
                }
                ScreenTransition::Stay
            }
        }
    }
}

fn new_game(names: &[String; 2]) -> GameState {
    let mut game = GameState::classic();
    for (side, name) in [(Side::X, &names[0]), (Side::O, &names[1])] {
        if !name.trim().is_empty() {
            game.set_name(side, name.trim());
        }
    }
    game
}

fn center(size: usize) -> Position {
    let mid = size.div_ceil(2);
    Position::new(mid, mid)
}

/// `n` cells of `length` separated by one-cell gaps.
fn interleave(n: usize, length: u16) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(n * 2 - 1);
    for i in 0..n {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(length));
    }
    constraints
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Outcome, Rejection};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_centered_with_names() {
        let screen = BoardScreen::new("Alice", "");
        assert_eq!(*screen.cursor(), Position::new(2, 2));
        assert_eq!(screen.game().status_line(), "Turn: Alice");
        assert_eq!(screen.game().player(Side::O).name(), "Player O");
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut screen = BoardScreen::new("", "");
        screen.handle_key(key(KeyCode::Left));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.game().grid().get(Position::new(1, 2)), Some(Mark::X));
        assert_eq!(screen.game().outcome(), Outcome::InProgress(Side::O));
    }

    #[test]
    fn test_rejected_click_sets_notice() {
        let mut screen = BoardScreen::new("", "");
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            screen.place(Position::new(2, 2)),
            Placement::NoOp(Rejection::Occupied)
        );
        assert!(screen.notice().is_some());
        screen.handle_key(key(KeyCode::Char('1')));
        assert!(screen.notice().is_none());
    }

    #[test]
    fn test_digits_play_a_full_game() {
        let mut screen = BoardScreen::new("Alice", "Bob");
        for digit in ['1', '4', '2', '5', '3'] {
            screen.handle_key(key(KeyCode::Char(digit)));
        }
        assert_eq!(screen.game().outcome(), Outcome::Won(Side::X));
        assert_eq!(screen.game().status_line(), "Alice won!");
    }

    #[test]
    fn test_new_game_keeps_names() {
        let mut screen = BoardScreen::new("Alice", "Bob");
        screen.handle_key(key(KeyCode::Char('5')));
        screen.handle_key(key(KeyCode::Char('n')));
        assert_eq!(screen.game().placed_count(), 0);
        assert_eq!(screen.game().player(Side::O).name(), "Bob");
    }

    #[test]
    fn test_navigation_keys() {
        let mut screen = BoardScreen::new("", "");
        assert_eq!(screen.handle_key(key(KeyCode::Char('b'))), ScreenTransition::BackToStart);
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Quit);
    }

    #[test]
    fn test_interleave() {
        assert_eq!(
            interleave(3, 7),
            vec![
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
            ]
        );
    }
}
