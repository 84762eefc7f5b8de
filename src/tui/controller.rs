//! Front-end controller: the state machine between the two screens.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::AppConfig;
use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{BoardScreen, StartScreen};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Start(StartScreen),
    Board(BoardScreen),
}

/// Controller that owns the active screen and applies its transitions.
///
/// Call [`App::run`] to start the event loop. Returning to the start screen
/// drops the running game; the nicknames typed last are prefilled again.
#[derive(Debug)]
pub struct App {
    screen: ActiveScreen,
    last_names: (String, String),
    should_quit: bool,
}

impl App {
    /// Creates the controller on the start screen.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        info!("Creating App");
        let last_names = (config.player_x().clone(), config.player_o().clone());
        Self {
            screen: ActiveScreen::Start(StartScreen::new(
                last_names.0.clone(),
                last_names.1.clone(),
            )),
            last_names,
            should_quit: false,
        }
    }

    /// Returns true once the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The start screen, if it is showing.
    pub fn start_screen(&self) -> Option<&StartScreen> {
        match &self.screen {
            ActiveScreen::Start(s) => Some(s),
            ActiveScreen::Board(_) => None,
        }
    }

    /// The board screen, if a game is showing.
    pub fn board_screen(&self) -> Option<&BoardScreen> {
        match &self.screen {
            ActiveScreen::Board(s) => Some(s),
            ActiveScreen::Start(_) => None,
        }
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            ActiveScreen::Start(s) => s.render(frame),
            ActiveScreen::Board(s) => s.render(frame),
        }
    }

    /// Routes a key to the active screen and applies the transition.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Skip key release events (crossterm fires both press and release).
        if key.kind == KeyEventKind::Release {
            return;
        }

        let transition = match &mut self.screen {
            ActiveScreen::Start(s) => s.handle_key(key),
            ActiveScreen::Board(s) => s.handle_key(key),
        };
        self.apply(transition);
    }

    fn apply(&mut self, transition: ScreenTransition) {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::StartGame { player_x, player_o } => {
                info!(%player_x, %player_o, "Transition: start -> board");
                self.screen = ActiveScreen::Board(BoardScreen::new(player_x.clone(), player_o.clone()));
                self.last_names = (player_x, player_o);
            }
            ScreenTransition::BackToStart => {
                info!("Transition: board -> start");
                self.screen = ActiveScreen::Start(StartScreen::new(
                    self.last_names.0.clone(),
                    self.last_names.1.clone(),
                ));
            }
            ScreenTransition::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                debug!(?key, "Key event");
                self.handle_key(key);
            }
        }

        info!("Event loop finished");
        Ok(())
    }
}
