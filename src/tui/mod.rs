//! Terminal front-end: a start screen for nicknames and a board screen.

mod controller;
mod input;
mod screen;
mod screens;

pub use controller::App;
pub use input::{digit_position, move_cursor};
pub use screen::{Screen, ScreenTransition};
pub use screens::{BoardScreen, MAX_NAME_LEN, StartScreen};

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::config::AppConfig;

/// Restores the terminal when dropped, including during unwinding.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Takes over the terminal and runs the game until the user quits.
///
/// The terminal is restored on every exit path, including errors during
/// setup and panics in the event loop.
#[instrument(skip(config))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    if let Err(e) = &res {
        error!(error = %e, "Terminal UI failed");
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RESTORED: AtomicUsize = AtomicUsize::new(0);

    fn count_restore() -> io::Result<()> {
        RESTORED.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn test_guard_restores_on_drop_and_panic() {
        {
            let _guard = TerminalGuard {
                restore: count_restore,
            };
        }
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);

        let res = panic::catch_unwind(|| {
            let _guard = TerminalGuard {
                restore: count_restore,
            };
            panic!("event loop failed");
        });
        assert!(res.is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 2);
    }
}
