//! Interactive terminal shell for designkit
//!
//! One screen, three tools (aspect ratio, contrast finder, typography
//! scale), switched with Tab or F1-F3.
//!
//! # Architecture
//!
//! - `app`: event loop that merges terminal input with debounce timers
//! - `input`: key map from crossterm events to shell actions
//! - `state`: all UI state and the transitions between states
//! - `renderer`: draws the state with ratatui
//! - `themes`: colors and styles

pub mod app;
pub mod input;
pub mod renderer;
pub mod state;
pub mod themes;

pub use app::TerminalApp;

use std::io::Stdout;

use anyhow::Context;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::EnvVars;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Check if the terminal is large enough for the shell
pub fn should_enable_terminal_ui() -> bool {
    if std::env::var(EnvVars::FORCE_TERMINAL_UI).is_ok() {
        return true;
    }

    if !atty::is(atty::Stream::Stdout) {
        return false;
    }

    match crossterm::terminal::size() {
        Ok((width, height)) => width >= MIN_WIDTH && height >= MIN_HEIGHT,
        Err(_) => false,
    }
}

/// Initialize terminal for TUI mode
pub fn init_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    crossterm::terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(std::io::stdout());
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore terminal to normal mode
pub fn restore_terminal() -> anyhow::Result<()> {
    crossterm::terminal::disable_raw_mode().context("Failed to disable raw mode")?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;

    Ok(())
}
