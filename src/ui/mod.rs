pub mod terminal;

use crate::config::EnvVars;

/// Detect the UI mode based on environment
#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    Plain,     // Line output for pipes and CI
    Terminal,  // Interactive TUI for normal terminals
}

impl UiMode {
    pub fn detect() -> Self {
        use tracing::debug;

        // Allow forcing Terminal UI for testing
        if std::env::var(EnvVars::FORCE_TERMINAL_UI).is_ok() {
            debug!("UI Mode: Terminal (forced by {})", EnvVars::FORCE_TERMINAL_UI);
            return UiMode::Terminal;
        }

        let has_ci = std::env::var(EnvVars::CI).is_ok();
        let is_tty = atty::is(atty::Stream::Stdout) && atty::is(atty::Stream::Stdin);

        debug!("UI Mode detection - CI: {}, TTY: {}", has_ci, is_tty);

        if has_ci || !is_tty {
            debug!("UI Mode: Plain (non-interactive environment detected)");
            UiMode::Plain
        } else {
            debug!("UI Mode: Terminal (interactive TTY detected)");
            UiMode::Terminal
        }
    }
}
