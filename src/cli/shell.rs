use clap::Args;
use tracing::debug;

use crate::config::Config;
use crate::error::{DesignKitError, Result};
use crate::ui::terminal::{self, state::ToolId, TerminalApp};
use crate::ui::UiMode;

#[derive(Args)]
pub struct ShellArgs {
    /// Tool shown first: aspect, contrast or typography
    #[arg(short, long, default_value = "aspect")]
    pub tool: ToolId,

    /// Initial foreground colors for the contrast finder
    #[arg(long = "fg", value_name = "COLOR")]
    pub foregrounds: Vec<String>,
}

pub async fn execute(args: ShellArgs, config: &Config) -> Result<()> {
    if UiMode::detect() != UiMode::Terminal || !terminal::should_enable_terminal_ui() {
        return Err(DesignKitError::Terminal(
            "the interactive shell needs a terminal of at least 60x20".to_string(),
        ));
    }

    let mut app = TerminalApp::new(config, args.tool, args.foregrounds);
    let mut term = terminal::init_terminal()?;
    let result = app.run(&mut term).await;
    terminal::restore_terminal()?;
    debug!("Shell closed");

    result.map_err(DesignKitError::from)
}
