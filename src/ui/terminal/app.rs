//! Main application coordinator for the shell
//!
//! Terminal input and internal events (debounce timers firing) are merged
//! with `tokio::select!`; every event goes through [`ShellState::apply`]
//! and the screen is redrawn afterwards.

use std::io::Stdout;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::debug;

use super::input;
use super::renderer::Renderer;
use super::state::{Effect, ShellAction, ShellState, ToolId};
use super::themes::Theme;
use crate::config::Config;
use crate::core::clipboard::{ClipboardSink, Osc52Clipboard};
use crate::core::debounce::Debouncer;

/// Events raised by background tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The contrast rows have been quiet long enough to rescore
    Recompute,
}

pub struct TerminalApp {
    state: ShellState,
    renderer: Renderer,
    debouncer: Debouncer<ToolId>,
    clipboard: Box<dyn ClipboardSink>,
    event_sender: mpsc::UnboundedSender<AppEvent>,
    event_receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl TerminalApp {
    pub fn new(config: &Config, tool: ToolId, foregrounds: Vec<String>) -> Self {
        Self::with_clipboard(config, tool, foregrounds, Box::new(Osc52Clipboard::stdout()))
    }

    pub fn with_clipboard(
        config: &Config,
        tool: ToolId,
        foregrounds: Vec<String>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        Self {
            state: ShellState::new(config, tool, foregrounds),
            renderer: Renderer::new(Theme::default()),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            clipboard,
            event_sender,
            event_receiver,
        }
    }

    /// Main application loop
    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        self.draw(terminal)?;

        while !self.state.should_quit {
            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.dispatch(input::handle_event(&event)),
                    Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                    None => break,
                },
                Some(event) = self.event_receiver.recv() => self.handle_app_event(event),
            }

            self.draw(terminal)?;
        }

        debug!("Shell event loop finished");
        Ok(())
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        terminal
            .draw(|frame| self.renderer.render(frame, &self.state))
            .context("Failed to draw shell")?;
        Ok(())
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Recompute => self.dispatch(ShellAction::Recompute),
        }
    }

    /// Apply an action and carry out whatever it asks for.
    pub fn dispatch(&mut self, action: ShellAction) {
        match self.state.apply(action) {
            Effect::None => {}
            Effect::ScheduleRecompute => {
                let sender = self.event_sender.clone();
                self.debouncer.schedule(ToolId::Contrast, async move {
                    // receiver is gone only when the shell is closing
                    let _ = sender.send(AppEvent::Recompute);
                });
            }
            Effect::Copy(text) => match self.clipboard.copy(&text) {
                Ok(()) => self.state.set_status(format!("Copied {}", text)),
                Err(e) => self.state.set_status(format!("Copy failed: {}", e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clipboard::ClipboardError;
    use crate::ui::terminal::state::TextEdit;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl ClipboardSink for Recorder {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl ClipboardSink for Broken {
        fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Empty)
        }
    }

    fn app_with(clipboard: Box<dyn ClipboardSink>) -> TerminalApp {
        TerminalApp::with_clipboard(&Config::default(), ToolId::Contrast, Vec::new(), clipboard)
    }

    fn type_text(app: &mut TerminalApp, text: &str) {
        for c in text.chars() {
            app.dispatch(ShellAction::Edit(TextEdit::Insert(c)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_edits_recomputes_once() {
        let mut app = app_with(Box::new(Recorder::default()));
        app.dispatch(ShellAction::Edit(TextEdit::Clear));
        type_text(&mut app, "#000");
        assert!(app.state.contrast.stale);

        let event = app.event_receiver.recv().await.unwrap();
        app.handle_app_event(event);

        assert!(!app.state.contrast.stale);
        let best = app.state.contrast.outcome.best().unwrap();
        assert_eq!(best.background_color.to_hex(), "#FFFFFF");

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(app.event_receiver.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_recompute_waits_for_quiet_period() {
        let mut app = app_with(Box::new(Recorder::default()));
        app.dispatch(ShellAction::AddRow);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(app.event_receiver.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(app.event_receiver.try_recv().unwrap(), AppEvent::Recompute);
    }

    #[tokio::test]
    async fn test_copy_reports_status() {
        let recorder = Recorder::default();
        let mut app = app_with(Box::new(recorder.clone()));

        app.dispatch(ShellAction::Copy);
        assert_eq!(*recorder.0.lock().unwrap(), vec!["#000000".to_string()]);
        assert_eq!(app.state.status.as_deref(), Some("Copied #000000"));
    }

    #[tokio::test]
    async fn test_copy_failure_is_not_fatal() {
        let mut app = app_with(Box::new(Broken));
        app.dispatch(ShellAction::Copy);
        assert!(app.state.status.as_deref().unwrap().starts_with("Copy failed"));
        assert!(!app.state.should_quit);
    }
}
