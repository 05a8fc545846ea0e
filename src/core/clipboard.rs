//! Copy-to-clipboard through the terminal
//!
//! Uses the OSC 52 escape sequence, which most modern terminal emulators (and
//! tmux with `set-clipboard on`) forward to the system clipboard. The sequence
//! is only written to a stream attached to a terminal; piped output never
//! receives it.

use std::io::{self, Write};

use data_encoding::BASE64;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("nothing to copy")]
    Empty,

    #[error("no terminal attached to receive the clipboard sequence")]
    NotATerminal,

    #[error("failed to write clipboard sequence: {0}")]
    Io(#[from] io::Error),
}

/// Something a string can be copied into.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

pub struct Osc52Clipboard<W: Write> {
    out: W,
    is_terminal: bool,
}

impl Osc52Clipboard<io::Stdout> {
    /// For the full-screen shell, which already owns stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), atty::is(atty::Stream::Stdout))
    }
}

impl Osc52Clipboard<io::Stderr> {
    /// For one-shot commands; stdout carries their report.
    pub fn stderr() -> Self {
        Self::new(io::stderr(), atty::is(atty::Stream::Stderr))
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W, is_terminal: bool) -> Self {
        Self { out, is_terminal }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text.as_bytes()))
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        if !self.is_terminal {
            return Err(ClipboardError::NotATerminal);
        }

        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_encodes_payload() {
        assert_eq!(osc52_sequence("#000000"), "\x1b]52;c;IzAwMDAwMA==\x07");
    }

    #[test]
    fn test_copy_writes_trimmed_value() {
        let mut clipboard = Osc52Clipboard::new(Vec::new(), true);
        clipboard.copy("  16px \n").unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(written, osc52_sequence("16px"));
    }

    #[test]
    fn test_empty_value_is_rejected() {
        let mut clipboard = Osc52Clipboard::new(Vec::new(), true);
        assert!(matches!(clipboard.copy("   "), Err(ClipboardError::Empty)));
        assert!(clipboard.into_inner().is_empty());
    }

    #[test]
    fn test_non_terminal_stream_is_left_untouched() {
        let mut clipboard = Osc52Clipboard::new(Vec::new(), false);
        assert!(matches!(clipboard.copy("#000000"), Err(ClipboardError::NotATerminal)));
        assert!(clipboard.into_inner().is_empty());
    }
}
