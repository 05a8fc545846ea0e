//! One-shot calculator commands
//!
//! Each command computes once, prints the result as text or JSON and can
//! copy its primary value to the clipboard.

pub mod aspect;
pub mod contrast;
pub mod typescale;

use tracing::warn;

use crate::core::clipboard::{ClipboardSink, Osc52Clipboard};

/// Copy `text` through the terminal on stderr. Failures are reported, never fatal.
pub fn copy_to_clipboard(text: &str) -> bool {
    copy_with(&mut Osc52Clipboard::stderr(), text)
}

pub(crate) fn copy_with<C: ClipboardSink>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.copy(text) {
        Ok(()) => {
            eprintln!("Copied {} to clipboard", text.trim());
            true
        }
        Err(e) => {
            warn!("Copy failed: {}", e);
            false
        }
    }
}
