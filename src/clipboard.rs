//! Best-effort copy-to-clipboard
//!
//! The system clipboard is attempted first (`arboard`); when no clipboard
//! provider is available (headless session, some Wayland setups) the text
//! is emitted as an OSC 52 escape sequence so terminals that understand it
//! can still pick it up. Copy failures are silent: they never affect
//! workflow state.

use std::io::Write;

use base64::Engine;
use tracing::debug;

/// Sink a workflow can copy text into. Abstracted so tests can record
/// copies instead of touching the real clipboard.
pub trait ClipboardSink {
    /// Returns whether the text was handed to a provider. `false` is not
    /// an error condition for callers.
    fn copy(&mut self, text: &str) -> bool;
}

/// Production sink: `arboard` with an OSC 52 fallback.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(text).is_ok() {
                    return true;
                }
                debug!("arboard set_text failed, falling back to OSC 52");
                osc52_copy(text)
            }
            Err(e) => {
                debug!("no clipboard provider ({}), falling back to OSC 52", e);
                osc52_copy(text)
            }
        }
    }
}

/// Sink that drops everything. Used where copying is undesirable.
pub struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn copy(&mut self, _text: &str) -> bool {
        false
    }
}

/// OSC 52 clipboard sequence carrying the text as a base64 payload.
fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", payload)
}

/// Write an OSC 52 clipboard sequence to the controlling terminal.
fn osc52_copy(text: &str) -> bool {
    let seq = osc52_sequence(text);
    std::io::stderr()
        .write_all(seq.as_bytes())
        .and_then(|_| std::io::stderr().flush())
        .is_ok()
}
