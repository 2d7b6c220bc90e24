//! Clipboard-backed session text.

use arboard::Clipboard;
use glance_core::InputSource;
use log::debug;

use crate::error::ShellError;

/// Reads the session text from the system clipboard, the way the original
/// reader starts a session from whatever the user last copied.
#[derive(Debug, Default)]
pub struct ClipboardSource {
    auto_start: bool,
}

impl ClipboardSource {
    pub fn new(auto_start: bool) -> Self {
        Self { auto_start }
    }
}

impl InputSource for ClipboardSource {
    type Error = ShellError;

    fn session_text(&mut self) -> Result<String, Self::Error> {
        let mut clipboard = Clipboard::new()?;
        let text = clipboard.get_text()?;
        debug!("clipboard: read {} bytes", text.len());
        Ok(text)
    }

    fn auto_start(&self) -> bool {
        self.auto_start
    }
}
