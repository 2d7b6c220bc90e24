//! Session text acquisition layer.

pub mod mock;

pub use mock::MockInput;

/// Supplies the raw text for a reading session and the start trigger.
pub trait InputSource {
    type Error;

    /// Raw source text; the session tokenizes it on construction.
    fn session_text(&mut self) -> Result<String, Self::Error>;

    /// When true the session skips the countdown and starts reading
    /// immediately.
    fn auto_start(&self) -> bool {
        false
    }
}
