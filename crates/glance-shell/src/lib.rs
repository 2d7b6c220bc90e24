//! Host-side adapters for the glance pacing engine.
//!
//! Everything here is replaceable chrome around `glance-core`: a deadline
//! scheduler for a plain event loop, a crossterm presenter that keeps the
//! focal character at a fixed column, a clipboard input source, and a
//! JSON-backed settings store with change notification.

pub mod clipboard;
pub mod error;
pub mod presenter;
pub mod scheduler;
pub mod settings_store;

pub use clipboard::ClipboardSource;
pub use error::{Result, ShellError};
pub use presenter::TerminalPresenter;
pub use scheduler::DeadlineScheduler;
pub use settings_store::{JsonSettingsStore, PersistedSettings};
