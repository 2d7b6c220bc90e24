//! Pacing engine for RSVP speed reading.
//!
//! The crate owns everything with algorithmic content: text tokenization,
//! ORP (optimal recognition point) layout, per-word delay calculation, and
//! the playback state machine that advances through the token stream. Hosts
//! supply the collaborators at the trait seams: a [`Scheduler`] for deferred
//! callbacks, a [`SessionObserver`] for lifecycle events, a
//! [`SettingsSource`] for live-tunable settings, and an [`InputSource`] for
//! the session text.

pub mod error;
pub mod input;
pub mod observer;
pub mod orp;
pub mod pace;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod tokenize;

pub use error::{PaceError, Result};
pub use input::InputSource;
pub use observer::SessionObserver;
pub use orp::WordLayout;
pub use scheduler::{Scheduler, TimerId};
pub use session::{Mode, ReaderSession};
pub use settings::{ReaderSettings, SettingsSource};
pub use tokenize::tokenize;
