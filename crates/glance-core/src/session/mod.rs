//! Playback state machine for one reading session.

use log::debug;

use crate::{
    error::Result,
    input::InputSource,
    observer::SessionObserver,
    orp::{self, WordLayout},
    pace::{self, AUTO_DISMISS_DELAY, COUNTDOWN_TICK, COUNTDOWN_TICKS},
    scheduler::{Scheduler, TimerId},
    settings::SettingsSource,
    tokenize::tokenize,
};

/// Playback mode. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Countdown,
    Reading,
    Finished,
}

/// One reading session over a fixed token sequence.
///
/// Constructed per reading request and owned by whatever orchestrates the
/// host lifecycle; there is no shared global instance. The session owns its
/// collaborators and is driven from a single scheduling context: the host
/// feeds due timers into [`ReaderSession::timer_fired`] and user intents
/// into the navigation methods, all serially. The token sequence is
/// read-only after construction; only the cursor and mode mutate.
pub struct ReaderSession<S, O, C>
where
    S: Scheduler,
    O: SessionObserver,
    C: SettingsSource,
{
    tokens: Vec<String>,
    cursor: usize,
    mode: Mode,
    is_playing: bool,
    countdown_ticks_left: u32,
    overlay_open: bool,
    ended: bool,
    auto_start: bool,
    next_timer: u64,
    pending_countdown: Option<TimerId>,
    pending_word: Option<TimerId>,
    pending_dismiss: Option<TimerId>,
    scheduler: S,
    observer: O,
    settings: C,
}

include!("lifecycle.rs");
include!("timers.rs");
include!("navigation.rs");
