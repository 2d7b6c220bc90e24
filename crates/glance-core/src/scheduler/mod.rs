//! Deferred-callback scheduling capability.
//!
//! The session never assumes a concrete timer implementation. It allocates a
//! [`TimerId`] per deferred action and asks the host's [`Scheduler`] to fire
//! it after a delay; the host feeds due ids back through
//! [`crate::ReaderSession::timer_fired`]. Because the session only honors
//! ids it still considers live, a callback that out-raced its cancellation
//! is ignored rather than mutating stale state.

pub mod mock;

use core::time::Duration;

pub use mock::MockScheduler;

/// Identity of one scheduled callback. Never reused within a session.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimerId(pub(crate) u64);

impl TimerId {
    /// Rebuilds an id from its raw value. Hosts only need this to fabricate
    /// ids when testing their own [`Scheduler`] implementations.
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Raw counter value, for host-side bookkeeping and logs.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One-shot deferred callback registrar.
pub trait Scheduler {
    /// Arranges for `timer` to be reported as fired once `delay` has
    /// elapsed. Enqueuing must not block.
    fn schedule_once(&mut self, delay: Duration, timer: TimerId);

    /// Removes a previously scheduled timer. Cancelling an already-fired or
    /// unknown id is a no-op.
    fn cancel(&mut self, timer: TimerId);
}
