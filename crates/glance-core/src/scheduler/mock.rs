use core::time::Duration;

use super::{Scheduler, TimerId};

/// Recording scheduler used for deterministic virtual-clock tests.
///
/// Nothing fires on its own; tests inspect the pending queue and feed ids
/// back into the session at chosen moments.
#[derive(Debug, Clone, Default)]
pub struct MockScheduler {
    pending: Vec<(TimerId, Duration)>,
    scheduled_total: usize,
    cancelled_total: usize,
}

impl MockScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently scheduled timer still pending.
    pub fn last_pending(&self) -> Option<(TimerId, Duration)> {
        self.pending.last().copied()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, timer: TimerId) -> bool {
        self.pending.iter().any(|(id, _)| *id == timer)
    }

    /// Total `schedule_once` calls observed.
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }

    /// Total `cancel` calls that removed a live timer.
    pub fn cancelled_total(&self) -> usize {
        self.cancelled_total
    }

    /// Removes and returns the pending timer as if its deadline elapsed.
    /// Panics if more than one timer is pending; tests fire explicit ids in
    /// that case.
    pub fn pop_due(&mut self) -> Option<TimerId> {
        assert!(self.pending.len() <= 1, "ambiguous due timer");
        self.pending.pop().map(|(id, _)| id)
    }
}

impl Scheduler for MockScheduler {
    fn schedule_once(&mut self, delay: Duration, timer: TimerId) {
        self.scheduled_total += 1;
        self.pending.push((timer, delay));
    }

    fn cancel(&mut self, timer: TimerId) {
        let before = self.pending.len();
        self.pending.retain(|(id, _)| *id != timer);
        if self.pending.len() < before {
            self.cancelled_total += 1;
        }
    }
}
