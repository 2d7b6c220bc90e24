//! Deadline scheduler for a poll-based event loop.

use std::time::{Duration, Instant};

use glance_core::{Scheduler, TimerId};

/// One-shot timer queue keyed by wall-clock deadlines.
///
/// The host loop sleeps until [`DeadlineScheduler::next_deadline`], then
/// drains due timers back into the session. Everything runs on the loop
/// thread, so enqueuing never blocks and cancellation is exact.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    pending: Vec<(Instant, TimerId)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(deadline, _)| *deadline).min()
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<TimerId> {
        let mut due: Vec<(Instant, TimerId)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, timer)| timer).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule_once(&mut self, delay: Duration, timer: TimerId) {
        self.pending.push((Instant::now() + delay, timer));
    }

    fn cancel(&mut self, timer: TimerId) {
        self.pending.retain(|(_, id)| *id != timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(id: u64) -> TimerId {
        TimerId::from_raw(id)
    }

    #[test]
    fn due_timers_drain_in_deadline_order() {
        let mut scheduler = DeadlineScheduler::new();
        scheduler.schedule_once(Duration::from_millis(20), timer(2));
        scheduler.schedule_once(Duration::ZERO, timer(1));

        let due = scheduler.drain_due(Instant::now() + Duration::from_secs(1));
        assert_eq!(due, [timer(1), timer(2)]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn future_timers_stay_pending() {
        let mut scheduler = DeadlineScheduler::new();
        scheduler.schedule_once(Duration::from_secs(60), timer(1));

        assert!(scheduler.drain_due(Instant::now()).is_empty());
        assert!(!scheduler.is_idle());
        assert!(scheduler.next_deadline().is_some());
    }

    #[test]
    fn cancelled_timers_never_drain() {
        let mut scheduler = DeadlineScheduler::new();
        scheduler.schedule_once(Duration::ZERO, timer(1));
        scheduler.cancel(timer(1));

        assert!(scheduler.drain_due(Instant::now() + Duration::from_secs(1)).is_empty());
    }
}
