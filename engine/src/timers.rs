//! Frame-driven single-shot timers.
//!
//! Timers live inside the component that owns them, so dropping the component
//! drops every pending callback with it. Time only moves when the owner calls
//! [`Timers::advance`]; nothing fires on its own.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<K> {
    id: TimerId,
    deadline: Duration,
    key: K,
}

#[derive(Debug, Clone)]
pub struct Timers<K> {
    /// Time of the most recently fired timer, or the horizon once drained.
    now: Duration,
    /// How far the owner has advanced the clock.
    horizon: Duration,
    next_id: u64,
    pending: Vec<Pending<K>>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            horizon: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<K> Timers<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire `delay` after the current time.
    ///
    /// When called while draining, "current time" is the deadline of the
    /// timer that just fired, so chained timers keep an exact cadence.
    pub fn schedule(&mut self, delay: Duration, key: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(Pending {
            id,
            deadline: self.now.saturating_add(delay),
            key,
        });
        id
    }

    /// Returns whether the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the horizon forward. Call [`Timers::pop_due`] to fire.
    pub fn advance(&mut self, delta: Duration) {
        self.horizon = self.horizon.saturating_add(delta);
    }

    /// Pop the earliest timer due at or before the horizon.
    ///
    /// Ties fire in scheduling order. Once nothing is due the clock settles
    /// on the horizon.
    pub fn pop_due(&mut self) -> Option<K> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= self.horizon)
            .min_by_key(|(_, p)| (p.deadline, p.id.0))
            .map(|(index, _)| index);

        match next {
            Some(index) => {
                let fired = self.pending.remove(index);
                self.now = fired.deadline;
                Some(fired.key)
            }
            None => {
                self.now = self.horizon;
                None
            }
        }
    }

    /// Advance and collect everything that fires, for owners that never
    /// reschedule from inside a firing.
    pub fn drain(&mut self, delta: Duration) -> Vec<K> {
        self.advance(delta);
        let mut fired = Vec::new();
        while let Some(key) = self.pop_due() {
            fired.push(key);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::Timers;
    use std::time::Duration;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_once_deadline_reached() {
        let mut timers = Timers::new();
        timers.schedule(ms(100), "a");
        assert!(timers.drain(ms(99)).is_empty());
        assert_eq!(timers.drain(ms(1)), vec!["a"]);
        assert!(timers.drain(ms(500)).is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = Timers::new();
        let id = timers.schedule(ms(10), 1);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.drain(ms(50)).is_empty());
    }

    #[test]
    fn fires_in_deadline_then_schedule_order() {
        let mut timers = Timers::new();
        timers.schedule(ms(30), "late");
        timers.schedule(ms(10), "early");
        timers.schedule(ms(10), "early-second");
        assert_eq!(timers.drain(ms(30)), vec!["early", "early-second", "late"]);
    }

    #[test]
    fn rescheduling_while_draining_keeps_cadence() {
        let mut timers = Timers::new();
        timers.schedule(ms(30), ());
        timers.advance(ms(95));
        let mut fired = 0;
        while timers.pop_due().is_some() {
            fired += 1;
            timers.schedule(ms(30), ());
        }
        // Fired at 30, 60 and 90; the next one is due at 120.
        assert_eq!(fired, 3);
        assert_eq!(timers.now(), ms(95));
        assert_eq!(timers.drain(ms(24)).len(), 0);
        assert_eq!(timers.drain(ms(1)).len(), 1);
    }
}
