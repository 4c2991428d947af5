//! Timers
//!
//! `setTimeout`/`clearTimeout` on a virtual clock. Time only moves when the
//! owner calls [`TimerQueue::advance`]; due timers are then popped one at a
//! time so callbacks may schedule further timers inside the same window.
//!
//! While a drain is in progress the clock reads the deadline of the timer
//! that just fired. Otherwise it reads the horizon.

use std::time::Duration;

/// Timer handle returned by `set_timeout`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    deadline: Duration,
}

/// One-shot timer queue driven by virtual time
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_id: u64,
    /// Deadline of the last fired timer, until `next_due` finds nothing due
    firing: Option<Duration>,
    /// Furthest point the clock has been advanced to
    horizon: Duration,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timeout relative to the current virtual time
    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let deadline = self.now() + delay;
        tracing::trace!("setTimeout {:?} due at {:?}", id, deadline);
        self.timers.push(Timer { id, deadline });
        id
    }

    /// Cancel a timeout. Returns false if it already fired or was cleared.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Move the horizon forward. Timers up to it become due.
    pub fn advance(&mut self, delta: Duration) {
        self.horizon += delta;
    }

    /// Pop the earliest due timer and move the clock to its deadline
    pub fn next_due(&mut self) -> Option<TimerId> {
        let due = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= self.horizon)
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(idx, _)| idx);

        match due {
            Some(idx) => {
                let timer = self.timers.remove(idx);
                let fired_at = self.firing.map_or(timer.deadline, |t| t.max(timer.deadline));
                self.firing = Some(fired_at);
                Some(timer.id)
            }
            None => {
                self.firing = None;
                None
            }
        }
    }

    pub fn now(&self) -> Duration {
        self.firing.unwrap_or(self.horizon)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}
