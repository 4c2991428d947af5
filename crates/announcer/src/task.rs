//! Scheduled tasks
//!
//! Every timer the announcer starts is recorded here with the work it
//! stands for. Cancelling drops the record, so a timer that still fires
//! afterwards resolves to nothing and is ignored.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use crate::{AnnouncementId, LiveRegionHost};

/// Deferred work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskKind {
    /// Write the announcement text into its node
    RenderFill(AnnouncementId),
    /// Auto-remove the announcement
    Expire(AnnouncementId),
    /// Hide the region after focus left it
    Hide,
}

#[derive(Debug)]
pub(crate) struct TaskTable<T> {
    live: HashMap<T, TaskKind>,
}

impl<T> Default for TaskTable<T> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
        }
    }
}

impl<T: Copy + Eq + Hash + std::fmt::Debug> TaskTable<T> {
    pub fn schedule<H>(&mut self, host: &mut H, delay: Duration, kind: TaskKind) -> T
    where
        H: LiveRegionHost<Timer = T>,
    {
        let timer = host.schedule(delay);
        tracing::trace!("Scheduled {:?} as {:?} in {:?}", kind, timer, delay);
        self.live.insert(timer, kind);
        timer
    }

    pub fn cancel<H>(&mut self, host: &mut H, timer: T)
    where
        H: LiveRegionHost<Timer = T>,
    {
        if self.live.remove(&timer).is_some() {
            host.cancel(timer);
        }
    }

    /// Resolve a fired timer. `None` for cancelled or foreign timers.
    pub fn fire(&mut self, timer: T) -> Option<TaskKind> {
        self.live.remove(&timer)
    }

    /// Cancel everything still pending
    pub fn cancel_all<H>(&mut self, host: &mut H)
    where
        H: LiveRegionHost<Timer = T>,
    {
        for (timer, _) in self.live.drain() {
            host.cancel(timer);
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }
}
