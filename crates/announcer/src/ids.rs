//! Announcement identifiers

use std::cell::Cell;
use std::rc::Rc;

/// Announcement identifier, rendered as `a-<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnnouncementId(u64);

impl AnnouncementId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "a-{}", self.0)
    }
}

/// Monotonic id counter.
///
/// Each `IdSequence::new()` starts its own count. Clones share the counter,
/// so announcers built from clones of one sequence never collide.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: Rc<Cell<u64>>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first id handed out will be `last + 1`
    pub fn starting_after(last: u64) -> Self {
        Self {
            last: Rc::new(Cell::new(last)),
        }
    }

    pub fn next_id(&self) -> AnnouncementId {
        let next = self.last.get() + 1;
        self.last.set(next);
        AnnouncementId(next)
    }
}
