//! Announcer DOM - in-memory document host
//!
//! A small arena DOM with focus events and a virtual-time timer queue.
//! It stands in for the browser window the announcer mounts into.

mod classlist;
mod document;
mod error;
mod events;
mod timers;
mod window;

pub use classlist::ClassList;
pub use document::{Document, Element};
pub use error::{DomError, DomResult};
pub use events::{DomEvent, DomEventType};
pub use timers::{TimerId, TimerQueue};
pub use window::{Window, WindowEvent};

/// Node identifier (index into the document arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw arena index
    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
