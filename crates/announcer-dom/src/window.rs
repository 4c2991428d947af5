//! Window - document plus timers
//!
//! The single event source the announcer is driven from.

use std::time::Duration;

use crate::{Document, DomEvent, TimerId, TimerQueue};

/// Something the window wants its owner to handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    Timer(TimerId),
    Dom(DomEvent),
}

/// Browsing context with a document and a virtual clock
#[derive(Debug, Default)]
pub struct Window {
    document: Document,
    timers: TimerQueue,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.timers.set_timeout(delay)
    }

    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.clear_timeout(id)
    }

    /// Let virtual time pass. Nothing fires until events are polled.
    pub fn advance(&mut self, delta: Duration) {
        self.timers.advance(delta);
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Next event: queued DOM events first, then due timers
    pub fn poll_event(&mut self) -> Option<WindowEvent> {
        if let Some(event) = self.document.pop_event() {
            return Some(WindowEvent::Dom(event));
        }
        self.timers.next_due().map(WindowEvent::Timer)
    }
}
