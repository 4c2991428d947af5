//! DOM Events
//!
//! Focus events delivered to registered listeners.

use crate::NodeId;

/// DOM event types the document dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEventType {
    /// Focus entered `target` (bubbles)
    FocusIn,
    /// Focus left `target` (bubbles)
    FocusOut,
}

impl DomEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
        }
    }
}

/// A dispatched event, one per listening node on the propagation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub event_type: DomEventType,
    /// Element focus moved into or out of
    pub target: NodeId,
    /// Listening node this copy is delivered to
    pub current_target: NodeId,
    /// The other side of the focus move, if any
    pub related_target: Option<NodeId>,
}

impl DomEvent {
    pub fn focus_in(target: NodeId, current_target: NodeId, related: Option<NodeId>) -> Self {
        Self {
            event_type: DomEventType::FocusIn,
            target,
            current_target,
            related_target: related,
        }
    }

    pub fn focus_out(target: NodeId, current_target: NodeId, related: Option<NodeId>) -> Self {
        Self {
            event_type: DomEventType::FocusOut,
            target,
            current_target,
            related_target: related,
        }
    }
}
