//! Host abstraction
//!
//! Everything the announcer needs from its environment: element creation,
//! tree edits, class toggling, focus listeners, and one-shot timers.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use announcer_dom::DomError;

mod dom;

/// Host operation failure
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Dom(#[from] DomError),
}

pub type HostResult<T> = Result<T, HostError>;

/// Event delivered by the host to the announcer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent<N, T> {
    /// A scheduled timer elapsed
    Timer(T),
    /// Focus entered `region` or one of its descendants
    FocusIn { region: N },
    /// Focus left `region` or one of its descendants
    FocusOut { region: N },
}

/// Document and scheduler the announcer is mounted in
pub trait LiveRegionHost {
    type Node: Copy + Eq + Debug;
    type Timer: Copy + Eq + Hash + Debug;

    fn create_element(&mut self, tag: &str) -> Self::Node;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str) -> HostResult<()>;

    /// Replace the node's content with text
    fn set_text(&mut self, node: Self::Node, text: &str) -> HostResult<()>;

    fn set_class_name(&mut self, node: Self::Node, class_name: &str) -> HostResult<()>;

    fn add_class(&mut self, node: Self::Node, class_name: &str) -> HostResult<()>;

    fn remove_class(&mut self, node: Self::Node, class_name: &str) -> HostResult<()>;

    /// Append `child`, moving it if it already has a parent
    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> HostResult<()>;

    /// Insert `child` before the current first child of `parent`
    fn insert_first(&mut self, parent: Self::Node, child: Self::Node) -> HostResult<()>;

    /// Remove `node` from its parent; no-op when detached
    fn detach(&mut self, node: Self::Node) -> HostResult<()>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn head(&self) -> Self::Node;

    fn body(&self) -> Self::Node;

    /// Start delivering `FocusIn`/`FocusOut` for `node`
    fn listen_focus(&mut self, node: Self::Node) -> HostResult<()>;

    fn unlisten_focus(&mut self, node: Self::Node) -> HostResult<()>;

    fn schedule(&mut self, delay: Duration) -> Self::Timer;

    fn cancel(&mut self, timer: Self::Timer);

    /// Next pending event, if any
    fn poll_event(&mut self) -> Option<HostEvent<Self::Node, Self::Timer>>;
}
