//! Accessibility Announcer
//!
//! Surfaces short text announcements to screen readers through an
//! off-screen ARIA live region.
//!
//! Features:
//! - Polite and assertive announcements, newest first
//! - History bounded by count and by lifetime
//! - Region becomes visible while keyboard focus is inside it
//! - Scoped default stylesheet
//!
//! The announcer never touches a real browser. It drives any
//! [`LiveRegionHost`]; [`announcer_dom::Window`] is the in-memory one.
//!
//! # Example
//! ```rust
//! use std::time::Duration;
//! use announcer::{Announcer, AnnouncerPropsPatch};
//! use announcer_dom::Window;
//!
//! let mut announcer = Announcer::new(Window::new());
//! announcer.setup(Some(AnnouncerPropsPatch::new().history_length(3)));
//!
//! let handle = announcer.announce("Saved", false, None);
//! announcer.host_mut().advance(Duration::from_millis(100));
//! announcer.pump();
//!
//! announcer.cancel(handle);
//! assert!(announcer.is_empty());
//! ```

pub mod aria;
pub mod config;
pub mod host;
pub mod styles;

mod announcer;
mod focus;
mod ids;
mod registry;
mod task;

pub use announcer::{Announcer, AnnouncementHandle};
pub use aria::{AriaRole, LiveRegionMode};
pub use config::{AnnouncerProps, AnnouncerPropsPatch};
pub use focus::Visibility;
pub use host::{HostError, HostEvent, HostResult, LiveRegionHost};
pub use ids::{AnnouncementId, IdSequence};
pub use registry::Announcement;
