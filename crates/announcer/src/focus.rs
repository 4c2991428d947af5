//! Focus visibility
//!
//! The region is shown while keyboard focus is inside it. Hiding is
//! deferred by one tick so focus moving between two children of the
//! region (focusout immediately followed by focusin) does not flicker.

/// Visual state of the region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Two-state machine plus the pending hide timer
#[derive(Debug)]
pub(crate) struct FocusVisibility<T> {
    state: Visibility,
    pending_hide: Option<T>,
}

impl<T> Default for FocusVisibility<T> {
    fn default() -> Self {
        Self {
            state: Visibility::Hidden,
            pending_hide: None,
        }
    }
}

impl<T: Copy> FocusVisibility<T> {
    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Focus entered. Returns the hide timer to cancel, if one was pending.
    pub fn focus_in(&mut self) -> Option<T> {
        self.state = Visibility::Visible;
        self.pending_hide.take()
    }

    /// Focus left. Records the new hide timer and returns the one it replaces.
    pub fn focus_out(&mut self, hide: T) -> Option<T> {
        self.pending_hide.replace(hide)
    }

    /// The deferred hide ran
    pub fn hide(&mut self) {
        self.pending_hide = None;
        self.state = Visibility::Hidden;
    }

    /// Forget the pending hide without changing state
    pub fn take_pending(&mut self) -> Option<T> {
        self.pending_hide.take()
    }
}
