//! ARIA Support
//!
//! Roles and live-region politeness used by the announcer markup.

/// ARIA roles the announcer emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    /// Landmark wrapping the whole announcer
    Region,
    List,
    ListItem,
}

impl AriaRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::List => "list",
            Self::ListItem => "listitem",
        }
    }
}

/// Live region mode (`aria-live`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiveRegionMode {
    /// Announce when the user is idle
    #[default]
    Polite,
    /// Interrupt whatever is being read
    Assertive,
}

impl LiveRegionMode {
    pub fn from_assertive(assertive: bool) -> Self {
        if assertive {
            Self::Assertive
        } else {
            Self::Polite
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}
