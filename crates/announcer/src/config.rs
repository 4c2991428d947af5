//! Announcer configuration

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Default accessible title of the region
pub const DEFAULT_TITLE: &str = "Accessibility announcements";

/// Default number of announcements kept
pub const DEFAULT_HISTORY_LENGTH: usize = 10;

/// Default announcement lifetime (10 minutes)
pub const DEFAULT_HISTORY_LIFE_TIME: Duration = Duration::from_secs(10 * 60);

/// Pause between inserting an empty item and filling in its text.
/// Screen readers tend to skip content present at insertion time.
pub const DEFAULT_RENDER_DELAY: Duration = Duration::from_millis(100);

/// Announcer configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncerProps<N> {
    /// Accessible label and visible heading
    pub title: String,

    /// Maximum announcements retained at once
    pub history_length: usize,

    /// Auto-removal delay; zero keeps announcements until evicted
    pub history_life_time: Duration,

    /// Element the region mounts into (document body when unset)
    pub parent: Option<N>,

    /// Replaces the default container class
    pub container_class_name: Option<String>,

    /// Skip injecting the default stylesheet
    pub no_stylesheet: bool,

    pub render_delay: Duration,
}

impl<N> AnnouncerProps<N> {
    /// Class applied to the container element
    pub fn container_class(&self) -> &str {
        self.container_class_name
            .as_deref()
            .unwrap_or(crate::styles::CONTAINER_CLASS_NAME)
    }

    pub fn expires(&self) -> bool {
        !self.history_life_time.is_zero()
    }
}

impl<N> Default for AnnouncerProps<N> {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            history_length: DEFAULT_HISTORY_LENGTH,
            history_life_time: DEFAULT_HISTORY_LIFE_TIME,
            parent: None,
            container_class_name: None,
            no_stylesheet: false,
            render_delay: DEFAULT_RENDER_DELAY,
        }
    }
}

/// Partial configuration merged over the current props by `setup()`.
///
/// Deserializes from camelCase keys with durations in milliseconds.
/// `parent` is a live host node and is never read from config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct AnnouncerPropsPatch<N> {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub history_length: Option<usize>,

    #[serde(default, deserialize_with = "opt_millis")]
    pub history_life_time: Option<Duration>,

    #[serde(skip)]
    pub parent: Option<N>,

    #[serde(default)]
    pub container_class_name: Option<String>,

    #[serde(default)]
    pub no_stylesheet: Option<bool>,

    #[serde(default, deserialize_with = "opt_millis")]
    pub render_delay: Option<Duration>,
}

fn opt_millis<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
    Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
}

impl<N> Default for AnnouncerPropsPatch<N> {
    fn default() -> Self {
        Self {
            title: None,
            history_length: None,
            history_life_time: None,
            parent: None,
            container_class_name: None,
            no_stylesheet: None,
            render_delay: None,
        }
    }
}

impl<N> AnnouncerPropsPatch<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn history_length(mut self, length: usize) -> Self {
        self.history_length = Some(length);
        self
    }

    pub fn history_life_time(mut self, life_time: Duration) -> Self {
        self.history_life_time = Some(life_time);
        self
    }

    pub fn parent(mut self, parent: N) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn container_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.container_class_name = Some(class_name.into());
        self
    }

    pub fn no_stylesheet(mut self, no_stylesheet: bool) -> Self {
        self.no_stylesheet = Some(no_stylesheet);
        self
    }

    pub fn render_delay(mut self, delay: Duration) -> Self {
        self.render_delay = Some(delay);
        self
    }

    /// Shallow-merge into `props`; absent fields keep their value
    pub fn apply_to(self, props: &mut AnnouncerProps<N>) {
        if let Some(title) = self.title {
            props.title = title;
        }
        if let Some(length) = self.history_length {
            props.history_length = length;
        }
        if let Some(life_time) = self.history_life_time {
            props.history_life_time = life_time;
        }
        if let Some(parent) = self.parent {
            props.parent = Some(parent);
        }
        if let Some(class_name) = self.container_class_name {
            props.container_class_name = Some(class_name);
        }
        if let Some(no_stylesheet) = self.no_stylesheet {
            props.no_stylesheet = no_stylesheet;
        }
        if let Some(delay) = self.render_delay {
            props.render_delay = delay;
        }
    }
}
