//! Announcement registry
//!
//! Ids are handed out in increasing order, so the key order of the map is
//! also the insertion order and the first entry is always the oldest.

use std::collections::BTreeMap;

use crate::{AnnouncementId, LiveRegionMode};

/// One announcement and the list item carrying it
#[derive(Debug, Clone)]
pub struct Announcement<N, T> {
    pub(crate) id: AnnouncementId,
    pub(crate) node: N,
    pub(crate) text: String,
    pub(crate) mode: LiveRegionMode,
    pub(crate) class_name: Option<String>,
    /// Pending text fill
    pub(crate) render: Option<T>,
    /// Pending auto-removal
    pub(crate) expiry: Option<T>,
}

impl<N: Copy, T> Announcement<N, T> {
    pub fn id(&self) -> AnnouncementId {
        self.id
    }

    /// The `<li>` element
    pub fn node(&self) -> N {
        self.node
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> LiveRegionMode {
        self.mode
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Text has been written into the node
    pub fn is_rendered(&self) -> bool {
        self.render.is_none()
    }

    /// An auto-removal is still scheduled
    pub fn expires(&self) -> bool {
        self.expiry.is_some()
    }
}

/// Ordered id -> announcement map
#[derive(Debug)]
pub(crate) struct History<N, T> {
    entries: BTreeMap<AnnouncementId, Announcement<N, T>>,
}

impl<N, T> Default for History<N, T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<N, T> History<N, T> {
    pub fn insert(&mut self, announcement: Announcement<N, T>) {
        self.entries.insert(announcement.id, announcement);
    }

    pub fn remove(&mut self, id: AnnouncementId) -> Option<Announcement<N, T>> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: AnnouncementId) -> Option<&Announcement<N, T>> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: AnnouncementId) -> Option<&mut Announcement<N, T>> {
        self.entries.get_mut(&id)
    }

    pub fn oldest(&self) -> Option<AnnouncementId> {
        self.entries.keys().next().copied()
    }

    pub fn ids(&self) -> Vec<AnnouncementId> {
        self.entries.keys().copied().collect()
    }

    /// Ids carrying `class_name`, oldest first
    pub fn ids_with_class(&self, class_name: &str) -> Vec<AnnouncementId> {
        self.entries
            .values()
            .filter(|a| a.class_name.as_deref() == Some(class_name))
            .map(|a| a.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Announcement<N, T>> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
