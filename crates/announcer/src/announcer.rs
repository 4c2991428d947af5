//! Announcer - live region lifecycle
//!
//! Markup produced inside the parent element:
//!
//! ```text
//! <div role="region" aria-label="{title}" tabindex="-1" class="accessibility-announcer">
//!   <h2 aria-hidden="true">{title}</h2>
//!   <ul role="list">
//!     <li role="listitem" aria-live="polite" tabindex="-1">newest</li>
//!     <li role="listitem" aria-live="assertive" tabindex="-1">older</li>
//!   </ul>
//! </div>
//! ```
//!
//! Nothing here returns an error. Host failures are logged and skipped;
//! calls after `dispose()` do nothing.

use std::time::Duration;

use crate::aria::{AriaRole, LiveRegionMode};
use crate::config::{AnnouncerProps, AnnouncerPropsPatch};
use crate::focus::{FocusVisibility, Visibility};
use crate::host::{HostEvent, HostResult, LiveRegionHost};
use crate::ids::{AnnouncementId, IdSequence};
use crate::registry::{Announcement, History};
use crate::styles::{ANNOUNCER_STYLES, VISIBLE_CLASS_NAME};
use crate::task::{TaskKind, TaskTable};

/// Returned by [`Announcer::announce`]; pass to [`Announcer::cancel`] to
/// withdraw the announcement early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnouncementHandle(Option<AnnouncementId>);

impl AnnouncementHandle {
    /// Handle that cancels nothing (blank text, disposed announcer)
    pub const INERT: AnnouncementHandle = AnnouncementHandle(None);

    pub fn id(&self) -> Option<AnnouncementId> {
        self.0
    }

    pub fn is_inert(&self) -> bool {
        self.0.is_none()
    }
}

/// Container, heading and list, created on first announcement
#[derive(Debug, Clone, Copy)]
struct RegionNodes<N> {
    container: N,
    title: N,
    list: N,
}

/// ARIA live-region announcer
pub struct Announcer<H: LiveRegionHost> {
    host: H,
    props: AnnouncerProps<H::Node>,
    ids: IdSequence,
    region: Option<RegionNodes<H::Node>>,
    stylesheet: Option<H::Node>,
    history: History<H::Node, H::Timer>,
    tasks: TaskTable<H::Timer>,
    visibility: FocusVisibility<H::Timer>,
    disposed: bool,
}

impl<H: LiveRegionHost> Announcer<H> {
    /// Announcer with its own id sequence
    pub fn new(host: H) -> Self {
        Self::with_id_sequence(host, IdSequence::new())
    }

    /// Announcer drawing ids from a shared sequence
    pub fn with_id_sequence(host: H, ids: IdSequence) -> Self {
        Self {
            host,
            props: AnnouncerProps::default(),
            ids,
            region: None,
            stylesheet: None,
            history: History::default(),
            tasks: TaskTable::default(),
            visibility: FocusVisibility::default(),
            disposed: false,
        }
    }

    /// Merge configuration and apply what changed
    pub fn setup(&mut self, patch: Option<AnnouncerPropsPatch<H::Node>>) {
        if self.disposed {
            return;
        }

        let Some(patch) = patch else {
            self.sync_stylesheet();
            return;
        };

        let new_parent = patch.parent;
        let title_changed = patch.title.is_some();
        let length_changed = patch.history_length.is_some();
        patch.apply_to(&mut self.props);

        self.sync_stylesheet();

        if let (Some(parent), Some(region)) = (new_parent, self.region) {
            if self.host.parent(region.container) != Some(parent) {
                tracing::debug!("Moving announcer region to {:?}", parent);
                let res = self.host.append_child(parent, region.container);
                self.log_failure(res, "reparent region");
            }
        }

        if title_changed {
            if let Some(region) = self.region {
                let title = self.props.title.clone();
                let res = self.host.set_attribute(region.container, "aria-label", &title);
                self.log_failure(res, "update region label");
                let res = self.host.set_text(region.title, &title);
                self.log_failure(res, "update region heading");
            }
        }

        if length_changed {
            self.shrink_history();
        }
    }

    /// Queue `text` for screen readers.
    ///
    /// The list item is inserted empty right away and filled after the
    /// render delay. Blank text is ignored.
    pub fn announce(
        &mut self,
        text: &str,
        assertive: bool,
        class_name: Option<&str>,
    ) -> AnnouncementHandle {
        if self.disposed || text.trim().is_empty() {
            return AnnouncementHandle::INERT;
        }

        let list = self.ensure_region().list;
        let mode = LiveRegionMode::from_assertive(assertive);

        let node = self.host.create_element("li");
        let res = self.decorate_item(node, mode);
        self.log_failure(res, "decorate announcement");

        let id = self.ids.next_id();
        let render = self
            .tasks
            .schedule(&mut self.host, self.props.render_delay, TaskKind::RenderFill(id));
        let expiry = self.props.expires().then(|| {
            self.tasks
                .schedule(&mut self.host, self.props.history_life_time, TaskKind::Expire(id))
        });

        self.history.insert(Announcement {
            id,
            node,
            text: text.to_string(),
            mode,
            class_name: class_name.map(String::from),
            render: Some(render),
            expiry,
        });

        let res = self.host.insert_first(list, node);
        self.log_failure(res, "insert announcement");
        tracing::debug!("Announcing {} ({})", id, mode.as_str());

        self.shrink_history();

        AnnouncementHandle(Some(id))
    }

    /// Withdraw one announcement. Repeated calls are harmless.
    pub fn cancel(&mut self, handle: AnnouncementHandle) {
        if self.disposed {
            return;
        }
        if let Some(id) = handle.0 {
            self.remove_announcement(id);
        }
    }

    /// Remove every announcement tagged with `class_name`
    pub fn remove_by_class(&mut self, class_name: &str) {
        if self.disposed {
            return;
        }
        for id in self.history.ids_with_class(class_name) {
            self.remove_announcement(id);
        }
    }

    /// Tear everything down. The announcer is inert afterwards.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        self.remove_stylesheet();

        if let Some(pending) = self.visibility.take_pending() {
            self.tasks.cancel(&mut self.host, pending);
        }

        for id in self.history.ids() {
            self.remove_announcement(id);
        }
        self.tasks.cancel_all(&mut self.host);

        if let Some(region) = self.region.take() {
            let res = self.host.unlisten_focus(region.container);
            self.log_failure(res, "remove focus listeners");
            let res = self.host.detach(region.container);
            self.log_failure(res, "detach region");
        }

        self.disposed = true;
        tracing::debug!("Announcer disposed");
    }

    /// React to one host event
    pub fn handle_event(&mut self, event: HostEvent<H::Node, H::Timer>) {
        if self.disposed {
            return;
        }

        match event {
            HostEvent::Timer(timer) => self.on_timer(timer),
            HostEvent::FocusIn { region } if self.is_container(region) => self.on_focus_in(),
            HostEvent::FocusOut { region } if self.is_container(region) => self.on_focus_out(),
            HostEvent::FocusIn { .. } | HostEvent::FocusOut { .. } => {}
        }
    }

    /// Drain and handle pending host events. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        if self.disposed {
            return 0;
        }

        let mut handled = 0;
        while let Some(event) = self.host.poll_event() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    // --- Introspection ---

    pub fn props(&self) -> &AnnouncerProps<H::Node> {
        &self.props
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Region container, once created
    pub fn container(&self) -> Option<H::Node> {
        self.region.map(|r| r.container)
    }

    /// Announcement list, once created
    pub fn list(&self) -> Option<H::Node> {
        self.region.map(|r| r.list)
    }

    pub fn stylesheet(&self) -> Option<H::Node> {
        self.stylesheet
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Registered ids, oldest first
    pub fn announcement_ids(&self) -> Vec<AnnouncementId> {
        self.history.ids()
    }

    pub fn announcement(&self, id: AnnouncementId) -> Option<&Announcement<H::Node, H::Timer>> {
        self.history.get(id)
    }

    /// Registered announcements, oldest first
    pub fn announcements(&self) -> impl Iterator<Item = &Announcement<H::Node, H::Timer>> {
        self.history.iter()
    }

    /// Timers still owed a callback
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility.state()
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.state() == Visibility::Visible
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // --- Internals ---

    fn ensure_region(&mut self) -> RegionNodes<H::Node> {
        if let Some(region) = self.region {
            return region;
        }

        let region = RegionNodes {
            container: self.host.create_element("div"),
            title: self.host.create_element("h2"),
            list: self.host.create_element("ul"),
        };
        self.region = Some(region);

        let res = self.build_region(region);
        self.log_failure(res, "build region");

        self.sync_stylesheet();

        let parent = self.props.parent.unwrap_or_else(|| self.host.body());
        let res = self.host.append_child(parent, region.container);
        self.log_failure(res, "mount region");

        tracing::debug!("Announcer region mounted in {:?}", parent);
        region
    }

    fn build_region(&mut self, region: RegionNodes<H::Node>) -> HostResult<()> {
        let host = &mut self.host;
        let title = self.props.title.as_str();

        host.set_attribute(region.container, "role", AriaRole::Region.as_str())?;
        host.set_attribute(region.container, "aria-label", title)?;
        host.set_attribute(region.container, "tabindex", "-1")?;

        host.set_attribute(region.title, "aria-hidden", "true")?;
        host.set_text(region.title, title)?;

        host.set_attribute(region.list, "role", AriaRole::List.as_str())?;

        host.append_child(region.container, region.title)?;
        host.append_child(region.container, region.list)?;

        host.listen_focus(region.container)?;
        host.set_class_name(region.container, self.props.container_class())
    }

    fn decorate_item(&mut self, node: H::Node, mode: LiveRegionMode) -> HostResult<()> {
        self.host.set_attribute(node, "role", AriaRole::ListItem.as_str())?;
        self.host.set_attribute(node, "aria-live", mode.as_str())?;
        self.host.set_attribute(node, "tabindex", "-1")
    }

    /// Make stylesheet presence match `no_stylesheet`. Waits for the region.
    fn sync_stylesheet(&mut self) {
        if self.region.is_none() {
            return;
        }

        if self.props.no_stylesheet {
            self.remove_stylesheet();
            return;
        }

        let css = match self.stylesheet {
            Some(css) => css,
            None => {
                let css = self.host.create_element("style");
                let res = self
                    .host
                    .set_attribute(css, "type", "text/css")
                    .and_then(|_| self.host.set_text(css, ANNOUNCER_STYLES));
                self.log_failure(res, "fill stylesheet");
                self.stylesheet = Some(css);
                css
            }
        };

        let head = self.host.head();
        if self.host.parent(css) != Some(head) {
            let res = self.host.append_child(head, css);
            self.log_failure(res, "inject stylesheet");
        }
    }

    fn remove_stylesheet(&mut self) {
        if let Some(css) = self.stylesheet.take() {
            let res = self.host.detach(css);
            self.log_failure(res, "remove stylesheet");
        }
    }

    /// Evict oldest entries until the history fits
    fn shrink_history(&mut self) {
        while self.history.len() > self.props.history_length {
            let Some(oldest) = self.history.oldest() else {
                break;
            };
            tracing::debug!("History full, evicting {}", oldest);
            self.remove_announcement(oldest);
        }
    }

    fn remove_announcement(&mut self, id: AnnouncementId) -> bool {
        let Some(announcement) = self.history.remove(id) else {
            return false;
        };

        for timer in [announcement.render, announcement.expiry].into_iter().flatten() {
            self.tasks.cancel(&mut self.host, timer);
        }

        if self.host.parent(announcement.node).is_some() {
            let res = self.host.detach(announcement.node);
            self.log_failure(res, "detach announcement");
        }

        tracing::trace!("Removed announcement {}", id);
        true
    }

    fn on_timer(&mut self, timer: H::Timer) {
        let Some(kind) = self.tasks.fire(timer) else {
            tracing::trace!("Ignoring stale timer {:?}", timer);
            return;
        };

        match kind {
            TaskKind::RenderFill(id) => {
                let Some(announcement) = self.history.get_mut(id) else {
                    return;
                };
                announcement.render = None;
                let node = announcement.node;
                let text = announcement.text.clone();
                let res = self.host.set_text(node, &text);
                self.log_failure(res, "fill announcement");
            }
            TaskKind::Expire(id) => {
                if let Some(announcement) = self.history.get_mut(id) {
                    announcement.expiry = None;
                }
                tracing::debug!("Announcement {} expired", id);
                self.remove_announcement(id);
            }
            TaskKind::Hide => {
                self.visibility.hide();
                self.set_visible_class(false);
            }
        }
    }

    fn on_focus_in(&mut self) {
        if let Some(pending) = self.visibility.focus_in() {
            self.tasks.cancel(&mut self.host, pending);
        }
        self.set_visible_class(true);
    }

    fn on_focus_out(&mut self) {
        let hide = self
            .tasks
            .schedule(&mut self.host, Duration::ZERO, TaskKind::Hide);
        if let Some(previous) = self.visibility.focus_out(hide) {
            self.tasks.cancel(&mut self.host, previous);
        }
    }

    fn set_visible_class(&mut self, visible: bool) {
        let Some(region) = self.region else {
            return;
        };
        let res = if visible {
            self.host.add_class(region.container, VISIBLE_CLASS_NAME)
        } else {
            self.host.remove_class(region.container, VISIBLE_CLASS_NAME)
        };
        self.log_failure(res, "toggle visibility");
    }

    fn is_container(&self, node: H::Node) -> bool {
        self.region.is_some_and(|r| r.container == node)
    }

    fn log_failure(&self, res: HostResult<()>, action: &str) {
        if let Err(err) = res {
            tracing::warn!("Announcer could not {}: {}", action, err);
        }
    }
}

impl<H: LiveRegionHost> std::fmt::Debug for Announcer<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Announcer")
            .field("props", &self.props)
            .field("announcements", &self.history.len())
            .field("visibility", &self.visibility.state())
            .field("disposed", &self.disposed)
            .finish()
    }
}
