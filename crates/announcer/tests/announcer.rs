//! Announcer behaviour against the in-memory window

use std::time::Duration;

use announcer::{Announcer, AnnouncerPropsPatch, IdSequence, Visibility};
use announcer_dom::{NodeId, Window};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn new_announcer() -> Announcer<Window> {
    Announcer::new(Window::new())
}

fn advance(announcer: &mut Announcer<Window>, millis: u64) {
    announcer.host_mut().advance(ms(millis));
    announcer.pump();
}

/// Texts of the list items in DOM order
fn list_texts(announcer: &Announcer<Window>) -> Vec<String> {
    let doc = announcer.host().document();
    let list = announcer.list().expect("region not created");
    doc.children(list).iter().map(|&li| doc.text_content(li)).collect()
}

fn registered_texts(announcer: &Announcer<Window>) -> Vec<String> {
    announcer.announcements().map(|a| a.text().to_string()).collect()
}

#[test]
fn test_region_markup() {
    let mut announcer = new_announcer();
    announcer.announce("Hello", false, None);

    let doc = announcer.host().document();
    let container = announcer.container().unwrap();
    let list = announcer.list().unwrap();

    assert_eq!(doc.parent(container), Some(doc.body()));
    assert_eq!(doc.get_attribute(container, "role").as_deref(), Some("region"));
    assert_eq!(
        doc.get_attribute(container, "aria-label").as_deref(),
        Some("Accessibility announcements")
    );
    assert_eq!(doc.get_attribute(container, "tabindex").as_deref(), Some("-1"));
    assert_eq!(doc.get_attribute(container, "class").as_deref(), Some("accessibility-announcer"));

    let heading = doc.children(container)[0];
    assert_eq!(doc.tag_name(heading), Some("h2"));
    assert_eq!(doc.get_attribute(heading, "aria-hidden").as_deref(), Some("true"));
    assert_eq!(doc.text_content(heading), "Accessibility announcements");

    assert_eq!(doc.children(container)[1], list);
    assert_eq!(doc.get_attribute(list, "role").as_deref(), Some("list"));

    let css = announcer.stylesheet().unwrap();
    assert_eq!(doc.parent(css), Some(doc.head()));
    assert_eq!(doc.get_attribute(css, "type").as_deref(), Some("text/css"));
    assert!(doc.text_content(css).contains(".accessibility-announcer-visible"));
}

#[test]
fn test_region_created_lazily() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().title("Later")));

    assert_eq!(announcer.container(), None);
    assert_eq!(announcer.stylesheet(), None);
    let doc = announcer.host().document();
    assert!(doc.children(doc.body()).is_empty());
    assert!(doc.children(doc.head()).is_empty());
}

#[test]
fn test_text_filled_after_render_delay() {
    let mut announcer = new_announcer();
    let handle = announcer.announce("Saved", false, None);
    let id = handle.id().unwrap();
    let node = announcer.announcement(id).unwrap().node();

    let doc = announcer.host().document();
    assert_eq!(doc.first_child(announcer.list().unwrap()), Some(node));
    assert_eq!(doc.get_attribute(node, "role").as_deref(), Some("listitem"));
    assert_eq!(doc.get_attribute(node, "aria-live").as_deref(), Some("polite"));
    assert_eq!(doc.get_attribute(node, "tabindex").as_deref(), Some("-1"));
    assert_eq!(doc.text_content(node), "");
    assert!(!announcer.announcement(id).unwrap().is_rendered());

    advance(&mut announcer, 99);
    assert_eq!(announcer.host().document().text_content(node), "");

    advance(&mut announcer, 1);
    assert_eq!(announcer.host().document().text_content(node), "Saved");
    assert!(announcer.announcement(id).unwrap().is_rendered());
}

#[test]
fn test_assertive_politeness() {
    let mut announcer = new_announcer();
    let id = announcer.announce("Error!", true, None).id().unwrap();
    let node = announcer.announcement(id).unwrap().node();

    let doc = announcer.host().document();
    assert_eq!(doc.get_attribute(node, "aria-live").as_deref(), Some("assertive"));
}

#[test]
fn test_custom_render_delay() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().render_delay(ms(250))));
    announcer.announce("Slow", false, None);

    advance(&mut announcer, 100);
    assert_eq!(list_texts(&announcer), vec![""]);
    advance(&mut announcer, 150);
    assert_eq!(list_texts(&announcer), vec!["Slow"]);
}

#[test]
fn test_history_length_evicts_oldest() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().history_length(2)));

    announcer.announce("a", false, None);
    announcer.announce("b", false, None);
    announcer.announce("c", false, None);
    advance(&mut announcer, 100);

    assert_eq!(registered_texts(&announcer), vec!["b", "c"]);
    assert_eq!(list_texts(&announcer), vec!["c", "b"]);
}

#[test]
fn test_history_length_never_exceeded() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().history_length(5)));

    for i in 0..25 {
        announcer.announce(&format!("message {}", i), i % 3 == 0, None);
        assert!(announcer.len() <= 5);
        if i % 4 == 0 {
            advance(&mut announcer, 30);
        }
    }

    assert_eq!(announcer.len(), 5);
    let doc = announcer.host().document();
    assert_eq!(doc.children(announcer.list().unwrap()).len(), 5);
}

#[test]
fn test_cancel_removes_announcement() {
    let mut announcer = new_announcer();
    let keep = announcer.announce("keep", false, None);
    let handle = announcer.announce("drop", false, None);
    let node = announcer.announcement(handle.id().unwrap()).unwrap().node();
    let pending_before = announcer.host().timers().pending();

    announcer.cancel(handle);
    assert_eq!(announcer.host().document().parent(node), None);
    assert_eq!(announcer.len(), 1);
    assert_eq!(announcer.host().timers().pending(), pending_before - 2);

    announcer.cancel(handle);
    announcer.cancel(announcer::AnnouncementHandle::INERT);
    assert_eq!(announcer.len(), 1);

    advance(&mut announcer, 100);
    assert_eq!(list_texts(&announcer), vec!["keep"]);
    assert!(announcer.announcement(keep.id().unwrap()).is_some());
}

#[test]
fn test_life_time_expiry() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().history_life_time(ms(500))));
    let id = announcer.announce("x", false, None).id().unwrap();
    let node = announcer.announcement(id).unwrap().node();

    advance(&mut announcer, 499);
    assert!(announcer.announcement(id).is_some());
    assert_eq!(list_texts(&announcer), vec!["x"]);

    advance(&mut announcer, 2);
    assert!(announcer.announcement(id).is_none());
    assert_eq!(announcer.host().document().parent(node), None);
    assert_eq!(announcer.pending_tasks(), 0);
}

#[test]
fn test_announce_after_idle_advance() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().history_life_time(ms(500))));
    advance(&mut announcer, 1000);

    let id = announcer.announce("late", false, None).id().unwrap();
    assert_eq!(announcer.pump(), 0);
    assert!(announcer.announcement(id).is_some());
    assert_eq!(list_texts(&announcer), vec![""]);

    advance(&mut announcer, 100);
    assert_eq!(list_texts(&announcer), vec!["late"]);

    advance(&mut announcer, 399);
    assert!(announcer.announcement(id).is_some());

    advance(&mut announcer, 1);
    assert!(announcer.announcement(id).is_none());
    assert_eq!(announcer.host().now(), ms(1500));
}

#[test]
fn test_zero_life_time_disables_expiry() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().history_life_time(Duration::ZERO)));
    let id = announcer.announce("stays", false, None).id().unwrap();
    assert!(!announcer.announcement(id).unwrap().expires());

    advance(&mut announcer, 24 * 60 * 60 * 1000);
    assert!(announcer.announcement(id).is_some());
    assert_eq!(list_texts(&announcer), vec!["stays"]);
}

#[test]
fn test_expiry_before_render() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().history_life_time(ms(50))));
    announcer.announce("too quick", false, None);

    advance(&mut announcer, 200);
    assert!(announcer.is_empty());
    assert!(list_texts(&announcer).is_empty());
    assert_eq!(announcer.host().timers().pending(), 0);
}

#[test]
fn test_remove_by_class() {
    let mut announcer = new_announcer();
    announcer.announce("a", false, Some("x"));
    announcer.announce("b", false, Some("y"));
    announcer.announce("c", true, Some("x"));
    announcer.announce("d", false, None);
    advance(&mut announcer, 100);

    announcer.remove_by_class("zzz");
    assert_eq!(announcer.len(), 4);

    announcer.remove_by_class("x");
    assert_eq!(registered_texts(&announcer), vec!["b", "d"]);
    assert_eq!(list_texts(&announcer), vec!["d", "b"]);
    assert!(announcer.announcements().all(|a| a.class_name() != Some("x")));
}

#[test]
fn test_blank_text_is_ignored() {
    let mut announcer = new_announcer();
    let handle = announcer.announce("   \n\t", false, None);

    assert!(handle.is_inert());
    assert_eq!(announcer.container(), None);
    assert_eq!(announcer.host().timers().pending(), 0);
    announcer.cancel(handle);
}

#[test]
fn test_setup_shrinks_history() {
    let mut announcer = new_announcer();
    for text in ["1", "2", "3", "4", "5"] {
        announcer.announce(text, false, None);
    }

    announcer.setup(Some(AnnouncerPropsPatch::new().history_length(2)));
    assert_eq!(registered_texts(&announcer), vec!["4", "5"]);

    announcer.setup(Some(AnnouncerPropsPatch::new().history_length(0)));
    assert!(announcer.is_empty());
}

#[test]
fn test_setup_reparents_region() {
    let mut announcer = new_announcer();
    let aside = {
        let doc = announcer.host_mut().document_mut();
        let aside = doc.create_element("aside");
        let body = doc.body();
        doc.append_child(body, aside).unwrap();
        aside
    };
    announcer.announce("moving", false, None);
    let container = announcer.container().unwrap();

    announcer.setup(Some(AnnouncerPropsPatch::new().parent(aside)));

    let doc = announcer.host().document();
    assert_eq!(doc.parent(container), Some(aside));
    assert_eq!(doc.children(doc.body()), &[aside]);
}

#[test]
fn test_parent_before_first_announcement() {
    let mut announcer = new_announcer();
    let main = announcer.host_mut().document_mut().create_element("main");
    announcer.setup(Some(AnnouncerPropsPatch::new().parent(main)));
    announcer.announce("inside main", false, None);

    let doc = announcer.host().document();
    assert_eq!(doc.parent(announcer.container().unwrap()), Some(main));
}

#[test]
fn test_setup_updates_title() {
    let mut announcer = new_announcer();
    announcer.announce("x", false, None);
    announcer.setup(Some(AnnouncerPropsPatch::new().title("Build status")));

    let doc = announcer.host().document();
    let container = announcer.container().unwrap();
    let heading = doc.children(container)[0];
    assert_eq!(doc.get_attribute(container, "aria-label").as_deref(), Some("Build status"));
    assert_eq!(doc.text_content(heading), "Build status");
}

#[test]
fn test_stylesheet_toggle() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().no_stylesheet(true)));
    announcer.announce("unstyled", false, None);

    let head = announcer.host().document().head();
    assert_eq!(announcer.stylesheet(), None);
    assert!(announcer.host().document().children(head).is_empty());

    announcer.setup(Some(AnnouncerPropsPatch::new().no_stylesheet(false)));
    let css = announcer.stylesheet().unwrap();
    assert_eq!(announcer.host().document().children(head), &[css]);

    // Re-syncing does not duplicate it
    announcer.setup(None);
    assert_eq!(announcer.host().document().children(head), &[css]);

    announcer.setup(Some(AnnouncerPropsPatch::new().no_stylesheet(true)));
    assert!(announcer.host().document().children(head).is_empty());
}

#[test]
fn test_custom_container_class() {
    let mut announcer = new_announcer();
    announcer.setup(Some(AnnouncerPropsPatch::new().container_class_name("sr-log")));
    announcer.announce("x", false, None);

    let doc = announcer.host().document();
    let container = announcer.container().unwrap();
    assert_eq!(doc.get_attribute(container, "class").as_deref(), Some("sr-log"));
}

#[test]
fn test_focus_shows_and_blur_hides() {
    let mut announcer = new_announcer();
    let first = announcer.announce("first", false, None).id().unwrap();
    let second = announcer.announce("second", false, None).id().unwrap();
    let first_node = announcer.announcement(first).unwrap().node();
    let second_node = announcer.announcement(second).unwrap().node();
    let container = announcer.container().unwrap();
    let outside: NodeId = {
        let doc = announcer.host_mut().document_mut();
        let input = doc.create_element("input");
        let body = doc.body();
        doc.append_child(body, input).unwrap();
        input
    };
    assert_eq!(announcer.visibility(), Visibility::Hidden);

    announcer.host_mut().document_mut().focus(first_node).unwrap();
    announcer.pump();
    assert!(announcer.is_visible());
    let visible_class = |a: &Announcer<Window>| {
        a.host()
            .document()
            .class_list(container)
            .is_some_and(|c| c.contains("accessibility-announcer-visible"))
    };
    assert!(visible_class(&announcer));

    // Moving between items inside the region does not hide it
    announcer.host_mut().document_mut().focus(second_node).unwrap();
    announcer.pump();
    assert!(announcer.is_visible());
    assert!(visible_class(&announcer));
    assert_eq!(announcer.pending_tasks(), 4);

    announcer.host_mut().document_mut().focus(outside).unwrap();
    announcer.pump();
    assert!(!announcer.is_visible());
    assert!(!visible_class(&announcer));

    announcer.host_mut().document_mut().focus(container).unwrap();
    announcer.pump();
    assert!(announcer.is_visible());
    announcer.host_mut().document_mut().blur();
    announcer.pump();
    assert_eq!(announcer.visibility(), Visibility::Hidden);
}

#[test]
fn test_focus_outside_region_is_ignored() {
    let mut announcer = new_announcer();
    announcer.announce("x", false, None);
    {
        let doc = announcer.host_mut().document_mut();
        let button = doc.create_element("button");
        let body = doc.body();
        doc.append_child(body, button).unwrap();
        doc.add_event_listener(body, announcer_dom::DomEventType::FocusIn).unwrap();
        doc.focus(button).unwrap();
    }

    assert_eq!(announcer.pump(), 1);
    assert!(!announcer.is_visible());
}

#[test]
fn test_dispose_tears_down() {
    let mut announcer = new_announcer();
    announcer.announce("a", false, Some("x"));
    announcer.announce("b", true, None);
    let container = announcer.container().unwrap();
    let css = announcer.stylesheet().unwrap();
    announcer.host_mut().document_mut().focus(container).unwrap();
    announcer.pump();
    announcer.host_mut().document_mut().blur();

    announcer.dispose();

    assert!(announcer.is_disposed());
    assert!(announcer.is_empty());
    assert_eq!(announcer.container(), None);
    assert_eq!(announcer.stylesheet(), None);
    assert_eq!(announcer.pending_tasks(), 0);

    let doc = announcer.host().document();
    assert_eq!(doc.parent(container), None);
    assert_eq!(doc.parent(css), None);
    assert!(doc.children(doc.body()).is_empty());
    assert!(doc.children(doc.head()).is_empty());
    assert!(!doc.has_event_listener(container, announcer_dom::DomEventType::FocusOut));
}

#[test]
fn test_calls_after_dispose_are_inert() {
    let mut announcer = new_announcer();
    let handle = announcer.announce("before", false, None);
    announcer.dispose();
    announcer.dispose();

    let html_before = {
        let doc = announcer.host().document();
        doc.outer_html(doc.document_element())
    };
    let nodes_before = announcer.host().document().len();

    let after = announcer.announce("after", true, Some("x"));
    announcer.setup(Some(AnnouncerPropsPatch::new().history_length(0).title("gone")));
    announcer.setup(None);
    announcer.remove_by_class("x");
    announcer.cancel(handle);
    advance(&mut announcer, 10_000);

    assert!(after.is_inert());
    let doc = announcer.host().document();
    assert_eq!(doc.outer_html(doc.document_element()), html_before);
    assert_eq!(doc.len(), nodes_before);
    assert_eq!(announcer.props().title, "Accessibility announcements");
}

#[test]
fn test_shared_id_sequence() {
    let ids = IdSequence::new();
    let mut left = Announcer::with_id_sequence(Window::new(), ids.clone());
    let mut right = Announcer::with_id_sequence(Window::new(), ids);

    let a = left.announce("left", false, None).id().unwrap();
    let b = right.announce("right", false, None).id().unwrap();
    let c = left.announce("left again", false, None).id().unwrap();

    assert!(a < b && b < c);
    assert_eq!(b.to_string(), "a-2");
}

#[test]
fn test_setup_from_json() {
    let patch: AnnouncerPropsPatch<NodeId> = serde_json::from_str(
        r#"{"title": "Chat", "historyLength": 1, "historyLifeTime": 0}"#,
    )
    .unwrap();

    let mut announcer = new_announcer();
    announcer.setup(Some(patch));
    announcer.announce("one", false, None);
    announcer.announce("two", false, None);

    assert_eq!(registered_texts(&announcer), vec!["two"]);
    assert!(!announcer.props().expires());
    assert_eq!(announcer.props().title, "Chat");
}
