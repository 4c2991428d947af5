//! Example: announcements in an in-memory window
//!
//! Run with `RUST_LOG=announcer=debug` to see the lifecycle.

use std::time::Duration;

use announcer::{Announcer, AnnouncerPropsPatch};
use announcer_dom::{NodeId, Window};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{ "historyLength": 3, "historyLifeTime": 2000 }"#;

fn dump(announcer: &Announcer<Window>, label: &str) {
    let doc = announcer.host().document();
    println!("-- {} --", label);
    println!("{}", doc.outer_html(doc.body()));
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let patch: AnnouncerPropsPatch<NodeId> = serde_json::from_str(CONFIG)?;
    let mut announcer = Announcer::new(Window::new());
    announcer.setup(Some(patch));

    announcer.announce("Hello world", false, None);
    announcer.announce("Upload failed", true, Some("upload"));
    dump(&announcer, "inserted, not yet filled");

    announcer.host_mut().advance(Duration::from_millis(100));
    announcer.pump();
    dump(&announcer, "after render delay");

    for step in 1..=3 {
        announcer.announce(&format!("Progress {}%", step * 25), false, Some("upload"));
    }
    announcer.host_mut().advance(Duration::from_millis(100));
    announcer.pump();
    dump(&announcer, "history trimmed to three");

    if let Some(container) = announcer.container() {
        announcer.host_mut().document_mut().focus(container)?;
        announcer.pump();
        println!("focused, visible = {}", announcer.is_visible());
        announcer.host_mut().document_mut().blur();
        announcer.pump();
        println!("blurred, visible = {}", announcer.is_visible());
    }

    announcer.remove_by_class("upload");
    dump(&announcer, "upload messages removed");

    announcer.host_mut().advance(Duration::from_secs(5));
    announcer.pump();
    println!("after expiry: {} announcements", announcer.len());

    announcer.dispose();
    dump(&announcer, "disposed");
    Ok(())
}
