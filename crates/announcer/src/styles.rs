//! Default stylesheet
//!
//! Keeps the region off-screen until it is focused, then pins it to the
//! bottom-right corner of the viewport.

/// Default class of the region container
pub const CONTAINER_CLASS_NAME: &str = "accessibility-announcer";

/// Class added while focus is inside the region
pub const VISIBLE_CLASS_NAME: &str = "accessibility-announcer-visible";

/// Contents of the injected `<style>` element
pub const ANNOUNCER_STYLES: &str = r#"
.accessibility-announcer {
    height: 1px;
    left: -10px;
    max-height: 100%;
    max-width: 400px;
    opacity: 0;
    overflow: hidden;
    position: absolute;
    top: -10px;
    width: 1px;
    z-index: -1;
}

.accessibility-announcer-visible {
    border-radius: 10px;
    border: 1px solid #ccc;
    bottom: 10px;
    box-shadow: 0 0 6px rgba(0,0,0,.3);
    height: auto;
    left: auto;
    opacity: 1;
    overflow: auto;
    padding: 10px;
    right: 10px;
    top: auto;
    width: auto;
    z-index: 2147483647;
}

.accessibility-announcer h2 {
    margin: 0 0 6px 0;
}

.accessibility-announcer ul {
    list-style-type: none;
    margin: 0;
    padding: 0;
}

.accessibility-announcer li {
    border-top: 1px solid #ccc;
    margin: 6px 0 0 0;
    padding-top: 6px;
}
"#;
