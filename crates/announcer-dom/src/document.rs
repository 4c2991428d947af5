//! Document - arena-backed element tree
//!
//! Elements are never freed; removing a node only detaches it, so a
//! `NodeId` stays valid for the lifetime of the document.

use std::collections::VecDeque;

use crate::{ClassList, DomError, DomEvent, DomEventType, DomResult, NodeId};

/// Element stored in the document arena
#[derive(Debug, Clone)]
pub struct Element {
    pub tag_name: String,
    attributes: Vec<(String, String)>,
    class_list: ClassList,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    text: String,
    listeners: Vec<DomEventType>,
}

impl Element {
    fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attributes: Vec::new(),
            class_list: ClassList::new(),
            children: Vec::new(),
            parent: None,
            text: String::new(),
            listeners: Vec::new(),
        }
    }
}

/// HTML document with `<html>`, `<head>` and `<body>`
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    html: NodeId,
    head: NodeId,
    body: NodeId,
    focused: Option<NodeId>,
    events: VecDeque<DomEvent>,
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            elements: Vec::new(),
            html: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            focused: None,
            events: VecDeque::new(),
        };
        doc.html = doc.create_element("html");
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.link(doc.html, doc.head, None);
        doc.link(doc.html, doc.body, None);
        doc
    }

    /// `<html>` element
    pub fn document_element(&self) -> NodeId {
        self.html
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of elements ever created
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        let id = NodeId(self.elements.len() as u32);
        self.elements.push(Element::new(tag_name));
        id
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0 as usize)
    }

    fn get_mut(&mut self, node: NodeId) -> DomResult<&mut Element> {
        self.elements
            .get_mut(node.0 as usize)
            .ok_or(DomError::NotFound(node))
    }

    fn element(&self, node: NodeId) -> DomResult<&Element> {
        self.get(node).ok_or(DomError::NotFound(node))
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|el| el.tag_name.as_str())
    }

    // --- Attributes ---

    /// Set attribute. `class` is kept in sync with the class list.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> DomResult<()> {
        let el = self.get_mut(node)?;
        if name == "class" {
            el.class_list.set_value(value);
            return Ok(());
        }
        match el.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => el.attributes.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let el = self.get(node)?;
        if name == "class" {
            return (!el.class_list.is_empty()).then(|| el.class_list.value());
        }
        el.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> DomResult<()> {
        let el = self.get_mut(node)?;
        if name == "class" {
            el.class_list = ClassList::new();
        } else {
            el.attributes.retain(|(k, _)| k != name);
        }
        Ok(())
    }

    pub fn class_list(&self, node: NodeId) -> Option<&ClassList> {
        self.get(node).map(|el| &el.class_list)
    }

    pub fn class_list_mut(&mut self, node: NodeId) -> DomResult<&mut ClassList> {
        Ok(&mut self.get_mut(node)?.class_list)
    }

    // --- Text ---

    /// Replace the element's content with a single run of text
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()> {
        let children = std::mem::take(&mut self.get_mut(node)?.children);
        for child in children {
            if let Some(el) = self.elements.get_mut(child.0 as usize) {
                el.parent = None;
            }
        }
        self.get_mut(node)?.text = text.to_string();
        Ok(())
    }

    /// Concatenated text of the element and its descendants
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        if let Some(el) = self.get(node) {
            out.push_str(&el.text);
            for &child in &el.children {
                self.collect_text(child, out);
            }
        }
    }

    // --- Tree ---

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|el| el.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).first().copied()
    }

    /// Check whether `ancestor` is `node` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference`, or append when `reference` is None.
    /// A child that already has a parent is moved.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        self.element(parent)?;
        self.element(child)?;
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild { parent, child: reference });
            }
            if reference == child {
                return Ok(());
            }
        }

        self.detach(child);
        self.link(parent, child, reference);
        Ok(())
    }

    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.element(child)?;
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(())
    }

    fn link(&mut self, parent: NodeId, child: NodeId, reference: Option<NodeId>) {
        let siblings = &mut self.elements[parent.0 as usize].children;
        let pos = reference
            .and_then(|r| siblings.iter().position(|&c| c == r))
            .unwrap_or(siblings.len());
        siblings.insert(pos, child);
        self.elements[child.0 as usize].parent = Some(parent);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old) = self.elements[child.0 as usize].parent.take() {
            self.elements[old.0 as usize].children.retain(|&c| c != child);
        }
        if self.focused.is_some_and(|f| self.is_inclusive_ancestor(child, f)) {
            tracing::trace!("Focused subtree {} detached, dropping focus", child);
            self.focused = None;
        }
    }

    /// Serialize `node` and its subtree as HTML
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let Some(el) = self.get(node) else {
            return;
        };
        out.push('<');
        out.push_str(&el.tag_name);
        for (name, value) in &el.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape(value, true)));
        }
        if !el.class_list.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape(&el.class_list.value(), true)));
        }
        out.push('>');
        out.push_str(&escape(&el.text, false));
        for &child in &el.children {
            self.write_html(child, out);
        }
        out.push_str("</");
        out.push_str(&el.tag_name);
        out.push('>');
    }

    // --- Events ---

    pub fn add_event_listener(&mut self, node: NodeId, event_type: DomEventType) -> DomResult<()> {
        let el = self.get_mut(node)?;
        if !el.listeners.contains(&event_type) {
            el.listeners.push(event_type);
        }
        Ok(())
    }

    pub fn remove_event_listener(&mut self, node: NodeId, event_type: DomEventType) -> DomResult<()> {
        self.get_mut(node)?.listeners.retain(|&t| t != event_type);
        Ok(())
    }

    pub fn has_event_listener(&self, node: NodeId, event_type: DomEventType) -> bool {
        self.get(node).is_some_and(|el| el.listeners.contains(&event_type))
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move focus to `node`, queueing `focusout` then `focusin`
    pub fn focus(&mut self, node: NodeId) -> DomResult<()> {
        self.element(node)?;
        if self.focused == Some(node) {
            return Ok(());
        }
        let previous = self.focused.replace(node);
        tracing::trace!("Focus {:?} -> {}", previous, node);

        if let Some(previous) = previous {
            self.dispatch(DomEventType::FocusOut, previous, Some(node));
        }
        self.dispatch(DomEventType::FocusIn, node, previous);
        Ok(())
    }

    /// Drop focus, queueing `focusout` for the focused element
    pub fn blur(&mut self) {
        if let Some(previous) = self.focused.take() {
            tracing::trace!("Blur {}", previous);
            self.dispatch(DomEventType::FocusOut, previous, None);
        }
    }

    fn dispatch(&mut self, event_type: DomEventType, target: NodeId, related: Option<NodeId>) {
        let mut current = Some(target);
        while let Some(node) = current {
            if self.has_event_listener(node, event_type) {
                tracing::trace!("Dispatch {} to {}", event_type.as_str(), node);
                self.events.push_back(DomEvent {
                    event_type,
                    target,
                    current_target: node,
                    related_target: related,
                });
            }
            current = self.parent(node);
        }
    }

    /// Drain queued events in dispatch order
    pub fn take_events(&mut self) -> Vec<DomEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn pop_event(&mut self) -> Option<DomEvent> {
        self.events.pop_front()
    }
}

fn escape(s: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
