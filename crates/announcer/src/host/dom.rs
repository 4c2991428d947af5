//! `LiveRegionHost` for the in-memory window

use std::time::Duration;

use announcer_dom::{DomEventType, NodeId, TimerId, Window, WindowEvent};

use super::{HostEvent, HostResult, LiveRegionHost};

impl LiveRegionHost for Window {
    type Node = NodeId;
    type Timer = TimerId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.document_mut().create_element(tag)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> HostResult<()> {
        Ok(self.document_mut().set_attribute(node, name, value)?)
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> HostResult<()> {
        Ok(self.document_mut().set_text_content(node, text)?)
    }

    fn set_class_name(&mut self, node: NodeId, class_name: &str) -> HostResult<()> {
        Ok(self.document_mut().set_attribute(node, "class", class_name)?)
    }

    fn add_class(&mut self, node: NodeId, class_name: &str) -> HostResult<()> {
        self.document_mut().class_list_mut(node)?.add(class_name);
        Ok(())
    }

    fn remove_class(&mut self, node: NodeId, class_name: &str) -> HostResult<()> {
        self.document_mut().class_list_mut(node)?.remove(class_name);
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> HostResult<()> {
        Ok(self.document_mut().append_child(parent, child)?)
    }

    fn insert_first(&mut self, parent: NodeId, child: NodeId) -> HostResult<()> {
        let doc = self.document_mut();
        let first = doc.first_child(parent);
        Ok(doc.insert_before(parent, child, first)?)
    }

    fn detach(&mut self, node: NodeId) -> HostResult<()> {
        let doc = self.document_mut();
        match doc.parent(node) {
            Some(parent) => Ok(doc.remove_child(parent, node)?),
            None => Ok(()),
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.document().parent(node)
    }

    fn head(&self) -> NodeId {
        self.document().head()
    }

    fn body(&self) -> NodeId {
        self.document().body()
    }

    fn listen_focus(&mut self, node: NodeId) -> HostResult<()> {
        let doc = self.document_mut();
        doc.add_event_listener(node, DomEventType::FocusIn)?;
        doc.add_event_listener(node, DomEventType::FocusOut)?;
        Ok(())
    }

    fn unlisten_focus(&mut self, node: NodeId) -> HostResult<()> {
        let doc = self.document_mut();
        doc.remove_event_listener(node, DomEventType::FocusIn)?;
        doc.remove_event_listener(node, DomEventType::FocusOut)?;
        Ok(())
    }

    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.set_timeout(delay)
    }

    fn cancel(&mut self, timer: TimerId) {
        self.clear_timeout(timer);
    }

    fn poll_event(&mut self) -> Option<HostEvent<NodeId, TimerId>> {
        Some(match Window::poll_event(self)? {
            WindowEvent::Timer(timer) => HostEvent::Timer(timer),
            WindowEvent::Dom(event) => match event.event_type {
                DomEventType::FocusIn => HostEvent::FocusIn {
                    region: event.current_target,
                },
                DomEventType::FocusOut => HostEvent::FocusOut {
                    region: event.current_target,
                },
            },
        })
    }
}
