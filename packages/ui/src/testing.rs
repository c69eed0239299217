//! Helpers for rendering components and observing their callbacks in tests.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

/// Shared log of callback invocations, cloned into harness props.
#[derive(Clone, Default)]
pub(crate) struct Calls(Rc<RefCell<Vec<&'static str>>>);

impl Calls {
    pub(crate) fn record(&self, name: &'static str) {
        self.0.borrow_mut().push(name);
    }

    pub(crate) fn recorded(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }

    /// Must be called while a component is rendering.
    pub(crate) fn handler(&self, name: &'static str) -> EventHandler {
        let calls = self.clone();
        EventHandler::new(move |_| calls.record(name))
    }
}

pub(crate) fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
