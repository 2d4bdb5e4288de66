//! Page Abstractions
//!
//! Components never touch `window`/`document` globals. They receive a
//! `Page` handle and work on its `Node`s, so the same code runs against the
//! browser (`web`) and against the in-memory page used by tests.

pub mod web;


use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// A local (non-Send) task spawned on the page's event loop
pub type Task = Pin<Box<dyn Future<Output = ()>>>;

/// Event kinds the components listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listen {
    Click,
    Submit,
}

impl Listen {
    pub fn event_name(&self) -> &'static str {
        match self {
            Listen::Click => "click",
            Listen::Submit => "submit",
        }
    }
}

/// What happens to the browser's own handling of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    Keep,
    Prevent,
}

/// Event listener; receives the event target element
pub type Handler<N> = Rc<dyn Fn(N) -> DefaultAction>;

/// Element handle
///
/// Selectors are plain CSS compound selectors. Missing elements are `None`
/// or empty vectors, never errors.
pub trait Node: Clone + PartialEq + 'static {
    /// First descendant matching `selector`
    fn select(&self, selector: &str) -> Option<Self>;
    /// All descendants matching `selector`, in document order
    fn select_all(&self, selector: &str) -> Vec<Self>;
    /// Self or nearest ancestor matching `selector`
    fn closest(&self, selector: &str) -> Option<Self>;

    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);

    fn has_class(&self, class: &str) -> bool;
    /// Add (`on == true`) or remove a class
    fn toggle_class(&self, class: &str, on: bool);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_inner_html(&self, html: &str);

    /// Set the value of an input element; no-op for other elements
    fn set_value(&self, value: &str);

    /// Successful controls of a form as name/value pairs; empty for non-forms
    fn form_fields(&self) -> Vec<(String, String)>;
    /// Resolved submission target of a form
    fn form_action(&self) -> Option<String>;

    fn append(&self, child: &Self);
    /// Detach from the document; no-op if already detached
    fn remove(&self);
    fn is_connected(&self) -> bool;

    fn listen(&self, kind: Listen, handler: Handler<Self>);
    /// Run `f` once, when the next CSS transition on this element ends
    fn on_transition_end(&self, f: Box<dyn FnOnce()>);
}

/// Handle to the current document and its event loop
pub trait Page: Clone + 'static {
    type Node: Node;

    /// Root scope for mounting (the document body)
    fn root(&self) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    fn create(&self, tag: &str) -> Option<Self::Node>;

    /// Full-page navigation
    fn navigate(&self, url: &str);
    fn set_timeout(&self, delay_ms: u32, f: Box<dyn FnOnce()>);
    fn spawn(&self, task: Task);
}
