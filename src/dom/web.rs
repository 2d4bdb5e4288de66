//! Browser Page
//!
//! `Page`/`Node` over web-sys. Persistent listener closures are leaked with
//! `forget()` and live as long as the page; one-shot listeners free
//! themselves when they fire.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, FormData, HtmlFormElement, HtmlInputElement};

use super::{DefaultAction, Handler, Listen, Node, Page, Task};

/// Element handle backed by a DOM element
#[derive(Clone, Debug, PartialEq)]
pub struct WebNode(pub Element);

impl Node for WebNode {
    fn select(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(WebNode)
    }

    fn select_all(&self, selector: &str) -> Vec<Self> {
        let Ok(list) = self.0.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebNode)
            .collect()
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0.closest(selector).ok().flatten().map(WebNode)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.0.set_attribute(name, value);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn toggle_class(&self, class: &str, on: bool) {
        let _ = self.0.class_list().toggle_with_force(class, on);
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }

    fn form_fields(&self) -> Vec<(String, String)> {
        let Some(form) = self.0.dyn_ref::<HtmlFormElement>() else {
            return Vec::new();
        };
        let Ok(data) = FormData::new_with_form(form) else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        // File inputs yield Blob values; only string fields are sent
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = entry.dyn_into::<js_sys::Array>().ok()?;
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn form_action(&self) -> Option<String> {
        self.0.dyn_ref::<HtmlFormElement>().map(|form| form.action())
    }

    fn append(&self, child: &Self) {
        let _ = self.0.append_child(&child.0);
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }

    fn listen(&self, kind: Listen, handler: Handler<Self>) {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if handler(WebNode(target)) == DefaultAction::Prevent {
                ev.prevent_default();
            }
        });
        let _ = self
            .0
            .add_event_listener_with_callback(kind.event_name(), callback.as_ref().unchecked_ref());
        callback.forget();
    }

    fn on_transition_end(&self, f: Box<dyn FnOnce()>) {
        // freed by wasm-bindgen after the single call
        let callback = Closure::once_into_js(move || f());
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let _ = self.0.add_event_listener_with_callback_and_add_event_listener_options(
            "transitionend",
            callback.unchecked_ref(),
            &options,
        );
    }
}

/// The live document of the current window
#[derive(Clone, Debug)]
pub struct WebPage {
    document: web_sys::Document,
}

impl WebPage {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    /// Run `f` once the DOM is parsed (immediately if it already is)
    pub fn on_ready(&self, f: impl FnOnce() + 'static) {
        if self.document.ready_state() != "loading" {
            f();
            return;
        }
        let mut pending = Some(f);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(f) = pending.take() {
                f();
            }
        });
        let _ = self
            .document
            .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref());
        callback.forget();
    }
}

impl Page for WebPage {
    type Node = WebNode;

    fn root(&self) -> Option<WebNode> {
        self.document.body().map(|body| WebNode(body.into()))
    }

    fn by_id(&self, id: &str) -> Option<WebNode> {
        self.document.get_element_by_id(id).map(WebNode)
    }

    fn create(&self, tag: &str) -> Option<WebNode> {
        self.document.create_element(tag).ok().map(WebNode)
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                log::error!("Navigation to {} failed: {:?}", url, err);
            }
        }
    }

    fn set_timeout(&self, delay_ms: u32, f: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }

    fn spawn(&self, task: Task) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
