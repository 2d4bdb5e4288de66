//! Application Context
//!
//! Page, transport and config handed to every component. Shared with event
//! handlers through `Rc`.

use std::rc::Rc;

use crate::components::toast;
use crate::config::Config;
use crate::dom::{Node, Page};
use crate::error::UiError;
use crate::http::{FormPost, Transport};
use crate::models::Severity;

pub struct AppContext<P: Page, T: Transport> {
    pub page: P,
    pub http: T,
    pub config: Config,
}

/// Shared handle captured by listeners
pub type Ctx<P, T> = Rc<AppContext<P, T>>;

impl<P: Page, T: Transport> AppContext<P, T> {
    pub fn new(page: P, http: T, config: Config) -> Ctx<P, T> {
        Rc::new(Self { page, http, config })
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        toast::notify(&self.page, &self.config, message, severity);
    }

    /// Log a failed submission and tell the user
    pub fn report(&self, what: &str, err: &UiError) {
        match err {
            UiError::Rejected(_) => log::warn!("{} failed: {}", what, err),
            _ => log::error!("{} failed: {}", what, err),
        }
        self.notify(err.user_message(), err.severity());
    }

    /// Background post of `form`'s fields to its action, with the
    /// anti-forgery token echoed in a header when the form carries one
    pub fn form_post(&self, form: &P::Node) -> Option<FormPost> {
        let action = form.form_action()?;
        let fields = form.form_fields();
        let mut post = FormPost::new(action, fields);
        if let Some(token) = post.field(&self.config.csrf_field).map(str::to_string) {
            post = post.header(&self.config.csrf_header, &token);
        }
        Some(post)
    }
}
