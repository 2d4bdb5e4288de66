//! Toast Notifications
//!
//! Bootstrap-styled alerts appended to a fixed container. Every toast owns
//! its timers. Close buttons are served by one click listener on the
//! container, bound the first time a toast is shown.

use std::rc::Rc;

use crate::config::Config;
use crate::dom::{DefaultAction, Listen, Node, Page};
use crate::models::Severity;

const TOAST: &str = ".toast";
const CLOSE: &str = ".btn-close";
const BOUND_MARKER: &str = "data-toast-bound";

/// Show `message` and schedule its dismissal.
///
/// Without the container the call is a logged no-op.
pub fn notify<P: Page>(page: &P, config: &Config, message: &str, severity: Severity) {
    let Some(container) = page.by_id(&config.toast_container_id) else {
        log::warn!("#{} missing, dropping toast: {}", config.toast_container_id, message);
        return;
    };
    let Some(toast) = build(page, message, severity) else {
        return;
    };
    bind_close(page, &container, config.toast_fade_grace_ms);
    container.append(&toast);

    let grace_ms = config.toast_fade_grace_ms;
    let page_for_timer = page.clone();
    page.set_timeout(
        config.toast_lifetime_ms,
        Box::new(move || dismiss(&page_for_timer, &toast, grace_ms)),
    );
}

/// One delegated click listener per container serves every close button
fn bind_close<P: Page>(page: &P, container: &P::Node, grace_ms: u32) {
    if container.attr(BOUND_MARKER).is_some() {
        return;
    }
    container.set_attr(BOUND_MARKER, "true");

    let page = page.clone();
    container.listen(
        Listen::Click,
        Rc::new(move |target: P::Node| {
            if let Some(toast) = target.closest(CLOSE).and_then(|close| close.closest(TOAST)) {
                dismiss(&page, &toast, grace_ms);
            }
            DefaultAction::Keep
        }),
    );
}

/// Start the fade; the element is removed when the transition ends, or
/// after `grace_ms` at the latest.
fn dismiss<P: Page>(page: &P, toast: &P::Node, grace_ms: u32) {
    if !toast.has_class("show") {
        return;
    }
    toast.toggle_class("show", false);

    let faded = toast.clone();
    toast.on_transition_end(Box::new(move || faded.remove()));
    let stuck = toast.clone();
    page.set_timeout(grace_ms, Box::new(move || stuck.remove()));
}

fn build<P: Page>(page: &P, message: &str, severity: Severity) -> Option<P::Node> {
    let toast = page.create("div")?;
    toast.set_attr(
        "class",
        &format!("toast align-items-center text-bg-{} border-0 show", severity.as_str()),
    );
    toast.set_attr("role", "alert");
    toast.set_attr("aria-live", "assertive");
    toast.set_attr("aria-atomic", "true");

    let row = page.create("div")?;
    row.set_attr("class", "d-flex");

    let body = page.create("div")?;
    body.set_attr("class", "toast-body");
    body.set_text(message);

    let close = page.create("button")?;
    close.set_attr("type", "button");
    close.set_attr("class", "btn-close btn-close-white me-2 m-auto");
    close.set_attr("data-bs-dismiss", "toast");
    close.set_attr("aria-label", "Close");

    row.append(&body);
    row.append(&close);
    toast.append(&row);
    Some(toast)
}
