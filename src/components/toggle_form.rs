//! Toggle Forms
//!
//! Bookmark and "visited" buttons are small POST forms. Their submissions
//! are sent in the background and the server's boolean is painted onto the
//! buttons. State is never predicted locally: a failed request changes
//! nothing.

use std::rc::Rc;

use crate::context::Ctx;
use crate::dom::{DefaultAction, Listen, Node, Page};
use crate::error::{UiError, UiResult};
use crate::http::{FormPost, Transport};
use crate::models::{Interaction, ToggleReply};

/// Forms handled by this component
pub const TOGGLE_FORMS: [&str; 2] = [r#"form[action*="toggle"]"#, "form[data-interaction]"];
pub const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;
/// Shared by every form acting on the same entity
pub const RESOURCE_ID: &str = "data-resource-id";
const BOUND_MARKER: &str = "data-toggle-bound";

const BOOKMARK_LABELS: (&str, &str) = ("Bookmarked", "Bookmark");
const VISITED_LABELS: (&str, &str) = ("Visited", "Mark as Visited");

#[derive(Debug, Clone, PartialEq)]
enum ToggleOutcome {
    Navigate(String),
    Applied(bool),
}

/// What `form` toggles: `data-interaction` wins over the action URL
pub fn interaction_of<N: Node>(form: &N) -> Option<Interaction> {
    if let Some(declared) = form.attr("data-interaction") {
        match declared.parse() {
            Ok(kind) => return Some(kind),
            Err(err) => log::warn!("Ignoring data-interaction: {}", err),
        }
    }
    Interaction::from_action(&form.attr("action")?)
}

/// Bind every toggle form in `scope` that is not bound yet. Forms whose kind
/// cannot be determined keep their native submission.
///
/// Returns the number of forms bound by this call.
pub fn mount<P: Page, T: Transport>(ctx: &Ctx<P, T>, scope: &P::Node) -> usize {
    let mut bound = 0;
    for selector in TOGGLE_FORMS {
        for form in scope.select_all(selector) {
            if form.attr(BOUND_MARKER).is_some() {
                continue;
            }
            if interaction_of(&form).is_none() {
                log::debug!("Leaving {:?} to native submission", form.attr("action"));
                continue;
            }
            form.set_attr(BOUND_MARKER, "true");

            let handler_ctx = Rc::clone(ctx);
            let target_form = form.clone();
            form.listen(
                Listen::Submit,
                Rc::new(move |_: P::Node| {
                    let ctx = Rc::clone(&handler_ctx);
                    let form = target_form.clone();
                    handler_ctx
                        .page
                        .spawn(Box::pin(async move { submit(&ctx, &form).await }));
                    DefaultAction::Prevent
                }),
            );
            bound += 1;
        }
    }
    bound
}

/// Send one toggle and mirror the reported state
pub async fn submit<P: Page, T: Transport>(ctx: &Ctx<P, T>, form: &P::Node) {
    let Some(kind) = interaction_of(form) else {
        return;
    };
    let Some(post) = ctx.form_post(form) else {
        return;
    };
    let trigger = form.select(SUBMIT_BUTTON);

    match send(ctx, post, kind).await {
        Ok(ToggleOutcome::Navigate(url)) => ctx.page.navigate(&url),
        Ok(ToggleOutcome::Applied(state)) => match kind {
            Interaction::Bookmark => {
                for button in synced_bookmark_buttons(ctx, form) {
                    paint_bookmark(&button, state);
                }
            }
            Interaction::Visited => {
                if let Some(button) = &trigger {
                    paint_visited(button, state);
                }
            }
        },
        Err(err) => ctx.report(&format!("Toggle {}", kind.as_str()), &err),
    }
}

async fn send<P: Page, T: Transport>(
    ctx: &Ctx<P, T>,
    post: FormPost,
    kind: Interaction,
) -> UiResult<ToggleOutcome> {
    let reply = ctx.http.post_form(post).await?;
    if reply.redirected {
        return Ok(ToggleOutcome::Navigate(reply.url));
    }
    let data: ToggleReply = reply.json()?;
    if !data.is_success() {
        return Err(UiError::Rejected(data.status));
    }
    let state = match kind {
        Interaction::Bookmark => data.is_bookmarked,
        Interaction::Visited => data.is_visited,
    };
    state
        .map(ToggleOutcome::Applied)
        .ok_or_else(|| UiError::Decode(format!("reply has no is_{} flag", flag_name(kind))))
}

fn flag_name(kind: Interaction) -> &'static str {
    match kind {
        Interaction::Bookmark => "bookmarked",
        Interaction::Visited => "visited",
    }
}

/// Submit buttons of `form` and of every other bookmark form on the page
/// for the same resource
fn synced_bookmark_buttons<P: Page, T: Transport>(ctx: &Ctx<P, T>, form: &P::Node) -> Vec<P::Node> {
    let mut buttons: Vec<P::Node> = form.select_all(SUBMIT_BUTTON);
    let (Some(id), Some(root)) = (form.attr(RESOURCE_ID), ctx.page.root()) else {
        return buttons;
    };
    let twins = root
        .select_all(&format!("form[{}]", RESOURCE_ID))
        .into_iter()
        .filter(|other| other.attr(RESOURCE_ID).as_deref() == Some(id.as_str()))
        .filter(|other| interaction_of(other) == Some(Interaction::Bookmark));
    for twin in twins {
        for button in twin.select_all(SUBMIT_BUTTON) {
            if !buttons.contains(&button) {
                buttons.push(button);
            }
        }
    }
    buttons
}

fn paint_bookmark<N: Node>(button: &N, on: bool) {
    match button.select("i") {
        Some(icon) => {
            icon.toggle_class("bi-bookmark-fill", on);
            icon.toggle_class("bi-bookmark", !on);
            icon.toggle_class("text-primary", on);
            icon.toggle_class("text-secondary", !on);
        }
        None => {
            button.set_text(if on { BOOKMARK_LABELS.0 } else { BOOKMARK_LABELS.1 });
            button.toggle_class("btn-primary", on);
            button.toggle_class("btn-outline-primary", !on);
        }
    }
    button.set_attr("aria-pressed", if on { "true" } else { "false" });
}

fn paint_visited<N: Node>(button: &N, on: bool) {
    button.set_text(if on { VISITED_LABELS.0 } else { VISITED_LABELS.1 });
    button.toggle_class("btn-success", on);
    button.toggle_class("btn-outline-secondary", !on);
    button.set_attr("aria-pressed", if on { "true" } else { "false" });
}
