//! Review Form
//!
//! `#review-form` submissions are caught by one delegated submit listener on
//! the page root, so forms injected after a round trip are handled without
//! rebinding. The server answers with either a redirect (login required) or
//! the re-rendered reviews region.

use std::rc::Rc;

use crate::app;
use crate::context::Ctx;
use crate::dom::{DefaultAction, Listen, Node, Page};
use crate::error::UiResult;
use crate::http::Transport;
use crate::models::ReviewReply;

pub const FORM: &str = "#review-form";
pub const REVIEWS_REGION: &str = ".reviews-section";
const BOUND_MARKER: &str = "data-review-bound";

/// What the server asked for
#[derive(Debug, Clone, PartialEq)]
enum ReviewOutcome {
    Navigate(String),
    Replace(String),
}

/// Install the delegated listener. Safe to call repeatedly; returns whether
/// a listener was attached by this call.
pub fn mount<P: Page, T: Transport>(ctx: &Ctx<P, T>) -> bool {
    let Some(root) = ctx.page.root() else {
        return false;
    };
    if root.attr(BOUND_MARKER).is_some() {
        return false;
    }
    root.set_attr(BOUND_MARKER, "true");

    let handler_ctx = Rc::clone(ctx);
    root.listen(
        Listen::Submit,
        Rc::new(move |target: P::Node| {
            let Some(form) = target.closest(FORM) else {
                return DefaultAction::Keep;
            };
            let ctx = Rc::clone(&handler_ctx);
            handler_ctx
                .page
                .spawn(Box::pin(async move { submit(&ctx, &form).await }));
            DefaultAction::Prevent
        }),
    );
    true
}

/// Post the review form and apply the server's answer
pub async fn submit<P: Page, T: Transport>(ctx: &Ctx<P, T>, form: &P::Node) {
    let Some(post) = ctx.form_post(form) else {
        log::warn!("{} is not a form element", FORM);
        return;
    };
    match send(ctx, post).await {
        Ok(ReviewOutcome::Navigate(url)) => {
            log::info!("Review requires navigation to {}", url);
            ctx.page.navigate(&url);
        }
        Ok(ReviewOutcome::Replace(html)) => replace_reviews(ctx, &html),
        Err(err) => ctx.report("Review submission", &err),
    }
}

async fn send<P: Page, T: Transport>(
    ctx: &Ctx<P, T>,
    post: crate::http::FormPost,
) -> UiResult<ReviewOutcome> {
    let reply = ctx.http.post_form(post).await?;
    if reply.redirected {
        return Ok(ReviewOutcome::Navigate(reply.url));
    }
    let data: ReviewReply = reply.json()?;
    Ok(ReviewOutcome::Replace(data.html))
}

/// Swap the reviews region and bring the new markup to life
fn replace_reviews<P: Page, T: Transport>(ctx: &Ctx<P, T>, html: &str) {
    let Some(region) = ctx.page.root().and_then(|root| root.select(REVIEWS_REGION)) else {
        log::debug!("No {} on this page", REVIEWS_REGION);
        return;
    };
    region.set_inner_html(html);
    app::mount_scope(ctx, &region);
}
