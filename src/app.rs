//! Page Wiring
//!
//! Attaches every component to the server-rendered page. All mounts are
//! idempotent, so `mount_scope` can be re-run on any replaced subtree.

use crate::components::{rating, review_form, toggle_form};
use crate::context::Ctx;
use crate::dom::Page;
use crate::http::Transport;

/// Components found in a mounted scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mounted {
    pub rating: bool,
    pub toggle_forms: usize,
}

/// Mount everything on the whole page
pub fn mount<P: Page, T: Transport>(ctx: &Ctx<P, T>) -> Mounted {
    let Some(root) = ctx.page.root() else {
        log::warn!("Document has no body; nothing to mount");
        return Mounted::default();
    };
    let mounted = mount_scope(ctx, &root);
    review_form::mount(ctx);
    log::info!(
        "Mounted (rating widget: {}, toggle forms: {})",
        mounted.rating,
        mounted.toggle_forms
    );
    mounted
}

/// Mount the per-element components inside `scope`
pub fn mount_scope<P: Page, T: Transport>(ctx: &Ctx<P, T>, scope: &P::Node) -> Mounted {
    Mounted {
        rating: rating::mount(scope).is_some(),
        toggle_forms: toggle_form::mount(ctx, scope),
    }
}
