//! Star Rating Widget
//!
//! A row of `<i data-rating="n">` stars inside `#star-rating-container`,
//! mirrored into the `#id_rating` input. Mounting is idempotent: the click
//! listener is attached once per container element.

use std::rc::Rc;

use crate::dom::{DefaultAction, Listen, Node};
use crate::models::parse_rank;

pub const CONTAINER: &str = "#star-rating-container";
pub const INPUT: &str = "#id_rating";
const STAR: &str = "[data-rating]";
const BOUND_MARKER: &str = "data-rating-bound";

/// (class when filled, class when empty)
const STAR_CLASSES: [(&str, &str); 2] = [("bi-star-fill", "bi-star"), ("text-warning", "text-secondary")];

#[derive(Clone, Debug)]
pub struct RatingWidget<N: Node> {
    container: N,
    input: Option<N>,
}

impl<N: Node> RatingWidget<N> {
    /// Locate the widget inside `scope`
    pub fn find(scope: &N) -> Option<Self> {
        let container = scope.select(CONTAINER)?;
        let input = scope.select(INPUT);
        Some(Self { container, input })
    }

    pub fn stars(&self) -> Vec<N> {
        self.container.select_all(STAR)
    }

    /// Value of `data-initial-rating`, when numeric
    pub fn initial_rating(&self) -> Option<u32> {
        parse_rank(&self.container.attr("data-initial-rating")?)
    }

    /// Select `rank`: mirror it into the input and repaint every star
    pub fn apply(&self, rank: u32) {
        if let Some(input) = &self.input {
            input.set_value(&rank.to_string());
        }
        for star in self.stars() {
            let filled = star
                .attr("data-rating")
                .and_then(|r| parse_rank(&r))
                .is_some_and(|r| r <= rank);
            for (on, off) in STAR_CLASSES {
                star.toggle_class(on, filled);
                star.toggle_class(off, !filled);
            }
        }
    }

    fn on_click(&self, target: &N) {
        if self.input.is_none() {
            return;
        }
        let Some(star) = target.closest(STAR) else {
            return;
        };
        // ignore stars of a nested widget
        if star.closest(CONTAINER).as_ref() != Some(&self.container) {
            return;
        }
        match star.attr("data-rating").and_then(|r| parse_rank(&r)) {
            Some(rank) => self.apply(rank),
            None => log::debug!("Star without numeric data-rating clicked"),
        }
    }
}

/// Initialize the widget found in `scope` and make it clickable.
///
/// Returns `None` when the page has no rating widget in that scope.
pub fn mount<N: Node>(scope: &N) -> Option<RatingWidget<N>> {
    let widget = RatingWidget::find(scope)?;
    if let Some(rank) = widget.initial_rating() {
        widget.apply(rank);
    }

    if widget.container.attr(BOUND_MARKER).is_none() {
        widget.container.set_attr(BOUND_MARKER, "true");
        let handler = widget.clone();
        widget.container.listen(
            Listen::Click,
            Rc::new(move |target: N| {
                handler.on_click(&target);
                DefaultAction::Keep
            }),
        );
    }
    Some(widget)
}
