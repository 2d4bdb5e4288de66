//! UI Components
//!
//! Behaviour attached to server-rendered markup.

pub mod rating;
pub mod review_form;
pub mod toast;
pub mod toggle_form;
