//! Runtime Configuration
//!
//! Defaults match the server templates. A page may override any field with
//! a JSON block:
//!
//! ```html
//! <script type="application/json" id="ui-config">{"toast_lifetime_ms": 5000}</script>
//! ```

use serde::Deserialize;

use crate::dom::{Node, Page};

/// Element id of the optional JSON config block
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id of the fixed element toasts are appended to
    pub toast_container_id: String,
    /// How long a toast stays fully visible
    pub toast_lifetime_ms: u32,
    /// Upper bound on the fade; the toast is removed even if no
    /// `transitionend` fires (e.g. reduced motion)
    pub toast_fade_grace_ms: u32,
    /// Form field holding the anti-forgery token
    pub csrf_field: String,
    /// Header the token is echoed in
    pub csrf_header: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toast_container_id: "toast-container".to_string(),
            toast_lifetime_ms: 3000,
            toast_fade_grace_ms: 600,
            csrf_field: "csrfmiddlewaretoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the page's config block, falling back to defaults
    pub fn from_page<P: Page>(page: &P) -> Self {
        let Some(block) = page.by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&block.text()) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }
        }
    }
}
