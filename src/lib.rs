//! Dine UI
//!
//! Interactivity for the server-rendered restaurant pages: star ratings,
//! background review and bookmark/visited submissions, toast notifications.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod dom;
pub mod error;
pub mod http;
pub mod models;

use wasm_bindgen::prelude::*;

use config::Config;
use dom::web::WebPage;
use models::Severity;

/// Module entry point: wire the page once the DOM is parsed
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(page) = WebPage::current() else {
        return;
    };
    let ready_page = page.clone();
    page.on_ready(move || {
        if console_logger::init(log::LevelFilter::Info).is_err() {
            log::warn!("A logger was already installed");
        }
        let config = configure(&ready_page);
        let ctx = context::AppContext::new(ready_page, http::web::FetchTransport, config);
        app::mount(&ctx);
    });
}

/// Read the page's `#ui-config` and apply its log level. Call after the
/// logger is installed so config warnings reach the console.
pub fn configure<P: dom::Page>(page: &P) -> Config {
    let config = Config::from_page(page);
    console_logger::set_level(console_logger::parse_level(&config.log_level));
    config
}

/// Show a toast from page scripts: `notify("Saved", "success")`.
/// Unknown or missing severities render as `danger`.
#[wasm_bindgen]
pub fn notify(message: &str, severity: Option<String>) {
    let Some(page) = WebPage::current() else {
        return;
    };
    let severity = match severity.as_deref().map(str::parse::<Severity>) {
        Some(Ok(severity)) => severity,
        Some(Err(err)) => {
            log::warn!("{}, using danger", err);
            Severity::Danger
        }
        None => Severity::default(),
    };
    let config = Config::from_page(&page);
    components::toast::notify(&page, &config, message, severity);
}
