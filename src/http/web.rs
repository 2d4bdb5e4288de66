//! Fetch Transport
//!
//! `Transport` over `window.fetch`. Redirects are followed by the browser;
//! the final URL and `redirected` flag are reported back.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::{FormPost, Reply, Transport};
use crate::error::{UiError, UiResult};

#[derive(Clone, Debug, Default)]
pub struct FetchTransport;

fn js_err(err: JsValue) -> UiError {
    UiError::Transport(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_form(&self, post: FormPost) -> UiResult<Reply> {
        let headers = Headers::new().map_err(js_err)?;
        headers
            .set("Content-Type", "application/x-www-form-urlencoded;charset=UTF-8")
            .map_err(js_err)?;
        for (name, value) in &post.headers {
            headers.set(name, value).map_err(js_err)?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&post.body()));

        let request = Request::new_with_str_and_init(&post.url, &init).map_err(js_err)?;
        let window = web_sys::window().ok_or_else(|| UiError::Transport("no window".into()))?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;

        let body = JsFuture::from(response.text().map_err(js_err)?)
            .await
            .map_err(js_err)?
            .as_string()
            .unwrap_or_default();

        log::debug!("POST {} -> {}", post.url, response.status());

        Ok(Reply {
            status: response.status(),
            redirected: response.redirected(),
            url: response.url(),
            body,
        })
    }
}
