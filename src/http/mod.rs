//! Background Requests
//!
//! Form posts issued on behalf of intercepted submissions. The `Transport`
//! trait is the only way components reach the server.

pub mod web;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::{UiError, UiResult};

/// Header marking a request as programmatic rather than a navigation
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// `application/x-www-form-urlencoded` keeps `*-._` and alphanumerics
const FORM_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// An outgoing form post
#[derive(Debug, Clone, PartialEq)]
pub struct FormPost {
    pub url: String,
    pub fields: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl FormPost {
    pub fn new(url: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            url: url.into(),
            fields,
            headers: vec![(REQUESTED_WITH.0.to_string(), REQUESTED_WITH.1.to_string())],
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Encoded request body
    pub fn body(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn encode(s: &str) -> String {
    // Only a literal space can produce "%20"; a literal '%' becomes "%25"
    utf8_percent_encode(s, FORM_ENCODE).to_string().replace("%20", "+")
}

/// Response as seen after redirects were followed
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    /// True when the transport followed at least one redirect
    pub redirected: bool,
    /// Final URL after redirects
    pub url: String,
    pub body: String,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON, rejecting non-2xx statuses first
    pub fn json<T: DeserializeOwned>(&self) -> UiResult<T> {
        if !self.is_ok() {
            return Err(UiError::Status(self.status));
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP client used for background submissions
#[async_trait(?Send)]
pub trait Transport: 'static {
    async fn post_form(&self, post: FormPost) -> UiResult<Reply>;
}
