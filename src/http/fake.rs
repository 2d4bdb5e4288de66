//! Scripted Transport
//!
//! Replays queued replies in order and records every post it receives.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::{FormPost, Reply, Transport};
use crate::error::{UiError, UiResult};

#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<UiResult<Reply>>>>,
    sent: Rc<RefCell<Vec<FormPost>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 JSON reply
    pub fn json(&self, body: &str) -> &Self {
        self.push(Ok(Reply {
            status: 200,
            redirected: false,
            url: String::new(),
            body: body.to_string(),
        }))
    }

    /// Queue a reply that arrived after following a redirect to `url`
    pub fn redirect(&self, url: &str) -> &Self {
        self.push(Ok(Reply {
            status: 200,
            redirected: true,
            url: url.to_string(),
            body: "<html></html>".to_string(),
        }))
    }

    pub fn status(&self, status: u16) -> &Self {
        self.push(Ok(Reply {
            status,
            redirected: false,
            url: String::new(),
            body: String::new(),
        }))
    }

    pub fn offline(&self) -> &Self {
        self.push(Err(UiError::Transport("Failed to fetch".to_string())))
    }

    pub fn push(&self, reply: UiResult<Reply>) -> &Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn sent(&self) -> Vec<FormPost> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post_form(&self, post: FormPost) -> UiResult<Reply> {
        self.sent.borrow_mut().push(post);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(UiError::Transport("no scripted reply".to_string())))
    }
}
