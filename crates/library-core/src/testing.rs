//! Test Transport
//!
//! Records every request and replays queued responses in order.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::api::{HttpRequest, HttpResponse, Transport};
use crate::domain::{ClientError, ClientResult};

#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<HttpResponse>>,
    requests: RefCell<Vec<HttpRequest<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response
    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.responses.borrow_mut().push_back(HttpResponse {
            status,
            body: body.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest<String>> {
        self.requests.borrow().clone()
    }

    /// `METHOD /path` for each request, origin stripped
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|req| {
                let path = req.url.splitn(4, '/').nth(3).unwrap_or_default();
                format!("{} /{}", req.method.as_str(), path)
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    /// Uploads are represented by their file name
    type File = String;

    async fn send(&self, request: HttpRequest<String>) -> ClientResult<HttpResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ClientError::Network("no canned response".to_string()))
    }
}
