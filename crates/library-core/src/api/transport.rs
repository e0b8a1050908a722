//! Transport Abstraction
//!
//! The client never touches the network directly. The browser crate sends
//! requests with `fetch`; tests replay canned responses.

use async_trait::async_trait;

use super::endpoint::Method;
use crate::domain::ClientResult;

/// One multipart field
#[derive(Debug, Clone, PartialEq)]
pub enum Part<F> {
    Text(String),
    File(F),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body<F> {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<(String, Part<F>)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest<F> {
    pub method: Method,
    pub url: String,
    /// Send browser cookies along (`credentials: include`)
    pub with_credentials: bool,
    /// Bearer token for the `Authorization` header
    pub bearer: Option<String>,
    pub body: Body<F>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back the raw response.
///
/// Non-2xx statuses are responses, not errors; only a request that never
/// completed is `Err`.
#[async_trait(?Send)]
pub trait Transport {
    /// File handle type for multipart uploads
    type File: Clone;

    async fn send(&self, request: HttpRequest<Self::File>) -> ClientResult<HttpResponse>;
}
