//! Server API
//!
//! Endpoint table, transport abstraction and the typed client built on it.

mod client;
mod endpoint;
mod transport;
mod wire;

pub use client::LibraryClient;
pub use endpoint::{Auth, Endpoint, Method};
pub use transport::{Body, HttpRequest, HttpResponse, Part, Transport};
