//! Session Storage
//!
//! The bearer token is the only state that outlives a page load.

use std::cell::RefCell;

/// Opaque bearer token returned by `/login`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Durable token storage
pub trait SessionStore {
    fn token(&self) -> Option<SessionToken>;

    fn store(&self, token: &SessionToken);

    /// Drop every piece of persisted client state, not only the token
    fn clear(&self);
}

/// In-memory store for hosts without browser storage
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<SessionToken>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(SessionToken::new(token))),
        }
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<SessionToken> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &SessionToken) {
        *self.token.borrow_mut() = Some(token.clone());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
