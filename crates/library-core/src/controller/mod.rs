//! Library Controller
//!
//! The user-facing workflows. Each one maps a UI action to one or two
//! server calls and returns what the page should show next; the caller
//! owns the DOM side.
//!
//! Workflows are split by area:
//! - `auth`: login, signup, logout, route guard
//! - `books`: catalog, edit/add/delete, detail and loan
//! - `loans`: role-branched loan listing, two-step return
//! - `customers`: admin user list

mod auth;
mod books;
mod customers;
mod loans;

use crate::api::{LibraryClient, Transport};
use crate::session::{SessionStore, SessionToken};

pub struct LibraryController<T: Transport, S: SessionStore> {
    client: LibraryClient<T>,
    session: S,
}

impl<T: Transport, S: SessionStore> LibraryController<T, S> {
    pub fn new(client: LibraryClient<T>, session: S) -> Self {
        Self { client, session }
    }

    pub fn client(&self) -> &LibraryClient<T> {
        &self.client
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    fn token(&self) -> Option<SessionToken> {
        self.session.token()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::LibraryController;
    use crate::api::LibraryClient;
    use crate::session::MemorySession;
    use crate::testing::MockTransport;

    pub type TestController = LibraryController<MockTransport, MemorySession>;

    pub fn controller(session: MemorySession) -> TestController {
        LibraryController::new(LibraryClient::new(MockTransport::new(), "http://127.0.0.1:8000"), session)
    }

    pub fn signed_in() -> TestController {
        controller(MemorySession::with_token("abc123"))
    }

    pub fn transport(controller: &TestController) -> &MockTransport {
        controller.client().transport()
    }
}
