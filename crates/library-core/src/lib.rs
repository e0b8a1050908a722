//! Library Client Core
//!
//! Everything the library web client does that does not need a browser:
//! wire models, the endpoint table, a typed API client over an abstract
//! transport, the user workflows, and the listing/filter/view-model logic.
//!
//! The browser crate supplies a `Transport` (fetch) and a `SessionStore`
//! (localStorage); tests supply in-memory ones.

pub mod api;
pub mod controller;
pub mod domain;
pub mod forms;
pub mod listing;
pub mod page;
pub mod sequence;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{Body, Endpoint, HttpRequest, HttpResponse, LibraryClient, Method, Part, Transport};
pub use controller::LibraryController;
pub use domain::{
    AccountRole, Availability, Book, BookId, ClientError, ClientResult, Customer, LateFlag, Loan,
    LoanId, LoanType, LoanedBooks, PublicationYear, UserId,
};
pub use forms::{BookForm, FormFields, SignupForm};
pub use listing::{Facet, ListingEntry, ListingSnapshot};
pub use page::Page;
pub use sequence::{RequestSequencer, Ticket};
pub use session::{MemorySession, SessionStore, SessionToken};
pub use view::{BookCard, CardActions, LoanDialog, ReturnPrompt};
