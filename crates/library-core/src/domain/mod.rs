//! Domain Layer
//!
//! Client-side projections of the records the library server returns.
//! None of them are owned here; every view re-fetches.

mod account;
mod book;
mod customer;
mod error;
mod loan;

pub use account::AccountRole;
pub use book::{Availability, Book, BookId, LateFlag, LoanType, PublicationYear};
pub use customer::{Customer, UserId};
pub use error::{ClientError, ClientResult};
pub use loan::{Loan, LoanId, LoanedBooks};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing string field.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
