//! Response envelopes
//!
//! Every payload field is optional so a missing one surfaces as
//! `ClientError::MissingPayload` instead of a decode error.

use serde::Deserialize;

use crate::domain::{Book, Customer, Loan};

#[derive(Debug, Deserialize)]
pub(crate) struct LoginEnvelope {
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BooksEnvelope {
    pub books: Option<Vec<Book>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookEnvelope {
    pub book: Option<Book>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserLoansEnvelope {
    pub account: Option<String>,
    pub loans: Option<Vec<Loan>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdminLoansEnvelope {
    pub loans: Option<Vec<Loan>>,
}

pub(crate) type CustomersEnvelope = Vec<Customer>;
