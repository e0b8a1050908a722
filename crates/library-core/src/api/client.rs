//! Typed API Client
//!
//! One method per server call. Bodies are built here, responses are
//! checked and decoded here; workflows only see domain types.

use serde::de::DeserializeOwned;

use super::endpoint::{Auth, Endpoint};
use super::transport::{Body, HttpRequest, HttpResponse, Transport};
use super::wire::{
    AdminLoansEnvelope, BookEnvelope, BooksEnvelope, CustomersEnvelope, LoginEnvelope,
    UserLoansEnvelope,
};
use crate::domain::{
    AccountRole, Book, BookId, ClientError, ClientResult, Customer, Loan, LoanId, UserId,
};
use crate::forms::{BookForm, FormFields, SignupForm};
use crate::session::SessionToken;

pub struct LibraryClient<T: Transport> {
    transport: T,
    origin: String,
}

impl<T: Transport> LibraryClient<T> {
    pub fn new(transport: T, origin: impl Into<String>) -> Self {
        Self {
            transport,
            origin: origin.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        token: Option<&SessionToken>,
        body: Body<T::File>,
    ) -> ClientResult<HttpResponse> {
        let auth = endpoint.auth();
        let request = HttpRequest {
            method: endpoint.method(),
            url: endpoint.url(&self.origin),
            with_credentials: auth.sends_credentials(),
            bearer: match auth {
                Auth::Bearer => token.map(|t| t.as_str().to_string()),
                _ => None,
            },
            body,
        };
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_response(response.status, &response.body))
        }
    }

    fn decode<R: DeserializeOwned>(response: &HttpResponse) -> ClientResult<R> {
        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    // ========================
    // Auth
    // ========================

    pub async fn login(&self, fields: &FormFields) -> ClientResult<SessionToken> {
        let body = serde_json::to_value(fields).map_err(|e| ClientError::Decode(e.to_string()))?;
        let response = self.send(Endpoint::Login, None, Body::Json(body)).await?;
        let envelope: LoginEnvelope = Self::decode(&response)?;
        envelope
            .access_token
            .map(SessionToken::new)
            .ok_or(ClientError::MissingPayload("access_token"))
    }

    pub async fn signup(&self, form: &SignupForm) -> ClientResult<()> {
        self.send(Endpoint::Signup, None, Body::Json(form.to_json())).await?;
        Ok(())
    }

    // ========================
    // Books
    // ========================

    pub async fn list_books(&self) -> ClientResult<Vec<Book>> {
        let response = self.send(Endpoint::Books, None, Body::Empty).await?;
        let envelope: BooksEnvelope = Self::decode(&response)?;
        envelope.books.ok_or(ClientError::MissingPayload("books"))
    }

    pub async fn get_book(&self, token: Option<&SessionToken>, id: BookId) -> ClientResult<Book> {
        let response = self.send(Endpoint::Book(id), token, Body::Empty).await?;
        let envelope: BookEnvelope = Self::decode(&response)?;
        envelope.book.ok_or(ClientError::MissingPayload("book"))
    }

    pub async fn add_book(
        &self,
        token: Option<&SessionToken>,
        form: &BookForm,
        image: Option<T::File>,
    ) -> ClientResult<()> {
        self.send(Endpoint::AddBook, token, Body::Multipart(form.to_parts(image)))
            .await?;
        Ok(())
    }

    pub async fn edit_book(
        &self,
        token: Option<&SessionToken>,
        id: BookId,
        form: &BookForm,
        image: Option<T::File>,
    ) -> ClientResult<()> {
        self.send(Endpoint::EditBook(id), token, Body::Multipart(form.to_parts(image)))
            .await?;
        Ok(())
    }

    pub async fn delete_book(&self, token: Option<&SessionToken>, id: BookId) -> ClientResult<()> {
        self.send(Endpoint::DeleteBook(id), token, Body::Empty).await?;
        Ok(())
    }

    // ========================
    // Loans
    // ========================

    pub async fn loan_book(&self, token: Option<&SessionToken>, id: BookId) -> ClientResult<()> {
        self.send(Endpoint::Loan(id), token, Body::Empty).await?;
        Ok(())
    }

    pub async fn return_loan(&self, token: Option<&SessionToken>, loan_id: LoanId) -> ClientResult<()> {
        self.send(Endpoint::Return(loan_id), token, Body::Empty).await?;
        Ok(())
    }

    /// Own loans plus the caller's role
    pub async fn user_loans(&self, token: Option<&SessionToken>) -> ClientResult<(AccountRole, Vec<Loan>)> {
        let response = self.send(Endpoint::UserLoans, token, Body::Empty).await?;
        let envelope: UserLoansEnvelope = Self::decode(&response)?;
        let account = envelope.account.ok_or(ClientError::MissingPayload("account"))?;
        let loans = envelope.loans.ok_or(ClientError::MissingPayload("loans"))?;
        Ok((AccountRole::parse(&account), loans))
    }

    pub async fn admin_loans(&self, token: Option<&SessionToken>) -> ClientResult<Vec<Loan>> {
        let response = self.send(Endpoint::AdminLoans, token, Body::Empty).await?;
        let envelope: AdminLoansEnvelope = Self::decode(&response)?;
        envelope.loans.ok_or(ClientError::MissingPayload("loans"))
    }

    // ========================
    // Customers
    // ========================

    pub async fn customers(&self, token: Option<&SessionToken>) -> ClientResult<Vec<Customer>> {
        let response = self.send(Endpoint::Customers, token, Body::Empty).await?;
        Self::decode::<CustomersEnvelope>(&response)
    }

    pub async fn delete_customer(&self, token: Option<&SessionToken>, id: UserId) -> ClientResult<()> {
        self.send(Endpoint::Customer(id), token, Body::Empty).await?;
        Ok(())
    }
}
