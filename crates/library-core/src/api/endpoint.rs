//! Endpoint Table
//!
//! Method, path and credential policy for every server call.

use crate::domain::{BookId, LoanId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// How a request proves who is calling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    None,
    /// Browser cookies only
    Credentials,
    /// Cookies plus `Authorization: Bearer <token>`
    Bearer,
}

impl Auth {
    pub fn sends_credentials(&self) -> bool {
        !matches!(self, Auth::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Signup,
    Books,
    Book(BookId),
    AddBook,
    EditBook(BookId),
    DeleteBook(BookId),
    Loan(BookId),
    Return(LoanId),
    UserLoans,
    AdminLoans,
    Customers,
    Customer(UserId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Books
            | Endpoint::Book(_)
            | Endpoint::UserLoans
            | Endpoint::AdminLoans
            | Endpoint::Customers => Method::Get,
            Endpoint::Login
            | Endpoint::Signup
            | Endpoint::AddBook
            | Endpoint::Loan(_)
            | Endpoint::Return(_) => Method::Post,
            Endpoint::EditBook(_) => Method::Put,
            Endpoint::DeleteBook(_) | Endpoint::Customer(_) => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/login".to_string(),
            Endpoint::Signup => "/signup".to_string(),
            Endpoint::Books => "/books".to_string(),
            Endpoint::Book(id) => format!("/books/{}", id),
            Endpoint::AddBook => "/books/add".to_string(),
            Endpoint::EditBook(id) => format!("/books/edit/{}", id),
            Endpoint::DeleteBook(id) => format!("/books/delete/{}", id),
            Endpoint::Loan(id) => format!("/loan/{}", id),
            Endpoint::Return(loan_id) => format!("/return/{}", loan_id),
            Endpoint::UserLoans => "/user/loans".to_string(),
            Endpoint::AdminLoans => "/admin/loans".to_string(),
            Endpoint::Customers => "/customers".to_string(),
            Endpoint::Customer(id) => format!("/customers/{}", id),
        }
    }

    pub fn auth(&self) -> Auth {
        match self {
            Endpoint::Signup => Auth::None,
            Endpoint::Login | Endpoint::Books => Auth::Credentials,
            _ => Auth::Bearer,
        }
    }

    pub fn url(&self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_methods() {
        assert_eq!(Endpoint::EditBook(3).path(), "/books/edit/3");
        assert_eq!(Endpoint::EditBook(3).method(), Method::Put);
        assert_eq!(Endpoint::DeleteBook(3).method(), Method::Delete);
        assert_eq!(Endpoint::Return(7).path(), "/return/7");
        assert_eq!(Endpoint::Return(7).method(), Method::Post);
        assert_eq!(Endpoint::AdminLoans.method(), Method::Get);
    }

    #[test]
    fn test_auth_policy() {
        assert_eq!(Endpoint::Signup.auth(), Auth::None);
        assert_eq!(Endpoint::Books.auth(), Auth::Credentials);
        assert_eq!(Endpoint::Login.auth(), Auth::Credentials);
        assert_eq!(Endpoint::Loan(1).auth(), Auth::Bearer);
        assert!(!Auth::None.sends_credentials());
    }

    #[test]
    fn test_url_joins_origin() {
        assert_eq!(Endpoint::Books.url("http://127.0.0.1:8000/"), "http://127.0.0.1:8000/books");
        assert_eq!(Endpoint::Book(2).url("http://127.0.0.1:8000"), "http://127.0.0.1:8000/books/2");
    }
}
