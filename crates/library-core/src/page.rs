//! Page Detection
//!
//! The client is served as several HTML pages sharing one bundle; the
//! path decides what loads and which card actions appear.

use crate::view::CardActions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    /// Main catalog, requires a session
    Index,
    ManageBooks,
    LoanedBooks,
    Customers,
    /// Any other path; behaves like a public catalog
    Other,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        if path.contains("login.html") {
            Page::Login
        } else if path.contains("register.html") {
            Page::Register
        } else if path.contains("loaned_books.html") {
            Page::LoanedBooks
        } else if path.contains("customers.html") {
            Page::Customers
        } else if path.contains("manage_book.html") {
            Page::ManageBooks
        } else if path.contains("index.html") {
            Page::Index
        } else {
            Page::Other
        }
    }

    /// Relative link used for navigation
    pub fn href(&self) -> &'static str {
        match self {
            Page::Login => "./login.html",
            Page::Register => "./register.html",
            Page::Index | Page::Other => "./index.html",
            Page::ManageBooks => "./manage_book.html",
            Page::LoanedBooks => "./loaned_books.html",
            Page::Customers => "./customers.html",
        }
    }

    pub fn fetches_catalog(&self) -> bool {
        !matches!(self, Page::Login | Page::Register | Page::LoanedBooks | Page::Customers)
    }

    pub fn has_search(&self) -> bool {
        !matches!(self, Page::Login | Page::Register | Page::LoanedBooks)
    }

    /// Pages showing book cards (catalog or loans)
    pub fn has_listing(&self) -> bool {
        self.fetches_catalog() || *self == Page::LoanedBooks
    }

    pub fn requires_session(&self) -> bool {
        *self == Page::Index
    }

    pub fn card_actions(&self) -> CardActions {
        match self {
            Page::ManageBooks => CardActions::EditDelete,
            Page::LoanedBooks => CardActions::Return,
            _ => CardActions::Loan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/frontend/login.html"), Page::Login);
        assert_eq!(Page::from_path("/register.html"), Page::Register);
        assert_eq!(Page::from_path("/app/manage_book.html"), Page::ManageBooks);
        assert_eq!(Page::from_path("/loaned_books.html"), Page::LoanedBooks);
        assert_eq!(Page::from_path("/customers.html"), Page::Customers);
        assert_eq!(Page::from_path("/index.html"), Page::Index);
        assert_eq!(Page::from_path("/"), Page::Other);
    }

    #[test]
    fn test_catalog_pages() {
        assert!(Page::Index.fetches_catalog());
        assert!(Page::ManageBooks.fetches_catalog());
        assert!(Page::Other.fetches_catalog());
        assert!(!Page::LoanedBooks.fetches_catalog());
        assert!(!Page::Customers.fetches_catalog());
        assert!(Page::LoanedBooks.has_listing());
        assert!(!Page::Customers.has_listing());
    }

    #[test]
    fn test_only_index_is_guarded() {
        assert!(Page::Index.requires_session());
        assert!(!Page::ManageBooks.requires_session());
        assert!(!Page::Other.requires_session());
    }

    #[test]
    fn test_card_actions_by_page() {
        assert_eq!(Page::ManageBooks.card_actions(), CardActions::EditDelete);
        assert_eq!(Page::LoanedBooks.card_actions(), CardActions::Return);
        assert_eq!(Page::Index.card_actions(), CardActions::Loan);
    }
}
