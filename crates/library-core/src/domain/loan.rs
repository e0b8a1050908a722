//! Loan Entity
//!
//! A loan record joined with the book it covers, as listed by
//! `/user/loans` and `/admin/loans`.

use serde::{Deserialize, Serialize};

use super::account::AccountRole;
use super::book::Book;
use super::customer::UserId;

pub type LoanId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Borrower; only the admin listing includes it
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Book fields plus `loan_id`, `return_date` and `late`
    #[serde(flatten)]
    pub book: Book,
}

impl Loan {
    pub fn loan_id(&self) -> Option<LoanId> {
        self.book.loan_id
    }
}

/// Result of the loaned-books lookup after role branching
#[derive(Debug, Clone, PartialEq)]
pub struct LoanedBooks {
    /// Role reported by `/user/loans`
    pub role: AccountRole,
    /// Own loans for members, every loan for admins
    pub loans: Vec<Loan>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_admin_loan_row() {
        let loan: Loan = serde_json::from_value(json!({
            "loan_id": 3,
            "user_id": 12,
            "id": 5,
            "name": "Emma",
            "author": "Jane Austen",
            "year_published": 1815,
            "description": "Matchmaking",
            "image": "uploads/emma.jpg",
            "loan_date": "2024-01-01 10:00:00",
            "return_date": "2024-01-11 10:00:00",
            "late": false
        }))
        .unwrap();

        assert_eq!(loan.loan_id(), Some(3));
        assert_eq!(loan.user_id, Some(12));
        assert_eq!(loan.book.id, 5);
        assert_eq!(loan.book.return_date.as_deref(), Some("2024-01-11 10:00:00"));
        assert!(!loan.book.is_late());
    }
}
