//! Dialog View-Models
//!
//! Each dialog carries the id it was opened for, so the confirm action
//! acts on that book even if another dialog was opened meanwhile.

use crate::domain::{Book, BookId, ClientError, ClientResult, LoanId, LoanType};

/// Read-only book details shown before loaning
#[derive(Debug, Clone, PartialEq)]
pub struct LoanDialog {
    pub book_id: BookId,
    pub name: String,
    pub description: String,
    pub author_line: String,
    pub year_line: String,
    pub duration_line: String,
    pub status_line: String,
    pub copy_line: String,
}

impl LoanDialog {
    pub fn new(book_id: BookId, book: &Book) -> Self {
        let duration = book
            .loan_type
            .map(|loan_type| loan_type.max_duration())
            .unwrap_or_else(|| LoanType::Unknown(0).max_duration());

        Self {
            book_id,
            name: book.name.clone(),
            description: book.description.clone(),
            author_line: format!("Author: {}", book.author),
            year_line: format!("Year Published: {}", book.year_label()),
            duration_line: format!("Maximum Loan Duration: {}", duration),
            status_line: format!("Original: {}", book.status_label()),
            copy_line: format!("Copy: {}", book.copy_status_label()),
        }
    }
}

/// Return confirmation; holds the loan id the confirm button acts on
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnPrompt {
    pub book_id: BookId,
    pub loan_id: LoanId,
    pub name: String,
    pub description: String,
    pub author_line: String,
    pub year_line: String,
    pub due_line: String,
}

impl ReturnPrompt {
    /// Fails when the book carries no loan for the caller
    pub fn new(book: &Book) -> ClientResult<Self> {
        let loan_id = book.loan_id.ok_or(ClientError::MissingPayload("loan_id"))?;
        Ok(Self {
            book_id: book.id,
            loan_id,
            name: book.name.clone(),
            description: book.description.clone(),
            author_line: format!("Author: {}", book.author),
            year_line: format!("Year Published: {}", book.year_label()),
            due_line: format!("Must return before: {}", book.return_date.as_deref().unwrap_or_default()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book(value: serde_json::Value) -> Book {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_loan_dialog_lines() {
        let dialog = LoanDialog::new(
            4,
            &book(json!({
                "id": 4, "name": "Dune", "author": "Frank Herbert", "year_published": 1965,
                "loan_type": 1, "status": "available", "copyStatus": "taken"
            })),
        );
        assert_eq!(dialog.author_line, "Author: Frank Herbert");
        assert_eq!(dialog.year_line, "Year Published: 1965");
        assert_eq!(dialog.duration_line, "Maximum Loan Duration: 10 days");
        assert_eq!(dialog.status_line, "Original: available");
        assert_eq!(dialog.copy_line, "Copy: taken");
    }

    #[test]
    fn test_unknown_loan_type() {
        let dialog = LoanDialog::new(4, &book(json!({ "id": 4, "loan_type": 7 })));
        assert_eq!(dialog.duration_line, "Maximum Loan Duration: Unknown");
        let missing = LoanDialog::new(4, &book(json!({ "id": 4 })));
        assert_eq!(missing.duration_line, "Maximum Loan Duration: Unknown");
    }

    #[test]
    fn test_return_prompt_requires_loan() {
        let prompt = ReturnPrompt::new(&book(json!({ "id": 2, "loan_id": 7, "return_date": "2024-01-01" }))).unwrap();
        assert_eq!(prompt.loan_id, 7);
        assert_eq!(prompt.due_line, "Must return before: 2024-01-01");

        let err = ReturnPrompt::new(&book(json!({ "id": 2 }))).unwrap_err();
        assert_eq!(err, ClientError::MissingPayload("loan_id"));
    }
}
