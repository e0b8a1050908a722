//! Book Cards

use crate::domain::{BookId, LoanId, UserId};
use crate::listing::ListingEntry;
use crate::page::Page;

/// Shown when a book has no uploaded cover
pub const PLACEHOLDER_IMAGE: &str = "../backend/uploads/placeholder-image.jpg";

/// Prefix for server-relative upload paths
pub const UPLOAD_ROOT: &str = "../backend/";

/// Buttons a card offers, decided by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActions {
    EditDelete,
    Return,
    Loan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookCard {
    pub book_id: BookId,
    pub loan_id: Option<LoanId>,
    pub title: String,
    pub author: String,
    pub year: String,
    pub description: String,
    pub image_src: String,
    pub late_class: &'static str,
    pub late_text: &'static str,
    pub loaned_by: Option<UserId>,
    pub actions: CardActions,
}

impl BookCard {
    pub fn build(entry: &ListingEntry, actions: CardActions) -> Self {
        let book = entry.book();
        let late = book.is_late();
        let image_src = match book.image.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", UPLOAD_ROOT, path),
            _ => PLACEHOLDER_IMAGE.to_string(),
        };

        Self {
            book_id: book.id,
            loan_id: entry.loan_id(),
            title: book.name.clone(),
            author: book.author.clone(),
            year: book.year_label(),
            description: book.description.clone(),
            image_src,
            late_class: if late { "text-danger" } else { "" },
            late_text: if late { "Late for Return" } else { "" },
            loaned_by: entry.loaned_by(),
            actions,
        }
    }
}

/// One card per entry, in listing order
pub fn render_cards(entries: &[ListingEntry], page: Page) -> Vec<BookCard> {
    let actions = page.card_actions();
    entries.iter().map(|entry| BookCard::build(entry, actions)).collect()
}
