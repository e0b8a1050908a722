//! Listing Snapshot
//!
//! The entries currently shown on a listing page. A fetch replaces the
//! whole snapshot; filters derive new vectors from it and never touch it.

mod filter;

pub use filter::Facet;

use std::sync::Arc;

use crate::domain::{Book, BookId, Loan, LoanId, UserId};

/// One listed entry: a catalog book or a loan row
#[derive(Debug, Clone, PartialEq)]
pub enum ListingEntry {
    Catalog(Book),
    Loaned(Loan),
}

impl ListingEntry {
    pub fn book(&self) -> &Book {
        match self {
            ListingEntry::Catalog(book) => book,
            ListingEntry::Loaned(loan) => &loan.book,
        }
    }

    pub fn book_id(&self) -> BookId {
        self.book().id
    }

    pub fn loan_id(&self) -> Option<LoanId> {
        self.book().loan_id
    }

    /// Borrower, shown on admin loan cards
    pub fn loaned_by(&self) -> Option<UserId> {
        match self {
            ListingEntry::Loaned(loan) => loan.user_id.filter(|id| *id != 0),
            ListingEntry::Catalog(_) => None,
        }
    }
}

impl From<Book> for ListingEntry {
    fn from(book: Book) -> Self {
        ListingEntry::Catalog(book)
    }
}

impl From<Loan> for ListingEntry {
    fn from(loan: Loan) -> Self {
        ListingEntry::Loaned(loan)
    }
}

/// Immutable, cheaply cloned list of entries from the latest fetch
#[derive(Debug, Clone, Default)]
pub struct ListingSnapshot {
    generation: u64,
    entries: Arc<[ListingEntry]>,
}

impl ListingSnapshot {
    /// Successor snapshot holding `entries`; `self` is left as it was
    pub fn replace<I, E>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ListingEntry>,
    {
        Self {
            generation: self.generation + 1,
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of fetches that produced this snapshot
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn entries(&self) -> &[ListingEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring match on name or description
    pub fn filter_text(&self, query: &str) -> Vec<ListingEntry> {
        self.entries
            .iter()
            .filter(|entry| filter::matches_text(entry.book(), query))
            .cloned()
            .collect()
    }

    pub fn filter_facet(&self, facet: &Facet) -> Vec<ListingEntry> {
        self.entries
            .iter()
            .filter(|entry| facet.matches(entry.book()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Availability, LateFlag};
    use serde_json::json;

    fn make_book(id: BookId, name: &str, description: &str, status: &str) -> Book {
        serde_json::from_value(json!({
            "id": id,
            "name": name,
            "description": description,
            "status": status,
        }))
        .unwrap()
    }

    fn sample() -> ListingSnapshot {
        ListingSnapshot::default().replace(vec![
            make_book(1, "Dune", "Desert planet politics", "available"),
            make_book(2, "Emma", "A comedy of MANNERS", "taken"),
            make_book(3, "Beloved", "Haunting of a family", "available"),
        ])
    }

    #[test]
    fn test_replace_bumps_generation() {
        let first = sample();
        let second = first.replace(Vec::<Book>::new());
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        assert_eq!(first.len(), 3);
        assert!(second.is_empty());
    }

    #[test]
    fn test_text_filter_is_exact_subset() {
        let snapshot = sample();
        for query in ["", "e", "MAN", "planet", "haunt", "zzz", "DUNE"] {
            let filtered = snapshot.filter_text(query);
            let lower = query.to_lowercase();
            let expected: Vec<ListingEntry> = snapshot
                .entries()
                .iter()
                .filter(|e| {
                    e.book().name.to_lowercase().contains(&lower)
                        || e.book().description.to_lowercase().contains(&lower)
                })
                .cloned()
                .collect();
            assert_eq!(filtered, expected, "query {:?}", query);
        }
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.filter_text("manners")[0].book_id(), 2);
    }

    #[test]
    fn test_facet_filter() {
        let snapshot = sample();
        let available = snapshot.filter_facet(&Facet::parse("available"));
        assert_eq!(available.iter().map(ListingEntry::book_id).collect::<Vec<_>>(), [1, 3]);
        assert!(available.iter().all(|e| e.book().status == Some(Availability::Available)));

        let taken = snapshot.filter_facet(&Facet::parse("taken"));
        assert_eq!(taken.len(), 1);

        assert_eq!(snapshot.filter_facet(&Facet::parse("all")).len(), 3);
        assert_eq!(snapshot.filter_facet(&Facet::parse("bogus")), snapshot.entries().to_vec());
    }

    #[test]
    fn test_late_facet_matches_text_only() {
        let mut boolean_late = make_book(1, "A", "", "taken");
        boolean_late.late = Some(LateFlag::Bool(true));
        let mut text_late = make_book(2, "B", "", "taken");
        text_late.late = Some(LateFlag::Text("true".into()));

        let snapshot = ListingSnapshot::default().replace(vec![boolean_late, text_late]);
        let late = snapshot.filter_facet(&Facet::parse("true"));
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].book_id(), 2);
    }

    #[test]
    fn test_loaned_by_only_for_loan_rows() {
        let loan: Loan = serde_json::from_value(json!({ "id": 1, "name": "A", "user_id": 4 })).unwrap();
        assert_eq!(ListingEntry::from(loan).loaned_by(), Some(4));
        assert_eq!(ListingEntry::from(make_book(1, "A", "", "taken")).loaned_by(), None);
    }
}
