use crate::domain::{Availability, Book, LateFlag};

/// Status facet picked from the filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facet {
    All,
    Available,
    Taken,
    /// Dropdown value `true`; see `LateFlag::is_text_true`
    Late,
    /// Any other value shows everything
    Unrecognized(String),
}

impl Facet {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Facet::All,
            "available" => Facet::Available,
            "taken" => Facet::Taken,
            "true" => Facet::Late,
            other => Facet::Unrecognized(other.to_string()),
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            Facet::All | Facet::Unrecognized(_) => true,
            Facet::Available => book.status == Some(Availability::Available),
            Facet::Taken => book.status == Some(Availability::Taken),
            Facet::Late => book.late.as_ref().is_some_and(LateFlag::is_text_true),
        }
    }
}

pub(super) fn matches_text(book: &Book, query: &str) -> bool {
    let query = query.to_lowercase();
    book.name.to_lowercase().contains(&query) || book.description.to_lowercase().contains(&query)
}
