//! Book Entity
//!
//! A catalog entry as served by `/books` and `/books/:id`. The detail
//! endpoint adds loan fields when the caller (or, for admins, anyone)
//! holds a loan on the book.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use super::loan::LoanId;
use super::null_as_empty;

pub type BookId = u32;

/// Copy availability as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    Available,
    Taken,
    /// Any other status text, kept verbatim
    Other(String),
}

impl Availability {
    pub fn as_str(&self) -> &str {
        match self {
            Availability::Available => "available",
            Availability::Taken => "taken",
            Availability::Other(raw) => raw,
        }
    }
}

impl From<String> for Availability {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "available" => Availability::Available,
            "taken" => Availability::Taken,
            _ => Availability::Other(raw),
        }
    }
}

impl From<Availability> for String {
    fn from(status: Availability) -> Self {
        status.as_str().to_string()
    }
}

/// Loan category; decides how long a copy may be kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCode", into = "i64")]
pub enum LoanType {
    /// Code 1, ten days
    Standard,
    /// Code 2, five days
    Short,
    /// Code 3, two days
    Express,
    Unknown(i64),
}

impl LoanType {
    /// The selectable categories, in form order
    pub const CHOICES: [LoanType; 3] = [LoanType::Standard, LoanType::Short, LoanType::Express];

    pub fn from_code(code: i64) -> Self {
        match code {
            1 => LoanType::Standard,
            2 => LoanType::Short,
            3 => LoanType::Express,
            other => LoanType::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            LoanType::Standard => 1,
            LoanType::Short => 2,
            LoanType::Express => 3,
            LoanType::Unknown(code) => *code,
        }
    }

    /// Maximum loan duration shown in the loan dialog
    pub fn max_duration(&self) -> &'static str {
        match self {
            LoanType::Standard => "10 days",
            LoanType::Short => "5 days",
            LoanType::Express => "2 days",
            LoanType::Unknown(_) => "Unknown",
        }
    }
}

impl From<LoanType> for i64 {
    fn from(loan_type: LoanType) -> Self {
        loan_type.code()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCode {
    Int(i64),
    Text(String),
    Other(IgnoredAny),
}

/// Codes the form cannot produce (blank, non-numeric) become `Unknown(0)`
/// so one odd row never fails a whole listing.
impl From<RawCode> for LoanType {
    fn from(raw: RawCode) -> Self {
        match raw {
            RawCode::Int(code) => LoanType::from_code(code),
            RawCode::Text(text) => LoanType::from_code(text.trim().parse().unwrap_or(0)),
            RawCode::Other(_) => LoanType::Unknown(0),
        }
    }
}

/// `year_published` as stored. The column is numeric, but a blank year
/// from the add form is stored as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublicationYear {
    Number(i64),
    Text(String),
}

impl PublicationYear {
    pub fn label(&self) -> String {
        match self {
            PublicationYear::Number(year) => year.to_string(),
            PublicationYear::Text(text) => text.clone(),
        }
    }
}

/// The `late` field exactly as it arrived.
///
/// The server sends a boolean, but the facet filter historically matched
/// the text `"true"`, so both shapes are kept apart instead of coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LateFlag {
    Bool(bool),
    Text(String),
}

impl LateFlag {
    /// Truthiness used when rendering cards: `true`, or any non-empty text
    pub fn is_late(&self) -> bool {
        match self {
            LateFlag::Bool(late) => *late,
            LateFlag::Text(text) => !text.is_empty(),
        }
    }

    /// Match used by the `true` facet: only the literal text `"true"`
    pub fn is_text_true(&self) -> bool {
        matches!(self, LateFlag::Text(text) if text == "true")
    }
}

/// Book data structure (matches server JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default)]
    pub year_published: Option<PublicationYear>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Upload path relative to the server's static root
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<Availability>,
    #[serde(default, rename = "copyStatus")]
    pub copy_status: Option<Availability>,
    #[serde(default)]
    pub loan_type: Option<LoanType>,
    #[serde(default)]
    pub late: Option<LateFlag>,
    #[serde(default)]
    pub loan_id: Option<LoanId>,
    #[serde(default)]
    pub return_date: Option<String>,
}

impl Book {
    pub fn is_late(&self) -> bool {
        self.late.as_ref().is_some_and(LateFlag::is_late)
    }

    pub fn year_label(&self) -> String {
        self.year_published.as_ref().map(PublicationYear::label).unwrap_or_default()
    }

    pub fn status_label(&self) -> &str {
        self.status.as_ref().map(Availability::as_str).unwrap_or_default()
    }

    pub fn copy_status_label(&self) -> &str {
        self.copy_status.as_ref().map(Availability::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_book_deserialization() {
        let book: Book = serde_json::from_value(json!({
            "id": 4,
            "name": "Dune",
            "author": "Frank Herbert",
            "year_published": 1965,
            "description": null,
            "status": "available",
            "copyStatus": "taken",
            "image": null,
            "loan_type": 2
        }))
        .unwrap();

        assert_eq!(book.id, 4);
        assert_eq!(book.description, "");
        assert_eq!(book.status, Some(Availability::Available));
        assert_eq!(book.copy_status, Some(Availability::Taken));
        assert_eq!(book.loan_type, Some(LoanType::Short));
        assert!(book.image.is_none());
        assert!(!book.is_late());
    }

    #[test]
    fn test_detail_book_with_loan_fields() {
        let book: Book = serde_json::from_value(json!({
            "id": 1,
            "name": "Emma",
            "loan_type": "3",
            "loan_id": 7,
            "return_date": "2024-01-01",
            "late": true
        }))
        .unwrap();

        assert_eq!(book.loan_type, Some(LoanType::Express));
        assert_eq!(book.loan_id, Some(7));
        assert!(book.is_late());
    }

    #[test]
    fn test_loose_row_still_decodes() {
        let book: Book = serde_json::from_value(json!({
            "id": 2,
            "name": "Untitled",
            "year_published": "",
            "loan_type": "express"
        }))
        .unwrap();

        assert_eq!(book.year_label(), "");
        assert_eq!(book.loan_type, Some(LoanType::Unknown(0)));
        assert_eq!(book.loan_type.unwrap().max_duration(), "Unknown");

        let odd: Book = serde_json::from_value(json!({ "id": 3, "year_published": "1999", "loan_type": 1.5 })).unwrap();
        assert_eq!(odd.year_label(), "1999");
        assert_eq!(odd.loan_type, Some(LoanType::Unknown(0)));
    }

    #[test]
    fn test_loan_type_durations() {
        assert_eq!(LoanType::from_code(1).max_duration(), "10 days");
        assert_eq!(LoanType::from_code(2).max_duration(), "5 days");
        assert_eq!(LoanType::from_code(3).max_duration(), "2 days");
        assert_eq!(LoanType::from_code(9).max_duration(), "Unknown");
        assert_eq!(LoanType::Unknown(9).code(), 9);
    }

    #[test]
    fn test_late_flag_shapes() {
        assert!(LateFlag::Bool(true).is_late());
        assert!(!LateFlag::Bool(true).is_text_true());
        assert!(LateFlag::Text("true".into()).is_text_true());
        assert!(LateFlag::Text("false".into()).is_late());
        assert!(!LateFlag::Text(String::new()).is_late());
    }

    #[test]
    fn test_unrecognized_status_kept_verbatim() {
        let status = Availability::from("lost".to_string());
        assert_eq!(status.as_str(), "lost");
        assert_eq!(String::from(Availability::Taken), "taken");
    }
}
