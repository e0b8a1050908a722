//! Form View-Models
//!
//! Typed counterparts of the login, signup and book forms. The UI keeps
//! these in signals and they are serialized only when a request is built.

use std::collections::BTreeMap;

use crate::api::Part;
use crate::domain::{Book, ClientError, ClientResult, LoanType};

/// Flat field-name to value map, sent as a JSON object
pub type FormFields = BTreeMap<String, String>;

/// Signup payload, with the admin password when one was requested
#[derive(Debug, Clone, PartialEq)]
pub struct SignupForm {
    fields: FormFields,
    admin_pass: Option<String>,
}

impl SignupForm {
    /// Build the payload. An `admin` account type asks `prompt_admin_password`
    /// for the admin password; dismissing the prompt cancels the signup.
    pub fn prepare<P>(fields: FormFields, prompt_admin_password: P) -> ClientResult<Self>
    where
        P: FnOnce() -> Option<String>,
    {
        let admin_pass = if fields.get("account").map(String::as_str) == Some("admin") {
            Some(prompt_admin_password().ok_or(ClientError::Cancelled)?)
        } else {
            None
        };
        Ok(Self { fields, admin_pass })
    }

    pub fn to_json(&self) -> serde_json::Value {
        let mut object: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
            .collect();
        if let Some(pass) = &self.admin_pass {
            object.insert("admin_pass".to_string(), serde_json::Value::String(pass.clone()));
        }
        serde_json::Value::Object(object)
    }
}

/// Add/edit book form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub name: String,
    pub author: String,
    /// Kept as typed; the server parses it
    pub year_published: String,
    pub description: String,
    /// Radio selection; `None` when nothing is checked
    pub loan_type: Option<LoanType>,
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            author: book.author.clone(),
            year_published: book.year_label(),
            description: book.description.clone(),
            loan_type: book.loan_type,
        }
    }

    /// Multipart fields; `image` is appended only when a file was picked
    pub fn to_parts<F>(&self, image: Option<F>) -> Vec<(String, Part<F>)> {
        let mut parts = vec![
            ("name".to_string(), Part::Text(self.name.clone())),
            ("author".to_string(), Part::Text(self.author.clone())),
            ("year_published".to_string(), Part::Text(self.year_published.clone())),
            ("description".to_string(), Part::Text(self.description.clone())),
        ];
        if let Some(loan_type) = self.loan_type {
            parts.push(("loan_type".to_string(), Part::Text(loan_type.code().to_string())));
        }
        if let Some(file) = image {
            parts.push(("image".to_string(), Part::File(file)));
        }
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_member_signup_skips_prompt() {
        let form = SignupForm::prepare(fields(&[("email", "a@x.io"), ("account", "user")]), || {
            panic!("prompt must not be shown")
        })
        .unwrap();
        assert_eq!(form.to_json(), json!({ "email": "a@x.io", "account": "user" }));
    }

    #[test]
    fn test_admin_signup_attaches_password() {
        let form = SignupForm::prepare(fields(&[("account", "admin")]), || Some("secret".into())).unwrap();
        assert_eq!(form.to_json()["admin_pass"], "secret");
    }

    #[test]
    fn test_admin_signup_cancelled() {
        let result = SignupForm::prepare(fields(&[("account", "admin")]), || None);
        assert_eq!(result, Err(ClientError::Cancelled));
    }

    #[test]
    fn test_book_form_parts_order() {
        let form = BookForm {
            name: "Emma".into(),
            author: "Jane Austen".into(),
            year_published: "1815".into(),
            description: "Matchmaking".into(),
            loan_type: Some(LoanType::Short),
        };
        let parts = form.to_parts::<()>(None);
        let names: Vec<&str> = parts.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["name", "author", "year_published", "description", "loan_type"]);
        assert_eq!(parts[4].1, Part::Text("2".into()));
    }
}
