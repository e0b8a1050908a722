use serde::{Deserialize, Serialize};

use super::account::AccountRole;
use super::null_as_empty;

pub type UserId = u32;

/// Registered user as listed on the admin customers page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub account: String,
}

impl Customer {
    pub fn role(&self) -> AccountRole {
        AccountRole::parse(&self.account)
    }
}
