//! Account Role
//!
//! Parsed from the free-text `account` column the server reports.

/// Role of the signed-in account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountRole {
    Admin,
    /// Any non-admin account type, kept verbatim
    Member(String),
}

impl AccountRole {
    /// Case-insensitive: "Admin", "ADMIN" and "admin" are all admins
    pub fn parse(account: &str) -> Self {
        if account.eq_ignore_ascii_case("admin") {
            AccountRole::Admin
        } else {
            AccountRole::Member(account.to_string())
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, AccountRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_any_case() {
        assert!(AccountRole::parse("Admin").is_admin());
        assert!(AccountRole::parse("ADMIN").is_admin());
        assert_eq!(AccountRole::parse("user"), AccountRole::Member("user".into()));
        assert!(!AccountRole::parse("administrator").is_admin());
    }
}
