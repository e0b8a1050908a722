use super::LibraryController;
use crate::api::Transport;
use crate::domain::{AccountRole, BookId, ClientResult, LoanedBooks};
use crate::session::SessionStore;
use crate::view::ReturnPrompt;

impl<T: Transport, S: SessionStore> LibraryController<T, S> {
    /// Loans for the loaned-books page.
    ///
    /// `/user/loans` reports the caller's role; admins get a second call to
    /// `/admin/loans` and see that list instead of their own.
    pub async fn fetch_loaned_books(&self) -> ClientResult<LoanedBooks> {
        let token = self.token();
        let (role, own_loans) = self.client.user_loans(token.as_ref()).await?;
        let loans = match role {
            AccountRole::Admin => self.client.admin_loans(token.as_ref()).await?,
            AccountRole::Member(_) => own_loans,
        };
        Ok(LoanedBooks { role, loans })
    }

    /// Step one of a return: fetch the loan and build the confirmation
    pub async fn prepare_return(&self, id: BookId) -> ClientResult<ReturnPrompt> {
        let book = self.client.get_book(self.token().as_ref(), id).await?;
        ReturnPrompt::new(&book)
    }

    /// Step two: return the loan captured by `prompt`
    pub async fn perform_return(&self, prompt: &ReturnPrompt) -> ClientResult<()> {
        self.client.return_loan(self.token().as_ref(), prompt.loan_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{signed_in, transport};
    use crate::domain::{AccountRole, ClientError};
    use serde_json::json;

    #[tokio::test]
    async fn test_admin_sees_all_loans() {
        let ctl = signed_in();
        let t = transport(&ctl);
        t.respond(200, json!({ "account": "Admin", "loans": [{ "id": 1, "name": "Own", "loan_id": 1 }] }));
        t.respond(200, json!({ "loans": [
            { "id": 2, "name": "Theirs", "loan_id": 2, "user_id": 5 },
            { "id": 3, "name": "Others", "loan_id": 3, "user_id": 6 }
        ]}));

        let loaned = ctl.fetch_loaned_books().await.expect("fetch failed");

        assert_eq!(loaned.role, AccountRole::Admin);
        assert_eq!(t.calls(), ["GET /user/loans", "GET /admin/loans"]);
        let names: Vec<&str> = loaned.loans.iter().map(|l| l.book.name.as_str()).collect();
        assert_eq!(names, ["Theirs", "Others"]);
    }

    #[tokio::test]
    async fn test_member_sees_own_loans() {
        let ctl = signed_in();
        let t = transport(&ctl);
        t.respond(200, json!({ "account": "user", "loans": [{ "id": 1, "name": "Own", "loan_id": 4, "late": false }] }));

        let loaned = ctl.fetch_loaned_books().await.expect("fetch failed");

        assert_eq!(loaned.role, AccountRole::Member("user".into()));
        assert_eq!(t.calls(), ["GET /user/loans"]);
        assert_eq!(loaned.loans.len(), 1);
        assert_eq!(loaned.loans[0].loan_id(), Some(4));
    }

    #[tokio::test]
    async fn test_missing_account_field() {
        let ctl = signed_in();
        transport(&ctl).respond(200, json!({ "loans": [] }));
        assert_eq!(ctl.fetch_loaned_books().await.unwrap_err(), ClientError::MissingPayload("account"));
    }

    #[tokio::test]
    async fn test_two_step_return() {
        let ctl = signed_in();
        let t = transport(&ctl);
        t.respond(200, json!({ "book": {
            "id": 2, "name": "Emma", "author": "Jane Austen", "year_published": 1815,
            "loan_id": 7, "return_date": "2024-01-01"
        }}));
        t.respond(200, json!({ "message": "Book returned successfully." }));

        let prompt = ctl.prepare_return(2).await.expect("prepare failed");
        assert_eq!(prompt.due_line, "Must return before: 2024-01-01");

        ctl.perform_return(&prompt).await.expect("return failed");
        assert_eq!(t.calls(), ["GET /books/2", "POST /return/7"]);
    }
}
