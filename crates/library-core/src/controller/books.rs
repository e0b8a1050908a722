use super::LibraryController;
use crate::api::Transport;
use crate::domain::{BookId, ClientError, ClientResult};
use crate::forms::BookForm;
use crate::listing::ListingEntry;
use crate::session::SessionStore;
use crate::view::LoanDialog;

impl<T: Transport, S: SessionStore> LibraryController<T, S> {
    /// Full catalog for the listing pages
    pub async fn load_catalog(&self) -> ClientResult<Vec<ListingEntry>> {
        let books = self.client.list_books().await?;
        Ok(books.into_iter().map(ListingEntry::Catalog).collect())
    }

    /// Edit form pre-filled from the server's copy of the book
    pub async fn open_edit(&self, id: BookId) -> ClientResult<BookForm> {
        let book = self.client.get_book(self.token().as_ref(), id).await?;
        Ok(BookForm::from_book(&book))
    }

    pub async fn update_book(&self, id: BookId, form: &BookForm, image: Option<T::File>) -> ClientResult<()> {
        self.client.edit_book(self.token().as_ref(), id, form, image).await
    }

    pub async fn add_book(&self, form: &BookForm, image: Option<T::File>) -> ClientResult<()> {
        self.client.add_book(self.token().as_ref(), form, image).await
    }

    /// Delete after `confirm` agrees. The listing is not refreshed.
    pub async fn delete_book<C>(&self, id: BookId, confirm: C) -> ClientResult<()>
    where
        C: FnOnce() -> bool,
    {
        if !confirm() {
            return Err(ClientError::Cancelled);
        }
        self.client.delete_book(self.token().as_ref(), id).await
    }

    pub async fn view_details(&self, id: BookId) -> ClientResult<LoanDialog> {
        let book = self.client.get_book(self.token().as_ref(), id).await?;
        Ok(LoanDialog::new(id, &book))
    }

    /// Loan the book `dialog` was opened for
    pub async fn loan_book(&self, dialog: &LoanDialog) -> ClientResult<()> {
        self.client.loan_book(self.token().as_ref(), dialog.book_id).await
    }
}
