use super::LibraryController;
use crate::api::Transport;
use crate::domain::{ClientError, ClientResult, Customer, UserId};
use crate::session::SessionStore;

impl<T: Transport, S: SessionStore> LibraryController<T, S> {
    /// Every registered user; admin only on the server side
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.client.customers(self.token().as_ref()).await
    }

    pub async fn delete_customer<C>(&self, id: UserId, confirm: C) -> ClientResult<()>
    where
        C: FnOnce() -> bool,
    {
        if !confirm() {
            return Err(ClientError::Cancelled);
        }
        self.client.delete_customer(self.token().as_ref(), id).await
    }
}
