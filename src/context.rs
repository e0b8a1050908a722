//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use library_core::{BookId, Page, RequestSequencer};

/// Which modal the user asked for. Each variant carries the book it was
/// opened for, so the confirm button always acts on that book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    AddBook,
    EditBook(BookId),
    LoanBook(BookId),
    ReturnBook(BookId),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page detected from the location path at startup
    pub page: Page,
    /// Trigger to refetch the listing - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the listing - write
    set_reload_trigger: WriteSignal<u32>,
    /// Requested modal - read
    pub dialog: ReadSignal<Option<Dialog>>,
    /// Requested modal - write
    set_dialog: WriteSignal<Option<Dialog>>,
    /// Tickets for listing fetches
    listing_requests: StoredValue<RequestSequencer>,
    /// Tickets for detail fetches behind the modals
    detail_requests: StoredValue<RequestSequencer>,
}

impl AppContext {
    pub fn new(
        page: Page,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        dialog: (ReadSignal<Option<Dialog>>, WriteSignal<Option<Dialog>>),
    ) -> Self {
        Self {
            page,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            dialog: dialog.0,
            set_dialog: dialog.1,
            listing_requests: StoredValue::new(RequestSequencer::new()),
            detail_requests: StoredValue::new(RequestSequencer::new()),
        }
    }

    /// Trigger a refetch of the listing
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn open(&self, dialog: Dialog) {
        self.set_dialog.set(Some(dialog));
    }

    pub fn close_dialog(&self) {
        self.set_dialog.set(None);
    }

    pub fn listing_requests(&self) -> RequestSequencer {
        self.listing_requests.get_value()
    }

    pub fn detail_requests(&self) -> RequestSequencer {
        self.detail_requests.get_value()
    }
}
