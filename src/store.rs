//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use library_core::{Customer, Facet, ListingEntry, ListingSnapshot};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Entries from the latest listing fetch; filters read from here
    pub listing: ListingSnapshot,
    /// Entries currently rendered as cards
    pub visible: Vec<ListingEntry>,
    /// Registered users, customers page only
    pub customers: Vec<Customer>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Swap in a freshly fetched listing and render all of it
pub fn store_replace_listing<I>(store: &AppStore, entries: I) -> ListingSnapshot
where
    I: IntoIterator<Item = ListingEntry>,
{
    let next = store.listing().with_untracked(|current| current.replace(entries));
    *store.visible().write() = next.entries().to_vec();
    *store.listing().write() = next.clone();
    next
}

/// Render the entries whose name or description contains `query`
pub fn store_show_text_matches(store: &AppStore, query: &str) {
    let matches = store.listing().with_untracked(|listing| listing.filter_text(query));
    *store.visible().write() = matches;
}

/// Render the entries matching a status facet
pub fn store_show_facet(store: &AppStore, facet: &Facet) {
    let matches = store.listing().with_untracked(|listing| listing.filter_facet(facet));
    *store.visible().write() = matches;
}

pub fn store_set_customers(store: &AppStore, customers: Vec<Customer>) {
    *store.customers().write() = customers;
}
