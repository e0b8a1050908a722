//! Library Frontend App
//!
//! Every page of the client loads this bundle; the location path decides
//! which page renders and what it fetches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use library_core::{ClientResult, ListingEntry, Page};

use crate::commands;
use crate::components::{
    AddBookModal, BookGrid, CustomersTable, EditBookModal, LoanModal, LoginForm, NavBar,
    ReturnModal, SignupForm,
};
use crate::context::{AppContext, Dialog};
use crate::store::{store_replace_listing, AppState};

/// Catalog for catalog pages, role-branched loans for the loaned-books page
async fn fetch_listing(page: Page) -> ClientResult<Vec<ListingEntry>> {
    let ctl = commands::controller();
    if page.fetches_catalog() {
        ctl.load_catalog().await
    } else {
        let loaned = ctl.fetch_loaned_books().await?;
        web_sys::console::log_1(&format!("[LOANS] Listing loans as {:?}", loaned.role).into());
        Ok(loaned.loans.into_iter().map(ListingEntry::from).collect())
    }
}

#[component]
pub fn App() -> impl IntoView {
    let page = commands::current_page();
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (dialog, set_dialog) = signal::<Option<Dialog>>(None);

    let ctx = AppContext::new(page, (reload_trigger, set_reload_trigger), (dialog, set_dialog));
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    if let Some(target) = commands::controller().guard(page) {
        web_sys::console::log_1(&"[APP] No session, redirecting to login".into());
        commands::navigate(target);
    }

    // Load the listing on mount and whenever a reload is triggered
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        if !page.has_listing() {
            return;
        }
        web_sys::console::log_1(&format!("[APP] Loading {:?} listing, trigger={}", page, trigger).into());
        let requests = ctx.listing_requests();
        spawn_local(async move {
            match requests.latest_only(fetch_listing(page)).await {
                Some(Ok(entries)) => {
                    let snapshot = store_replace_listing(&store, entries);
                    if snapshot.is_empty() {
                        web_sys::console::log_1(&"[APP] Listing is empty".into());
                    } else {
                        web_sys::console::log_1(
                            &format!("[APP] Loaded {} entries (fetch #{})", snapshot.len(), snapshot.generation()).into(),
                        );
                    }
                }
                Some(Err(e)) => web_sys::console::error_1(&format!("[APP] Failed to load listing: {}", e).into()),
                None => web_sys::console::log_1(&"[APP] Dropped stale listing response".into()),
            }
        });
    });

    match page {
        Page::Login => view! { <LoginForm /> }.into_any(),
        Page::Register => view! { <SignupForm /> }.into_any(),
        Page::Customers => view! {
            <NavBar />
            <CustomersTable />
        }.into_any(),
        Page::ManageBooks => view! {
            <NavBar />
            <main class="container">
                <AddBookModal />
                <BookGrid />
            </main>
            <EditBookModal />
        }.into_any(),
        Page::LoanedBooks => view! {
            <NavBar />
            <main class="container my-3">
                <BookGrid />
            </main>
            <ReturnModal />
        }.into_any(),
        Page::Index | Page::Other => view! {
            <NavBar />
            <main class="container my-3">
                <BookGrid />
            </main>
            <LoanModal />
        }.into_any(),
    }
}
