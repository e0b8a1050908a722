//! Navigation Bar
//!
//! Page links, logout, and the search box and status dropdown that filter
//! the listing.

use leptos::prelude::*;

use library_core::{Facet, Page};

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_show_facet, store_show_text_matches, use_app_store};

const NAV_LINKS: &[(Page, &str)] = &[
    (Page::Index, "Books"),
    (Page::ManageBooks, "Manage Books"),
    (Page::LoanedBooks, "Loaned Books"),
    (Page::Customers, "Customers"),
];

/// Status dropdown entries: (`data-value`, label)
const FACET_OPTIONS: &[(&str, &str)] = &[
    ("all", "All"),
    ("available", "Available"),
    ("taken", "Taken"),
    ("true", "Late"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (menu_open, set_menu_open) = signal(false);

    let logout = move |_| {
        let next = commands::controller().logout();
        web_sys::console::log_1(&"[AUTH] Logged out".into());
        commands::navigate(next);
    };

    let facet_menu = ctx.page.has_listing().then(|| view! {
        <div class="dropdown">
            <button
                class="btn btn-outline-light dropdown-toggle"
                type="button"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "Filter"
            </button>
            <ul class="dropdown-menu" class:show=move || menu_open.get()>
                {FACET_OPTIONS.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <li>
                            <a
                                class="dropdown-item"
                                href="#"
                                data-value=value
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    set_menu_open.set(false);
                                    store_show_facet(&store, &Facet::parse(value));
                                }
                            >
                                {*label}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    });

    let search_box = ctx.page.has_search().then(|| view! {
        <input
            id="searchInput"
            class="form-control me-2"
            type="search"
            placeholder="Search books..."
            on:input=move |ev| store_show_text_matches(&store, &event_target_value(&ev))
        />
    });

    view! {
        <header class="navbar navbar-expand bg-dark" data-bs-theme="dark">
            <nav class="container-fluid">
                <a class="navbar-brand" href=Page::Index.href()>"Library"</a>
                <ul class="navbar-nav me-auto">
                    {NAV_LINKS.iter().map(|(page, label)| {
                        let page = *page;
                        view! {
                            <li class="nav-item">
                                <a class="nav-link" class:active=move || ctx.page == page href=page.href()>
                                    {*label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
                {search_box}
                {facet_menu}
                <button class="btn btn-outline-light ms-2" on:click=logout>"Logout"</button>
            </nav>
        </header>
    }
}
