//! Book Grid Component
//!
//! Renders the visible entries as cards. The whole grid is rebuilt
//! whenever the visible list changes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use library_core::view::render_cards;
use library_core::{BookCard, BookId, CardActions, ClientError};

use crate::commands;
use crate::context::{AppContext, Dialog};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BookGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let cards = move || {
        store.visible().with(|entries| render_cards(entries, ctx.page))
            .into_iter()
            .map(|card| view! { <BookCardView card=card /> })
            .collect_view()
    };

    view! {
        <div id="booksContainer" class="row row-cols-1 row-cols-sm-2 row-cols-md-3 g-3">
            {cards}
        </div>
    }
}

fn delete_book(id: BookId) {
    spawn_local(async move {
        let ctl = commands::controller();
        match ctl.delete_book(id, || commands::confirm("Are you sure you want to delete this book?")).await {
            Ok(()) => web_sys::console::log_1(&format!("[BOOKS] Deleted book {}", id).into()),
            Err(ClientError::Cancelled) => {}
            Err(e) => web_sys::console::error_1(&format!("[BOOKS] Failed to delete book {}: {}", id, e).into()),
        }
    });
}

#[component]
fn BookCardView(card: BookCard) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = card.book_id;

    let actions = match card.actions {
        CardActions::EditDelete => view! {
            <button type="button" class="btn btn-sm btn-outline-primary" on:click=move |_| ctx.open(Dialog::EditBook(id))>
                "Edit"
            </button>
            <button type="button" class="btn btn-sm btn-outline-danger" on:click=move |_| delete_book(id)>
                "Delete"
            </button>
        }.into_any(),
        CardActions::Return => view! {
            <button type="button" class="btn btn-sm btn-outline-danger" on:click=move |_| ctx.open(Dialog::ReturnBook(id))>
                "Return"
            </button>
        }.into_any(),
        CardActions::Loan => view! {
            <button type="button" class="btn btn-sm btn-outline-light" on:click=move |_| ctx.open(Dialog::LoanBook(id))>
                "Loan"
            </button>
        }.into_any(),
    };

    view! {
        <div class="col" data-book-id=id.to_string()>
            <div class="card shadow-sm">
                <img
                    src=card.image_src
                    alt=card.title.clone()
                    class="bd-placeholder-img card-img-top"
                    width="100%"
                    height="300"
                />
                <div class="card-body">
                    <h4 class="card-title">{card.title}</h4>
                    <h6>{card.author}</h6>
                    <small class="text-body-secondary">{card.year}</small>
                    <p class="card-text">{card.description}</p>
                    <p class=card.late_class>{card.late_text}</p>
                    {card.loaned_by.map(|user_id| view! { <p>"User ID: " {user_id}</p> })}
                    <div class="d-flex justify-content-between align-items-center">
                        <div class="btn-group">{actions}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
