//! Edit & Add Book Dialogs
//!
//! Both live on the manage-books page and share `BookFieldInputs`.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use library_core::BookId;

use crate::commands;
use crate::components::book_fields::{clear_file, selected_file, BookFieldInputs, BookFields};
use crate::components::modal::Modal;
use crate::context::{AppContext, Dialog};

#[component]
pub fn EditBookModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let fields = BookFields::new();
    let image_ref = NodeRef::<Input>::new();
    // Book whose data is loaded into the form; None keeps the modal hidden
    let (editing, set_editing) = signal::<Option<BookId>>(None);

    Effect::new(move |_| {
        let Some(Dialog::EditBook(id)) = ctx.dialog.get() else {
            set_editing.set(None);
            return;
        };
        let requests = ctx.detail_requests();
        spawn_local(async move {
            let ctl = commands::controller();
            match requests.latest_only(ctl.open_edit(id)).await {
                Some(Ok(form)) => {
                    fields.load(form);
                    clear_file(image_ref);
                    set_editing.set(Some(id));
                }
                Some(Err(e)) => {
                    web_sys::console::error_1(&format!("[BOOKS] Could not load book {} for editing: {}", id, e).into());
                    ctx.close_dialog();
                }
                None => {}
            }
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = editing.get_untracked() else { return };
        let form = fields.to_form();
        let image = selected_file(image_ref);

        spawn_local(async move {
            match commands::controller().update_book(id, &form, image).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[BOOKS] Updated book {}", id).into());
                    ctx.close_dialog();
                }
                Err(e) => web_sys::console::error_1(&format!("[BOOKS] Failed to update book {}: {}", id, e).into()),
            }
        });
    };

    view! {
        <Modal id="editBookModal" title="Edit Book" open=Signal::derive(move || editing.get().is_some())>
            <form id="editBookForm" on:submit=submit>
                <div class="modal-body">
                    <BookFieldInputs fields=fields prefix="editBook" image_ref=image_ref />
                </div>
                <div class="modal-footer">
                    <button type="submit" class="btn btn-primary">"Save Changes"</button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn AddBookModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let fields = BookFields::new();
    let image_ref = NodeRef::<Input>::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = fields.to_form();
        let image = selected_file(image_ref);

        spawn_local(async move {
            match commands::controller().add_book(&form, image).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[BOOKS] Added {}", form.name).into());
                    fields.reset();
                    clear_file(image_ref);
                    ctx.close_dialog();
                }
                Err(e) => web_sys::console::error_1(&format!("[BOOKS] Failed to add book: {}", e).into()),
            }
        });
    };

    view! {
        <button type="button" class="btn btn-success my-3" on:click=move |_| ctx.open(Dialog::AddBook)>
            "Add Book"
        </button>
        <Modal id="addBookModal" title="Add Book" open=Signal::derive(move || ctx.dialog.get() == Some(Dialog::AddBook))>
            <form id="addBookForm" on:submit=submit>
                <div class="modal-body">
                    <BookFieldInputs fields=fields prefix="addBook" image_ref=image_ref />
                </div>
                <div class="modal-footer">
                    <button type="submit" class="btn btn-primary">"Add Book"</button>
                </div>
            </form>
        </Modal>
    }
}
