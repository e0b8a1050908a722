//! Loan & Return Dialogs

use leptos::prelude::*;
use leptos::task::spawn_local;

use library_core::{LoanDialog, ReturnPrompt};

use crate::commands;
use crate::components::modal::Modal;
use crate::context::{AppContext, Dialog};

/// Read-only details with a loan button; the server's refusal stays
/// visible in `loanError` until the dialog is opened again
#[component]
pub fn LoanModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (details, set_details) = signal::<Option<LoanDialog>>(None);
    let (loan_error, set_loan_error) = signal(String::new());

    Effect::new(move |_| {
        let Some(Dialog::LoanBook(id)) = ctx.dialog.get() else {
            set_details.set(None);
            return;
        };
        let requests = ctx.detail_requests();
        spawn_local(async move {
            let ctl = commands::controller();
            match requests.latest_only(ctl.view_details(id)).await {
                Some(Ok(dialog)) => {
                    set_loan_error.set(String::new());
                    set_details.set(Some(dialog));
                }
                Some(Err(e)) => {
                    web_sys::console::error_1(&format!("[LOAN] Could not load book {}: {}", id, e).into());
                    ctx.close_dialog();
                }
                None => {}
            }
        });
    });

    let confirm_loan = move |_| {
        let Some(dialog) = details.get_untracked() else { return };
        spawn_local(async move {
            match commands::controller().loan_book(&dialog).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[LOAN] Loaned book {}", dialog.book_id).into());
                    ctx.close_dialog();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LOAN] Failed to loan book {}: {}", dialog.book_id, e).into());
                    set_loan_error.set(e.user_message());
                }
            }
        });
    };

    view! {
        <Modal id="loanBookModal" title="Loan Book" open=Signal::derive(move || details.with(Option::is_some))>
            <div class="modal-body">
                {move || details.get().map(|d| view! {
                    <h5 id="loanBookName">{d.name}</h5>
                    <p id="loanBookDescription">{d.description}</p>
                    <p id="loanBookAuthor">{d.author_line}</p>
                    <p id="loanBookYear">{d.year_line}</p>
                    <p id="loanBookLoanType">{d.duration_line}</p>
                    <p id="loanBookStatus">{d.status_line}</p>
                    <p id="loanBookcopyStatus">{d.copy_line}</p>
                })}
                <p id="loanError" class="text-danger">{move || loan_error.get()}</p>
            </div>
            <div class="modal-footer">
                <button type="button" class="btn btn-primary" on:click=confirm_loan>"Loan"</button>
            </div>
        </Modal>
    }
}

/// Two-step return: the dialog shows the due date, the button returns
/// the loan fetched with it and refreshes the loan listing
#[component]
pub fn ReturnModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (prompt, set_prompt) = signal::<Option<ReturnPrompt>>(None);

    Effect::new(move |_| {
        let Some(Dialog::ReturnBook(id)) = ctx.dialog.get() else {
            set_prompt.set(None);
            return;
        };
        let requests = ctx.detail_requests();
        spawn_local(async move {
            let ctl = commands::controller();
            match requests.latest_only(ctl.prepare_return(id)).await {
                Some(Ok(loaded)) => set_prompt.set(Some(loaded)),
                Some(Err(e)) => {
                    web_sys::console::error_1(&format!("[RETURN] Could not load loan for book {}: {}", id, e).into());
                    ctx.close_dialog();
                }
                None => {}
            }
        });
    });

    let confirm_return = move |_| {
        let Some(loaded) = prompt.get_untracked() else { return };
        spawn_local(async move {
            match commands::controller().perform_return(&loaded).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[RETURN] Returned loan {}", loaded.loan_id).into());
                    ctx.close_dialog();
                    ctx.reload();
                }
                Err(e) => web_sys::console::error_1(&format!("[RETURN] Failed to return loan {}: {}", loaded.loan_id, e).into()),
            }
        });
    };

    view! {
        <Modal id="returnBookModal" title="Return Book" open=Signal::derive(move || prompt.with(Option::is_some))>
            <div class="modal-body">
                {move || prompt.get().map(|p| view! {
                    <h5 id="returnBookName">{p.name}</h5>
                    <p id="returnBookDescription">{p.description}</p>
                    <p id="returnBookAuthor">{p.author_line}</p>
                    <p id="returnBookYear">{p.year_line}</p>
                    <p id="returnBookReturnDate">{p.due_line}</p>
                })}
            </div>
            <div class="modal-footer">
                <button type="button" id="returnBookButton" class="btn btn-danger" on:click=confirm_return>"Return"</button>
            </div>
        </Modal>
    }
}
