use leptos::prelude::*;

use crate::context::AppContext;

/// Modal shell shared by the book dialogs. Closing it drops the
/// requested dialog from the context.
#[component]
pub fn Modal(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    open: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div
            id=id
            class="modal"
            tabindex="-1"
            style:display=move || if open.get() { "block" } else { "none" }
        >
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button type="button" class="btn-close" aria-label="Close" on:click=move |_| ctx.close_dialog()></button>
                    </div>
                    {children()}
                </div>
            </div>
        </div>
    }
}
