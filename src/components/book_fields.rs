//! Book Form Fields
//!
//! Inputs shared by the add and edit dialogs, backed by one signal per
//! field and turned into a `BookForm` on submit.

use leptos::html::Input;
use leptos::prelude::*;

use library_core::{BookForm, LoanType};

#[derive(Clone, Copy)]
pub struct BookFields {
    name: RwSignal<String>,
    author: RwSignal<String>,
    year_published: RwSignal<String>,
    description: RwSignal<String>,
    loan_type: RwSignal<Option<LoanType>>,
}

impl BookFields {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            author: RwSignal::new(String::new()),
            year_published: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            loan_type: RwSignal::new(None),
        }
    }

    pub fn load(&self, form: BookForm) {
        self.name.set(form.name);
        self.author.set(form.author);
        self.year_published.set(form.year_published);
        self.description.set(form.description);
        self.loan_type.set(form.loan_type);
    }

    pub fn reset(&self) {
        self.load(BookForm::default());
    }

    pub fn to_form(&self) -> BookForm {
        BookForm {
            name: self.name.get_untracked(),
            author: self.author.get_untracked(),
            year_published: self.year_published.get_untracked(),
            description: self.description.get_untracked(),
            loan_type: self.loan_type.get_untracked(),
        }
    }
}

/// First file picked in `input`, if any
pub fn selected_file(input: NodeRef<Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

/// Clear a file input after a successful upload
pub fn clear_file(input: NodeRef<Input>) {
    if let Some(input) = input.get_untracked() {
        input.set_value("");
    }
}

/// Labelled inputs with ids `{prefix}Name`, `{prefix}Author` and so on
#[component]
pub fn BookFieldInputs(
    fields: BookFields,
    prefix: &'static str,
    image_ref: NodeRef<Input>,
) -> impl IntoView {
    let id = move |suffix: &str| format!("{}{}", prefix, suffix);

    view! {
        <div class="mb-3">
            <label for=id("Name") class="form-label">"Name"</label>
            <input type="text" class="form-control" id=id("Name") name="name" bind:value=fields.name />
        </div>
        <div class="mb-3">
            <label for=id("Author") class="form-label">"Author"</label>
            <input type="text" class="form-control" id=id("Author") name="author" bind:value=fields.author />
        </div>
        <div class="mb-3">
            <label for=id("Year") class="form-label">"Year Published"</label>
            <input type="number" class="form-control" id=id("Year") name="year_published" bind:value=fields.year_published />
        </div>
        <div class="mb-3">
            <label for=id("Description") class="form-label">"Description"</label>
            <textarea class="form-control" id=id("Description") name="description" bind:value=fields.description></textarea>
        </div>
        <div class="mb-3">
            <span class="form-label d-block">"Loan Type"</span>
            {LoanType::CHOICES.iter().map(|choice| {
                let choice = *choice;
                let radio_id = format!("{}LoanType{}", prefix, choice.code());
                view! {
                    <div class="form-check form-check-inline">
                        <input
                            class="form-check-input"
                            type="radio"
                            name="loan_type"
                            id=radio_id.clone()
                            value=choice.code().to_string()
                            prop:checked=move || fields.loan_type.get() == Some(choice)
                            on:change=move |_| fields.loan_type.set(Some(choice))
                        />
                        <label class="form-check-label" for=radio_id>{choice.max_duration()}</label>
                    </div>
                }
            }).collect_view()}
        </div>
        <div class="mb-3">
            <label for=id("Image") class="form-label">"Cover Image"</label>
            <input type="file" class="form-control" id=id("Image") name="image" accept="image/*" node_ref=image_ref />
        </div>
    }
}
