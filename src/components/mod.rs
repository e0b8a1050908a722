//! UI Components
//!
//! Reusable Leptos components.

mod auth_forms;
mod book_fields;
mod book_grid;
mod book_modals;
mod customers_table;
mod loan_modals;
mod modal;
mod nav_bar;
mod transient_message;

pub use auth_forms::{LoginForm, SignupForm};
pub use book_grid::BookGrid;
pub use book_modals::{AddBookModal, EditBookModal};
pub use customers_table::CustomersTable;
pub use loan_modals::{LoanModal, ReturnModal};
pub use nav_bar::NavBar;
