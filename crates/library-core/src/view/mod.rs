//! View-Models
//!
//! Display-ready projections of books: listing cards and the loan/return
//! dialogs. Components render these verbatim.

mod card;
mod dialog;

pub use card::{render_cards, BookCard, CardActions, PLACEHOLDER_IMAGE, UPLOAD_ROOT};
pub use dialog::{LoanDialog, ReturnPrompt};
