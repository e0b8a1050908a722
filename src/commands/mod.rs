//! Browser Bindings
//!
//! Fetch transport, localStorage session and window dialogs, plus the
//! controller wired to them.

mod dialog;
mod session;
mod transport;

use library_core::{LibraryClient, LibraryController};

use crate::config;

pub use dialog::*;
pub use session::LocalStorageSession;
pub use transport::FetchTransport;

/// Controller over the real browser transport and storage
pub type Controller = LibraryController<FetchTransport, LocalStorageSession>;

/// Build a controller for one action. Both halves are stateless handles,
/// so there is nothing to share between actions.
pub fn controller() -> Controller {
    LibraryController::new(
        LibraryClient::new(FetchTransport, config::SERVER_URL),
        LocalStorageSession,
    )
}
