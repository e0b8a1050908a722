use web_sys::Storage;

use library_core::{SessionStore, SessionToken};

use crate::config::TOKEN_KEY;

/// Token kept in `localStorage`, so it survives reloads and is shared by
/// every page of the client
pub struct LocalStorageSession;

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<SessionToken> {
        storage()?
            .get_item(TOKEN_KEY)
            .ok()?
            .filter(|token| !token.is_empty())
            .map(SessionToken::new)
    }

    fn store(&self, token: &SessionToken) {
        let saved = storage().map(|s| s.set_item(TOKEN_KEY, token.as_str()));
        if !matches!(saved, Some(Ok(()))) {
            web_sys::console::error_1(&"[SESSION] Could not persist token".into());
        }
    }

    fn clear(&self) {
        let cleared = storage().map(|s| s.clear());
        if !matches!(cleared, Some(Ok(()))) {
            web_sys::console::error_1(&"[SESSION] Could not clear storage".into());
        }
    }
}
