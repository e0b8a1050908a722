use library_core::Page;

/// `window.prompt`; `None` when dismissed
pub fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok().flatten()
}

/// `window.confirm`; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Full page navigation to another client page
pub fn navigate(page: Page) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(page.href()) {
            web_sys::console::error_1(&format!("[NAV] Failed to open {}: {:?}", page.href(), e).into());
        }
    }
}

pub fn current_page() -> Page {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Page::from_path(&path))
        .unwrap_or(Page::Other)
}
