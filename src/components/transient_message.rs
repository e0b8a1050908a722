//! Transient Error Message
//!
//! Inline error text that clears itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::MESSAGE_TIMEOUT_MS;

/// Current text plus a counter of how many messages were shown.
/// A clear only applies to the message it was scheduled for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageState {
    text: String,
    shown: u64,
}

impl MessageState {
    /// Replace the text, returning the ticket its clear must present
    pub fn show(&mut self, text: String) -> u64 {
        self.text = text;
        self.shown += 1;
        self.shown
    }

    /// Clear the text if no newer message replaced it
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.shown {
            return false;
        }
        self.text.clear();
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Clone, Copy)]
pub struct TransientMessage {
    state: RwSignal<MessageState>,
}

impl TransientMessage {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(MessageState::default()),
        }
    }

    pub fn show(&self, message: String) {
        let state = self.state;
        let mut ticket = 0;
        state.update(|s| ticket = s.show(message));
        spawn_local(async move {
            TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
            state.update(|s| {
                s.expire(ticket);
            });
        });
    }
}

/// The `errorMessage` element of the login and signup pages
#[component]
pub fn ErrorMessage(message: TransientMessage) -> impl IntoView {
    view! {
        <div id="errorMessage" class="text-danger mt-2">
            {move || message.state.with(|s| s.text().to_string())}
        </div>
    }
}
