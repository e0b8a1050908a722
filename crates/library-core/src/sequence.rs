//! Request Sequencing
//!
//! Requests on one channel (the listing, the open dialog) may resolve out
//! of order. Each request takes a ticket; only the newest ticket may apply
//! its response.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared ticket counter for one channel; clones share the counter
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes every earlier ticket
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Run `request` under a fresh ticket; `None` if a newer request
    /// started before this one finished.
    pub async fn latest_only<F: Future>(&self, request: F) -> Option<F::Output> {
        let ticket = self.issue();
        let output = request.await;
        self.is_current(ticket).then_some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.is_current(first));
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_clones_share_counter() {
        let seq = RequestSequencer::new();
        let ticket = seq.issue();
        seq.clone().issue();
        assert!(!seq.is_current(ticket));
    }

    #[tokio::test]
    async fn test_stale_response_dropped() {
        let seq = RequestSequencer::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<u32>();

        let slow = seq.latest_only(async move { rx.await.unwrap_or(0) });
        let fast_seq = seq.clone();
        let fast = async move {
            tokio::task::yield_now().await;
            let output = fast_seq.latest_only(async { 2 }).await;
            let _ = tx.send(1);
            output
        };

        let (slow_out, fast_out) = tokio::join!(slow, fast);
        assert_eq!(slow_out, None);
        assert_eq!(fast_out, Some(2));
    }
}
