//! Guard against stale list responses.
//!
//! Screens re-fetch after every mutation and never cancel in-flight
//! requests, so a slow earlier response can land after a newer one. Each
//! fetch takes a ticket; a response is applied only while its ticket is
//! still the latest.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default)]
pub struct SequenceGuard {
    latest: Arc<AtomicU64>,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, invalidating all earlier tickets.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether a response holding `ticket` may still be applied.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}

impl PartialEq for SequenceGuard {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.latest, &other.latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_invalidates_older() {
        let guard = SequenceGuard::new();
        let first = guard.begin();
        assert!(guard.is_current(first));

        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let guard = SequenceGuard::new();
        let clone = guard.clone();
        let ticket = guard.begin();
        assert!(clone.is_current(ticket));
        clone.begin();
        assert!(!guard.is_current(ticket));
    }
}
