//! Post-authentication redirect target, kept in session storage.

use crate::gate::traits::SessionStore;

pub const REDIRECT_KEY: &str = "redirectAfterSignIn";

/// Single-slot "where the user was going" record. Last write wins.
pub struct RedirectIntent;

impl RedirectIntent {
    pub fn record(store: &dyn SessionStore, target: &str) {
        tracing::debug!("Recording redirect intent: {}", target);
        store.set(REDIRECT_KEY, target);
    }

    pub fn peek(store: &dyn SessionStore) -> Option<String> {
        store.get(REDIRECT_KEY).filter(|t| !t.is_empty())
    }

    /// Read and clear the target.
    pub fn take(store: &dyn SessionStore) -> Option<String> {
        let target = Self::peek(store);
        store.remove(REDIRECT_KEY);
        target
    }
}
