//! In-memory order state: which order ids have been observed.
//!
//! Idempotent set semantics — saving the same id twice is a no-op, and both
//! operations are total over any string id, including the empty string.

use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct OrderStore {
    ids: RwLock<HashSet<String>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an order id. Repeated saves leave observable state unchanged.
    pub fn save(&self, id: impl Into<String>) {
        self.ids
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.into());
    }

    /// Whether the id has been recorded by any prior save.
    pub fn exists(&self, id: &str) -> bool {
        self.ids
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exists_reflects_saves() {
        let store = OrderStore::new();
        assert!(!store.exists("42"));
        store.save("42");
        assert!(store.exists("42"));
        assert!(!store.exists("43"));
    }

    #[test]
    fn save_is_idempotent() {
        let store = OrderStore::new();
        store.save("42");
        store.save("42");
        store.save("42");
        assert!(store.exists("42"));
    }

    #[test]
    fn empty_string_is_a_valid_id() {
        let store = OrderStore::new();
        assert!(!store.exists(""));
        store.save("");
        assert!(store.exists(""));
    }
}
