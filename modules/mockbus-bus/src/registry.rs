//! Subscriber registry: the set of callback addresses events fan out to.
//!
//! Subscribers are permanent once added — there is no removal and no expiry.
//! Duplicate registrations are kept as-is: a duplicate address receives one
//! delivery attempt per registration.

use std::sync::RwLock;

/// A registered event subscriber. One attribute: where to POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscriber {
    pub url: String,
}

/// Concurrency-safe subscriber collection, shared across request tasks.
///
/// Each call is independently atomic; no ordering is promised between a
/// `snapshot` and a concurrent `register`.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    inner: RwLock<Vec<Subscriber>>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber, visible to all subsequent snapshots.
    pub fn register(&self, url: impl Into<String>) {
        let subscriber = Subscriber { url: url.into() };
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(subscriber);
    }

    /// Consistent copy of all currently known subscribers.
    pub fn snapshot(&self) -> Vec<Subscriber> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_is_visible_in_snapshot() {
        let registry = SubscriberRegistry::new();
        assert!(registry.snapshot().is_empty());

        registry.register("http://sub.test/hook");
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].url, "http://sub.test/hook");
    }

    #[test]
    fn duplicates_are_kept() {
        let registry = SubscriberRegistry::new();
        registry.register("http://sub.test/hook");
        registry.register("http://sub.test/hook");
        assert_eq!(registry.snapshot().len(), 2);
    }

    #[test]
    fn snapshot_is_detached_from_later_registrations() {
        let registry = SubscriberRegistry::new();
        registry.register("http://a.test/");
        let snapshot = registry.snapshot();
        registry.register("http://b.test/");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.snapshot().len(), 2);
    }

    #[test]
    fn concurrent_registration_loses_nothing() {
        use std::sync::Arc;

        let registry = Arc::new(SubscriberRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for j in 0..100 {
                        registry.register(format!("http://sub{i}.test/{j}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.snapshot().len(), 800);
    }
}
