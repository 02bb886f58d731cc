//! Best-effort event fan-out over HTTP POST.
//!
//! `publish` never returns an error: each delivery is a single attempt, a
//! failure (connect error, non-2xx, timeout) is not retried, not surfaced to
//! the caller, and does not stop delivery to the remaining subscribers. This
//! is the contract, not an omission — the emulator models an at-most-once,
//! no-acknowledgment bus. Outcomes are reported to a `DeliveryObserver` so
//! deployments can log or count failures without changing the semantics.

use std::sync::Arc;
use std::time::Duration;

use mockbus_common::RequestEnvelope;

use crate::registry::SubscriberRegistry;

/// A slow subscriber stalls its publish call for at most this long.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of one delivery attempt to one subscriber.
#[derive(Debug, Clone)]
pub enum DeliveryOutcome {
    /// Subscriber answered 2xx.
    Delivered { status: u16 },
    /// Subscriber answered, but not 2xx.
    Rejected { status: u16 },
    /// No usable answer: connect error, timeout, malformed response.
    Failed { reason: String },
}

/// Hook for observing delivery outcomes without affecting delivery.
pub trait DeliveryObserver: Send + Sync {
    fn on_delivery(&self, subscriber: &str, method: &str, outcome: &DeliveryOutcome);
}

/// Default observer: structured log lines, debug for success, warn for the
/// rest. Nothing is ever propagated to the publishing caller.
pub struct LogObserver;

impl DeliveryObserver for LogObserver {
    fn on_delivery(&self, subscriber: &str, method: &str, outcome: &DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered { status } => {
                tracing::debug!(subscriber, method, status, "Event delivered");
            }
            DeliveryOutcome::Rejected { status } => {
                tracing::warn!(subscriber, method, status, "Subscriber rejected event");
            }
            DeliveryOutcome::Failed { reason } => {
                tracing::warn!(subscriber, method, reason = %reason, "Event delivery failed");
            }
        }
    }
}

/// Fans events out to every subscriber in the current registry snapshot,
/// sequentially, in snapshot order.
pub struct EventPublisher {
    registry: Arc<SubscriberRegistry>,
    client: reqwest::Client,
    observer: Arc<dyn DeliveryObserver>,
}

impl EventPublisher {
    pub fn new(registry: Arc<SubscriberRegistry>) -> Self {
        Self::with_observer(registry, Arc::new(LogObserver))
    }

    pub fn with_observer(
        registry: Arc<SubscriberRegistry>,
        observer: Arc<dyn DeliveryObserver>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            registry,
            client,
            observer,
        }
    }

    /// Attempt delivery of `event` to every currently registered subscriber.
    ///
    /// Infallible by contract. Deliveries are strictly sequential, so one
    /// subscriber's slowness delays the rest (bounded by the per-delivery
    /// timeout) but never reorders anything.
    pub async fn publish(&self, event: RequestEnvelope) {
        for subscriber in self.registry.snapshot() {
            let outcome = self.deliver(&subscriber.url, &event).await;
            self.observer
                .on_delivery(&subscriber.url, &event.method, &outcome);
        }
    }

    async fn deliver(&self, url: &str, event: &RequestEnvelope) -> DeliveryOutcome {
        match self.client.post(url).json(event).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    DeliveryOutcome::Delivered {
                        status: status.as_u16(),
                    }
                } else {
                    DeliveryOutcome::Rejected {
                        status: status.as_u16(),
                    }
                }
            }
            Err(e) => DeliveryOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }
}
