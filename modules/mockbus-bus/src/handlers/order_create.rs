//! Order creation with synthetic status replay.
//!
//! One call drives the whole conceptual lifecycle of an order id:
//! `unknown → created → updated(status₁) → … → updated(statusₙ)`. The
//! created event carries the caller's params untouched; each updated event
//! is a copy with the status fields overwritten to one configured rule.
//! Publishing is strictly sequential in configured-rule order so a single
//! subscriber always observes the transitions in that order.

use std::sync::Arc;

use async_trait::async_trait;
use mockbus_common::{BusError, OrderParams, RequestEnvelope, StatusExportRule};
use serde_json::Value;
use uuid::Uuid;

use crate::dispatch::Handler;
use crate::handlers::{CLIENT_TAG, EVENT_ORDER_CREATED, EVENT_ORDER_UPDATED};
use crate::orders::OrderStore;
use crate::publisher::EventPublisher;

pub struct CreateOrderHandler {
    publisher: Arc<EventPublisher>,
    orders: Arc<OrderStore>,
    status_rules: Vec<StatusExportRule>,
}

impl CreateOrderHandler {
    pub fn new(
        publisher: Arc<EventPublisher>,
        orders: Arc<OrderStore>,
        status_rules: Vec<StatusExportRule>,
    ) -> Self {
        Self {
            publisher,
            orders,
            status_rules,
        }
    }

    fn event(method: &str, params: Value) -> RequestEnvelope {
        RequestEnvelope {
            id: Uuid::new_v4().to_string(),
            method: method.to_string(),
            params,
            client: CLIENT_TAG.to_string(),
        }
    }
}

#[async_trait]
impl Handler for CreateOrderHandler {
    async fn handle(&self, params: Value) -> Result<Value, BusError> {
        // Decode before any side effect: a malformed payload must leave no
        // trace in the store and publish nothing.
        let mut typed: OrderParams = serde_json::from_value(params.clone())
            .map_err(|e| BusError::InvalidParams(format!("expected an order payload: {e}")))?;

        self.orders.save(typed.order.id.clone());

        // Created event carries the original, unmodified params.
        self.publisher
            .publish(Self::event(EVENT_ORDER_CREATED, params))
            .await;

        for rule in &self.status_rules {
            typed.order.status = Some(rule.status.clone());
            typed.order.status_reason = Some(rule.reason.clone());
            let params = serde_json::to_value(&typed)
                .map_err(|e| BusError::Internal(format!("re-encoding order params: {e}")))?;
            self.publisher
                .publish(Self::event(EVENT_ORDER_UPDATED, params))
                .await;
        }

        Ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SubscriberRegistry;
    use serde_json::json;

    fn handler(rules: Vec<StatusExportRule>) -> (CreateOrderHandler, Arc<OrderStore>) {
        // Empty registry: publish becomes a no-op, which is all these
        // unit tests need. Fan-out is covered by the integration tests.
        let registry = Arc::new(SubscriberRegistry::new());
        let publisher = Arc::new(EventPublisher::new(registry));
        let orders = Arc::new(OrderStore::new());
        (
            CreateOrderHandler::new(publisher, Arc::clone(&orders), rules),
            orders,
        )
    }

    #[tokio::test]
    async fn saves_the_order_id() {
        let (handler, orders) = handler(vec![]);
        handler
            .handle(json!({"order": {"id": "42"}}))
            .await
            .unwrap();
        assert!(orders.exists("42"));
    }

    #[tokio::test]
    async fn malformed_params_leave_no_state() {
        let (handler, orders) = handler(vec![]);
        let err = handler.handle(json!({"order": []})).await.unwrap_err();
        assert!(matches!(err, BusError::InvalidParams(_)));
        assert!(!orders.exists(""));
    }

    #[tokio::test]
    async fn missing_order_id_defaults_to_empty_string() {
        // The store is total over any id, including empty — mirrors the
        // permissive behavior of the emulated service.
        let (handler, orders) = handler(vec![]);
        handler.handle(json!({"order": {}})).await.unwrap();
        assert!(orders.exists(""));
    }
}
