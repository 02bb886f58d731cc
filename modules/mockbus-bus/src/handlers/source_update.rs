//! Aggregate-update fan-out for source stock changes.
//!
//! Same publish-per-configured-item pattern as the order status replay, but
//! with no order-id bookkeeping: one updated event per configured aggregate,
//! in configured order, each a copy of the inbound params with the top-level
//! `aggregate` field set to the rule's name.

use std::sync::Arc;

use async_trait::async_trait;
use mockbus_common::{AggregateExportRule, BusError, RequestEnvelope};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::dispatch::Handler;
use crate::handlers::{CLIENT_TAG, EVENT_SOURCE_UPDATED};
use crate::publisher::EventPublisher;

pub struct SourceUpdateHandler {
    publisher: Arc<EventPublisher>,
    aggregates: Vec<AggregateExportRule>,
}

impl SourceUpdateHandler {
    pub fn new(publisher: Arc<EventPublisher>, aggregates: Vec<AggregateExportRule>) -> Self {
        Self {
            publisher,
            aggregates,
        }
    }
}

#[async_trait]
impl Handler for SourceUpdateHandler {
    async fn handle(&self, params: Value) -> Result<Value, BusError> {
        let base: Map<String, Value> = serde_json::from_value(params)
            .map_err(|e| BusError::InvalidParams(format!("expected an object payload: {e}")))?;

        for rule in &self.aggregates {
            let mut exported = base.clone();
            exported.insert(
                "aggregate".to_string(),
                Value::String(rule.aggregate.clone()),
            );
            let event = RequestEnvelope {
                id: Uuid::new_v4().to_string(),
                method: EVENT_SOURCE_UPDATED.to_string(),
                params: Value::Object(exported),
                client: CLIENT_TAG.to_string(),
            };
            self.publisher.publish(event).await;
        }

        Ok(Value::Null)
    }
}
