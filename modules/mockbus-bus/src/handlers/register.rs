//! Subscriber registration.

use std::sync::Arc;

use async_trait::async_trait;
use mockbus_common::BusError;
use serde::Deserialize;
use serde_json::Value;

use crate::dispatch::Handler;
use crate::registry::SubscriberRegistry;

#[derive(Debug, Deserialize)]
struct RegisterParams {
    url: String,
}

/// Adds a callback address to the registry. The address is taken as-is —
/// no syntax validation, matching the permissive contract of the bus.
pub struct RegisterHandler {
    registry: Arc<SubscriberRegistry>,
}

impl RegisterHandler {
    pub fn new(registry: Arc<SubscriberRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Handler for RegisterHandler {
    async fn handle(&self, params: Value) -> Result<Value, BusError> {
        let params: RegisterParams = serde_json::from_value(params)
            .map_err(|e| BusError::InvalidParams(format!("expected a callback url: {e}")))?;
        self.registry.register(params.url);
        Ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn registers_the_given_url() {
        let registry = Arc::new(SubscriberRegistry::new());
        let handler = RegisterHandler::new(Arc::clone(&registry));

        let result = handler
            .handle(json!({"url": "http://sub.test/hook"}))
            .await
            .unwrap();

        assert_eq!(result, Value::Null);
        assert_eq!(registry.snapshot()[0].url, "http://sub.test/hook");
    }

    #[tokio::test]
    async fn missing_url_is_invalid_params() {
        let registry = Arc::new(SubscriberRegistry::new());
        let handler = RegisterHandler::new(Arc::clone(&registry));

        let err = handler.handle(json!({})).await.unwrap_err();
        assert!(matches!(err, BusError::InvalidParams(_)));
        assert!(registry.snapshot().is_empty());
    }
}
