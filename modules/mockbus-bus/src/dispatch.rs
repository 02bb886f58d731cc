//! Method-name routing for inbound calls.
//!
//! The handler map is built once at startup and never mutated. Dispatch is a
//! pure routing layer: it resolves the handler, passes params through, and
//! passes the handler's result or error back unchanged.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockbus_common::{BusError, RequestEnvelope};
use serde_json::Value;

/// One named operation. Implementations decode params themselves.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, params: Value) -> Result<Value, BusError>;
}

pub struct Dispatcher {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl Dispatcher {
    pub fn new(handlers: HashMap<String, Arc<dyn Handler>>) -> Self {
        Self { handlers }
    }

    /// Route a request to its handler by method name.
    pub async fn dispatch(&self, request: &RequestEnvelope) -> Result<Value, BusError> {
        let handler = self
            .handlers
            .get(&request.method)
            .ok_or_else(|| BusError::UnknownMethod(request.method.clone()))?;
        handler.handle(request.params.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl Handler for Echo {
        async fn handle(&self, params: Value) -> Result<Value, BusError> {
            Ok(params)
        }
    }

    fn dispatcher_with_echo() -> Dispatcher {
        let mut handlers: HashMap<String, Arc<dyn Handler>> = HashMap::new();
        handlers.insert("test.echo".to_string(), Arc::new(Echo));
        Dispatcher::new(handlers)
    }

    fn request(method: &str) -> RequestEnvelope {
        RequestEnvelope {
            id: "x".to_string(),
            method: method.to_string(),
            params: json!({"k": "v"}),
            client: "test".to_string(),
        }
    }

    #[tokio::test]
    async fn routes_to_registered_handler() {
        let dispatcher = dispatcher_with_echo();
        let result = dispatcher.dispatch(&request("test.echo")).await.unwrap();
        assert_eq!(result, json!({"k": "v"}));
    }

    #[tokio::test]
    async fn unknown_method_names_the_method() {
        let dispatcher = dispatcher_with_echo();
        let err = dispatcher
            .dispatch(&request("no.such.method"))
            .await
            .unwrap_err();
        match err {
            BusError::UnknownMethod(method) => assert_eq!(method, "no.such.method"),
            other => panic!("expected UnknownMethod, got {other:?}"),
        }
    }
}
