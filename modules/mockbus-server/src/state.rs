//! Shared application state: the dispatcher and the stores behind it.

use std::collections::HashMap;
use std::sync::Arc;

use mockbus_bus::handlers::{
    CreateOrderHandler, RegisterHandler, SourceUpdateHandler, METHOD_ORDER_CREATE,
    METHOD_REGISTER, METHOD_SOURCE_UPDATE,
};
use mockbus_bus::{Dispatcher, EventPublisher, Handler, OrderStore, SubscriberRegistry};
use mockbus_common::FileConfig;

pub struct AppState {
    pub dispatcher: Dispatcher,
    pub orders: Arc<OrderStore>,
}

impl AppState {
    /// Wire the full handler map. The registry and order store are
    /// constructed here and live for the whole process; handlers hold
    /// references, never replacements.
    pub fn from_config(config: &FileConfig) -> Self {
        let registry = Arc::new(SubscriberRegistry::new());
        let orders = Arc::new(OrderStore::new());
        let publisher = Arc::new(EventPublisher::new(Arc::clone(&registry)));

        let mut handlers: HashMap<String, Arc<dyn Handler>> = HashMap::new();
        handlers.insert(
            METHOD_REGISTER.to_string(),
            Arc::new(RegisterHandler::new(Arc::clone(&registry))),
        );
        handlers.insert(
            METHOD_ORDER_CREATE.to_string(),
            Arc::new(CreateOrderHandler::new(
                Arc::clone(&publisher),
                Arc::clone(&orders),
                config.export.status.clone(),
            )),
        );
        handlers.insert(
            METHOD_SOURCE_UPDATE.to_string(),
            Arc::new(SourceUpdateHandler::new(
                publisher,
                config.export.aggregates.clone(),
            )),
        );

        Self {
            dispatcher: Dispatcher::new(handlers),
            orders,
        }
    }
}
