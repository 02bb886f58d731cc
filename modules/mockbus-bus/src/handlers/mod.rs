//! Operation handlers and the method names they answer to.

mod order_create;
mod register;
mod source_update;

pub use order_create::CreateOrderHandler;
pub use register::RegisterHandler;
pub use source_update::SourceUpdateHandler;

/// Client tag stamped on every published event.
pub const CLIENT_TAG: &str = "FAKE";

// Inbound method names.
pub const METHOD_REGISTER: &str = "magento.service_bus.remote.register";
pub const METHOD_ORDER_CREATE: &str = "magento.sales.order_management.create";
pub const METHOD_SOURCE_UPDATE: &str = "magento.inventory.source_stock_management.update";

// Published event method names.
pub const EVENT_ORDER_CREATED: &str = "magento.sales.order_management.created";
pub const EVENT_ORDER_UPDATED: &str = "magento.sales.order_management.updated";
pub const EVENT_SOURCE_UPDATED: &str = "magento.inventory.source_stock_management.updated";
