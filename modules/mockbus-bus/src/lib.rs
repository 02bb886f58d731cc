//! The message-bus core: subscriber registry, order state store, event
//! publisher, and the operation dispatcher with its handlers.
//!
//! Delivery is best-effort and at-most-once by contract: no retry, no
//! acknowledgment, no ordering guarantee across distinct subscribers. Within
//! one publish call, subscribers are attempted sequentially in snapshot
//! order, so a single subscriber always sees the status-replay sequence in
//! configured order.

pub mod dispatch;
pub mod handlers;
pub mod orders;
pub mod publisher;
pub mod registry;

pub use dispatch::{Dispatcher, Handler};
pub use orders::OrderStore;
pub use publisher::{DeliveryObserver, DeliveryOutcome, EventPublisher, LogObserver};
pub use registry::{Subscriber, SubscriberRegistry};
