//! Shared types for the mockbus emulator.
//!
//! Wire envelopes, the typed order payload, TOML file config, and the bus
//! error taxonomy. No transport or delivery logic lives here.

pub mod config;
pub mod envelope;
pub mod error;

pub use config::{AggregateExportRule, ExportConfig, FileConfig, ServerConfig, StatusExportRule};
pub use envelope::{Order, OrderParams, RequestEnvelope, ResponseEnvelope, JSONRPC_VERSION};
pub use error::BusError;
