//! Request/response envelopes and the typed order payload.
//!
//! The same envelope shape is used for inbound calls and outbound published
//! events; only the id, method and client differ. Params stay opaque at the
//! envelope layer — handlers decode them into typed payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol-version tag echoed in every response.
pub const JSONRPC_VERSION: &str = "2.0";

/// Inbound call or outbound published event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Opaque correlation id. Freshly generated for published events.
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    /// Originating client tag.
    #[serde(default)]
    pub client: String,
}

/// Response to an inbound call. Exactly one of result/error is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Echoes the request envelope's id.
    pub id: String,
    pub jsonrpc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn ok(id: impl Into<String>, result: Value) -> Self {
        Self {
            id: id.into(),
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            jsonrpc: JSONRPC_VERSION.to_string(),
            result: None,
            error: Some(message.into()),
        }
    }
}

/// Typed view of the order-management call params.
///
/// Fields we don't model round-trip through `extra`, so a published event
/// still carries everything the caller sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderParams {
    pub order: Order,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
