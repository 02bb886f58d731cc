//! Route table and request handlers.
//!
//! Everything answers HTTP 200 with a response envelope; failures travel in
//! the envelope's error field, JSON-RPC style.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use mockbus_common::{RequestEnvelope, ResponseEnvelope};

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api", post(dispatch_call))
        .route("/order/{id}", post(order_exists))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Main dispatch path: raw body → envelope → dispatcher → envelope.
///
/// A body that doesn't decode into an envelope is rejected explicitly, with
/// the decode error in the response's error field. There is no request id to
/// echo in that case, so the response id is empty. The body is taken as raw
/// bytes so even non-UTF-8 garbage reaches this path instead of being
/// bounced by the extractor.
async fn dispatch_call(State(state): State<Arc<AppState>>, body: Bytes) -> Json<ResponseEnvelope> {
    let request: RequestEnvelope = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed request body");
            return Json(ResponseEnvelope::err("", format!("Malformed request body: {e}")));
        }
    };

    tracing::info!(id = %request.id, method = %request.method, "Dispatching");
    match state.dispatcher.dispatch(&request).await {
        Ok(result) => Json(ResponseEnvelope::ok(request.id, result)),
        Err(e) => Json(ResponseEnvelope::err(request.id, e.to_string())),
    }
}

/// Side-channel existence query, independent of the dispatch path.
async fn order_exists(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<ResponseEnvelope> {
    let response_id = Uuid::new_v4().to_string();
    if state.orders.exists(&id) {
        Json(ResponseEnvelope::ok(response_id, Value::Null))
    } else {
        Json(ResponseEnvelope::err(
            response_id,
            format!("Order with id {id} not exists."),
        ))
    }
}
