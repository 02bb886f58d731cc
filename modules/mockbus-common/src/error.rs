use thiserror::Error;

/// Errors surfaced through the response envelope's error field.
///
/// None of these are fatal to the process, and delivery failures are
/// deliberately absent: the publisher swallows them (see the bus crate).
#[derive(Debug, Error)]
pub enum BusError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
