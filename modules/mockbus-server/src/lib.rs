//! HTTP transport for the mockbus emulator.
//!
//! The core (dispatcher, registry, publisher, order store) lives in
//! `mockbus-bus`; this crate binds it to axum and owns process startup.

pub mod routes;
pub mod state;
