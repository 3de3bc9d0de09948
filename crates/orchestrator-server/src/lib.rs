//! Orchestrator server library entry.
//!
//! Wires config, the in-memory resource registry, HTTP handlers, and
//! observability into one axum stack. Consumed by the binary (`main.rs`) and
//! by integration tests, which drive `router::build_router` directly.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod registry;
pub mod router;
