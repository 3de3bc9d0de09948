//! Lightweight in-process observability.
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler;
//! `track` wraps every other route with request logging and counting.

pub mod metrics;
pub mod track;
