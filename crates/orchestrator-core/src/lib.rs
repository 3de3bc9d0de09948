//! Orchestrator core: transport-agnostic resource records, response bodies,
//! and the error surface.
//!
//! This crate defines the JSON contracts shared by the server and its tests.
//! It carries no transport or runtime dependencies so it can be reused by
//! clients that only need to decode responses.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths must surface as `OrchestratorError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod resource;

/// Shared result type.
pub use error::{Result, OrchestratorError};
pub use resource::{Resource, ResourceId};
