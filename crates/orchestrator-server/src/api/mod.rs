//! Resource endpoints and their error mapping.

pub mod error;
pub mod resources;

pub use error::ApiError;
