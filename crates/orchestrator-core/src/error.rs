//! Shared error type across orchestrator crates.

use thiserror::Error;

use crate::resource::ResourceId;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Path parameter is not an integer resource id.
    InvalidResourceId,
    /// No live resource with the requested id.
    ResourceNotFound,
    /// HTTP method not accepted by the endpoint.
    MethodNotAllowed,
    /// Every id in the configured range is taken.
    RegistryExhausted,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in the `error` field of JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "Bad request",
            ClientCode::InvalidResourceId => "Invalid resource ID",
            ClientCode::ResourceNotFound => "Resource not found",
            ClientCode::MethodNotAllowed => "Method not allowed",
            ClientCode::RegistryExhausted => "Registry exhausted",
            ClientCode::UnsupportedVersion => "Unsupported version",
            ClientCode::Internal => "Internal error",
        }
    }

    /// HTTP status code this code is surfaced with.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest
            | ClientCode::InvalidResourceId
            | ClientCode::UnsupportedVersion => 400,
            ClientCode::ResourceNotFound => 404,
            ClientCode::MethodNotAllowed => 405,
            ClientCode::RegistryExhausted => 503,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// Unified error type used by core and server.
///
/// `Display` is the human-readable `message` field of the error body.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("ID must be a number")]
    InvalidResourceId,
    #[error("Resource with ID {0} does not exist")]
    ResourceNotFound(ResourceId),
    #[error("Only {allowed} is supported")]
    MethodNotAllowed { allowed: &'static str },
    #[error("all {capacity} resource ids are in use")]
    RegistryExhausted { capacity: usize },
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl OrchestratorError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            OrchestratorError::BadRequest(_) => ClientCode::BadRequest,
            OrchestratorError::InvalidResourceId => ClientCode::InvalidResourceId,
            OrchestratorError::ResourceNotFound(_) => ClientCode::ResourceNotFound,
            OrchestratorError::MethodNotAllowed { .. } => ClientCode::MethodNotAllowed,
            OrchestratorError::RegistryExhausted { .. } => ClientCode::RegistryExhausted,
            OrchestratorError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            OrchestratorError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Build the `{error, message}` body for this error.
    pub fn to_body(&self) -> crate::resource::ErrorBody {
        crate::resource::ErrorBody {
            error: self.client_code().as_str().to_string(),
            message: self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_mismatch_body() {
        let body = OrchestratorError::MethodNotAllowed { allowed: "POST" }.to_body();
        assert_eq!(body.error, "Method not allowed");
        assert_eq!(body.message, "Only POST is supported");
    }

    #[test]
    fn not_found_names_the_id() {
        let err = OrchestratorError::ResourceNotFound(42);
        assert_eq!(err.client_code().http_status(), 404);
        assert_eq!(err.to_body().message, "Resource with ID 42 does not exist");
    }

    #[test]
    fn invalid_id_is_a_client_error() {
        let err = OrchestratorError::InvalidResourceId;
        assert_eq!(err.client_code().http_status(), 400);
        assert_eq!(err.to_body().error, "Invalid resource ID");
        assert_eq!(err.to_body().message, "ID must be a number");
    }
}
