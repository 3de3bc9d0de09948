//! HTTP rendering of `OrchestratorError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use orchestrator_core::OrchestratorError;

/// Error returned by handlers; renders as `{error, message}` with the status
/// its client code maps to.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub OrchestratorError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.client_code().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(self.0.to_body())).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
