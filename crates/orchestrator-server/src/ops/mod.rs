//! Operational HTTP endpoints.
//!
//! - `/`        : plaintext banner (also the fallback for unknown paths)
//! - `/health`  : liveness, any method
//! - `/metrics` : Prometheus text format

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use orchestrator_core::resource::HealthBody;

use crate::app_state::AppState;

pub const BANNER: &str = "Cloud Resource Orchestrator API is running 🚀\n";

pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, BANNER)
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody::healthy()))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
