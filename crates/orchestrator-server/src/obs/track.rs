//! Request logging + metrics middleware.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Collapse a matched route into the `endpoint` label.
///
/// Unmatched paths are served by the root fallback and count as `/`.
pub fn endpoint_label(matched: Option<&str>) -> &'static str {
    match matched {
        Some("/health") => "/health",
        Some("/provision") => "/provision",
        Some("/resources") => "/resources",
        Some(p) if p.starts_with("/resources/") => "/resources/",
        _ => "/",
    }
}

pub async fn track(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let endpoint = endpoint_label(req.extensions().get::<MatchedPath>().map(MatchedPath::as_str));
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string());

    tracing::info!(%method, %path, %remote, "request");

    let resp = next.run(req).await;

    let elapsed = start.elapsed();
    let status = resp.status().as_u16();
    app.metrics()
        .record_request(method.as_str(), endpoint, status, elapsed);
    tracing::info!(%method, %path, status, ?elapsed, "completed");

    resp
}
