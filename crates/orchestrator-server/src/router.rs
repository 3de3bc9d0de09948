//! Axum router wiring.
//!
//! Every route except `/metrics` runs through the `track` middleware.
//! All routes accept any method; handlers enforce their own.

use axum::{
    middleware,
    routing::any,
    Router,
};

use crate::{api::resources, app_state::AppState, obs::track, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(ops::root))
        .route("/health", any(ops::health))
        .route("/provision", any(resources::provision))
        .route("/resources", any(resources::list))
        .route("/resources/", any(resources::delete))
        .route("/resources/*id", any(resources::delete))
        .fallback(ops::root)
        .layer(middleware::from_fn_with_state(state.clone(), track::track))
        .route("/metrics", any(ops::metrics))
        .with_state(state)
}
