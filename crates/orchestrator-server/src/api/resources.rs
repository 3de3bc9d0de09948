//! Provision / list / delete handlers.
//!
//! Each handler is mounted with `any` and checks its one allowed method
//! itself, so a mismatch gets the JSON 405 body instead of axum's empty one.

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use orchestrator_core::resource::MessageBody;
use orchestrator_core::{OrchestratorError, ResourceId};

use crate::api::error::ApiResult;
use crate::app_state::AppState;

fn require(method: &Method, allowed: &'static str) -> Result<(), OrchestratorError> {
    if method.as_str() == allowed {
        Ok(())
    } else {
        Err(OrchestratorError::MethodNotAllowed { allowed })
    }
}

/// `POST /provision`
pub async fn provision(State(app): State<AppState>, method: Method) -> ApiResult<Response> {
    require(&method, "POST")?;
    let res = app.registry().provision().await?;
    Ok((StatusCode::CREATED, Json(res)).into_response())
}

/// `GET /resources`
pub async fn list(State(app): State<AppState>, method: Method) -> ApiResult<Response> {
    require(&method, "GET")?;
    let all = app.registry().list().await;
    Ok(Json(all).into_response())
}

/// `DELETE /resources/{id}`
///
/// `tail` is the percent-decoded path after `/resources/`; it is absent on the
/// bare `/resources/` route or when the segment does not decode as UTF-8.
pub async fn delete(
    State(app): State<AppState>,
    method: Method,
    tail: Option<Path<String>>,
) -> ApiResult<Response> {
    require(&method, "DELETE")?;
    let id = parse_id(tail.as_ref().map(|Path(t)| t.as_str()).unwrap_or_default())?;

    if app.registry().delete(id).await {
        Ok(Json(MessageBody::deleted(id)).into_response())
    } else {
        Err(OrchestratorError::ResourceNotFound(id).into())
    }
}

/// The whole tail must be a single integer.
fn parse_id(tail: &str) -> Result<ResourceId, OrchestratorError> {
    tail.strip_prefix('/')
        .unwrap_or(tail)
        .parse::<ResourceId>()
        .map_err(|_| OrchestratorError::InvalidResourceId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("12345").ok(), Some(12345));
        assert_eq!(parse_id("-5").ok(), Some(-5));
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("1/2").is_err());
    }

    #[test]
    fn method_check_names_the_allowed_method() {
        assert!(require(&Method::POST, "POST").is_ok());
        let err = require(&Method::GET, "DELETE").err();
        assert_eq!(
            err.map(|e| e.to_string()).as_deref(),
            Some("Only DELETE is supported")
        );
    }
}
