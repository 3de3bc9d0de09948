//! JSON shape checks for the bodies clients decode.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use orchestrator_core::resource::{ErrorBody, HealthBody, MessageBody};
use orchestrator_core::{OrchestratorError, Resource};

#[test]
fn resource_fields_and_rfc3339_timestamp() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let res = Resource::with_timestamp(777, ts);

    let v: Value = serde_json::to_value(&res).unwrap();
    assert_eq!(v["id"], 777);
    assert_eq!(v["name"], "resource-777");
    assert_eq!(v["created_at"], "2024-05-01T12:30:00Z");
    assert_eq!(v.as_object().unwrap().len(), 3);

    let back: Resource = serde_json::from_value(v).unwrap();
    assert_eq!(back, res);
}

#[test]
fn error_body_shape() {
    let body = OrchestratorError::ResourceNotFound(999999).to_body();
    let v = serde_json::to_value(&body).unwrap();
    assert_eq!(
        v,
        json!({
            "error": "Resource not found",
            "message": "Resource with ID 999999 does not exist"
        })
    );
    let _: ErrorBody = serde_json::from_value(v).unwrap();
}

#[test]
fn message_and_health_bodies() {
    assert_eq!(
        serde_json::to_value(MessageBody::deleted(12345)).unwrap(),
        json!({ "message": "Deleted resource 12345" })
    );
    assert_eq!(
        serde_json::to_value(HealthBody::healthy()).unwrap(),
        json!({ "status": "healthy" })
    );
}
