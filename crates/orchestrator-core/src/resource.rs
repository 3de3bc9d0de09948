//! Resource record and the JSON bodies the HTTP surface returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource identifier. Signed so that any integer path segment parses.
pub type ResourceId = i64;

/// A provisioned unit held by the registry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    /// Serialized as RFC3339.
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// Build a record stamped with the current time.
    pub fn new(id: ResourceId) -> Self {
        Self::with_timestamp(id, Utc::now())
    }

    pub fn with_timestamp(id: ResourceId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: resource_name(id),
            created_at,
        }
    }
}

/// Name derived from the id: `resource-<id>`.
pub fn resource_name(id: ResourceId) -> String {
    format!("resource-{id}")
}

/// `{"error": ..., "message": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// `{"message": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn deleted(id: ResourceId) -> Self {
        Self {
            message: format!("Deleted resource {id}"),
        }
    }
}

/// `{"status": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
}

impl HealthBody {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
