//! In-memory resource registry.
//!
//! One `HashMap<ResourceId, Resource>` behind one reader/writer lock.
//! `list` takes the read lock, everything that mutates takes the write lock,
//! so concurrent lists proceed together and writes are totally ordered.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

use orchestrator_core::error::{OrchestratorError, Result};
use orchestrator_core::{Resource, ResourceId};

use crate::obs::metrics::ServerMetrics;

/// Lowest id ever handed out. Zero is reserved so a provisioned id is never 0.
pub const MIN_RESOURCE_ID: ResourceId = 1;

pub struct Registry {
    resources: RwLock<HashMap<ResourceId, Resource>>,
    /// Ids are drawn from `MIN_RESOURCE_ID..id_space`.
    id_space: ResourceId,
    metrics: Arc<ServerMetrics>,
}

impl Registry {
    pub fn new(id_space: ResourceId, metrics: Arc<ServerMetrics>) -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
            id_space: id_space.max(MIN_RESOURCE_ID + 1),
            metrics,
        }
    }

    /// Number of distinct ids the registry can hold.
    pub fn capacity(&self) -> usize {
        usize::try_from(self.id_space - MIN_RESOURCE_ID).unwrap_or(usize::MAX)
    }

    /// Create a resource with a random id not currently in use.
    ///
    /// Colliding draws are redrawn under the write lock, so a live record is
    /// never overwritten. Fails only when every id in the range is live.
    pub async fn provision(&self) -> Result<Resource> {
        let mut map = self.resources.write().await;

        let capacity = self.capacity();
        if map.len() >= capacity {
            return Err(OrchestratorError::RegistryExhausted { capacity });
        }

        let id = draw_free_id(&map, self.id_space);
        let res = Resource::new(id);
        map.insert(id, res.clone());

        self.metrics.record_provisioned();
        self.metrics.set_active(map.len());
        tracing::debug!(id, active = map.len(), "resource provisioned");

        Ok(res)
    }

    /// Snapshot of every live resource, ordered by id.
    pub async fn list(&self) -> Vec<Resource> {
        let map = self.resources.read().await;
        let mut out: Vec<Resource> = map.values().cloned().collect();
        drop(map);
        out.sort_by_key(|r| r.id);
        out
    }

    /// Remove `id`. Returns whether a record was removed.
    pub async fn delete(&self, id: ResourceId) -> bool {
        let mut map = self.resources.write().await;
        let removed = map.remove(&id).is_some();
        if removed {
            self.metrics.set_active(map.len());
            tracing::debug!(id, active = map.len(), "resource deleted");
        }
        removed
    }

    /// Place a pre-built record, keyed by its own id. Used to seed fixtures.
    pub async fn insert(&self, resource: Resource) {
        let mut map = self.resources.write().await;
        map.insert(resource.id, resource);
        self.metrics.set_active(map.len());
    }

    pub async fn active_count(&self) -> usize {
        self.resources.read().await.len()
    }
}

/// Caller guarantees at least one free id exists in the range.
fn draw_free_id(map: &HashMap<ResourceId, Resource>, id_space: ResourceId) -> ResourceId {
    let mut rng = rand::thread_rng();
    loop {
        let id = rng.gen_range(MIN_RESOURCE_ID..id_space);
        if !map.contains_key(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;

    fn registry(id_space: ResourceId) -> (Arc<Registry>, Arc<ServerMetrics>) {
        let metrics = Arc::new(ServerMetrics::default());
        (Arc::new(Registry::new(id_space, Arc::clone(&metrics))), metrics)
    }

    #[tokio::test]
    async fn provision_builds_consistent_record() {
        let (reg, _) = registry(1_000_000);
        let res = reg.provision().await.unwrap();

        assert!(res.id >= MIN_RESOURCE_ID && res.id < 1_000_000);
        assert_eq!(res.name, format!("resource-{}", res.id));
        assert_eq!(reg.list().await, vec![res]);
    }

    #[tokio::test]
    async fn empty_list_is_empty_not_absent() {
        let (reg, _) = registry(1_000_000);
        assert!(reg.list().await.is_empty());
        assert_eq!(reg.active_count().await, 0);
    }

    #[tokio::test]
    async fn delete_succeeds_exactly_once() {
        let (reg, _) = registry(1_000_000);
        let res = reg.provision().await.unwrap();

        assert!(reg.delete(res.id).await);
        assert!(!reg.delete(res.id).await);
        assert!(reg.list().await.is_empty());
    }

    #[tokio::test]
    async fn gauge_tracks_live_count() {
        let (reg, metrics) = registry(1_000_000);
        let mut ids = Vec::new();
        for _ in 0..10 {
            ids.push(reg.provision().await.unwrap().id);
        }
        for id in ids.iter().take(4) {
            assert!(reg.delete(*id).await);
        }
        reg.delete(-1).await;

        assert_eq!(reg.active_count().await, 6);
        assert_eq!(metrics.active_resources.get(&[]), 6);
        assert_eq!(metrics.resources_provisioned.get(&[]), 10);
    }

    #[tokio::test]
    async fn small_id_space_never_overwrites() {
        // ids 1..=3
        let (reg, _) = registry(4);
        let mut seen: Vec<ResourceId> = Vec::new();
        for _ in 0..3 {
            seen.push(reg.provision().await.unwrap().id);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3]);

        let err = reg.provision().await.expect_err("range is full");
        assert_eq!(err.client_code().http_status(), 503);
        assert_eq!(reg.active_count().await, 3);

        assert!(reg.delete(2).await);
        assert_eq!(reg.provision().await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn insert_keys_by_record_id() {
        let (reg, metrics) = registry(1_000_000);
        reg.insert(Resource::new(12345)).await;

        let listed = reg.list().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 12345);
        assert_eq!(metrics.active_resources.get(&[]), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_provisions_lose_nothing() {
        let (reg, metrics) = registry(1_000_000);

        let mut tasks = Vec::new();
        for _ in 0..200 {
            let reg = Arc::clone(&reg);
            tasks.push(tokio::spawn(async move { reg.provision().await.unwrap() }));
        }
        for t in tasks {
            t.await.unwrap();
        }

        assert_eq!(reg.active_count().await, 200);
        assert_eq!(reg.list().await.len(), 200);
        assert_eq!(metrics.active_resources.get(&[]), 200);
    }
}
