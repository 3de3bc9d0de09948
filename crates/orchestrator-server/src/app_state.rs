//! Shared application state for the orchestrator server.
//!
//! Built once at startup and cloned into every handler; the registry and
//! metrics are reference-counted so clones share them.

use std::sync::Arc;

use crate::config::OrchestratorConfig;
use crate::obs::metrics::ServerMetrics;
use crate::registry::Registry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<Registry>,
    metrics: Arc<ServerMetrics>,
}

struct AppStateInner {
    cfg: OrchestratorConfig,
}

impl AppState {
    pub fn new(cfg: OrchestratorConfig) -> Self {
        let metrics = Arc::new(ServerMetrics::default());
        let registry = Arc::new(Registry::new(cfg.registry.id_space, Arc::clone(&metrics)));
        metrics.prime();

        Self {
            inner: Arc::new(AppStateInner { cfg }),
            registry,
            metrics,
        }
    }

    pub fn cfg(&self) -> &OrchestratorConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn metrics(&self) -> &ServerMetrics {
        &self.metrics
    }
}
