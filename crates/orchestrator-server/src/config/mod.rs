//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use orchestrator_core::error::{OrchestratorError, Result};

pub use schema::{OrchestratorConfig, RegistrySection, ServerSection};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "orchestrator.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<OrchestratorConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| OrchestratorError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<OrchestratorConfig> {
    let path = path.as_ref();
    if path.exists() {
        load_from_file(path)
    } else {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        Ok(OrchestratorConfig::default())
    }
}

pub fn load_from_str(s: &str) -> Result<OrchestratorConfig> {
    let cfg: OrchestratorConfig = serde_yaml::from_str(s)
        .map_err(|e| OrchestratorError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
