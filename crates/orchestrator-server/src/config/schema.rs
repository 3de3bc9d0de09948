use std::net::SocketAddr;

use serde::Deserialize;
use orchestrator_core::error::{OrchestratorError, Result};
use orchestrator_core::ResourceId;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrchestratorConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub registry: RegistrySection,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            registry: RegistrySection::default(),
        }
    }
}

impl OrchestratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(OrchestratorError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.registry.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            OrchestratorError::BadRequest(format!(
                "server.listen must be a valid SocketAddr (got {:?})",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    /// Exclusive upper bound of generated resource ids.
    #[serde(default = "default_id_space")]
    pub id_space: ResourceId,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            id_space: default_id_space(),
        }
    }
}

impl RegistrySection {
    pub fn validate(&self) -> Result<()> {
        if self.id_space < 2 {
            return Err(OrchestratorError::BadRequest(
                "registry.id_space must be at least 2".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_id_space() -> ResourceId {
    1_000_000
}
