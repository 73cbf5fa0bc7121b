use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use refscan_extract::ExtractOptions;
use refscan_repository::normalize_path;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Effective configuration, after every layer has been merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root crawled when a request doesn't name one.
    pub default_path: String,
    pub repository: RepositoryConfig,
    pub server: ServerConfig,
    pub extract: ExtractOptions,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            default_path: "/content".to_string(),
            repository: RepositoryConfig::default(),
            server: ServerConfig::default(),
            extract: ExtractOptions::default(),
        }
    }
}
impl Config {
    /// Checks what deserialization can't, normalizing repository paths on
    /// the way.
    pub fn validate(mut self) -> Result<Self> {
        self.default_path = normalize_path(&self.default_path).or_raise(|| ErrorKind::Invalid {
            field: "default_path",
            reason: format!("{:?} is not an absolute repository path", self.default_path),
        })?;
        self.repository.mount = normalize_path(&self.repository.mount).or_raise(|| ErrorKind::Invalid {
            field: "repository.mount",
            reason: format!("{:?} is not an absolute repository path", self.repository.mount),
        })?;
        if !self.server.route.starts_with('/') {
            exn::bail!(ErrorKind::Invalid {
                field: "server.route",
                reason: format!("{:?} must start with a slash", self.server.route),
            });
        }
        if self.extract.asset_prefix.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid {
                field: "extract.asset_prefix",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(self)
    }
}

/// Where the content tree comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// JSON content export to load. Without one the repository is empty.
    pub source: Option<PathBuf>,
    /// Repository path the export's top-level object is mounted at.
    pub mount: String,
}
impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            source: None,
            mount: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Route the extraction endpoint is served under.
    pub route: String,
}
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            route: "/bin/data-extract.json".to_string(),
        }
    }
}
