//! Server configuration

use std::net::{Ipv4Addr, SocketAddr};

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;

/// Errors loading a server configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("reading config from {path}")]
    Io {
        /// Path to the configuration file
        path: Utf8PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration
    #[error("parsing config: {0}")]
    Parse(#[from] toml_edit::de::Error),
}

/// Configuration for the `pfsd` server
///
/// ```toml
/// listen = "0.0.0.0:30650"
/// log = "info,pfs=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to accept connections on
    pub listen: SocketAddr,

    /// Log filter, used when `RUST_LOG` is not set
    pub log: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, pfs_api::DEFAULT_PORT)),
            log: "info".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Parse a configuration from TOML
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml_edit::de::from_str(contents)?)
    }

    /// Read a configuration file
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;

        tracing::debug!(%path, "loaded server config");
        Self::from_toml(&contents)
    }
}
