//! Endpoint resolution.

use std::fmt;
use std::num::ParseIntError;

use pfs_api::DEFAULT_PORT;
use thiserror::Error;

/// Environment variable naming the PFS host
pub const HOST_ENV: &str = "PACHD_SERVICE_HOST";

/// Environment variable naming the PFS port
pub const PORT_ENV: &str = "PACHD_SERVICE_PORT_API_GRPC_PORT";

/// Host used when neither an argument nor the environment names one
pub const DEFAULT_HOST: &str = "localhost";

/// The endpoint could not be resolved.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// A port from the environment is not a valid port number
    #[error("invalid port in {variable}: {value:?}")]
    InvalidPort {
        /// Environment variable the port was read from
        variable: &'static str,
        /// The offending value
        value: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },
}

/// Host and port of a PFS server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl Endpoint {
    /// Create an endpoint from an explicit host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Resolve an endpoint from optional arguments and the process environment.
    ///
    /// Each of host and port is taken from the argument if given, then from
    /// [`HOST_ENV`] / [`PORT_ENV`], then from the defaults.
    pub fn resolve(host: Option<&str>, port: Option<u16>) -> Result<Self, EndpointError> {
        Self::resolve_with(host, port, |variable| std::env::var(variable).ok())
    }

    /// Resolve an endpoint, reading the environment through `lookup`.
    pub fn resolve_with<F>(
        host: Option<&str>,
        port: Option<u16>,
        lookup: F,
    ) -> Result<Self, EndpointError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |variable: &str| lookup(variable).filter(|value| !value.is_empty());

        let host = match host {
            Some(host) => host.to_owned(),
            None => lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_owned()),
        };

        let port = match (port, lookup(PORT_ENV)) {
            (Some(port), _) => port,
            (None, Some(value)) => {
                value
                    .trim()
                    .parse()
                    .map_err(|source| EndpointError::InvalidPort {
                        variable: PORT_ENV,
                        value,
                        source,
                    })?
            }
            (None, None) => DEFAULT_PORT,
        };

        tracing::trace!(%host, %port, "resolved PFS endpoint");
        Ok(Self { host, port })
    }

    /// Server host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// The `host:port` this endpoint connects to
    pub fn target(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // IPv6 literals are bracketed in an authority
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
