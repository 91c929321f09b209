//! HTTP Server Configuration
//!
//! Host, port, mirror location and the optional static front-end directory.
//! `PORT` in the environment overrides the default port.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::errors::{ServerError, ServerResult};

/// Environment variable selecting the listening port
pub const PORT_ENV: &str = "PORT";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Mirror file (default: "./data/animals.json")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Static front-end directory, served only if it exists (default: "./public")
    #[serde(default = "default_public_dir")]
    pub public_dir: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./data/animals.json")
}

fn default_public_dir() -> Option<PathBuf> {
    Some(PathBuf::from("./public"))
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
            public_dir: default_public_dir(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Defaults with `PORT` from the process environment applied
    pub fn from_env() -> ServerResult<Self> {
        Self::default().with_env_port(std::env::var(PORT_ENV).ok())
    }

    /// Apply a raw `PORT` value; unset or empty keeps the current port
    pub fn with_env_port(mut self, raw: Option<String>) -> ServerResult<Self> {
        if let Some(raw) = raw.filter(|v| !v.trim().is_empty()) {
            self.port = raw
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidPort(raw.clone()))?;
        }
        Ok(self)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
