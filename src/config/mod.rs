//! Configuration for the dws client.
//!
//! Settings can come from, in increasing precedence:
//! - built-in defaults
//! - `dws.toml` in the current directory or the user config directory
//! - environment variables / command line flags (applied by the binary)

use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the dws client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

/// Backend endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the Document Workflow Service backend.
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Session storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Token file location; defaults to `<config dir>/dws/token`.
    pub token_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Loads configuration from a file.
    ///
    /// An explicitly given path must exist and parse. Otherwise `dws.toml`
    /// is tried in the current directory, then in the user config
    /// directory; when neither exists the defaults apply.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(explicit) => Some(explicit.clone()),
            None => {
                let local = PathBuf::from("dws.toml");
                if local.exists() {
                    Some(local)
                } else {
                    let user = config_dir().join("dws.toml");
                    if user.exists() {
                        Some(user)
                    } else {
                        None
                    }
                }
            }
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("failed to read {}: {}", path.display(), e))
                })?;
                toml::from_str(&content).map_err(|e| {
                    Error::Config(format!("failed to parse {}: {}", path.display(), e))
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolved token file location.
    pub fn token_path(&self) -> PathBuf {
        self.session
            .token_path
            .clone()
            .unwrap_or_else(|| config_dir().join("token"))
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dws")
}
