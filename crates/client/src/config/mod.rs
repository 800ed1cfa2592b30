//! Client configuration
//!
//! Loads configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes the working directory for config files
//! 4. Supports TOML and JSON formats
//! 5. Falls back to built-in defaults when neither source is present
//!
//! ## Environment Variables
//! - `GATESCAN_API_URL`: Base URL of the scanning backend
//! - `GATESCAN_API_TIMEOUT_SECS`: Request timeout in seconds (optional)
//!
//! ## Expired-token policy
//! The client always attempts requests and relies on the server's 401
//! plus the refresh path; an expired-but-present token is never blocked
//! client-side. This is applied consistently for every endpoint.
//! `ApiClient::has_valid_token` exists for UI gating only.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::http::errors::{ClientError, ClientResult};

const DEFAULT_BASE_URL: &str = "https://api.gatescan.app/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_REFRESH_PATH: &str = "/auth/refresh-token";

/// Configuration for the authenticated client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the scanning backend, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Path of the refresh-token exchange endpoint.
    pub refresh_path: String,
    /// Path substrings exempt from auth header injection and 401-refresh
    /// handling.
    pub public_paths: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            refresh_path: DEFAULT_REFRESH_PATH.to_string(),
            public_paths: default_public_paths(),
        }
    }
}

/// The endpoints that never carry an Authorization header: login, the
/// refresh exchange itself, and the password-reset flow.
#[must_use]
pub fn default_public_paths() -> Vec<String> {
    [
        "/auth/login",
        DEFAULT_REFRESH_PATH,
        "/reset-password/initiate",
        "/reset-password/verify",
        "/reset-password/submit",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

impl ClientConfig {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration with automatic fallback strategy.
    ///
    /// Environment first, then config file, then built-in defaults.
    ///
    /// # Errors
    /// Returns `ClientError::Config` only when a config file exists but
    /// cannot be parsed.
    pub fn load() -> ClientResult<Self> {
        match Self::load_from_env() {
            Ok(config) => {
                info!("configuration loaded from environment");
                Ok(config)
            }
            Err(err) => {
                debug!(error = %err, "environment incomplete, trying config file");
                Self::load_from_file(None)
            }
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns `ClientError::Config` if `GATESCAN_API_URL` is missing or
    /// the timeout is not a number.
    pub fn load_from_env() -> ClientResult<Self> {
        let base_url = std::env::var("GATESCAN_API_URL")
            .map_err(|_| ClientError::Config("GATESCAN_API_URL not set".to_string()))?;

        let mut config = Self { base_url, ..Self::default() };

        if let Ok(raw) = std::env::var("GATESCAN_API_TIMEOUT_SECS") {
            config.timeout_secs = raw
                .parse()
                .map_err(|err| ClientError::Config(format!("invalid timeout: {err}")))?;
        }

        Ok(config)
    }

    /// Load configuration from a file.
    ///
    /// If `path` is `None`, probes `gatescan.toml` then `gatescan.json`
    /// in the working directory; built-in defaults apply when no file is
    /// found. Format is detected by extension.
    ///
    /// # Errors
    /// Returns `ClientError::Config` if a named file is missing or any
    /// file fails to parse.
    pub fn load_from_file(path: Option<PathBuf>) -> ClientResult<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ClientError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path
            }
            None => match probe_config_paths() {
                Some(found) => found,
                None => {
                    debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&config_path).map_err(|err| {
            ClientError::Config(format!("failed to read {}: {err}", config_path.display()))
        })?;

        let config = match config_path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&contents)
                .map_err(|err| ClientError::Config(format!("invalid TOML config: {err}")))?,
            Some("json") => serde_json::from_str(&contents)
                .map_err(|err| ClientError::Config(format!("invalid JSON config: {err}")))?,
            other => {
                return Err(ClientError::Config(format!(
                    "unsupported config format: {other:?}"
                )))
            }
        };

        info!(path = %config_path.display(), "configuration loaded from file");
        Ok(config)
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    ["gatescan.toml", "gatescan.json"]
        .iter()
        .map(Path::new)
        .find(|candidate| candidate.exists())
        .map(Path::to_path_buf)
}
