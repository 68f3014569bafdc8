//! Client configuration.
//!
//! The reference device service mounts its endpoints at `capture` and
//! `stream`; both paths stay configurable for nonstandard deployments.
//! Timeouts are explicit on both call paths so an absent or stalled
//! device fails the call instead of hanging on transport defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::protocol::DecodePolicy;

/// Configuration for a [`DeviceClient`](crate::client::DeviceClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service path for capture calls.
    pub capture_path: String,
    /// Service path for preview stream calls.
    pub stream_path: String,
    /// Connection establishment timeout in milliseconds, both paths.
    pub connect_timeout_ms: u64,
    /// Whole-call timeout for capture in milliseconds.
    pub capture_timeout_ms: u64,
    /// How long a stream call waits for the device to begin responding,
    /// in milliseconds.
    pub stream_read_timeout_ms: u64,
    /// What to do when an entry payload fails to decode.
    pub decode_policy: DecodePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            capture_path: "capture".to_string(),
            stream_path: "stream".to_string(),
            connect_timeout_ms: 2_000,
            capture_timeout_ms: 30_000,
            stream_read_timeout_ms: 5_000,
            decode_policy: DecodePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture_path.is_empty() || self.stream_path.is_empty() {
            return Err(ConfigError::EmptyEndpointPath);
        }
        if self.capture_path.starts_with('/') || self.stream_path.starts_with('/') {
            return Err(ConfigError::AbsoluteEndpointPath);
        }
        if self.connect_timeout_ms == 0
            || self.capture_timeout_ms == 0
            || self.stream_read_timeout_ms == 0
        {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Connection establishment timeout.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Whole-call capture timeout.
    pub fn capture_timeout(&self) -> Duration {
        Duration::from_millis(self.capture_timeout_ms)
    }

    /// Stream read timeout.
    pub fn stream_read_timeout(&self) -> Duration {
        Duration::from_millis(self.stream_read_timeout_ms)
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        let config: ClientConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("endpoint path is empty")]
    EmptyEndpointPath,
    #[error("endpoint path must not start with '/'")]
    AbsoluteEndpointPath,
    #[error("timeouts must be non-zero")]
    ZeroTimeout,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}
