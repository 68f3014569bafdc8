//! Device identity and connection facts.
//!
//! A descriptor is produced once when the device service is discovered
//! and stays immutable for the lifetime of a capture session. The
//! client borrows it per call and never owns it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by descriptor precondition checks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("device host is empty")]
    MissingHost,
    #[error("device port is zero")]
    InvalidPort,
}

/// Identity and connection facts for one biometric capture device.
///
/// `host` is scheme-qualified (e.g. `http://127.0.0.1`); the port is
/// carried separately because the device service advertises them that
/// way during discovery. Everything else is identity metadata reported
/// by the device and passed through into capture requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceDescriptor {
    /// Device category, e.g. `Fingerprint`, `Iris`, `Face`.
    pub device_type: String,
    /// Device subtype reported at discovery, e.g. `Slap`, `Single`.
    pub device_sub_type: String,
    /// Capture modality the device serves.
    pub modality: String,
    /// Scheme-qualified host the device service listens on.
    pub host: String,
    /// Port the device service listens on.
    pub port: u16,
    /// Human-readable provider name.
    pub provider_name: String,
    /// Provider identifier.
    pub provider_id: String,
    /// Device serial number.
    pub serial_number: String,
    /// Certification level reported by the device.
    pub certification: String,
    /// Device model.
    pub model: String,
    /// Device make.
    pub make: String,
    /// Firmware version.
    pub firmware: String,
    /// Device expiry date as reported at discovery.
    pub expiry: String,
    /// Device identifier used in capture requests.
    pub device_id: String,
    /// Discovery timestamp as reported by the device service.
    pub timestamp: String,
}

impl DeviceDescriptor {
    /// Creates a descriptor with connection facts only.
    ///
    /// Identity metadata defaults to empty; discovery code fills it in.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Checks the preconditions every call requires.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.host.is_empty() {
            return Err(DescriptorError::MissingHost);
        }
        if self.port == 0 {
            return Err(DescriptorError::InvalidPort);
        }
        Ok(())
    }

    /// Composes the endpoint URL for the given service path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}:{}/{}", self.host, self.port, path)
    }
}
