//! Blocking HTTP client for one biometric device endpoint.
//!
//! The device protocol is synchronous request/response. Capture calls
//! use the protocol's own method tokens (`CAPTURE`/`RCAPTURE`) on the
//! HTTP request line; preview streaming is a plain POST whose response
//! body is consumed by the caller as a raw byte stream.
//!
//! The client keeps no state across calls: each invocation owns its
//! request and response objects and borrows the descriptor read-only,
//! so callers may issue concurrent calls against multiple devices.

mod config;

pub use config::{ClientConfig, ConfigError};

use std::io::{self, Read};

use reqwest::blocking;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use thiserror::Error;

use crate::device::{DescriptorError, DeviceDescriptor, UnknownSubtypeError};
use crate::protocol::{
    decode_envelope, CaptureRequest, CaptureResponseEnvelope, DecodeError, RequestDetail,
};

/// Errors surfaced by device calls.
///
/// Nothing is retried or swallowed internally; every failure reaches
/// the immediate caller.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid device descriptor: {0}")]
    Descriptor(#[from] DescriptorError),
    #[error("invalid client configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Subtype(#[from] UnknownSubtypeError),
    #[error("invalid capture method token: {0}")]
    MethodToken(&'static str),
    #[error("failed to serialize capture request: {0}")]
    Serialize(serde_json::Error),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed capture response: {0}")]
    MalformedResponse(serde_json::Error),
    #[error("capture payload decode failed: {0}")]
    PayloadDecode(#[from] DecodeError),
}

/// Live preview byte stream returned by [`DeviceClient::stream_preview`].
///
/// Finite, single-pass, not restartable. No decoding is applied at
/// this layer; dropping the stream closes the connection.
pub struct PreviewStream {
    inner: blocking::Response,
}

impl Read for PreviewStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl std::fmt::Debug for PreviewStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewStream")
            .field("status", &self.inner.status())
            .field("url", &self.inner.url().as_str())
            .finish()
    }
}

/// Client for a single, already-discovered biometric device endpoint.
pub struct DeviceClient {
    config: ClientConfig,
    capture_http: blocking::Client,
    stream_http: blocking::Client,
}

impl DeviceClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with the given configuration.
    ///
    /// Two transports are prepared up front: capture calls carry a
    /// whole-call timeout, stream calls carry a read timeout only so a
    /// long-running preview is not cut off mid-stream.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let capture_http = blocking::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.capture_timeout())
            .build()?;
        let stream_http = blocking::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(None)
            .read_timeout(config.stream_read_timeout())
            .build()?;
        Ok(Self {
            config,
            capture_http,
            stream_http,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Triggers a capture and returns the decoded response envelope.
    ///
    /// Dispatches one synchronous HTTP call using the protocol method
    /// token selected by the process context, parses the envelope, and
    /// runs the payload decode over every entry under the configured
    /// [`DecodePolicy`](crate::protocol::DecodePolicy).
    pub fn capture(
        &self,
        descriptor: &DeviceDescriptor,
        detail: &RequestDetail,
    ) -> Result<CaptureResponseEnvelope, ClientError> {
        descriptor.validate()?;
        let url = descriptor.endpoint_url(&self.config.capture_path);
        tracing::debug!(url = %url, process = %detail.process, "Starting capture call");

        let request = CaptureRequest::build(descriptor, detail)?;
        let body = serde_json::to_string(&request).map_err(ClientError::Serialize)?;
        let token = CaptureRequest::method_token(detail);
        let method =
            Method::from_bytes(token.as_bytes()).map_err(|_| ClientError::MethodToken(token))?;
        tracing::debug!(method = token, "Capture request built");

        let response = self
            .capture_http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        tracing::debug!(status = %response.status(), "Capture response received");

        let text = response.text()?;
        let mut envelope: CaptureResponseEnvelope =
            serde_json::from_str(&text).map_err(ClientError::MalformedResponse)?;

        let decoded = decode_envelope(&mut envelope, self.config.decode_policy)?;
        for (index, entry) in envelope.data_responses.iter().enumerate() {
            if let Some(ref failure) = entry.decode_failure {
                tracing::warn!(index, error = %failure, "Entry payload failed to decode");
            }
        }
        tracing::debug!(
            decoded,
            entries = envelope.data_responses.len(),
            "Capture decode complete"
        );
        Ok(envelope)
    }

    /// Opens a preview stream and returns its body for the caller to
    /// consume.
    ///
    /// The same request shape as [`capture`](Self::capture) is POSTed
    /// to the stream endpoint. The configured read timeout bounds how
    /// long the call waits for the device to begin responding.
    pub fn stream_preview(
        &self,
        descriptor: &DeviceDescriptor,
        detail: &RequestDetail,
    ) -> Result<PreviewStream, ClientError> {
        descriptor.validate()?;
        let url = descriptor.endpoint_url(&self.config.stream_path);
        tracing::debug!(url = %url, process = %detail.process, "Starting preview stream call");

        let request = CaptureRequest::build(descriptor, detail)?;
        let body = serde_json::to_string(&request).map_err(ClientError::Serialize)?;

        let response = self
            .stream_http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;
        tracing::debug!(status = %response.status(), "Preview stream opened");
        Ok(PreviewStream { inner: response })
    }
}
