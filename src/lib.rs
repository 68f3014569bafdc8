//! Biometric Device Client Library
//!
//! A client-side adapter for a locally-running biometric capture
//! device service: a separate process exposing an HTTP endpoint that
//! triggers fingerprint, iris, and face acquisition and streams
//! preview frames.
//!
//! # Architecture
//!
//! Every call follows the same explicit flow:
//!
//! ```text
//! capture: build request → dispatch → parse envelope → decode payloads
//! preview: build request → dispatch → raw byte stream
//! ```
//!
//! # Design Principles
//!
//! - **Wire fidelity**: the device protocol's method tokens
//!   (`CAPTURE`/`RCAPTURE`) and field names are preserved exactly
//! - **No hidden resilience**: no internal retries, explicit timeouts,
//!   every failure surfaces to the caller as a typed error
//! - **Two-stage decode**: Base64 unwrapping and inner JSON parsing
//!   are independent, separately testable transformations
//!
//! # Example
//!
//! ```no_run
//! use biodevice_client::{DeviceClient, DeviceDescriptor, RequestDetail};
//!
//! let client = DeviceClient::new().unwrap();
//! let descriptor = DeviceDescriptor::new("http://127.0.0.1", 4501);
//! let detail = RequestDetail::new("Registration", "FIR", "LEFT");
//!
//! let envelope = client.capture(&descriptor, &detail).unwrap();
//! for data in envelope.decoded() {
//!     println!("{}: quality {}", data.bio_sub_type, data.quality_score);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod client;
pub mod device;
pub mod protocol;

// Re-export commonly used types at crate root
pub use client::{ClientConfig, ClientError, ConfigError, DeviceClient, PreviewStream};
pub use device::{
    resolve_subtype_code, DescriptorError, DeviceDescriptor, Subtype, UnknownSubtypeError,
};
pub use protocol::{
    CaptureRequest, CaptureResponseEntry, CaptureResponseEnvelope, DecodeError, DecodePolicy,
    DecodedCaptureData, RequestDetail,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
