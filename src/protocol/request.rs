//! Capture request wire types and request building.
//!
//! Building a request is pure data transformation: device identity is
//! copied from the descriptor, the symbolic subtype is resolved to its
//! protocol code, and caller detail passes through untouched. The only
//! failure path is an unrecognized subtype name.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::device::{resolve_subtype_code, DeviceDescriptor, UnknownSubtypeError};

/// Protocol version stamped into every capture request.
pub const PROTOCOL_VERSION: &str = "0.9.5";

/// HTTP method token for capture calls issued during registration.
pub const REGISTRATION_CAPTURE_METHOD: &str = "RCAPTURE";

/// HTTP method token for ad-hoc capture calls.
pub const CAPTURE_METHOD: &str = "CAPTURE";

/// Process context that selects the registration method token.
pub const REGISTRATION_PROCESS: &str = "Registration";

/// Caller-supplied detail for one capture or stream call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestDetail {
    /// Process context, e.g. `Registration` or an ad-hoc flow name.
    pub process: String,
    /// Requested modality, e.g. `FIR`, `IIR`, `Face`.
    pub modality: String,
    /// Symbolic subtype name, resolved through the fixed table.
    pub subtype: String,
    /// Number of samples the device should acquire.
    pub count: u32,
    /// Requested exposure, device-specific units, passed through.
    pub exposure: u32,
    /// Minimum quality score the device should aim for.
    pub requested_score: u32,
    /// Device-side acquisition timeout in milliseconds.
    pub timeout_ms: u64,
}

impl RequestDetail {
    /// Creates a detail with the required fields and passthrough
    /// defaults the device service accepts.
    pub fn new(
        process: impl Into<String>,
        modality: impl Into<String>,
        subtype: impl Into<String>,
    ) -> Self {
        Self {
            process: process.into(),
            modality: modality.into(),
            subtype: subtype.into(),
            count: 1,
            exposure: 0,
            requested_score: 0,
            timeout_ms: 10_000,
        }
    }

    /// Whether this call runs in the registration process context.
    pub fn is_registration(&self) -> bool {
        self.process == REGISTRATION_PROCESS
    }
}

/// Outbound capture request as the device service expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    /// Process context the capture runs under.
    pub purpose: String,
    /// Device protocol version.
    pub spec_version: String,
    /// Device-side acquisition timeout in milliseconds.
    pub timeout: u64,
    /// RFC 3339 timestamp of request construction.
    pub capture_time: String,
    /// Per-modality capture blocks. One per request at this layer.
    pub bio: Vec<BioCaptureDetail>,
}

/// One per-modality block of a capture request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BioCaptureDetail {
    /// Requested modality.
    #[serde(rename = "type")]
    pub bio_type: String,
    /// Number of samples to acquire.
    pub count: u32,
    /// Requested exposure, device-specific units.
    pub exposure: u32,
    /// Minimum quality score the device should aim for.
    pub requested_score: u32,
    /// Device identifier from the descriptor.
    pub device_id: String,
    /// Resolved subtype code.
    pub device_sub_id: i32,
    /// Hash of the previous sample in a capture sequence; empty for
    /// the first capture.
    pub previous_hash: String,
}

impl CaptureRequest {
    /// Builds a request from device identity plus caller detail.
    pub fn build(
        descriptor: &DeviceDescriptor,
        detail: &RequestDetail,
    ) -> Result<Self, UnknownSubtypeError> {
        let device_sub_id = resolve_subtype_code(&detail.subtype)?;
        Ok(Self {
            purpose: detail.process.clone(),
            spec_version: PROTOCOL_VERSION.to_string(),
            timeout: detail.timeout_ms,
            capture_time: Utc::now().to_rfc3339(),
            bio: vec![BioCaptureDetail {
                bio_type: detail.modality.clone(),
                count: detail.count,
                exposure: detail.exposure,
                requested_score: detail.requested_score,
                device_id: descriptor.device_id.clone(),
                device_sub_id,
                previous_hash: String::new(),
            }],
        })
    }

    /// Returns the HTTP method token this request must be sent with.
    ///
    /// The device protocol reuses the HTTP request-line method for its
    /// own tokens; the literal strings are a wire-compatibility
    /// requirement.
    pub fn method_token(detail: &RequestDetail) -> &'static str {
        if detail.is_registration() {
            REGISTRATION_CAPTURE_METHOD
        } else {
            CAPTURE_METHOD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_scenario() {
        let descriptor = DeviceDescriptor::new("http://127.0.0.1", 4501);
        let detail = RequestDetail::new("Registration", "FIR", "LEFT");

        let request = CaptureRequest::build(&descriptor, &detail).unwrap();
        assert_eq!(request.bio.len(), 1);
        assert_eq!(request.bio[0].device_sub_id, 1);
        assert_eq!(CaptureRequest::method_token(&detail), "RCAPTURE");
        assert_eq!(
            descriptor.endpoint_url("capture"),
            "http://127.0.0.1:4501/capture"
        );
    }

    #[test]
    fn test_adhoc_process_uses_capture_token() {
        let detail = RequestDetail::new("Onboarding", "FIR", "RIGHT");
        assert_eq!(CaptureRequest::method_token(&detail), "CAPTURE");
    }

    #[test]
    fn test_build_copies_device_identity() {
        let mut descriptor = DeviceDescriptor::new("http://127.0.0.1", 4501);
        descriptor.device_id = "FP-01".to_string();
        let detail = RequestDetail::new("Registration", "FIR", "THUMBS");

        let request = CaptureRequest::build(&descriptor, &detail).unwrap();
        assert_eq!(request.bio[0].device_id, "FP-01");
        assert_eq!(request.bio[0].device_sub_id, 3);
        assert_eq!(request.purpose, "Registration");
        assert_eq!(request.spec_version, PROTOCOL_VERSION);
    }

    #[test]
    fn test_build_rejects_unknown_subtype() {
        let descriptor = DeviceDescriptor::new("http://127.0.0.1", 4501);
        let detail = RequestDetail::new("Registration", "FIR", "PINKY");
        assert!(CaptureRequest::build(&descriptor, &detail).is_err());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let descriptor = DeviceDescriptor::new("http://127.0.0.1", 4501);
        let detail = RequestDetail::new("Registration", "FIR", "LEFT");

        let request = CaptureRequest::build(&descriptor, &detail).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("specVersion").is_some());
        assert!(json.get("captureTime").is_some());
        let bio = &json["bio"][0];
        assert!(bio.get("type").is_some());
        assert!(bio.get("deviceSubId").is_some());
        assert!(bio.get("requestedScore").is_some());
    }
}
