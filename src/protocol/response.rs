//! Capture response wire types.
//!
//! The outer envelope is plain JSON; each entry's biometric payload is
//! a Base64 string that itself contains a JSON document. Field names
//! here are dictated by the device service and must match the wire
//! exactly.

use serde::{Deserialize, Serialize};

use super::decode::DecodeError;

/// Status block the device service attaches to envelopes and entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceStatus {
    /// Device-reported status code (`"0"` means success).
    pub error_code: String,
    /// Human-readable status text.
    pub error_info: String,
}

/// Outer capture response returned by the device service.
///
/// An absent or empty entry list is a normal outcome (e.g. the operator
/// cancelled at the device), not an error.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureResponseEnvelope {
    /// Per-modality response entries.
    #[serde(rename = "mosipBioDeviceDataResponses")]
    pub data_responses: Vec<CaptureResponseEntry>,
    /// Envelope-level device status, if the service reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DeviceStatus>,
}

impl CaptureResponseEnvelope {
    /// Iterates over the entries that decoded successfully.
    pub fn decoded(&self) -> impl Iterator<Item = &DecodedCaptureData> {
        self.data_responses
            .iter()
            .filter_map(|entry| entry.decoded.as_ref())
    }
}

/// One per-modality element of the capture response.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureResponseEntry {
    /// Base64-encoded inner JSON document; absent when the device
    /// produced no sample for this modality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_bio_data: Option<String>,
    /// Per-entry device status, if the service reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DeviceStatus>,
    /// Decoded payload, populated by the decode step. Never serialized
    /// back onto the wire.
    #[serde(skip)]
    pub decoded: Option<DecodedCaptureData>,
    /// Decode failure recorded under the collecting decode policy.
    #[serde(skip)]
    pub decode_failure: Option<DecodeError>,
}

/// Structured result of decoding one entry's inner JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodedCaptureData {
    /// Biometric category, e.g. `FIR`, `IIR`, `Face`.
    pub bio_type: String,
    /// Position within the category, e.g. `Left IndexFinger`.
    pub bio_sub_type: String,
    /// The biometric sample itself, opaque at this layer.
    pub bio_value: String,
    /// Quality score reported by the device, as the device sends it.
    pub quality_score: String,
    /// Device-reported error code for this sample, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wire_field_names() {
        let envelope: CaptureResponseEnvelope = serde_json::from_str(
            r#"{
                "mosipBioDeviceDataResponses": [
                    {"captureBioData": "Zm9v", "error": {"errorCode": "0", "errorInfo": "success"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.data_responses.len(), 1);
        let entry = &envelope.data_responses[0];
        assert_eq!(entry.capture_bio_data.as_deref(), Some("Zm9v"));
        assert_eq!(entry.error.as_ref().unwrap().error_code, "0");
        assert!(entry.decoded.is_none());
    }

    #[test]
    fn test_empty_envelope_is_valid() {
        let envelope: CaptureResponseEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data_responses.is_empty());
        assert!(envelope.error.is_none());
        assert_eq!(envelope.decoded().count(), 0);
    }

    #[test]
    fn test_decoded_data_uses_camel_case() {
        let data: DecodedCaptureData = serde_json::from_str(
            r#"{"bioType": "FIR", "bioSubType": "Left Slap", "bioValue": "abc", "qualityScore": "82"}"#,
        )
        .unwrap();
        assert_eq!(data.bio_type, "FIR");
        assert_eq!(data.quality_score, "82");
        assert_eq!(data.error_code, None);
    }

    #[test]
    fn test_decoded_payload_never_serializes() {
        let entry = CaptureResponseEntry {
            capture_bio_data: Some("Zm9v".to_string()),
            decoded: Some(DecodedCaptureData::default()),
            ..Default::default()
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("decoded").is_none());
        assert!(json.get("captureBioData").is_some());
    }
}
