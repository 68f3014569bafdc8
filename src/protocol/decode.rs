//! Two-level decode of capture payloads.
//!
//! Each response entry carries an opaque payload: Base64 text wrapping
//! a UTF-8 JSON document. The two transformations are kept as separate
//! stages so each can be exercised with malformed input on its own.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::response::{CaptureResponseEntry, CaptureResponseEnvelope, DecodedCaptureData};

/// Errors that can occur while decoding an entry payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("payload json does not match capture data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Policy applied when an entry payload fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecodePolicy {
    /// Abort the whole call on the first failing entry.
    #[default]
    FailFast,
    /// Record the failure on the entry and keep decoding the rest.
    Collect,
}

/// Stage 1: Base64 payload text to the inner UTF-8 document.
pub fn decode_payload_text(payload: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD.decode(payload)?;
    Ok(String::from_utf8(bytes)?)
}

/// Stage 2: inner document text to structured capture data.
pub fn parse_capture_data(text: &str) -> Result<DecodedCaptureData, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

/// Decodes one entry in place.
///
/// An absent payload is skipped; only a present-but-malformed payload
/// is an error. Returns whether a payload was decoded.
pub fn decode_entry(entry: &mut CaptureResponseEntry) -> Result<bool, DecodeError> {
    let payload = match entry.capture_bio_data.as_deref() {
        Some(payload) => payload,
        None => return Ok(false),
    };
    let text = decode_payload_text(payload)?;
    entry.decoded = Some(parse_capture_data(&text)?);
    Ok(true)
}

/// Decodes every entry of an envelope under the given policy.
///
/// Under [`DecodePolicy::FailFast`] the first failure aborts and the
/// remaining entries are left untouched. Under [`DecodePolicy::Collect`]
/// each failure is recorded on its entry and decoding continues.
/// Returns the number of entries that decoded.
pub fn decode_envelope(
    envelope: &mut CaptureResponseEnvelope,
    policy: DecodePolicy,
) -> Result<usize, DecodeError> {
    let mut decoded = 0;
    for entry in &mut envelope.data_responses {
        match decode_entry(entry) {
            Ok(true) => decoded += 1,
            Ok(false) => {}
            Err(err) => match policy {
                DecodePolicy::FailFast => return Err(err),
                DecodePolicy::Collect => entry.decode_failure = Some(err),
            },
        }
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode(data: &DecodedCaptureData) -> String {
        STANDARD.encode(serde_json::to_string(data).unwrap())
    }

    fn sample_data() -> DecodedCaptureData {
        DecodedCaptureData {
            bio_type: "FIR".to_string(),
            bio_sub_type: "Left Slap".to_string(),
            bio_value: "c2FtcGxl".to_string(),
            quality_score: "82".to_string(),
            error_code: None,
        }
    }

    #[test]
    fn test_round_trip() {
        let original = sample_data();
        let mut entry = CaptureResponseEntry {
            capture_bio_data: Some(encode(&original)),
            ..Default::default()
        };

        assert!(decode_entry(&mut entry).unwrap());
        assert_eq!(entry.decoded.as_ref().unwrap(), &original);
    }

    #[test]
    fn test_absent_payload_is_skipped() {
        let mut entry = CaptureResponseEntry::default();
        assert!(!decode_entry(&mut entry).unwrap());
        assert!(entry.decoded.is_none());
    }

    #[test]
    fn test_empty_envelope_decodes_to_nothing() {
        let mut envelope = CaptureResponseEnvelope::default();
        assert_eq!(decode_envelope(&mut envelope, DecodePolicy::FailFast).unwrap(), 0);
    }

    #[test]
    fn test_invalid_base64_fails() {
        let mut entry = CaptureResponseEntry {
            capture_bio_data: Some("not-base64!!!".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            decode_entry(&mut entry),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_fails() {
        // 0xFF 0xFE is not valid UTF-8.
        let mut entry = CaptureResponseEntry {
            capture_bio_data: Some(STANDARD.encode([0xFF, 0xFE])),
            ..Default::default()
        };
        assert!(matches!(decode_entry(&mut entry), Err(DecodeError::Utf8(_))));
    }

    #[test]
    fn test_invalid_inner_json_fails() {
        let mut entry = CaptureResponseEntry {
            capture_bio_data: Some(STANDARD.encode("not json")),
            ..Default::default()
        };
        assert!(matches!(decode_entry(&mut entry), Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_fail_fast_aborts_on_first_failure() {
        let mut envelope = CaptureResponseEnvelope {
            data_responses: vec![
                CaptureResponseEntry {
                    capture_bio_data: Some("%%%".to_string()),
                    ..Default::default()
                },
                CaptureResponseEntry {
                    capture_bio_data: Some(encode(&sample_data())),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        assert!(decode_envelope(&mut envelope, DecodePolicy::FailFast).is_err());
        // The later entry was never reached.
        assert!(envelope.data_responses[1].decoded.is_none());
    }

    #[test]
    fn test_collect_records_failure_and_continues() {
        let mut envelope = CaptureResponseEnvelope {
            data_responses: vec![
                CaptureResponseEntry {
                    capture_bio_data: Some("%%%".to_string()),
                    ..Default::default()
                },
                CaptureResponseEntry {
                    capture_bio_data: Some(encode(&sample_data())),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let decoded = decode_envelope(&mut envelope, DecodePolicy::Collect).unwrap();
        assert_eq!(decoded, 1);
        assert!(envelope.data_responses[0].decode_failure.is_some());
        assert!(envelope.data_responses[1].decoded.is_some());
    }

    proptest! {
        #[test]
        fn test_payload_stage_never_panics(payload in "\\PC*") {
            let _ = decode_payload_text(&payload);
        }

        #[test]
        fn test_parse_stage_never_panics(text in "\\PC*") {
            let _ = parse_capture_data(&text);
        }
    }
}
