//! Device protocol wire types and transformations.
//!
//! Everything that crosses the wire lives here: the outbound capture
//! request, the response envelope with its Base64-wrapped inner
//! documents, and the two-stage decode that turns an opaque payload
//! into structured capture data.

mod decode;
mod request;
mod response;

pub use decode::{
    decode_entry, decode_envelope, decode_payload_text, parse_capture_data, DecodeError,
    DecodePolicy,
};
pub use request::{
    BioCaptureDetail, CaptureRequest, RequestDetail, CAPTURE_METHOD, PROTOCOL_VERSION,
    REGISTRATION_CAPTURE_METHOD, REGISTRATION_PROCESS,
};
pub use response::{
    CaptureResponseEntry, CaptureResponseEnvelope, DecodedCaptureData, DeviceStatus,
};
