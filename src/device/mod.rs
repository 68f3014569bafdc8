//! Device identity and subtype handling.
//!
//! This module describes an already-discovered device: its connection
//! facts, its identity metadata, and the fixed mapping from symbolic
//! slap/position names to device protocol codes.

mod descriptor;
mod subtype;

pub use descriptor::{DescriptorError, DeviceDescriptor};
pub use subtype::{resolve_subtype_code, Subtype, UnknownSubtypeError};
