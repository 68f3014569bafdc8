//! Slap/position subtype names and their device protocol codes.
//!
//! The device protocol addresses capture positions with small integer
//! codes. The UI layer works with symbolic names. The mapping between
//! the two is fixed for every device, so it lives here as static data
//! rather than per-descriptor state.

use thiserror::Error;

/// Error returned when a symbolic subtype name is not recognized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown capture subtype: {0:?}")]
pub struct UnknownSubtypeError(pub String);

/// Symbolic slap/position subtype presented by the UI layer.
///
/// Note that the protocol codes are not unique per name: `THUMBS` and
/// `DOUBLE` share code 3, `FACE` and `SINGLE` share code 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtype {
    /// Left-hand slap.
    Left,
    /// Right-hand slap.
    Right,
    /// Two-thumb slap.
    Thumbs,
    /// Face capture.
    Face,
    /// Double iris capture.
    Double,
    /// Single iris capture.
    Single,
}

impl Subtype {
    /// All recognized subtypes, in protocol order.
    pub const ALL: [Subtype; 6] = [
        Subtype::Left,
        Subtype::Right,
        Subtype::Thumbs,
        Subtype::Face,
        Subtype::Double,
        Subtype::Single,
    ];

    /// Returns the device protocol code for this subtype.
    pub const fn code(self) -> i32 {
        match self {
            Subtype::Left => 1,
            Subtype::Right => 2,
            Subtype::Thumbs => 3,
            Subtype::Face => 0,
            Subtype::Double => 3,
            Subtype::Single => 0,
        }
    }

    /// Returns the symbolic name as the UI layer presents it.
    pub const fn name(self) -> &'static str {
        match self {
            Subtype::Left => "LEFT",
            Subtype::Right => "RIGHT",
            Subtype::Thumbs => "THUMBS",
            Subtype::Face => "FACE",
            Subtype::Double => "DOUBLE",
            Subtype::Single => "SINGLE",
        }
    }

    /// Looks up a subtype by its symbolic name.
    ///
    /// The lookup is exact: names are upper-case and unknown names are
    /// an error, never a silent default.
    pub fn from_name(name: &str) -> Result<Self, UnknownSubtypeError> {
        match name {
            "LEFT" => Ok(Subtype::Left),
            "RIGHT" => Ok(Subtype::Right),
            "THUMBS" => Ok(Subtype::Thumbs),
            "FACE" => Ok(Subtype::Face),
            "DOUBLE" => Ok(Subtype::Double),
            "SINGLE" => Ok(Subtype::Single),
            other => Err(UnknownSubtypeError(other.to_string())),
        }
    }
}

impl std::str::FromStr for Subtype {
    type Err = UnknownSubtypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subtype::from_name(s)
    }
}

impl std::fmt::Display for Subtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a symbolic subtype name to its device protocol code.
pub fn resolve_subtype_code(name: &str) -> Result<i32, UnknownSubtypeError> {
    Subtype::from_name(name).map(Subtype::code)
}
