//! Stable diagnostic codes for options validation.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A value is outside its allowed range
    InvalidValue,
    /// An include entry was neither a string nor `{word, weight}`
    MalformedEntry,
    /// The sector name has no term list
    UnknownSector,
    /// A field is not part of the schema
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidValue => "invalid_value",
            Self::MalformedEntry => "malformed_entry",
            Self::UnknownSector => "unknown_sector",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
