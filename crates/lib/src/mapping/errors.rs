//! Error types for mapping and conversion.
//!
//! Most of these describe conditions that the converters tolerate in
//! [`Mode::Lenient`](crate::Mode::Lenient) and report in
//! [`Mode::Strict`](crate::Mode::Strict); see [`MapError::is_recoverable`].

use thiserror::Error;

use crate::Kind;

/// Structured error types for mapping records to and from maps.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The field is not visible outside its module and cannot be written
    #[error("Field '{field}' is not settable")]
    FieldNotSettable { field: String },

    /// The assigned value's kind does not fit the field
    #[error("Kind mismatch on field '{field}': expected {expected}, found {found}")]
    KindMismatch {
        field: String,
        expected: String,
        found: String,
    },

    /// A source key matched no mapped field and there is no catch-all
    #[error("No field mapped for key '{key}'")]
    UnmatchedKey { key: String },

    /// The `inline` flag was set on a field that cannot be flattened
    #[error("Field '{field}' of kind {kind} cannot be inlined")]
    InlineUnsupported { field: String, kind: Kind },

    /// A second inline map field replaced an earlier catch-all
    #[error("Catch-all field '{previous}' overwritten by '{field}'")]
    CatchAllOverwritten { field: String, previous: String },

    /// A mapped field could not be reached through its containers
    #[error("Field '{field}' is unreachable")]
    FieldUnreachable { field: String },

    /// Inline fields nest deeper than the configured limit
    #[error("Inline nesting exceeds {limit} levels at field '{field}'")]
    InlineDepthExceeded { field: String, limit: usize },
}

impl MapError {
    /// Check if lenient conversions may ignore this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, MapError::InlineDepthExceeded { .. })
    }

    /// Check if this error was raised by a rejected field write
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            MapError::FieldNotSettable { .. }
                | MapError::KindMismatch { .. }
                | MapError::FieldUnreachable { .. }
        )
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, MapError::KindMismatch { .. })
    }

    /// Check if this error was raised while building mappings
    pub fn is_mapping_error(&self) -> bool {
        matches!(
            self,
            MapError::InlineUnsupported { .. }
                | MapError::CatchAllOverwritten { .. }
                | MapError::InlineDepthExceeded { .. }
        )
    }

    /// Get the field name if this error concerns a field
    pub fn field(&self) -> Option<&str> {
        match self {
            MapError::FieldNotSettable { field }
            | MapError::KindMismatch { field, .. }
            | MapError::InlineUnsupported { field, .. }
            | MapError::CatchAllOverwritten { field, .. }
            | MapError::FieldUnreachable { field }
            | MapError::InlineDepthExceeded { field, .. } => Some(field),
            MapError::UnmatchedKey { .. } => None,
        }
    }

    /// Get the key if this error concerns an unmatched source key
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::UnmatchedKey { key } => Some(key),
            _ => None,
        }
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
