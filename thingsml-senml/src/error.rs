//! Error types for SenML operations

use thiserror::Error;

/// Result type alias for SenML operations
pub type Result<T> = std::result::Result<T, SenMLError>;

/// Errors that can occur during SenML operations
///
/// The validation variants carry the position of the offending record in the
/// pack. Normalization stops at the first violation, so a failed call reports
/// exactly one of them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SenMLError {
    /// Resolved name (base name + name) is empty
    #[error("record {index}: resolved name is empty")]
    EmptyName { index: usize },

    /// Resolved name contains a character outside the allowed set
    #[error("record {index}: name '{name}' contains invalid characters")]
    BadChar { index: usize, name: String },

    /// More than one of v, vs, vb, vd is present
    #[error("record {index}: too many values")]
    TooManyValues { index: usize },

    /// None of v, vs, vb, vd, s is present and no base sum applies
    #[error("record {index}: no value or sum")]
    NoValues { index: usize },

    /// Base version differs from the one already seen in the pack
    #[error("record {index}: base version changed from {expected} to {found}")]
    VersionChange {
        index: usize,
        expected: u64,
        found: u64,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    /// Deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError { message: String },
}

impl SenMLError {
    /// Create a bad character error
    pub fn bad_char<S: Into<String>>(index: usize, name: S) -> Self {
        Self::BadChar {
            index,
            name: name.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a deserialization error
    pub fn deserialization<S: Into<String>>(message: S) -> Self {
        Self::DeserializationError {
            message: message.into(),
        }
    }

    /// Index of the record that failed validation, if this is a validation error
    pub fn record_index(&self) -> Option<usize> {
        match self {
            Self::EmptyName { index }
            | Self::BadChar { index, .. }
            | Self::TooManyValues { index }
            | Self::NoValues { index }
            | Self::VersionChange { index, .. } => Some(*index),
            Self::SerializationError { .. } | Self::DeserializationError { .. } => None,
        }
    }

    /// Whether this error was raised by normalization rather than a codec
    pub fn is_validation(&self) -> bool {
        self.record_index().is_some()
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for SenMLError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            Self::deserialization(err.to_string())
        } else {
            Self::serialization(err.to_string())
        }
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::de::Error<std::io::Error>> for SenMLError {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Self::deserialization(err.to_string())
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::ser::Error<std::io::Error>> for SenMLError {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SenMLError::bad_char(1, "rotação");
        assert!(matches!(err, SenMLError::BadChar { index: 1, .. }));
        assert_eq!(
            err.to_string(),
            "record 1: name 'rotação' contains invalid characters"
        );
    }

    #[test]
    fn test_record_index() {
        assert_eq!(SenMLError::NoValues { index: 3 }.record_index(), Some(3));
        assert!(SenMLError::EmptyName { index: 0 }.is_validation());
        assert!(!SenMLError::deserialization("eof").is_validation());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: SenMLError = err.into();
        assert!(matches!(err, SenMLError::DeserializationError { .. }));
    }
}
