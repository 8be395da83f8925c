//! Error types for ThingsML decoding and normalization

use thingsml_senml::SenMLError;
use thiserror::Error;

/// Result type alias for ThingsML operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why the payload bytes could not be read as a ThingsML pack
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Malformed JSON, or JSON of the wrong shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CBOR
    #[error("invalid CBOR: {0}")]
    Cbor(#[from] ciborium::de::Error<std::io::Error>),

    /// Well-formed CBOR whose values do not fit the record fields
    #[error("invalid CBOR record: {0}")]
    Layout(#[from] ciborium::value::Error),

    /// Well-formed CBOR that is not an array of maps
    #[error("invalid CBOR structure: {0}")]
    Labels(#[source] SenMLError),

    /// Bytes left over after the CBOR data item
    #[error("{count} trailing bytes after CBOR data item")]
    TrailingBytes { count: usize },

    /// Payload larger than the configured limit
    #[error("payload of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },
}

/// Errors returned by the decode-then-normalize entry points
///
/// Every decode failure is reported as [`Error::Unmarshal`] whatever the wire
/// format, so callers can tell malformed input from invalid telemetry with a
/// single match. Validation failures from normalization are passed through
/// untouched as [`Error::Invalid`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot unmarshal ThingsML: {0}")]
    Unmarshal(#[from] DecodeError),

    #[error(transparent)]
    Invalid(#[from] SenMLError),
}

impl Error {
    /// Whether the payload could not be decoded at all
    pub fn is_unmarshal(&self) -> bool {
        matches!(self, Self::Unmarshal(_))
    }

    /// The validation failure, if the payload decoded but did not normalize
    pub fn validation(&self) -> Option<&SenMLError> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Unmarshal(_) => None,
        }
    }

    /// The decode failure, if any
    pub fn decode(&self) -> Option<&DecodeError> {
        match self {
            Self::Unmarshal(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
