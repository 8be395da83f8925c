//! # ThingsML
//!
//! Decoding and normalization of ThingsML packs.
//!
//! ThingsML is SenML ([RFC 8428](https://tools.ietf.org/html/rfc8428)) with one
//! extra per-record field, the measurement index `i_`. A known index stands in
//! for the record's name and unit, so constrained devices can send a small
//! integer instead of repeating strings like `"temperature"` and `"Cel"`.
//!
//! Payloads arrive as JSON or CBOR. Either way they are decoded into a
//! [`Pack`], the indices are resolved through the [`registry`], and the result
//! is normalized into absolute records by [`thingsml_senml`].
//!
//! ```rust
//! use thingsml::{Result, normalize_json};
//!
//! fn example() -> Result<()> {
//!     let normalized = normalize_json(
//!         br#"[{"bn":"urn:dev:mac:abcd1234:","bt":1686429251,"i_":-24,"v":23.76},
//!              {"i_":-23,"v":47.25}]"#,
//!     )?;
//!
//!     let humidity = &normalized.records[1];
//!     assert_eq!(humidity.name, "urn:dev:mac:abcd1234:humidity");
//!     assert_eq!(humidity.unit.as_deref(), Some("%RH"));
//!     assert_eq!(humidity.time, 1686429251.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod decode;
pub mod error;
pub mod pack;
pub mod record;
pub mod registry;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use builder::PackBuilder;
pub use config::{Config, Decoder};
pub use decode::{Format, decode_cbor, decode_json};
pub use error::{DecodeError, Error, Result};
pub use pack::Pack;
pub use record::Record;
pub use registry::{Measurement, MeasurementIndex};

// Re-export the SenML types that appear in this crate's API
pub use thingsml_senml::{NormalizedPack, NormalizedRecord, SenMLError, SenMLPack, SenMLValue};

/// Resolve measurement indices and normalize `pack`
///
/// Validation failures are returned as [`Error::Invalid`] carrying the
/// underlying [`SenMLError`].
pub fn normalize(pack: &Pack) -> Result<NormalizedPack> {
    let normalized = pack.to_senml().normalize()?;
    tracing::debug!(
        records = normalized.len(),
        version = ?normalized.version,
        "normalized ThingsML pack"
    );
    Ok(normalized)
}

/// Decode a JSON payload and normalize it
pub fn normalize_json(payload: &[u8]) -> Result<NormalizedPack> {
    let pack = decode_json(payload)?;
    normalize(&pack)
}

/// Decode a CBOR payload and normalize it
pub fn normalize_cbor(payload: &[u8]) -> Result<NormalizedPack> {
    let pack = decode_cbor(payload)?;
    normalize(&pack)
}
