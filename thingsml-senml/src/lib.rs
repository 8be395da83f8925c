//! # ThingsML SenML - Sensor Measurement Lists for Rust
//!
//! A Rust implementation of [RFC 8428](https://tools.ietf.org/html/rfc8428) - Sensor Measurement Lists (SenML).
//!
//! SenML is a format for representing simple sensor measurements and device parameters
//! in a structured way. This crate provides the record model, the JSON and CBOR
//! representations, and normalization: resolving base fields into absolute
//! per-record values while checking the pack is well formed.
//!
//! ## Quick Start
//!
//! ```rust
//! use thingsml_senml::{SenMLPack, Result};
//!
//! fn example() -> Result<()> {
//!     let pack = SenMLPack::from_json(
//!         r#"[{"bn":"urn:dev:sensor1:","bt":1686429250,"n":"temp","u":"Cel","v":22.5,"t":1}]"#,
//!     )?;
//!
//!     let normalized = pack.normalize()?;
//!     assert_eq!(normalized.records[0].name, "urn:dev:sensor1:temp");
//!     assert_eq!(normalized.records[0].time, 1686429251.0);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## SenML Data Model
//!
//! SenML represents sensor data as an array of records, where each record can contain:
//! - **Base fields**: Apply to this and later records (bn, bt, bu, bv, bs, bver)
//! - **Record fields**: Individual measurements (n, u, v, vs, vb, vd, s, t, ut)

pub mod error;
pub mod normalize;
pub mod pack;
pub mod record;
pub mod validation;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "cbor")]
pub mod cbor;

// Re-export main types
pub use error::{Result, SenMLError};
pub use normalize::{NormalizedPack, NormalizedRecord};
pub use pack::{BaseValues, SenMLPack};
pub use record::{SenMLRecord, SenMLValue};

/// SenML Content-Format identifiers for CoAP
pub mod content_format {
    /// application/senml+json
    pub const SENML_JSON: u16 = 110;
    /// application/sensml+json
    pub const SENSML_JSON: u16 = 111;
    /// application/senml+cbor
    pub const SENML_CBOR: u16 = 112;
    /// application/sensml+cbor
    pub const SENSML_CBOR: u16 = 113;
}
