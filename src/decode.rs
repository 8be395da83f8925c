//! Decoding ThingsML packs from JSON and CBOR

use std::fmt;

use thingsml_senml::cbor::{self, Label};
use thingsml_senml::content_format;

use crate::{DecodeError, Pack};

/// CBOR labels: the RFC 8428 set plus the measurement index
pub const THINGSML_LABELS: &[Label] = &[
    Label::other(-1, "bver"),
    Label::other(-2, "bn"),
    Label::number(-3, "bt"),
    Label::other(-4, "bu"),
    Label::number(-5, "bv"),
    Label::number(-6, "bs"),
    Label::other(0, "n"),
    Label::other(1, "u"),
    Label::number(2, "v"),
    Label::other(3, "vs"),
    Label::other(4, "vb"),
    Label::number(5, "s"),
    Label::number(6, "t"),
    Label::number(7, "ut"),
    Label::other(8, "vd"),
    Label::other(23, "i_"),
];

/// CoAP Content-Format for application/json
const COAP_JSON: u16 = 50;
/// CoAP Content-Format for application/cbor
const COAP_CBOR: u16 = 60;

/// Wire formats a pack can be decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Array of objects keyed by short labels
    #[default]
    Json,
    /// Array of maps keyed by integer labels
    Cbor,
}

impl Format {
    /// Pick a format from a CoAP Content-Format number
    pub fn from_content_format(id: u16) -> Option<Self> {
        match id {
            content_format::SENML_JSON | content_format::SENSML_JSON | COAP_JSON => {
                Some(Self::Json)
            }
            content_format::SENML_CBOR | content_format::SENSML_CBOR | COAP_CBOR => {
                Some(Self::Cbor)
            }
            _ => None,
        }
    }

    /// Pick a format from a media type, ignoring parameters
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/senml+json" | "application/sensml+json" | "application/json" => {
                Some(Self::Json)
            }
            "application/senml+cbor" | "application/sensml+cbor" | "application/cbor" => {
                Some(Self::Cbor)
            }
            _ => None,
        }
    }

    /// Decode `bytes` in this format
    pub fn decode(self, bytes: &[u8]) -> Result<Pack, DecodeError> {
        match self {
            Self::Json => decode_json(bytes),
            Self::Cbor => decode_cbor(bytes),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Cbor => f.write_str("cbor"),
        }
    }
}

/// Decode a JSON array of records
pub fn decode_json(bytes: &[u8]) -> Result<Pack, DecodeError> {
    let pack: Pack = serde_json::from_slice(bytes)?;
    tracing::debug!(format = %Format::Json, records = pack.len(), "decoded ThingsML pack");
    Ok(pack)
}

/// Decode a CBOR array of integer-labelled maps
///
/// The input must hold exactly one CBOR data item.
pub fn decode_cbor(bytes: &[u8]) -> Result<Pack, DecodeError> {
    let (value, consumed) = cbor::read_item(bytes)?;
    if consumed < bytes.len() {
        return Err(DecodeError::TrailingBytes {
            count: bytes.len() - consumed,
        });
    }

    let value = cbor::from_labels(value, THINGSML_LABELS).map_err(DecodeError::Labels)?;
    let pack: Pack = value.deserialized()?;
    tracing::debug!(format = %Format::Cbor, records = pack.len(), "decoded ThingsML pack");
    Ok(pack)
}
