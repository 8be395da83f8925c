//! Shared payload fixtures for tests, benches and fuzz seeds
//!
//! Every `*_JSON` and `*_CBOR` payload here describes the same two readings
//! and normalizes to [`expected_pack`].

use crate::{NormalizedPack, NormalizedRecord, SenMLValue};

pub const DEVICE: &str = "urn:dev:mac:abcd1234:";
pub const TIME: f64 = 1686429251.0;
pub const TEMPERATURE: f64 = 23.76;
pub const HUMIDITY: f64 = 47.25;

/// Absolute names, units and times on every record
pub const NORMALIZED_JSON: &str = r#"[{
    "n": "urn:dev:mac:abcd1234:temperature",
    "t": 1686429251,
    "u": "Cel",
    "v": 23.76
}, {
    "n": "urn:dev:mac:abcd1234:humidity",
    "t": 1686429251,
    "u": "%RH",
    "v": 47.25
}]"#;

/// Base name and base time on the first record, relative times
pub const DENORMALIZED_JSON: &str = r#"[{
    "bn": "urn:dev:mac:abcd1234:",
    "bt": 1686429250,
    "n": "temperature",
    "u": "Cel",
    "v": 23.76,
    "t": 1
}, {
    "n": "humidity",
    "u": "%RH",
    "v": 47.25,
    "t": 1
}]"#;

/// Measurement indices in place of names and units
pub const THINGSML_JSON: &str = r#"[{
    "bn": "urn:dev:mac:abcd1234:",
    "bt": 1686429251,
    "i_": -24,
    "v": 23.76
}, {
    "i_": -23,
    "v": 47.25
}]"#;

/// CBOR form of [`NORMALIZED_JSON`]
pub const NORMALIZED_CBOR: &[u8] = &[
    0x82, 0xa4, 0x00, 0x78, 0x20, 0x75, 0x72, 0x6e, 0x3a, 0x64, 0x65, 0x76, 0x3a, 0x6d, 0x61, 0x63,
    0x3a, 0x61, 0x62, 0x63, 0x64, 0x31, 0x32, 0x33, 0x34, 0x3a, 0x74, 0x65, 0x6d, 0x70, 0x65, 0x72,
    0x61, 0x74, 0x75, 0x72, 0x65, 0x06, 0x1a, 0x64, 0x84, 0xde, 0x43, 0x01, 0x63, 0x43, 0x65, 0x6c,
    0x02, 0xfb, 0x40, 0x37, 0xc2, 0x8f, 0x5c, 0x28, 0xf5, 0xc3, 0xa4, 0x00, 0x78, 0x1d, 0x75, 0x72,
    0x6e, 0x3a, 0x64, 0x65, 0x76, 0x3a, 0x6d, 0x61, 0x63, 0x3a, 0x61, 0x62, 0x63, 0x64, 0x31, 0x32,
    0x33, 0x34, 0x3a, 0x68, 0x75, 0x6d, 0x69, 0x64, 0x69, 0x74, 0x79, 0x06, 0x1a, 0x64, 0x84, 0xde,
    0x43, 0x01, 0x63, 0x25, 0x52, 0x48, 0x02, 0xfb, 0x40, 0x47, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// CBOR form of [`DENORMALIZED_JSON`]
pub const DENORMALIZED_CBOR: &[u8] = &[
    0x82, 0xa6, 0x21, 0x75, 0x75, 0x72, 0x6e, 0x3a, 0x64, 0x65, 0x76, 0x3a, 0x6d, 0x61, 0x63, 0x3a,
    0x61, 0x62, 0x63, 0x64, 0x31, 0x32, 0x33, 0x34, 0x3a, 0x22, 0x1a, 0x64, 0x84, 0xde, 0x42, 0x00,
    0x6b, 0x74, 0x65, 0x6d, 0x70, 0x65, 0x72, 0x61, 0x74, 0x75, 0x72, 0x65, 0x01, 0x63, 0x43, 0x65,
    0x6c, 0x02, 0xfb, 0x40, 0x37, 0xc2, 0x8f, 0x5c, 0x28, 0xf5, 0xc3, 0x06, 0x01, 0xa4, 0x00, 0x68,
    0x68, 0x75, 0x6d, 0x69, 0x64, 0x69, 0x74, 0x79, 0x01, 0x63, 0x25, 0x52, 0x48, 0x02, 0xfb, 0x40,
    0x47, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x01,
];

/// CBOR form of [`THINGSML_JSON`]
pub const THINGSML_CBOR: &[u8] = &[
    0x82, 0xa5, 0x21, 0x75, 0x75, 0x72, 0x6e, 0x3a, 0x64, 0x65, 0x76, 0x3a, 0x6d, 0x61, 0x63, 0x3a,
    0x61, 0x62, 0x63, 0x64, 0x31, 0x32, 0x33, 0x34, 0x3a, 0x22, 0x1a, 0x64, 0x84, 0xde, 0x42, 0x02,
    0xfb, 0x40, 0x37, 0xc2, 0x8f, 0x5c, 0x28, 0xf5, 0xc3, 0x06, 0x01, 0x17, 0x37, 0xa3, 0x02, 0xfb,
    0x40, 0x47, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06, 0x01, 0x17, 0x36,
];

/// The normalized result every fixture payload must produce
pub fn expected_pack() -> NormalizedPack {
    let record = |measurement: &str, unit: &str, value: f64| NormalizedRecord {
        name: format!("{DEVICE}{measurement}"),
        unit: Some(unit.to_string()),
        value: Some(SenMLValue::Number(value)),
        sum: None,
        time: TIME,
        update_time: None,
    };

    NormalizedPack {
        records: vec![
            record("temperature", "Cel", TEMPERATURE),
            record("humidity", "%RH", HUMIDITY),
        ],
        version: None,
    }
}

/// All JSON fixtures with a short label
pub fn json_payloads() -> [(&'static str, &'static [u8]); 3] {
    [
        ("normalized senml", NORMALIZED_JSON.as_bytes()),
        ("denormalized senml", DENORMALIZED_JSON.as_bytes()),
        ("denormalized thingsml", THINGSML_JSON.as_bytes()),
    ]
}

/// All CBOR fixtures with a short label
pub fn cbor_payloads() -> [(&'static str, &'static [u8]); 3] {
    [
        ("normalized senml", NORMALIZED_CBOR),
        ("denormalized senml", DENORMALIZED_CBOR),
        ("denormalized thingsml", THINGSML_CBOR),
    ]
}
