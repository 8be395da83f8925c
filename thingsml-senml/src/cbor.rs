//! CBOR serialization support for SenML
//!
//! RFC 8428 section 6 replaces the JSON labels with small integers in the
//! CBOR representation. Records are mapped through [`ciborium::Value`] so the
//! serde derives on the record types serve both formats: integer keys are
//! renamed to their textual labels before deserializing, and back again after
//! serializing.

use crate::{Result, SenMLError, SenMLPack};
use ciborium::value::{Integer, Value};
use std::io::Cursor;

/// Kind of value carried under a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// IEEE double on the data model side; CBOR integers are widened to floats
    Number,
    /// Anything else, passed through untouched
    Other,
}

/// An integer CBOR label and the JSON label it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub key: i64,
    pub name: &'static str,
    pub kind: LabelKind,
}

impl Label {
    pub const fn number(key: i64, name: &'static str) -> Self {
        Self {
            key,
            name,
            kind: LabelKind::Number,
        }
    }

    pub const fn other(key: i64, name: &'static str) -> Self {
        Self {
            key,
            name,
            kind: LabelKind::Other,
        }
    }
}

/// RFC 8428 labels
pub const SENML_LABELS: &[Label] = &[
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
];

/// Look up the label for an integer key
pub fn label_by_key(labels: &[Label], key: i64) -> Option<&Label> {
    labels.iter().find(|label| label.key == key)
}

/// Look up the label for a textual name
pub fn label_by_name<'a>(labels: &'a [Label], name: &str) -> Option<&'a Label> {
    labels.iter().find(|label| label.name == name)
}

/// Widen integers to floats under numeric labels
fn widen(label: &Label, value: Value) -> Value {
    match (label.kind, value) {
        (LabelKind::Number, Value::Integer(int)) => Value::Float(i128::from(int) as f64),
        (_, value) => value,
    }
}

/// Read the leading CBOR data item of `bytes`, with the number of bytes it
/// occupies
pub fn read_item(
    bytes: &[u8],
) -> std::result::Result<(Value, usize), ciborium::de::Error<std::io::Error>> {
    let mut cursor = Cursor::new(bytes);
    let value: Value = ciborium::de::from_reader(&mut cursor)?;
    Ok((value, cursor.position() as usize))
}

/// Read exactly one CBOR data item from `bytes`
pub fn read_value(bytes: &[u8]) -> Result<Value> {
    let (value, consumed) = read_item(bytes)?;
    if consumed < bytes.len() {
        return Err(SenMLError::deserialization(format!(
            "{} trailing bytes after CBOR item",
            bytes.len() - consumed
        )));
    }

    Ok(value)
}

/// Rename integer keys of every record map to their textual labels.
///
/// Unknown integer keys are dropped, text keys are kept as they are, and any
/// other key type is ignored. Integers under numeric labels become floats.
pub fn from_labels(value: Value, labels: &[Label]) -> Result<Value> {
    let Value::Array(records) = value else {
        return Err(SenMLError::deserialization(
            "expected a CBOR array of records",
        ));
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let Value::Map(entries) = record else {
                return Err(SenMLError::deserialization(format!(
                    "record {index}: expected a CBOR map"
                )));
            };

            let entries = entries
                .into_iter()
                .filter_map(|(key, value)| match key {
                    Value::Integer(key) => i64::try_from(i128::from(key))
                        .ok()
                        .and_then(|key| label_by_key(labels, key))
                        .map(|label| (Value::Text(label.name.to_string()), widen(label, value))),
                    Value::Text(ref name) => {
                        let value = match label_by_name(labels, name) {
                            Some(label) => widen(label, value),
                            None => value,
                        };
                        Some((key, value))
                    }
                    _ => None,
                })
                .collect();

            Ok(Value::Map(entries))
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Rename textual keys of every record map to their integer labels.
pub fn to_labels(value: Value, labels: &[Label]) -> Result<Value> {
    let Value::Array(records) = value else {
        return Err(SenMLError::serialization("expected an array of records"));
    };

    let records = records
        .into_iter()
        .map(|record| match record {
            Value::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| {
                        let key = match key {
                            Value::Text(ref name) => label_by_name(labels, name)
                                .map(|label| Value::Integer(Integer::from(label.key)))
                                .unwrap_or(key),
                            other => other,
                        };
                        (key, value)
                    })
                    .collect(),
            ),
            other => other,
        })
        .collect();

    Ok(Value::Array(records))
}

impl SenMLPack {
    /// Serialize to CBOR bytes using RFC 8428 integer labels
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        let value = Value::serialized(self).map_err(|e| SenMLError::serialization(e.to_string()))?;
        let value = to_labels(value, SENML_LABELS)?;

        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&value, &mut buffer)?;
        Ok(buffer)
    }

    /// Deserialize from CBOR bytes using RFC 8428 integer labels
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        let value = from_labels(read_value(bytes)?, SENML_LABELS)?;
        value
            .deserialized()
            .map_err(|e| SenMLError::deserialization(e.to_string()))
    }
}
