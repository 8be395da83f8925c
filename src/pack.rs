//! ThingsML Pack - ordered collection of ThingsML records

use ciborium::value::Value;
use serde::{Deserialize, Serialize};
use thingsml_senml::{NormalizedPack, SenMLError, SenMLPack, cbor};

use crate::Record;
use crate::decode::THINGSML_LABELS;

/// An ordered sequence of records, as found on the wire
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pack {
    pub records: Vec<Record>,
}

impl Pack {
    /// Create a new empty pack
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to this pack
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Get the number of records in this pack
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if this pack is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in this pack
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Convert to a SenML pack, record by record and in order
    ///
    /// Measurement indices are resolved here; nothing is validated.
    pub fn to_senml(&self) -> SenMLPack {
        self.records.iter().map(Record::to_senml).collect()
    }

    /// Build a pack from normalized records
    ///
    /// The result carries absolute names, units, values and times and no base
    /// fields other than the pack version.
    pub fn from_normalized(normalized: &NormalizedPack) -> Self {
        normalized
            .to_pack()
            .into_iter()
            .map(Record::from)
            .collect()
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> thingsml_senml::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to JSON bytes
    pub fn to_json_bytes(&self) -> thingsml_senml::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Serialize to CBOR bytes using integer labels
    pub fn to_cbor(&self) -> thingsml_senml::Result<Vec<u8>> {
        let value =
            Value::serialized(self).map_err(|e| SenMLError::serialization(e.to_string()))?;
        let value = cbor::to_labels(value, THINGSML_LABELS)?;

        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&value, &mut buffer)?;
        Ok(buffer)
    }
}

impl From<Pack> for SenMLPack {
    fn from(pack: Pack) -> Self {
        pack.to_senml()
    }
}

impl From<SenMLPack> for Pack {
    fn from(pack: SenMLPack) -> Self {
        pack.into_iter().map(Record::from).collect()
    }
}

impl From<Vec<Record>> for Pack {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Pack {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pack {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pack {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
