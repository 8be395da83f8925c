//! SenML Pack - collection of SenML records

use crate::{Result, SenMLRecord};
use serde::{Deserialize, Serialize};

/// A SenML Pack represents an ordered collection of SenML records
///
/// According to RFC 8428, a SenML Pack is an array of SenML Records. Any record
/// can contain base values (fields starting with 'b') that apply to itself and
/// to subsequent records, reducing redundancy in the representation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SenMLPack {
    /// Array of SenML records
    pub records: Vec<SenMLRecord>,
}

/// Base values in effect at some point of a pack
///
/// Each field holds the most recent base value seen while walking the pack.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseValues {
    /// Base Name - prepended to record names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bn: Option<String>,

    /// Base Time - added to record timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bt: Option<f64>,

    /// Base Unit - used when record has no unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bu: Option<String>,

    /// Base Value - added to numeric record values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bv: Option<f64>,

    /// Base Sum - added to sum values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bs: Option<f64>,

    /// Base Version - SenML version number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bver: Option<u64>,
}

impl BaseValues {
    /// Fold the base fields of `record` into the current state.
    ///
    /// Empty strings and zeros mean "not set" and leave the current base
    /// value in place. Version is not folded here: a differing version is an
    /// error, which the normalizer checks before calling this.
    pub fn apply(&mut self, record: &SenMLRecord) {
        if let Some(bn) = record.bn.as_ref().filter(|bn| !bn.is_empty()) {
            self.bn = Some(bn.clone());
        }
        if let Some(bt) = record.bt.filter(|bt| *bt != 0.0) {
            self.bt = Some(bt);
        }
        if let Some(bu) = record.bu.as_ref().filter(|bu| !bu.is_empty()) {
            self.bu = Some(bu.clone());
        }
        if let Some(bv) = record.bv.filter(|bv| *bv != 0.0) {
            self.bv = Some(bv);
        }
        if let Some(bs) = record.bs.filter(|bs| *bs != 0.0) {
            self.bs = Some(bs);
        }
    }

    /// Base name to prefix, or the empty string
    pub fn name(&self) -> &str {
        self.bn.as_deref().unwrap_or_default()
    }
}

impl SenMLPack {
    /// Create a new empty pack
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a record to this pack
    pub fn add_record(&mut self, record: SenMLRecord) {
        self.records.push(record);
    }

    /// Add multiple records to this pack
    pub fn add_records<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = SenMLRecord>,
    {
        self.records.extend(records);
    }

    /// Check if any record in this pack carries base fields
    pub fn has_base_values(&self) -> bool {
        self.records.iter().any(SenMLRecord::has_base_fields)
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
    pub fn iter(&self) -> impl Iterator<Item = &SenMLRecord> {
        self.records.iter()
    }

    /// Resolve all base values and validate the result
    pub fn normalize(&self) -> Result<crate::normalize::NormalizedPack> {
        crate::normalize::NormalizedPack::from_pack(self)
    }
}

impl FromIterator<SenMLRecord> for SenMLPack {
    fn from_iter<I: IntoIterator<Item = SenMLRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SenMLPack {
    type Item = SenMLRecord;
    type IntoIter = std::vec::IntoIter<SenMLRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a SenMLPack {
    type Item = &'a SenMLRecord;
    type IntoIter = std::slice::Iter<'a, SenMLRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SenMLRecord;

    #[test]
    fn test_empty_pack_creation() {
        let pack = SenMLPack::new();
        assert!(pack.is_empty());
        assert_eq!(pack.len(), 0);
        assert!(!pack.has_base_values());
    }

    #[test]
    fn test_pack_iteration() {
        let records = vec![
            SenMLRecord::with_value("temp", 20.0),
            SenMLRecord::with_value("humidity", 50.0),
        ];
        let pack: SenMLPack = records.into_iter().collect();

        let mut count = 0;
        for record in &pack {
            count += 1;
            assert!(record.has_value());
        }
        assert_eq!(count, 2);
        assert!(!pack.has_base_values());
    }

    #[test]
    fn test_base_values_detected() {
        let mut first = SenMLRecord::with_value("temp", 1.0);
        first.bn = Some("urn:dev:ow:10e2073a01080063:".to_string());

        let mut pack = SenMLPack::new();
        pack.add_records([first, SenMLRecord::with_value("hum", 2.0)]);
        assert!(pack.has_base_values());
    }

    #[test]
    fn test_apply_overrides() {
        let mut base = BaseValues::default();
        let mut record = SenMLRecord::new();
        record.bu = Some("Cel".to_string());
        base.apply(&record);

        record.bu = None;
        record.bt = Some(5.0);
        base.apply(&record);

        assert_eq!(base.bu.as_deref(), Some("Cel"));
        assert_eq!(base.bt, Some(5.0));
        assert_eq!(base.name(), "");
    }

    #[test]
    fn test_apply_ignores_empty_and_zero() {
        let mut base = BaseValues::default();
        let mut record = SenMLRecord::new();
        record.bn = Some("dev:".to_string());
        record.bt = Some(100.0);
        record.bu = Some("V".to_string());
        record.bv = Some(1.0);
        record.bs = Some(2.0);
        base.apply(&record);

        let unset = SenMLRecord {
            bn: Some(String::new()),
            bt: Some(0.0),
            bu: Some(String::new()),
            bv: Some(0.0),
            bs: Some(0.0),
            ..Default::default()
        };
        base.apply(&unset);

        assert_eq!(base.name(), "dev:");
        assert_eq!(base.bt, Some(100.0));
        assert_eq!(base.bu.as_deref(), Some("V"));
        assert_eq!(base.bv, Some(1.0));
        assert_eq!(base.bs, Some(2.0));
    }
}
