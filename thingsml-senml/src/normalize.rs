//! SenML normalization - converting packs to resolved form

use crate::pack::BaseValues;
use crate::validation::{self, VersionTracker};
use crate::{Result, SenMLPack, SenMLRecord, SenMLValue};
use serde::{Deserialize, Serialize};

/// A normalized SenML pack where all base values have been resolved into individual records
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPack {
    /// All records in resolved form, in input order
    pub records: Vec<NormalizedRecord>,
    /// Base version declared by the pack, if any
    pub version: Option<u64>,
}

/// A fully resolved SenML record with all base values applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Full resolved name (base name + record name)
    pub name: String,
    /// Resolved unit (record unit, else base unit)
    pub unit: Option<String>,
    /// Resolved value; numbers include the base value
    pub value: Option<SenMLValue>,
    /// Resolved sum (base sum + record sum)
    pub sum: Option<f64>,
    /// Absolute time (base time + record time)
    pub time: f64,
    /// Update time (unchanged)
    pub update_time: Option<f64>,
}

impl NormalizedPack {
    /// Create a normalized pack from a regular SenML pack
    ///
    /// Records are checked in order and the first violation is returned.
    pub fn from_pack(pack: &SenMLPack) -> Result<Self> {
        let mut base = BaseValues::default();
        let mut version = VersionTracker::new();
        let mut records = Vec::with_capacity(pack.len());

        for (index, record) in pack.iter().enumerate() {
            version.observe(index, record)?;
            base.apply(record);

            match Self::normalize_record(index, record, &base) {
                Ok(normalized) => records.push(normalized),
                Err(err) => {
                    tracing::debug!(index, error = %err, "SenML record rejected");
                    return Err(err);
                }
            }
        }

        tracing::debug!(records = records.len(), "normalized SenML pack");

        Ok(Self {
            records,
            version: version.version(),
        })
    }

    /// Normalize a single record with given base values
    fn normalize_record(
        index: usize,
        record: &SenMLRecord,
        base: &BaseValues,
    ) -> Result<NormalizedRecord> {
        let name = match record.n {
            Some(ref n) => format!("{}{}", base.name(), n),
            None => base.name().to_string(),
        };
        if name.is_empty() {
            return Err(crate::SenMLError::EmptyName { index });
        }

        validation::check_values(index, record, base.bs)?;
        validation::check_name(index, &name)?;

        // Record unit takes precedence unless empty
        let unit = record
            .u
            .as_ref()
            .filter(|u| !u.is_empty())
            .or(base.bu.as_ref())
            .cloned();

        let value = record.value().map(|value| match (value, base.bv) {
            (SenMLValue::Number(v), Some(bv)) => SenMLValue::Number(bv + v),
            (value, _) => value,
        });

        let sum = record.s.map(|s| base.bs.unwrap_or(0.0) + s);
        let time = base.bt.unwrap_or(0.0) + record.t.unwrap_or(0.0);

        Ok(NormalizedRecord {
            name,
            unit,
            value,
            sum,
            time,
            update_time: record.ut,
        })
    }

    /// Convert back to a SenML pack with no base fields except the version
    pub fn to_pack(&self) -> SenMLPack {
        let mut records: Vec<SenMLRecord> = self.records.iter().map(SenMLRecord::from).collect();

        if let Some(first) = records.first_mut() {
            first.bver = self.version;
        }

        SenMLPack { records }
    }

    /// Get the number of records in this pack
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if this pack is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the resolved records
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedRecord> {
        self.records.iter()
    }
}

impl From<&NormalizedRecord> for SenMLRecord {
    fn from(nr: &NormalizedRecord) -> Self {
        let mut record = nr
            .value
            .clone()
            .map(SenMLRecord::from)
            .unwrap_or_default();

        record.n = Some(nr.name.clone());
        record.u = nr.unit.clone();
        record.s = nr.sum;
        record.t = (nr.time != 0.0).then_some(nr.time);
        record.ut = nr.update_time;
        record
    }
}

impl NormalizedRecord {
    /// Numeric value, if this record carries one
    pub fn number(&self) -> Option<f64> {
        match self.value {
            Some(SenMLValue::Number(v)) => Some(v),
            _ => None,
        }
    }
}
