//! ThingsML records
//!
//! A ThingsML record is a SenML record that may also carry a measurement
//! index (`i_`). The textual keys below are the JSON labels; the CBOR labels
//! live in [`crate::decode::THINGSML_LABELS`].

use serde::{Deserialize, Serialize};
use thingsml_senml::{SenMLRecord, SenMLValue};

use crate::registry::{self, Measurement, MeasurementIndex};

/// A single compact ThingsML record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "bn", skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,

    #[serde(rename = "bt", skip_serializing_if = "Option::is_none")]
    pub base_time: Option<f64>,

    #[serde(rename = "bu", skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<String>,

    #[serde(rename = "bver", skip_serializing_if = "Option::is_none")]
    pub base_version: Option<u64>,

    #[serde(rename = "bv", skip_serializing_if = "Option::is_none")]
    pub base_value: Option<f64>,

    #[serde(rename = "bs", skip_serializing_if = "Option::is_none")]
    pub base_sum: Option<f64>,

    #[serde(rename = "n", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "u", skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(rename = "t", skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,

    #[serde(rename = "ut", skip_serializing_if = "Option::is_none")]
    pub update_time: Option<f64>,

    #[serde(rename = "v", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    #[serde(rename = "vs", skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,

    #[serde(rename = "vd", skip_serializing_if = "Option::is_none")]
    pub data_value: Option<String>,

    #[serde(rename = "vb", skip_serializing_if = "Option::is_none")]
    pub bool_value: Option<bool>,

    #[serde(rename = "s", skip_serializing_if = "Option::is_none")]
    pub sum: Option<f64>,

    /// Raw measurement index. Kept as an integer so codes this version does
    /// not know still decode.
    #[serde(rename = "i_", skip_serializing_if = "Option::is_none")]
    pub measurement_index: Option<i64>,
}

impl Record {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with a numeric value
    pub fn with_value<S: Into<String>>(name: S, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value),
            ..Default::default()
        }
    }

    /// Create a record identified by a measurement index
    pub fn with_index(index: MeasurementIndex, value: f64) -> Self {
        Self {
            measurement_index: Some(index.code()),
            value: Some(value),
            ..Default::default()
        }
    }

    /// Set the unit for this record
    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the timestamp for this record
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Known measurement for this record's index, if any
    pub fn measurement(&self) -> Option<&'static Measurement> {
        self.measurement_index.and_then(registry::resolve)
    }

    /// Name and unit this record resolves to before base fields apply
    ///
    /// A known measurement index replaces the literal name, and its unit
    /// replaces the literal unit when the measurement has one. Unknown
    /// indices leave both untouched.
    pub fn resolved_name_unit(&self) -> (Option<String>, Option<String>) {
        match (self.measurement_index, self.measurement()) {
            (_, Some(measurement)) => (
                Some(measurement.name.to_string()),
                measurement
                    .unit
                    .map(str::to_string)
                    .or_else(|| self.unit.clone()),
            ),
            (Some(index), None) => {
                tracing::trace!(index, "unknown measurement index, keeping literal name and unit");
                (self.name.clone(), self.unit.clone())
            }
            (None, None) => (self.name.clone(), self.unit.clone()),
        }
    }

    /// Primary value of this record, see [`SenMLRecord::value`]
    pub fn primary_value(&self) -> Option<SenMLValue> {
        if let Some(v) = self.value {
            Some(SenMLValue::Number(v))
        } else if let Some(ref vs) = self.string_value {
            Some(SenMLValue::String(vs.clone()))
        } else if let Some(vb) = self.bool_value {
            Some(SenMLValue::Boolean(vb))
        } else {
            self.data_value.as_ref().map(|vd| SenMLValue::Data(vd.clone()))
        }
    }

    /// Number of value fields present; normalization requires exactly one
    pub fn value_count(&self) -> usize {
        usize::from(self.value.is_some())
            + usize::from(self.string_value.is_some())
            + usize::from(self.bool_value.is_some())
            + usize::from(self.data_value.is_some())
    }

    /// Convert to a SenML record, resolving the measurement index
    pub fn to_senml(&self) -> SenMLRecord {
        let (n, u) = self.resolved_name_unit();

        SenMLRecord {
            bn: self.base_name.clone(),
            bt: self.base_time,
            bu: self.base_unit.clone(),
            bver: self.base_version,
            bv: self.base_value,
            bs: self.base_sum,
            n,
            u,
            v: self.value,
            vs: self.string_value.clone(),
            vb: self.bool_value,
            vd: self.data_value.clone(),
            s: self.sum,
            t: self.time,
            ut: self.update_time,
        }
    }
}

impl From<SenMLRecord> for Record {
    fn from(record: SenMLRecord) -> Self {
        Self {
            base_name: record.bn,
            base_time: record.bt,
            base_unit: record.bu,
            base_version: record.bver,
            base_value: record.bv,
            base_sum: record.bs,
            name: record.n,
            unit: record.u,
            time: record.t,
            update_time: record.ut,
            value: record.v,
            string_value: record.vs,
            data_value: record.vd,
            bool_value: record.vb,
            sum: record.s,
            measurement_index: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_name_unit() {
        let record = Record::with_value("temperature", 23.76).with_unit("Cel");
        let senml = record.to_senml();
        assert_eq!(senml.n.as_deref(), Some("temperature"));
        assert_eq!(senml.u.as_deref(), Some("Cel"));
        assert_eq!(senml.v, Some(23.76));
        assert_eq!(record.primary_value(), Some(SenMLValue::Number(23.76)));
        assert_eq!(record.value_count(), 1);
    }

    #[test]
    fn test_index_overrides_literal() {
        let mut record = Record::with_index(MeasurementIndex::Humidity, 47.25);
        record.name = Some("moisture".to_string());
        record.unit = Some("%".to_string());

        let senml = record.to_senml();
        assert_eq!(senml.n.as_deref(), Some("humidity"));
        assert_eq!(senml.u.as_deref(), Some("%RH"));
    }

    #[test]
    fn test_unknown_index_keeps_literal() {
        let mut record = Record::with_value("custom", 1.0).with_unit("X");
        record.measurement_index = Some(99);

        assert!(record.measurement().is_none());
        let senml = record.to_senml();
        assert_eq!(senml.n.as_deref(), Some("custom"));
        assert_eq!(senml.u.as_deref(), Some("X"));

        record.name = None;
        record.unit = None;
        let senml = record.to_senml();
        assert_eq!(senml.n, None);
        assert_eq!(senml.u, None);
    }

    #[test]
    fn test_unitless_index_keeps_literal_unit() {
        let record = Record::with_index(MeasurementIndex::Counter, 3.0).with_unit("count");
        let senml = record.to_senml();
        assert_eq!(senml.n.as_deref(), Some("counter"));
        assert_eq!(senml.u.as_deref(), Some("count"));

        let presence = Record::with_index(MeasurementIndex::Presence, 1.0).to_senml();
        assert_eq!(presence.u, None);
    }

    #[test]
    fn test_fields_copied_verbatim() {
        let record = Record {
            base_name: Some("bn:".to_string()),
            base_time: Some(10.0),
            base_unit: Some("V".to_string()),
            base_version: Some(10),
            base_value: Some(1.0),
            base_sum: Some(2.0),
            time: Some(3.0),
            update_time: Some(4.0),
            string_value: Some("s".to_string()),
            sum: Some(5.0),
            ..Default::default()
        };

        let senml = record.to_senml();
        assert_eq!(senml.bn.as_deref(), Some("bn:"));
        assert_eq!(senml.bt, Some(10.0));
        assert_eq!(senml.bu.as_deref(), Some("V"));
        assert_eq!(senml.bver, Some(10));
        assert_eq!(senml.bv, Some(1.0));
        assert_eq!(senml.bs, Some(2.0));
        assert_eq!(senml.t, Some(3.0));
        assert_eq!(senml.ut, Some(4.0));
        assert_eq!(senml.vs.as_deref(), Some("s"));
        assert_eq!(senml.s, Some(5.0));
        assert_eq!(Record::from(senml), record);
    }

    #[test]
    fn test_json_keys() {
        let record = Record::with_index(MeasurementIndex::Temperature, 23.76).with_time(1.0);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"t":1.0,"v":23.76,"i_":-24}"#);
    }
}
