//! SenML Record types and values

use serde::{Deserialize, Serialize};

/// A SenML Record represents a single sensor measurement or device parameter
///
/// According to RFC 8428, a record contains optional fields for identifying
/// the measurement (name), its value, unit, timestamp, and other metadata.
/// Base fields (`b*`) apply to this record and every later record in the pack
/// until another record overrides them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SenMLRecord {
    /// Base Name - prepended to this and subsequent record names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bn: Option<String>,

    /// Base Time - added to this and subsequent record times
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bt: Option<f64>,

    /// Base Unit - used when a record has no unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bu: Option<String>,

    /// Base Version - must not change within a pack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bver: Option<u64>,

    /// Base Value - added to numeric record values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bv: Option<f64>,

    /// Base Sum - added to record sums
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bs: Option<f64>,

    /// Name - identifies the sensor or parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// Unit - SI unit or custom unit string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,

    /// Value - numeric measurement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<f64>,

    /// String Value - textual measurement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vs: Option<String>,

    /// Boolean Value - true/false measurement value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vb: Option<bool>,

    /// Data Value - opaque data, carried in its encoded string form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vd: Option<String>,

    /// Sum - integrated sum of values over time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<f64>,

    /// Time - timestamp relative to base time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<f64>,

    /// Update Time - maximum time before next update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ut: Option<f64>,
}

/// The value carried by a record. A record holds at most one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenMLValue {
    /// Numeric value
    Number(f64),
    /// String value
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Opaque data value, left encoded
    Data(String),
}

impl SenMLRecord {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with a numeric value
    pub fn with_value<S: Into<String>>(name: S, value: f64) -> Self {
        Self {
            n: Some(name.into()),
            v: Some(value),
            ..Default::default()
        }
    }

    /// Create a record with a string value
    pub fn with_string_value<S: Into<String>, V: Into<String>>(name: S, value: V) -> Self {
        Self {
            n: Some(name.into()),
            vs: Some(value.into()),
            ..Default::default()
        }
    }

    /// Create a record with a boolean value
    pub fn with_bool_value<S: Into<String>>(name: S, value: bool) -> Self {
        Self {
            n: Some(name.into()),
            vb: Some(value),
            ..Default::default()
        }
    }

    /// Create a record with an opaque data value
    pub fn with_data_value<S: Into<String>, D: Into<String>>(name: S, data: D) -> Self {
        Self {
            n: Some(name.into()),
            vd: Some(data.into()),
            ..Default::default()
        }
    }

    /// Set the unit for this record
    pub fn with_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.u = Some(unit.into());
        self
    }

    /// Set the timestamp for this record
    pub fn with_time(mut self, time: f64) -> Self {
        self.t = Some(time);
        self
    }

    /// Set the sum value for this record
    pub fn with_sum(mut self, sum: f64) -> Self {
        self.s = Some(sum);
        self
    }

    /// Get the primary value from this record
    ///
    /// When several value fields are present (an invalid record) the first in
    /// the order v, vs, vb, vd wins.
    pub fn value(&self) -> Option<SenMLValue> {
        if let Some(v) = self.v {
            Some(SenMLValue::Number(v))
        } else if let Some(ref vs) = self.vs {
            Some(SenMLValue::String(vs.clone()))
        } else if let Some(vb) = self.vb {
            Some(SenMLValue::Boolean(vb))
        } else {
            self.vd.as_ref().map(|vd| SenMLValue::Data(vd.clone()))
        }
    }

    /// Number of value fields (v, vs, vb, vd) present on this record
    pub fn value_count(&self) -> usize {
        [
            self.v.is_some(),
            self.vs.is_some(),
            self.vb.is_some(),
            self.vd.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Check if this record has a value
    pub fn has_value(&self) -> bool {
        self.value_count() > 0
    }

    /// Check if this record carries any base field
    pub fn has_base_fields(&self) -> bool {
        self.bn.is_some()
            || self.bt.is_some()
            || self.bu.is_some()
            || self.bver.is_some()
            || self.bv.is_some()
            || self.bs.is_some()
    }
}

impl From<SenMLValue> for SenMLRecord {
    fn from(value: SenMLValue) -> Self {
        match value {
            SenMLValue::Number(n) => Self {
                v: Some(n),
                ..Default::default()
            },
            SenMLValue::String(s) => Self {
                vs: Some(s),
                ..Default::default()
            },
            SenMLValue::Boolean(b) => Self {
                vb: Some(b),
                ..Default::default()
            },
            SenMLValue::Data(d) => Self {
                vd: Some(d),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = SenMLRecord::with_value("temperature", 22.5);
        assert_eq!(record.n, Some("temperature".to_string()));
        assert_eq!(record.v, Some(22.5));
    }

    #[test]
    fn test_record_with_unit() {
        let record = SenMLRecord::with_value("temperature", 22.5).with_unit("Cel");
        assert_eq!(record.u, Some("Cel".to_string()));
    }

    #[test]
    fn test_string_value_record() {
        let record = SenMLRecord::with_string_value("status", "OK");
        assert_eq!(record.value(), Some(SenMLValue::String("OK".to_string())));
    }

    #[test]
    fn test_value_count() {
        let mut record = SenMLRecord::with_bool_value("enabled", true);
        assert_eq!(record.value_count(), 1);

        record.v = Some(1.0);
        assert_eq!(record.value_count(), 2);
        assert_eq!(record.value(), Some(SenMLValue::Number(1.0)));

        assert!(!SenMLRecord::new().has_value());
    }

    #[test]
    fn test_base_fields() {
        let mut record = SenMLRecord::with_value("temp", 1.0);
        assert!(!record.has_base_fields());

        record.bver = Some(10);
        assert!(record.has_base_fields());
    }

    #[test]
    fn test_from_value() {
        let record = SenMLRecord::from(SenMLValue::Data("aGVsbG8=".to_string()));
        assert_eq!(record.vd.as_deref(), Some("aGVsbG8="));
        assert_eq!(record.n, None);
    }
}
