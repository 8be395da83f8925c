//! Builder pattern for creating ThingsML packs

use crate::registry::MeasurementIndex;
use crate::{Pack, Record};

/// Builder for creating ThingsML packs with a fluent API
///
/// Base values are written onto the first record, so a built pack is as
/// compact as a device would send it.
#[derive(Debug, Default)]
pub struct PackBuilder {
    base_name: Option<String>,
    base_time: Option<f64>,
    base_unit: Option<String>,
    base_version: Option<u64>,
    base_value: Option<f64>,
    base_sum: Option<f64>,
    records: Vec<Record>,
}

impl PackBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base name for all records
    pub fn base_name<S: Into<String>>(mut self, name: S) -> Self {
        self.base_name = Some(name.into());
        self
    }

    /// Set the base time for all records
    pub fn base_time(mut self, time: f64) -> Self {
        self.base_time = Some(time);
        self
    }

    /// Set the base unit for all records
    pub fn base_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.base_unit = Some(unit.into());
        self
    }

    /// Set the pack version
    pub fn base_version(mut self, version: u64) -> Self {
        self.base_version = Some(version);
        self
    }

    /// Set the base value to add to all numeric values
    pub fn base_value(mut self, value: f64) -> Self {
        self.base_value = Some(value);
        self
    }

    /// Set the base sum value
    pub fn base_sum(mut self, sum: f64) -> Self {
        self.base_sum = Some(sum);
        self
    }

    /// Add a record with a numeric value
    pub fn add_value<S: Into<String>>(self, name: S, value: f64) -> Self {
        self.add_record(Record::with_value(name, value))
    }

    /// Add a record with a string value
    pub fn add_string_value<S: Into<String>, V: Into<String>>(self, name: S, value: V) -> Self {
        self.add_record(Record {
            name: Some(name.into()),
            string_value: Some(value.into()),
            ..Default::default()
        })
    }

    /// Add a record with a boolean value
    pub fn add_bool_value<S: Into<String>>(self, name: S, value: bool) -> Self {
        self.add_record(Record {
            name: Some(name.into()),
            bool_value: Some(value),
            ..Default::default()
        })
    }

    /// Add a record with an opaque data value
    pub fn add_data_value<S: Into<String>, D: Into<String>>(self, name: S, data: D) -> Self {
        self.add_record(Record {
            name: Some(name.into()),
            data_value: Some(data.into()),
            ..Default::default()
        })
    }

    /// Add a measurement with timestamp
    pub fn add_measurement<S: Into<String>>(self, name: S, value: f64, time: f64) -> Self {
        self.add_record(Record::with_value(name, value).with_time(time))
    }

    /// Add a record named by a measurement index
    pub fn add_indexed(self, index: MeasurementIndex, value: f64) -> Self {
        self.add_record(Record::with_index(index, value))
    }

    /// Add a record named by a measurement index, with timestamp
    pub fn add_indexed_at(self, index: MeasurementIndex, value: f64, time: f64) -> Self {
        self.add_record(Record::with_index(index, value).with_time(time))
    }

    /// Add an existing record
    pub fn add_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Build the ThingsML pack
    pub fn build(self) -> Pack {
        let mut records = self.records;

        if records.is_empty()
            && (self.base_name.is_some()
                || self.base_time.is_some()
                || self.base_unit.is_some()
                || self.base_version.is_some()
                || self.base_value.is_some()
                || self.base_sum.is_some())
        {
            records.push(Record::new());
        }

        if let Some(first) = records.first_mut() {
            first.base_name = self.base_name.or(first.base_name.take());
            first.base_time = self.base_time.or(first.base_time);
            first.base_unit = self.base_unit.or(first.base_unit.take());
            first.base_version = self.base_version.or(first.base_version);
            first.base_value = self.base_value.or(first.base_value);
            first.base_sum = self.base_sum.or(first.base_sum);
        }

        Pack { records }
    }
}
