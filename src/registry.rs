//! Measurement index registry
//!
//! ThingsML replaces the name and unit of common physical quantities with a
//! single small integer, the measurement index (`i_`). The registry maps each
//! known index to its canonical SenML name and unit.
//!
//! Lookups of codes this version does not know return `None`. Conversion then
//! leaves the record's literal name and unit alone, so newer devices can still
//! be decoded by older services.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// Canonical name and unit for a measurement index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Measurement {
    pub index: MeasurementIndex,
    pub name: &'static str,
    /// `None` for indicator quantities (presence, counter)
    pub unit: Option<&'static str>,
}

/// Known measurement indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum MeasurementIndex {
    Temperature = -24,
    Humidity = -23,
    Latitude = -22,
    Longitude = -21,
    Altitude = -20,
    Power = -19,
    Pressure = -18,
    Angle = -17,
    Length = -16,
    Breadth = -15,
    Height = -14,
    Weight = -13,
    Thickness = -12,
    Distance = -11,
    Area = -10,
    Volume = -9,
    Velocity = -8,
    ElectricCurrent = -7,
    ElectricPotential = -6,
    ElectricResistance = -5,
    Illuminance = -4,
    AccelerationX = -3,
    AccelerationY = -2,
    AccelerationZ = -1,
    Heading = 0,
    COConcentration = 1,
    CO2Concentration = 2,
    Sound = 3,
    Frequency = 4,
    BatteryLevel = 5,
    BatteryVoltage = 6,
    Radius = 7,
    BatteryLevelLow = 8,
    CompassX = 9,
    CompassY = 10,
    CompassZ = 11,
    ReadSwitch = 12,
    Presence = 13,
    Counter = 14,
}

use MeasurementIndex::*;

static TABLE: [(MeasurementIndex, &str, Option<&str>); 39] = [
    (Temperature, "temperature", Some("Cel")),
    (Humidity, "humidity", Some("%RH")),
    (Latitude, "latitude", Some("lat")),
    (Longitude, "longitude", Some("lon")),
    (Altitude, "altitude", Some("m")),
    (Power, "power", Some("W")),
    (Pressure, "pressure", Some("Pa")),
    (Angle, "angle", Some("rad")),
    (Length, "length", Some("m")),
    (Breadth, "breadth", Some("m")),
    (Height, "height", Some("m")),
    (Weight, "weight", Some("kg")),
    (Thickness, "thickness", Some("m")),
    (Distance, "distance", Some("m")),
    (Area, "area", Some("m2")),
    (Volume, "volume", Some("m3")),
    (Velocity, "velocity", Some("m/s")),
    (ElectricCurrent, "electricCurrent", Some("A")),
    (ElectricPotential, "electricPotential", Some("V")),
    (ElectricResistance, "electricResistance", Some("Ohm")),
    (Illuminance, "illuminance", Some("lx")),
    (AccelerationX, "accelerationX", Some("m/s2")),
    (AccelerationY, "accelerationY", Some("m/s2")),
    (AccelerationZ, "accelerationZ", Some("m/s2")),
    (Heading, "heading", Some("rad")),
    (COConcentration, "COConcentration", Some("ppm")),
    (CO2Concentration, "CO2Concentration", Some("ppm")),
    (Sound, "sound", Some("dB")),
    (Frequency, "frequency", Some("Hz")),
    (BatteryLevel, "batteryLevel", Some("%EL")),
    (BatteryVoltage, "batteryVoltage", Some("V")),
    (Radius, "radius", Some("m")),
    (BatteryLevelLow, "batteryLevelLow", Some("/")),
    (CompassX, "compassX", Some("T")),
    (CompassY, "compassY", Some("T")),
    (CompassZ, "compassZ", Some("T")),
    (ReadSwitch, "readSwitch", Some("/")),
    (Presence, "presence", None),
    (Counter, "counter", None),
];

lazy_static! {
    static ref REGISTRY: HashMap<i64, Measurement> = TABLE
        .iter()
        .map(|&(index, name, unit)| (index.code(), Measurement { index, name, unit }))
        .collect();
}

/// Resolve a raw measurement index. Unknown codes yield `None`.
pub fn resolve(code: i64) -> Option<&'static Measurement> {
    REGISTRY.get(&code)
}

/// All known measurements, ordered by index
pub fn measurements() -> impl Iterator<Item = &'static Measurement> {
    TABLE.iter().filter_map(|(index, _, _)| resolve(index.code()))
}

impl MeasurementIndex {
    /// Lowest known code
    pub const MIN: i64 = Temperature as i64;
    /// Highest known code
    pub const MAX: i64 = Counter as i64;

    /// Wire code of this index
    pub const fn code(self) -> i64 {
        self as i8 as i64
    }

    pub fn measurement(self) -> &'static Measurement {
        &REGISTRY[&self.code()]
    }

    pub fn name(self) -> &'static str {
        self.measurement().name
    }

    pub fn unit(self) -> Option<&'static str> {
        self.measurement().unit
    }
}

/// Returned when converting a code outside the known table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownIndex(pub i64);

impl fmt::Display for UnknownIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown measurement index {}", self.0)
    }
}

impl std::error::Error for UnknownIndex {}

impl TryFrom<i64> for MeasurementIndex {
    type Error = UnknownIndex;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        resolve(code).map(|m| m.index).ok_or(UnknownIndex(code))
    }
}

impl From<MeasurementIndex> for i64 {
    fn from(index: MeasurementIndex) -> Self {
        index.code()
    }
}

impl fmt::Display for MeasurementIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_contiguous() {
        let codes: Vec<i64> = measurements().map(|m| m.index.code()).collect();
        let expected: Vec<i64> = (MeasurementIndex::MIN..=MeasurementIndex::MAX).collect();
        assert_eq!(codes, expected);
        assert_eq!(codes.len(), 39);
    }

    #[test]
    fn test_resolve_known() {
        let temperature = resolve(-24).unwrap();
        assert_eq!(temperature.name, "temperature");
        assert_eq!(temperature.unit, Some("Cel"));

        let humidity = resolve(-23).unwrap();
        assert_eq!(humidity.name, "humidity");
        assert_eq!(humidity.unit, Some("%RH"));

        assert_eq!(resolve(0).unwrap().name, "heading");
        assert_eq!(resolve(6).unwrap().unit, Some("V"));
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve(-25).is_none());
        assert!(resolve(15).is_none());
        assert!(resolve(i64::MAX).is_none());
    }

    #[test]
    fn test_indicators_have_no_unit() {
        let unitless: Vec<_> = measurements()
            .filter(|m| m.unit.is_none())
            .map(|m| m.index)
            .collect();
        assert_eq!(unitless, [Presence, Counter]);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(MeasurementIndex::try_from(-1), Ok(AccelerationZ));
        assert_eq!(MeasurementIndex::try_from(14), Ok(Counter));
        assert_eq!(MeasurementIndex::try_from(42), Err(UnknownIndex(42)));
        assert_eq!(i64::from(CO2Concentration), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(ElectricResistance.to_string(), "electricResistance");
        assert_eq!(UnknownIndex(99).to_string(), "unknown measurement index 99");
    }
}
