//! JSON serialization support for SenML

use crate::{Result, SenMLPack};

impl SenMLPack {
    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize SenML pack to JSON bytes
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize SenML pack from JSON bytes
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{SenMLError, SenMLPack, SenMLRecord};

    #[test]
    fn test_json_serialization() {
        let mut pack = SenMLPack::new();
        pack.add_record(SenMLRecord::with_value("temperature", 22.5).with_unit("Cel"));

        let json = pack.to_json().expect("JSON serialization failed");
        assert_eq!(json, r#"[{"n":"temperature","u":"Cel","v":22.5}]"#);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut pack = SenMLPack::new();
        pack.add_record(SenMLRecord::with_value("temp", 25.0));
        pack.add_record(SenMLRecord::with_string_value("status", "OK"));
        pack.add_record(SenMLRecord::with_bool_value("enabled", true));

        let json = pack.to_json().unwrap();
        let restored = SenMLPack::from_json(&json).unwrap();

        assert_eq!(pack, restored);
    }

    #[test]
    fn test_json_base_fields() {
        let json = r#"[{"bn":"urn:dev:mac:abcd1234:","bt":1686429250,"bver":10,"n":"temperature","v":23.76,"t":1}]"#;
        let pack = SenMLPack::from_json(json).unwrap();

        let record = &pack.records[0];
        assert_eq!(record.bn.as_deref(), Some("urn:dev:mac:abcd1234:"));
        assert_eq!(record.bt, Some(1686429250.0));
        assert_eq!(record.bver, Some(10));
        assert_eq!(record.t, Some(1.0));
    }

    #[test]
    fn test_json_rejects_wrong_types() {
        let err = SenMLPack::from_json(r#"[{"n":"temp","v":"hot"}]"#).unwrap_err();
        assert!(matches!(err, SenMLError::DeserializationError { .. }));

        assert!(SenMLPack::from_json_bytes(b"{").is_err());
    }
}
