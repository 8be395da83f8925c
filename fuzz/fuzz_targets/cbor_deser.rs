#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match thingsml::normalize_cbor(data) {
        Ok(normalized) => {
            for record in &normalized.records {
                assert!(!record.name.is_empty());
            }
        }
        Err(err) => {
            // Decode failures never surface as validation errors
            if err.is_unmarshal() {
                assert!(err.validation().is_none());
            }
        }
    }
});
