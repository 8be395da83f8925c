#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match thingsml::normalize_json(data) {
        Ok(normalized) => {
            for record in &normalized.records {
                assert!(!record.name.is_empty());
            }
            let pack = thingsml::Pack::from_normalized(&normalized);
            let _ = pack.to_cbor();
        }
        Err(err) => {
            let _ = err.to_string();
        }
    }
});
