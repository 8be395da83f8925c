//! JSON decode-and-normalize tests

use thingsml::test_utils::{self, DEVICE, TIME};
use thingsml::{SenMLValue, normalize_json};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_all_json_forms_normalize_alike() {
    init_tracing();

    for (label, payload) in test_utils::json_payloads() {
        let normalized = normalize_json(payload).unwrap_or_else(|e| panic!("{label}: {e}"));
        assert_eq!(normalized, test_utils::expected_pack(), "{label}");
    }
}

#[test]
fn test_base_fields_carry_forward() {
    init_tracing();

    let normalized = normalize_json(
        br#"[
            {"bn":"dev:","bt":100,"bu":"V","bv":10,"n":"a","v":1,"t":-1},
            {"n":"b","v":2},
            {"bn":"other:","n":"c","u":"A","v":3,"t":5}
        ]"#,
    )
    .unwrap();

    let summary: Vec<_> = normalized
        .iter()
        .map(|r| (r.name.as_str(), r.unit.as_deref(), r.number(), r.time))
        .collect();
    assert_eq!(
        summary,
        [
            ("dev:a", Some("V"), Some(11.0), 99.0),
            ("dev:b", Some("V"), Some(12.0), 100.0),
            ("other:c", Some("A"), Some(13.0), 105.0),
        ]
    );
}

#[test]
fn test_index_without_base_name() {
    let normalized = normalize_json(br#"[{"i_":-24,"v":23.76,"t":1686429251}]"#).unwrap();
    let record = &normalized.records[0];
    assert_eq!(record.name, "temperature");
    assert_eq!(record.unit.as_deref(), Some("Cel"));
    assert_eq!(record.time, TIME);
}

#[test]
fn test_index_overrides_literal_name() {
    let normalized =
        normalize_json(br#"[{"bn":"urn:dev:mac:abcd1234:","n":"temp","u":"F","i_":-24,"v":1}]"#)
            .unwrap();
    assert_eq!(normalized.records[0].name, format!("{DEVICE}temperature"));
    assert_eq!(normalized.records[0].unit.as_deref(), Some("Cel"));
}

#[test]
fn test_non_numeric_values() {
    let normalized = normalize_json(
        br#"[
            {"bn":"dev:","n":"status","vs":"ok"},
            {"n":"open","vb":false},
            {"n":"blob","vd":"aGVsbG8"},
            {"n":"energy","s":42}
        ]"#,
    )
    .unwrap();

    assert_eq!(normalized.records[0].value, Some(SenMLValue::String("ok".into())));
    assert_eq!(normalized.records[1].value, Some(SenMLValue::Boolean(false)));
    assert_eq!(normalized.records[2].value, Some(SenMLValue::Data("aGVsbG8".into())));
    assert_eq!(normalized.records[3].value, None);
    assert_eq!(normalized.records[3].sum, Some(42.0));
}

#[test]
fn test_record_order_is_kept() {
    let normalized =
        normalize_json(br#"[{"n":"late","v":1,"t":20},{"n":"early","v":2,"t":10}]"#).unwrap();
    let names: Vec<_> = normalized.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["late", "early"]);
}

#[test]
fn test_version_reported() {
    let normalized =
        normalize_json(br#"[{"bver":10,"n":"a","v":1},{"bver":10,"n":"b","v":2}]"#).unwrap();
    assert_eq!(normalized.version, Some(10));
    assert_eq!(normalized.len(), 2);
}

#[test]
fn test_zero_version_is_not_declared() {
    let normalized =
        normalize_json(br#"[{"bver":0,"n":"a","v":1},{"bver":10,"n":"b","v":2}]"#).unwrap();
    assert_eq!(normalized.version, Some(10));
}

#[test]
fn test_empty_base_name_keeps_previous() {
    let normalized =
        normalize_json(br#"[{"bn":"dev:","n":"a","v":1},{"bn":"","n":"b","v":2}]"#).unwrap();
    assert_eq!(normalized.records[1].name, "dev:b");
}

#[test]
fn test_empty_unit_falls_back_to_base_unit() {
    let normalized = normalize_json(br#"[{"bn":"dev:","bu":"V","n":"a","u":"","v":1}]"#).unwrap();
    assert_eq!(normalized.records[0].unit.as_deref(), Some("V"));
}

#[test]
fn test_zero_base_time_keeps_previous() {
    let normalized =
        normalize_json(br#"[{"bt":100,"n":"a","v":1},{"bt":0,"n":"b","v":2,"t":1}]"#).unwrap();
    assert_eq!(normalized.records[1].time, 101.0);
}
