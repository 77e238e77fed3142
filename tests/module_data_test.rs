//! Test the module feed wire format

use std::collections::BTreeMap;

use serde::Deserialize;

// Mirror of the wire contract: kpis and highlights are optional in the
// backend payload and default to empty.
#[derive(Debug, Deserialize)]
struct WireModule {
    id: String,
    title: String,
    description: String,
    #[serde(default)]
    kpis: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    highlights: Vec<String>,
}

#[test]
fn test_minimal_record_decodes() {
    let json = r#"[{"id": "billing", "title": "Billing", "description": "Invoices"}]"#;
    let modules: Vec<WireModule> = serde_json::from_str(json).expect("should decode");

    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].id, "billing");
    assert!(modules[0].kpis.is_empty());
    assert!(modules[0].highlights.is_empty());
}

#[test]
fn test_kpi_values_may_be_numbers_or_strings() {
    let json = r#"{
        "id": "exam-scheduling",
        "title": "Scheduling",
        "description": "Exam slots",
        "kpis": {"booked": 42, "waitlist": "7", "utilization": 0.8}
    }"#;
    let module: WireModule = serde_json::from_str(json).expect("should decode");

    assert_eq!(module.kpis.len(), 3);
    assert_eq!(module.kpis["booked"], serde_json::json!(42));
    assert_eq!(module.kpis["waitlist"], serde_json::json!("7"));
}

#[test]
fn test_empty_array_is_a_valid_payload() {
    let modules: Vec<WireModule> = serde_json::from_str("[]").expect("should decode");
    assert!(modules.is_empty());
}

#[test]
fn test_example_scenario_payload() {
    // The canonical single-module payload: one pill reading "120 active"
    // and two highlight tiles.
    let json = r#"[{
        "id": "patient-management",
        "title": "Patients",
        "description": "Demographics and visit history",
        "kpis": {"active": 120},
        "highlights": ["A", "B"]
    }]"#;
    let modules: Vec<WireModule> = serde_json::from_str(json).expect("should decode");
    let module = &modules[0];

    assert_eq!(module.title, "Patients");
    assert_eq!(module.description, "Demographics and visit history");

    let pills: Vec<String> = module
        .kpis
        .iter()
        .map(|(label, value)| match value {
            serde_json::Value::String(s) => format!("{s} {label}"),
            other => format!("{other} {label}"),
        })
        .collect();
    assert_eq!(pills, vec!["120 active"]);
    assert_eq!(module.highlights, vec!["A", "B"]);
}

#[test]
fn test_malformed_payload_is_an_error() {
    // A non-array body must fail decoding; the UI surfaces the decode
    // error's message.
    let result: Result<Vec<WireModule>, _> = serde_json::from_str(r#"{"oops": true}"#);
    assert!(result.is_err());
}
