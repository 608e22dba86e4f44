use serde_json::{Value, json};
use urolia_core::models::plan::OptionTag;
use urolia_pathways::Pathway;
use urolia_pathways::pathways::utuc::Utuc;

fn base_case() -> Value {
    json!({
        "grade": "low",
        "size_mm": 10,
        "invasive_on_imaging": false,
        "multifocal": false,
        "hydronephrosis": false,
        "solitary_kidney": false,
        "renal_insufficiency": false,
    })
}

fn with(mut raw: Value, key: &str, value: Value) -> Value {
    raw[key] = value;
    raw
}

#[test]
fn unifocal_small_low_grade_tumour_is_low_risk_and_kidney_sparing() {
    let plan = Utuc.evaluate(&base_case()).unwrap();
    assert_eq!(plan.classification.category().id, "low_risk");
    assert!(plan.options.iter().any(|o| o.label.contains("laser ablation")));
}

#[test]
fn any_adverse_feature_classifies_high_risk() {
    for (key, value) in [
        ("grade", json!("high")),
        ("size_mm", json!(25)),
        ("invasive_on_imaging", json!(true)),
        ("multifocal", json!(true)),
        ("hydronephrosis", json!(true)),
    ] {
        let raw = with(base_case(), key, value);
        let plan = Utuc.evaluate(&raw).unwrap();
        assert_eq!(plan.classification.category().id, "high_risk", "factor {key}");
    }
}

#[test]
fn high_risk_tumour_gets_nephroureterectomy_and_no_kidney_sparing() {
    let raw = with(base_case(), "grade", json!("high"));
    let plan = Utuc.evaluate(&raw).unwrap();
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("nephroureterectomy"))
    );
    assert!(plan.options.iter().any(|o| o.label.contains("mitomycin")));
    assert!(plan.options.iter().all(|o| o.tag != OptionTag::FocalAblative));
    assert!(plan.options.iter().all(|o| o.tag != OptionTag::Alternative));
}

#[test]
fn imperative_indication_switches_high_risk_to_kidney_sparing() {
    let raw = with(
        with(base_case(), "grade", json!("high")),
        "solitary_kidney",
        json!(true),
    );
    let plan = Utuc.evaluate(&raw).unwrap();
    assert!(!plan.options.is_empty());
    assert!(plan.options.iter().all(|o| o.tag != OptionTag::Surgical));
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("Kidney-sparing management"))
    );
    assert!(plan.notes.iter().any(|n| n.contains("nephrology")));
}
