use serde_json::{Value, json};
use urolia_core::error::InvalidInputError;
use urolia_core::models::plan::OptionTag;
use urolia_pathways::Pathway;
use urolia_pathways::error::PathwayError;
use urolia_pathways::pathways::bph::Bph;

fn base_case() -> Value {
    json!({
        "ipss": 4,
        "qol": 1,
        "prostate_volume_ml": 35.0,
        "post_void_residual_ml": 40,
        "recurrent_retention": false,
        "recurrent_utis": false,
        "bladder_stones": false,
        "obstructive_renal_impairment": false,
        "recurrent_haematuria": false,
        "median_lobe": false,
        "medical_failure": false,
    })
}

fn with(mut raw: Value, key: &str, value: Value) -> Value {
    raw[key] = value;
    raw
}

#[test]
fn mild_symptoms_get_watchful_waiting() {
    let plan = Bph.evaluate(&base_case()).unwrap();
    assert_eq!(plan.classification.category().id, "mild");
    assert!(plan.options.iter().any(|o| o.label.contains("Watchful waiting")));
}

#[test]
fn moderate_symptoms_get_an_alpha_blocker() {
    let raw = with(base_case(), "ipss", json!(12));
    let plan = Bph.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "moderate");
    assert!(plan.options.iter().any(|o| o.label == "Alpha-blocker"));
}

#[test]
fn large_prostate_adds_a_five_ari() {
    let raw = with(
        with(base_case(), "ipss", json!(22)),
        "prostate_volume_ml",
        json!(55.0),
    );
    let plan = Bph.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "severe");
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("5-alpha-reductase"))
    );
}

#[test]
fn complication_mandates_surgery_and_suppresses_medical_options() {
    let raw = with(
        with(base_case(), "ipss", json!(18)),
        "recurrent_retention",
        json!(true),
    );
    let plan = Bph.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "complicated");
    assert!(!plan.options.is_empty());
    assert!(plan.options.iter().all(|o| o.tag == OptionTag::Surgical));
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("Transurethral resection"))
    );
}

#[test]
fn volume_above_80_selects_enucleation_over_turp() {
    let raw = with(
        with(
            with(base_case(), "recurrent_retention", json!(true)),
            "prostate_volume_ml",
            json!(120.0),
        ),
        "ipss",
        json!(18),
    );
    let plan = Bph.evaluate(&raw).unwrap();
    assert!(plan.options.iter().any(|o| o.label.contains("enucleation")));
    assert!(
        !plan
            .options
            .iter()
            .any(|o| o.label.contains("Transurethral resection"))
    );
}

#[test]
fn medical_failure_alone_triggers_the_surgical_indication() {
    let raw = with(
        with(base_case(), "ipss", json!(12)),
        "medical_failure",
        json!(true),
    );
    let plan = Bph.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "moderate");
    assert!(plan.options.iter().all(|o| o.tag == OptionTag::Surgical));
}

#[test]
fn unfit_patient_falls_back_to_minimally_invasive_alternatives() {
    let raw = with(
        with(base_case(), "recurrent_retention", json!(true)),
        "surgery_unfit_or_refused",
        json!(true),
    );
    let plan = Bph.evaluate(&raw).unwrap();
    assert!(!plan.options.is_empty());
    assert!(plan.options.iter().all(|o| o.tag != OptionTag::Surgical));
    assert!(plan.options.iter().all(|o| o.tag != OptionTag::Medical));
    assert!(plan.options.iter().any(|o| o.label.contains("embolization")));
}

#[test]
fn zero_volume_skips_psa_density_with_a_note() {
    let raw = with(
        with(base_case(), "psa", json!(4.2)),
        "prostate_volume_ml",
        json!(0.0),
    );
    let plan = Bph.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "mild");
    assert!(
        plan.notes
            .iter()
            .any(|n| n.contains("PSA density not computed"))
    );
}

#[test]
fn high_psa_density_adds_a_cancer_warning() {
    let raw = with(
        with(base_case(), "psa", json!(8.0)),
        "prostate_volume_ml",
        json!(30.0),
    );
    let plan = Bph.evaluate(&raw).unwrap();
    assert!(
        plan.notes
            .iter()
            .any(|n| n.contains("exclude prostate cancer"))
    );
}

#[test]
fn missing_required_field_names_the_field() {
    let mut raw = base_case();
    raw.as_object_mut().unwrap().remove("ipss");
    let err = Bph.evaluate(&raw).unwrap_err();
    match err {
        PathwayError::Input(InvalidInputError::MissingField(field)) => assert_eq!(field, "ipss"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparseable_boolean_names_the_field() {
    let raw = with(base_case(), "recurrent_retention", json!("maybe"));
    let err = Bph.evaluate(&raw).unwrap_err();
    match err {
        PathwayError::Input(InvalidInputError::InvalidValue { field, .. }) => {
            assert_eq!(field, "recurrent_retention")
        }
        other => panic!("unexpected error: {other}"),
    }
}
