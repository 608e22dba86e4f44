use serde_json::json;
use urolia_core::models::plan::OptionTag;
use urolia_pathways::Pathway;
use urolia_pathways::pathways::infection::{Cystitis, Prostatitis, Pyelonephritis, UtiPregnancy};

#[test]
fn simple_cystitis_gets_single_dose_fosfomycin() {
    let raw = json!({
        "risk_factors": false,
        "recurrent": false,
        "fever": false,
    });
    let plan = Cystitis.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "simple");
    assert!(plan.options.iter().any(|o| o.label.contains("Fosfomycin")));
}

#[test]
fn risk_factors_take_priority_over_recurrence() {
    let raw = json!({
        "risk_factors": true,
        "recurrent": true,
        "fever": false,
    });
    let plan = Cystitis.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "at_risk");
    assert!(plan.options.iter().any(|o| o.label.contains("Urine culture")));
    assert!(!plan.options.iter().any(|o| o.label.contains("Fosfomycin")));
}

#[test]
fn recurrent_cystitis_adds_prevention_and_workup() {
    let raw = json!({
        "risk_factors": false,
        "recurrent": true,
        "fever": false,
    });
    let plan = Cystitis.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "recurrent");
    assert!(plan.options.iter().any(|o| o.label.contains("Prevention")));
    assert!(plan.options.iter().any(|o| o.label.contains("Urological workup")));
}

#[test]
fn fever_in_cystitis_raises_a_pyelonephritis_warning() {
    let raw = json!({
        "risk_factors": false,
        "recurrent": false,
        "fever": true,
    });
    let plan = Cystitis.evaluate(&raw).unwrap();
    assert!(plan.notes.iter().any(|n| n.contains("pyelonephritis")));
}

#[test]
fn simple_pyelonephritis_can_be_managed_as_outpatient() {
    let raw = json!({
        "sepsis": false,
        "obstruction": false,
        "risk_factors": false,
        "oral_intolerance": false,
    });
    let plan = Pyelonephritis.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "simple");
    assert!(plan.options.iter().any(|o| o.label.contains("Ceftriaxone")));
    assert!(plan.options.iter().any(|o| o.label.contains("Outpatient")));
}

#[test]
fn obstructive_pyelonephritis_mandates_drainage_and_excludes_outpatient_care() {
    let raw = json!({
        "sepsis": false,
        "obstruction": true,
        "risk_factors": false,
        "oral_intolerance": false,
    });
    let plan = Pyelonephritis.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "severe");
    assert!(plan.options.iter().any(|o| o.label.contains("Urgent drainage")));
    assert!(plan.options.iter().all(|o| o.tag != OptionTag::Strategy));
}

#[test]
fn bacteriuria_in_pregnancy_is_always_treated() {
    let raw = json!({
        "presentation": "bacteriuria",
        "fever": false,
        "trimester": 2,
    });
    let plan = UtiPregnancy.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "asymptomatic_bacteriuria");
    assert!(plan.options.iter().any(|o| o.label.contains("amoxicillin")));
    assert!(plan.follow_up.iter().any(|f| f.contains("monthly until delivery")));
}

#[test]
fn fever_reclassifies_pregnancy_infection_as_pyelonephritis() {
    let raw = json!({
        "presentation": "cystitis",
        "fever": true,
        "trimester": 3,
    });
    let plan = UtiPregnancy.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "gravid_pyelonephritis");
    assert!(plan.options.iter().any(|o| o.label.contains("Obstetric assessment")));
}

#[test]
fn prostatitis_with_retention_gets_a_suprapubic_catheter() {
    let raw = json!({
        "sepsis": false,
        "abscess": false,
        "urinary_retention": true,
    });
    let plan = Prostatitis.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "with_retention");
    assert!(plan.options.iter().any(|o| o.label.contains("Suprapubic")));
    assert!(plan.notes.iter().any(|n| n.contains("Defer PSA")));
}

#[test]
fn septic_prostatitis_is_severe_and_hospitalized() {
    let raw = json!({
        "sepsis": true,
        "abscess": true,
        "urinary_retention": false,
    });
    let plan = Prostatitis.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "severe");
    assert!(plan.options.iter().any(|o| o.label.contains("Hospitalization")));
    assert!(plan.options.iter().any(|o| o.label.contains("abscess")));
}
