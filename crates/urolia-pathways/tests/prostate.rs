use serde_json::{Value, json};
use urolia_pathways::Pathway;
use urolia_pathways::pathways::prostate::{
    ProstateLocalized, ProstateMetastatic, ProstateRecurrence,
};

fn localized_case() -> Value {
    json!({
        "psa": 6.0,
        "isup": 1,
        "stage": "T1c",
        "age": 64,
    })
}

#[test]
fn low_psa_and_grade_classify_low_risk_with_active_surveillance() {
    let plan = ProstateLocalized.evaluate(&localized_case()).unwrap();
    assert_eq!(plan.classification.category().id, "low");
    assert!(plan.options.iter().any(|o| o.label == "Active surveillance"));
}

#[test]
fn psa_between_10_and_20_is_intermediate_risk() {
    let mut raw = localized_case();
    raw["psa"] = json!(12.5);
    let plan = ProstateLocalized.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "intermediate");
    assert!(plan.notes.iter().any(|n| n.contains("staging")));
}

#[test]
fn psa_above_20_or_high_grade_is_high_risk() {
    let mut raw = localized_case();
    raw["psa"] = json!(25.0);
    let plan = ProstateLocalized.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "high");

    let mut raw = localized_case();
    raw["isup"] = json!(4);
    let plan = ProstateLocalized.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "high");
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("extended lymph node dissection"))
    );
}

#[test]
fn high_psa_density_is_flagged_when_volume_is_known() {
    let mut raw = localized_case();
    raw["psa"] = json!(9.0);
    raw["prostate_volume_ml"] = json!(30.0);
    let plan = ProstateLocalized.evaluate(&raw).unwrap();
    assert!(plan.notes.iter().any(|n| n.contains("PSA density above 0.15")));
}

#[test]
fn fast_doubling_time_is_high_risk_recurrence() {
    let raw = json!({
        "prior_treatment": "prostatectomy",
        "psa": 0.6,
        "psa_doubling_time_months": 6,
        "isup": 2,
    });
    let plan = ProstateRecurrence.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "high_risk_bcr");
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("Salvage radiotherapy"))
    );
    assert!(plan.notes.iter().any(|n| n.contains("PSMA PET")));
}

#[test]
fn slow_kinetics_allow_surveillance_after_prostatectomy() {
    let raw = json!({
        "prior_treatment": "prostatectomy",
        "psa": 0.3,
        "psa_doubling_time_months": 24,
        "isup": 2,
    });
    let plan = ProstateRecurrence.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "low_risk_bcr");
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("Surveillance with serial PSA"))
    );
}

#[test]
fn recurrence_after_radiotherapy_offers_local_salvage() {
    let raw = json!({
        "prior_treatment": "radiotherapy",
        "psa": 4.0,
        "psa_doubling_time_months": 10,
        "isup": 3,
    });
    let plan = ProstateRecurrence.evaluate(&raw).unwrap();
    assert!(plan.options.iter().any(|o| o.label.contains("HIFU")));
}

#[test]
fn many_bone_metastases_classify_high_volume_with_triplet_option() {
    let raw = json!({
        "bone_mets_count": 6,
        "visceral_mets": false,
        "de_novo": true,
        "docetaxel_fit": true,
        "castration_resistant": false,
    });
    let plan = ProstateMetastatic.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "high_volume");
    assert!(plan.options.iter().any(|o| o.label.contains("Triplet therapy")));
}

#[test]
fn low_volume_de_novo_disease_gets_prostate_radiotherapy() {
    let raw = json!({
        "bone_mets_count": 2,
        "visceral_mets": false,
        "de_novo": true,
        "docetaxel_fit": false,
        "castration_resistant": false,
    });
    let plan = ProstateMetastatic.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "low_volume");
    assert!(plan.options.iter().any(|o| o.label == "Prostate radiotherapy"));
}

#[test]
fn castration_resistance_takes_priority_over_volume() {
    let raw = json!({
        "bone_mets_count": 8,
        "visceral_mets": true,
        "de_novo": false,
        "docetaxel_fit": true,
        "castration_resistant": true,
    });
    let plan = ProstateMetastatic.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "castration_resistant");
    assert!(plan.notes.iter().any(|n| n.contains("Maintain castration")));
}
