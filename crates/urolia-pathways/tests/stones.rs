use serde_json::{Value, json};
use urolia_core::models::plan::OptionTag;
use urolia_pathways::Pathway;
use urolia_pathways::pathways::stones::Stones;

fn base_case() -> Value {
    json!({
        "size_mm": 6,
        "location": "distal_ureter",
        "density_hu": 800,
        "obstruction": false,
        "infection_signs": false,
        "solitary_kidney": false,
        "renal_failure": false,
        "uncontrolled_pain": false,
        "recurrent": false,
    })
}

fn with(mut raw: Value, key: &str, value: Value) -> Value {
    raw[key] = value;
    raw
}

#[test]
fn small_distal_stone_is_managed_conservatively() {
    let plan = Stones.evaluate(&base_case()).unwrap();
    assert_eq!(plan.classification.category().id, "conservative");
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("Medical expulsive therapy"))
    );
    assert!(
        plan.follow_up
            .iter()
            .any(|f| f.contains("Repeat imaging at 2-4 weeks"))
    );
}

#[test]
fn large_renal_stone_goes_to_percutaneous_surgery() {
    let raw = with(
        with(base_case(), "location", json!("kidney")),
        "size_mm",
        json!(25),
    );
    let plan = Stones.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "elective_intervention");
    assert!(
        plan.options
            .iter()
            .any(|o| o.label.contains("Percutaneous nephrolithotomy"))
    );
}

#[test]
fn moderate_density_renal_stone_is_eligible_for_eswl() {
    let raw = with(
        with(base_case(), "location", json!("kidney")),
        "size_mm",
        json!(12),
    );
    let plan = Stones.evaluate(&raw).unwrap();
    assert!(plan.options.iter().any(|o| o.label.contains("shockwave")));
}

#[test]
fn obstructed_infected_kidney_is_an_emergency_with_drainage_only() {
    let raw = with(
        with(
            with(with(base_case(), "location", json!("kidney")), "size_mm", json!(15)),
            "obstruction",
            json!(true),
        ),
        "infection_signs",
        json!(true),
    );
    let plan = Stones.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "emergency");
    assert!(plan.options.iter().any(|o| o.label.contains("Urgent decompression")));
    assert!(plan.options.iter().any(|o| o.label.contains("intravenous antibiotics")));
    // Elective modalities are suppressed during the emergency even though
    // their size and location predicates hold.
    assert!(plan.options.iter().all(|o| o.tag != OptionTag::FocalAblative));
    assert!(plan.options.iter().all(|o| o.tag != OptionTag::Alternative));
}

#[test]
fn renal_failure_alone_triggers_the_emergency_pathway() {
    let raw = with(base_case(), "renal_failure", json!(true));
    let plan = Stones.evaluate(&raw).unwrap();
    assert_eq!(plan.classification.category().id, "emergency");
}

#[test]
fn recurrent_stone_former_gets_a_metabolic_workup_note() {
    let raw = with(base_case(), "recurrent", json!(true));
    let plan = Stones.evaluate(&raw).unwrap();
    assert!(plan.notes.iter().any(|n| n.contains("Metabolic workup")));
}
