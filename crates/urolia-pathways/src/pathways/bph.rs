use std::sync::LazyLock;

use urolia_core::models::plan::{OptionTag, Strength};

use crate::Pathway;
use crate::fields::{
    DerivedSpec, FieldSpec, bool_field, float_field, int_field, optional_bool, optional_float,
    ratio_metric,
};
use crate::params::ParameterSet;
use crate::pathways::{opt, risk, text};
use crate::rules::{Classifier, ClassifierRule, ComposerTable, RuleTable, SuppressionPolicy};

/// Benign prostatic hyperplasia: symptom-score stratification, medical
/// therapy, and the strict surgical indication on complications or
/// failure of medical treatment.
pub struct Bph;

fn surgical_indication(p: &ParameterSet) -> bool {
    p.flag("recurrent_retention")
        || p.flag("recurrent_utis")
        || p.flag("bladder_stones")
        || p.flag("obstructive_renal_impairment")
        || p.flag("recurrent_haematuria")
        || p.flag("medical_failure")
}

fn complicated(p: &ParameterSet) -> bool {
    p.flag("recurrent_retention")
        || p.flag("recurrent_utis")
        || p.flag("bladder_stones")
        || p.flag("obstructive_renal_impairment")
        || p.flag("recurrent_haematuria")
}

impl Pathway for Bph {
    fn id(&self) -> &str {
        "bph"
    }

    fn name(&self) -> &str {
        "Benign prostatic hyperplasia"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                int_field("ipss", "IPSS symptom score", 0, 35),
                int_field("qol", "Quality-of-life score", 0, 6),
                float_field("prostate_volume_ml", "Prostate volume (ml)", 0.0, 300.0),
                optional_float("psa", "PSA (ng/ml)", 0.0, 100.0),
                int_field("post_void_residual_ml", "Post-void residual (ml)", 0, 2000),
                bool_field("recurrent_retention", "Recurrent urinary retention"),
                bool_field("recurrent_utis", "Recurrent urinary infections"),
                bool_field("bladder_stones", "Bladder stones"),
                bool_field(
                    "obstructive_renal_impairment",
                    "Renal impairment from obstruction",
                ),
                bool_field("recurrent_haematuria", "Recurrent haematuria"),
                bool_field("median_lobe", "Prominent median lobe"),
                bool_field("medical_failure", "Failure of well-conducted medical therapy"),
                optional_bool("surgery_unfit_or_refused", "Surgery contraindicated or refused"),
            ]
        });
        &FIELDS
    }

    fn derived(&self) -> &[DerivedSpec] {
        static DERIVED: LazyLock<Vec<DerivedSpec>> = LazyLock::new(|| {
            vec![ratio_metric(
                "psa_density",
                "PSA density",
                "psa",
                "prostate_volume_ml",
            )]
        });
        &DERIVED
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: complicated,
                        category: risk("complicated", "Complicated", 3),
                    },
                    ClassifierRule {
                        when: |p| p.num("ipss") >= 20.0,
                        category: risk("severe", "Severe symptoms", 2),
                    },
                    ClassifierRule {
                        when: |p| p.num("ipss") >= 8.0,
                        category: risk("moderate", "Moderate symptoms", 1),
                    },
                ],
                fallback: risk("mild", "Mild symptoms", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("mild"),
                    OptionTag::Strategy,
                    Some(Strength::Strong),
                    "Watchful waiting with lifestyle advice",
                    "mild symptoms without complications warrant no active treatment",
                ),
                opt(
                    |_, c| c.is("moderate") || c.is("severe"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Alpha-blocker",
                    "first-line symptomatic treatment",
                ),
                opt(
                    |p, c| {
                        (c.is("moderate") || c.is("severe")) && p.num("prostate_volume_ml") > 40.0
                    },
                    OptionTag::Medical,
                    Some(Strength::Moderate),
                    "Add a 5-alpha-reductase inhibitor",
                    "reduces progression risk when prostate volume exceeds 40 ml",
                ),
                opt(
                    |p, _| surgical_indication(p) && p.num("prostate_volume_ml") <= 80.0,
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Transurethral resection of the prostate",
                    "reference technique for prostates up to 80 ml",
                ),
                opt(
                    |p, _| surgical_indication(p) && p.num("prostate_volume_ml") > 80.0,
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Endoscopic enucleation or open adenomectomy",
                    "preferred above 80 ml",
                ),
                opt(
                    |p, _| surgical_indication(p),
                    OptionTag::Alternative,
                    Some(Strength::Weak),
                    "Prostatic artery embolization or intraprostatic stent",
                    "minimally invasive options when surgery is not possible",
                ),
                opt(
                    |p, _| surgical_indication(p),
                    OptionTag::Palliative,
                    Some(Strength::Weak),
                    "Indwelling or intermittent catheterization",
                    "symptom control when no intervention is feasible",
                ),
            ],
            follow_up: vec![
                text(
                    |p, _| !surgical_indication(p),
                    "Review symptoms with IPSS at 3 months, then annually",
                ),
                text(
                    |p, _| surgical_indication(p),
                    "Postoperative review at 6 weeks with flow rate and residual measurement",
                ),
            ],
            notes: vec![
                text(
                    |p, _| p.flag("median_lobe") && surgical_indication(p),
                    "Median lobe present: favour resection or enucleation over incision and implants",
                ),
                text(
                    |p, _| p.num("post_void_residual_ml") >= 300.0,
                    "Large post-void residual: check the upper tract and renal function",
                ),
                text(
                    |p, _| p.metric("psa_density").is_some_and(|d| d > 0.15),
                    "Elevated PSA density: exclude prostate cancer before attributing symptoms to BPH",
                ),
            ],
            suppression: Some(SuppressionPolicy {
                indication: |p, _| surgical_indication(p),
                feasible: |p| !p.flag("surgery_unfit_or_refused"),
                suppressed_when_feasible: vec![
                    OptionTag::Medical,
                    OptionTag::Strategy,
                    OptionTag::Alternative,
                    OptionTag::Palliative,
                ],
                retained_when_infeasible: vec![OptionTag::Alternative, OptionTag::Palliative],
            }),
        });
        &COMPOSER
    }
}
