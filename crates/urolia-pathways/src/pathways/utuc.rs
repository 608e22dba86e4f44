use std::sync::LazyLock;

use urolia_core::models::plan::{OptionTag, Strength};

use crate::Pathway;
use crate::fields::{FieldSpec, bool_field, choice_field, int_field, optional_bool};
use crate::params::ParameterSet;
use crate::pathways::{opt, risk, text};
use crate::rules::{Classifier, ClassifierRule, ComposerTable, RuleTable, SuppressionPolicy};

/// Upper-tract urothelial carcinoma: kidney-sparing management for
/// low-risk tumours, radical nephroureterectomy for high-risk ones unless
/// an imperative indication forces conservation.
pub struct Utuc;

fn imperative_sparing(p: &ParameterSet) -> bool {
    p.flag("solitary_kidney")
        || p.flag("renal_insufficiency")
        || p.flag("surgery_unfit_or_refused")
}

impl Pathway for Utuc {
    fn id(&self) -> &str {
        "utuc"
    }

    fn name(&self) -> &str {
        "Upper-tract urothelial carcinoma"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                choice_field("grade", "Cytology or biopsy grade", &["low", "high"]),
                int_field("size_mm", "Tumour size (mm)", 1, 100),
                bool_field("invasive_on_imaging", "Invasion on imaging"),
                bool_field("multifocal", "Multifocal disease"),
                bool_field("hydronephrosis", "Hydronephrosis"),
                bool_field("solitary_kidney", "Solitary kidney"),
                bool_field("renal_insufficiency", "Renal insufficiency"),
                optional_bool("surgery_unfit_or_refused", "Surgery contraindicated or refused"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![ClassifierRule {
                    when: |p| {
                        p.choice_is("grade", "high")
                            || p.flag("invasive_on_imaging")
                            || p.num("size_mm") >= 20.0
                            || p.flag("multifocal")
                            || p.flag("hydronephrosis")
                    },
                    category: risk("high_risk", "High risk", 1),
                }],
                fallback: risk("low_risk", "Low risk", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("low_risk"),
                    OptionTag::FocalAblative,
                    Some(Strength::Strong),
                    "Kidney-sparing endoscopic laser ablation",
                    "low-risk tumours are managed conservatively with equivalent outcomes",
                ),
                opt(
                    |_, c| c.is("high_risk"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Radical nephroureterectomy with bladder cuff excision",
                    "reference treatment for high-risk upper-tract tumours",
                ),
                opt(
                    |_, c| c.is("high_risk"),
                    OptionTag::Medical,
                    Some(Strength::Moderate),
                    "Single postoperative intravesical mitomycin instillation",
                    "reduces bladder recurrence after nephroureterectomy",
                ),
                opt(
                    |_, c| c.is("high_risk"),
                    OptionTag::Alternative,
                    Some(Strength::Weak),
                    "Kidney-sparing management despite high risk",
                    "imperative indication: solitary kidney, renal insufficiency, or unfit for surgery",
                ),
            ],
            follow_up: vec![
                text(
                    |_, c| c.is("low_risk"),
                    "Ureteroscopic surveillance at 3 months, then every 6 months",
                ),
                text(
                    |_, c| c.is("high_risk"),
                    "Cystoscopy at 3 months, then regularly: bladder recurrence is frequent",
                ),
            ],
            notes: vec![text(
                |p, _| p.flag("solitary_kidney") || p.flag("renal_insufficiency"),
                "Renal function constrains treatment choice: nephrology input advised",
            )],
            suppression: Some(SuppressionPolicy {
                indication: |_, c| c.is("high_risk"),
                feasible: |p| !imperative_sparing(p),
                suppressed_when_feasible: vec![OptionTag::FocalAblative, OptionTag::Alternative],
                retained_when_infeasible: vec![OptionTag::Alternative, OptionTag::FocalAblative],
            }),
        });
        &COMPOSER
    }
}
