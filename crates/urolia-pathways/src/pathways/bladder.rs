use std::sync::LazyLock;

use urolia_core::models::plan::{OptionTag, Strength};

use crate::Pathway;
use crate::fields::{FieldSpec, bool_field, choice_field, int_field, optional_bool};
use crate::params::ParameterSet;
use crate::pathways::{opt, risk, text};
use crate::rules::{Classifier, ClassifierRule, ComposerTable, RuleTable, SuppressionPolicy};

/// Non-muscle-invasive bladder cancer (pTa/pT1): AFU-style risk grouping,
/// adjuvant instillation policy, and cystectomy triage after BCG failure.
pub struct BladderNmibc;

/// Aggravating factors that push high-risk disease into the very-high
/// group: size 30 mm or more, multifocality, CIS, lymphovascular invasion,
/// prostatic urethra involvement.
fn aggravating_count(p: &ParameterSet) -> usize {
    [
        p.num("size_mm") >= 30.0,
        !p.choice_is("tumour_count", "unique"),
        p.flag("cis"),
        p.flag("lvi"),
        p.flag("prostatic_urethra"),
    ]
    .iter()
    .filter(|present| **present)
    .count()
}

impl Pathway for BladderNmibc {
    fn id(&self) -> &str {
        "bladder_nmibc"
    }

    fn name(&self) -> &str {
        "Non-muscle-invasive bladder cancer"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                choice_field("stage", "Tumour stage", &["pta", "pt1"]),
                choice_field("grade", "Tumour grade", &["low", "high"]),
                int_field("size_mm", "Largest tumour size (mm)", 1, 150),
                choice_field(
                    "tumour_count",
                    "Tumour count",
                    &["unique", "multiple", "diffuse"],
                ),
                bool_field("cis", "Associated carcinoma in situ"),
                bool_field("lvi", "Lymphovascular invasion"),
                bool_field("prostatic_urethra", "Prostatic urethra involvement"),
                bool_field("recurrence", "Recurrent tumour"),
                optional_bool("bcg_failure", "Failure of adequate BCG therapy"),
                optional_bool(
                    "cystectomy_unfit_or_refused",
                    "Cystectomy contraindicated or refused",
                ),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| {
                            p.choice_is("stage", "pt1")
                                && p.choice_is("grade", "high")
                                && aggravating_count(p) >= 1
                        },
                        category: risk("very_high", "Very high risk", 3),
                    },
                    ClassifierRule {
                        when: |p| {
                            p.choice_is("stage", "pt1")
                                || p.choice_is("grade", "high")
                                || p.flag("cis")
                                || p.flag("lvi")
                                || p.flag("prostatic_urethra")
                        },
                        category: risk("high", "High risk", 2),
                    },
                    ClassifierRule {
                        when: |p| {
                            !p.choice_is("tumour_count", "unique")
                                || p.num("size_mm") >= 30.0
                                || p.flag("recurrence")
                        },
                        category: risk("intermediate", "Intermediate risk", 1),
                    },
                ],
                fallback: risk("low", "Low risk", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("low"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Single mitomycin C instillation within 6 hours of resection",
                    "one immediate post-TURBT instillation halves early recurrence in low-risk tumours",
                ),
                opt(
                    |_, c| c.is("intermediate"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "BCG for 1 year or weekly mitomycin C x6 with maintenance",
                    "adjuvant instillations reduce recurrence in intermediate-risk disease",
                ),
                opt(
                    |_, c| c.is("high") || c.is("very_high"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "BCG induction plus 3-year maintenance",
                    "full-dose BCG is the standard for high-risk non-muscle-invasive disease",
                ),
                opt(
                    |p, c| (c.is("high") || c.is("very_high")) && p.choice_is("stage", "pt1"),
                    OptionTag::Surgical,
                    Some(Strength::Moderate),
                    "Restaging transurethral resection at 4-6 weeks",
                    "pT1 disease carries a high rate of residual tumour and understaging",
                ),
                opt(
                    |_, c| c.is("very_high"),
                    OptionTag::Surgical,
                    Some(Strength::Moderate),
                    "Discuss early radical cystectomy",
                    "very-high-risk tumours progress despite conservative treatment",
                ),
                opt(
                    |p, _| p.flag("bcg_failure"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Radical cystectomy with pelvic lymph node dissection",
                    "BCG-unresponsive disease mandates radical treatment",
                ),
                opt(
                    |p, _| p.flag("bcg_failure"),
                    OptionTag::Alternative,
                    Some(Strength::Weak),
                    "Bladder-sparing salvage (device-assisted chemotherapy or trial enrolment)",
                    "reserved for patients unfit for or refusing cystectomy",
                ),
            ],
            follow_up: vec![
                text(
                    |_, c| c.is("low"),
                    "Cystoscopy at 3 months, at 12 months, then yearly for 5 years",
                ),
                text(
                    |_, c| c.is("intermediate"),
                    "Cystoscopy at 3 and 6 months, then every 6 months for 2 years",
                ),
                text(
                    |_, c| c.is("high") || c.is("very_high"),
                    "Cystoscopy and cytology every 3 months during the first year",
                ),
            ],
            notes: vec![
                text(
                    |p, _| p.flag("cis"),
                    "Associated CIS: urethral and upper-tract surveillance warranted",
                ),
                text(
                    |_, c| c.is("very_high"),
                    "Present at the multidisciplinary team meeting before treatment choice",
                ),
            ],
            suppression: Some(SuppressionPolicy {
                indication: |p, _| p.flag("bcg_failure"),
                feasible: |p| !p.flag("cystectomy_unfit_or_refused"),
                suppressed_when_feasible: vec![OptionTag::Medical, OptionTag::Alternative],
                retained_when_infeasible: vec![OptionTag::Alternative, OptionTag::Palliative],
            }),
        });
        &COMPOSER
    }
}

/// Muscle-invasive bladder cancer: perioperative chemotherapy and radical
/// versus bladder-sparing treatment.
pub struct BladderMibc;

impl Pathway for BladderMibc {
    fn id(&self) -> &str {
        "bladder_mibc"
    }

    fn name(&self) -> &str {
        "Muscle-invasive bladder cancer"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                choice_field("stage", "Tumour stage", &["pt2", "pt3", "pt4"]),
                bool_field("node_positive", "Pelvic lymph node involvement"),
                bool_field("hydronephrosis", "Hydronephrosis"),
                bool_field("cisplatin_eligible", "Eligible for cisplatin"),
                bool_field("fit_for_surgery", "Fit for radical surgery"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| p.flag("node_positive"),
                        category: risk("node_positive", "Node-positive", 2),
                    },
                    ClassifierRule {
                        when: |p| {
                            p.choice_is("stage", "pt3")
                                || p.choice_is("stage", "pt4")
                                || p.flag("hydronephrosis")
                        },
                        category: risk("locally_advanced", "Locally advanced", 1),
                    },
                ],
                fallback: risk("organ_confined", "Organ-confined", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |p, _| p.flag("cisplatin_eligible"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Neoadjuvant cisplatin-based chemotherapy",
                    "improves survival before radical cystectomy in eligible patients",
                ),
                opt(
                    |_, _| true,
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Radical cystectomy with extended pelvic lymph node dissection",
                    "reference treatment for muscle-invasive disease",
                ),
                opt(
                    |_, _| true,
                    OptionTag::Alternative,
                    Some(Strength::Moderate),
                    "Trimodal therapy: maximal TURBT plus concurrent chemoradiation",
                    "bladder-sparing option with comparable outcomes in selected patients",
                ),
                opt(
                    |_, c| c.is("node_positive"),
                    OptionTag::Strategy,
                    Some(Strength::Moderate),
                    "Primary chemotherapy with response assessment before local treatment",
                    "nodal disease is treated as systemic first",
                ),
            ],
            follow_up: vec![text(
                |_, _| true,
                "CT thorax-abdomen-pelvis every 6 months for 2 years after treatment",
            )],
            notes: vec![
                text(
                    |_, _| true,
                    "Complete staging with CT thorax-abdomen-pelvis before any decision",
                ),
                text(
                    |_, _| true,
                    "Multidisciplinary team validation is required",
                ),
            ],
            suppression: Some(SuppressionPolicy {
                // Confirmed muscle invasion is itself the strict indication.
                indication: |_, _| true,
                feasible: |p| p.flag("fit_for_surgery"),
                suppressed_when_feasible: vec![OptionTag::Alternative],
                retained_when_infeasible: vec![
                    OptionTag::Medical,
                    OptionTag::Alternative,
                    OptionTag::Strategy,
                    OptionTag::Palliative,
                ],
            }),
        });
        &COMPOSER
    }
}

/// Metastatic urothelial carcinoma of the bladder: first-line systemic
/// therapy by platinum eligibility and performance status.
pub struct BladderMetastatic;

impl Pathway for BladderMetastatic {
    fn id(&self) -> &str {
        "bladder_metastatic"
    }

    fn name(&self) -> &str {
        "Metastatic bladder cancer"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                int_field("ecog", "ECOG performance status", 0, 4),
                bool_field("cisplatin_eligible", "Eligible for cisplatin"),
                bool_field("platinum_eligible", "Eligible for any platinum"),
                bool_field("bone_mets", "Bone metastases"),
                bool_field("visceral_mets", "Visceral metastases"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| p.num("ecog") >= 3.0,
                        category: risk("frail", "Frail", 2),
                    },
                    ClassifierRule {
                        when: |p| !p.flag("platinum_eligible"),
                        category: risk("platinum_ineligible", "Platinum-ineligible", 1),
                    },
                ],
                fallback: risk("platinum_eligible", "Platinum-eligible", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |p, c| c.is("platinum_eligible") && p.flag("cisplatin_eligible"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Gemcitabine-cisplatin followed by avelumab maintenance",
                    "standard first line for cisplatin-eligible metastatic urothelial carcinoma",
                ),
                opt(
                    |p, c| c.is("platinum_eligible") && !p.flag("cisplatin_eligible"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Gemcitabine-carboplatin followed by avelumab maintenance",
                    "carboplatin substitutes when cisplatin is contraindicated",
                ),
                opt(
                    |_, c| c.is("platinum_ineligible"),
                    OptionTag::Medical,
                    Some(Strength::Moderate),
                    "Pembrolizumab monotherapy",
                    "checkpoint blockade for platinum-ineligible patients",
                ),
                opt(
                    |_, c| !c.is("frail"),
                    OptionTag::Alternative,
                    Some(Strength::Weak),
                    "Enfortumab vedotin or clinical trial at progression",
                    "later-line option after platinum and immunotherapy",
                ),
                opt(
                    |_, c| c.is("frail"),
                    OptionTag::Palliative,
                    Some(Strength::Strong),
                    "Best supportive care with palliative team referral",
                    "ECOG 3-4 precludes meaningful benefit from systemic chemotherapy",
                ),
            ],
            follow_up: vec![text(
                |_, c| !c.is("frail"),
                "Response imaging every 2-3 cycles of systemic therapy",
            )],
            notes: vec![text(
                |p, _| p.flag("bone_mets"),
                "Add a bone-protecting agent (zoledronic acid or denosumab)",
            )],
            suppression: None,
        });
        &COMPOSER
    }
}
