use std::sync::LazyLock;

use urolia_core::models::plan::{OptionTag, Strength};

use crate::Pathway;
use crate::fields::{FieldSpec, bool_field, choice_field, int_field};
use crate::pathways::{opt, risk, text};
use crate::rules::{
    Classifier, ClassifierRule, ComposerTable, RuleTable, ScoreBand, ScoreTable,
};

/// Localized renal tumour: nephron-sparing surgery, ablation, and
/// surveillance by clinical stage.
pub struct KidneyLocalized;

impl Pathway for KidneyLocalized {
    fn id(&self) -> &str {
        "kidney_localized"
    }

    fn name(&self) -> &str {
        "Localized kidney cancer"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                choice_field("stage", "Clinical stage", &["ct1a", "ct1b", "ct2"]),
                int_field("size_mm", "Tumour size (mm)", 1, 200),
                bool_field("solitary_kidney", "Solitary kidney"),
                bool_field("chronic_kidney_disease", "Chronic kidney disease"),
                bool_field("frail", "Frail or heavily comorbid"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| p.choice_is("stage", "ct2"),
                        category: risk("high", "High risk", 2),
                    },
                    ClassifierRule {
                        when: |p| p.choice_is("stage", "ct1b"),
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
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Partial nephrectomy",
                    "nephron-sparing surgery is the reference for cT1a tumours",
                ),
                opt(
                    |p, c| c.is("low") && p.flag("frail"),
                    OptionTag::FocalAblative,
                    Some(Strength::Moderate),
                    "Percutaneous thermal ablation",
                    "alternative to surgery for small tumours in frail patients",
                ),
                opt(
                    |p, c| c.is("low") && p.flag("frail") && p.num("size_mm") <= 30.0,
                    OptionTag::Strategy,
                    Some(Strength::Weak),
                    "Active surveillance with serial imaging",
                    "small renal masses grow slowly and competing mortality may dominate",
                ),
                opt(
                    |_, c| c.is("intermediate"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Partial nephrectomy when technically feasible, otherwise radical",
                    "function preservation is weighed against oncologic margins for cT1b",
                ),
                opt(
                    |_, c| c.is("high"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Radical nephrectomy",
                    "reference treatment for cT2 tumours",
                ),
            ],
            follow_up: vec![
                text(
                    |_, c| !c.is("high"),
                    "Abdominal imaging at 6 months, then annually",
                ),
                text(
                    |_, c| c.is("high"),
                    "CT thorax-abdomen every 6 months for 3 years",
                ),
            ],
            notes: vec![text(
                |p, _| p.flag("solitary_kidney") || p.flag("chronic_kidney_disease"),
                "Imperative nephron-sparing: renal function must be preserved",
            )],
            suppression: None,
        });
        &COMPOSER
    }
}

/// Metastatic renal cell carcinoma stratified by the IMDC prognostic
/// score: six adverse factors, bands 0 / 1-2 / 3-6.
pub struct KidneyMetastatic;

impl Pathway for KidneyMetastatic {
    fn id(&self) -> &str {
        "kidney_metastatic"
    }

    fn name(&self) -> &str {
        "Metastatic kidney cancer"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                choice_field("histology", "Histology", &["clear_cell", "non_clear_cell"]),
                bool_field(
                    "interval_under_1yr",
                    "Under 1 year from diagnosis to systemic treatment",
                ),
                bool_field("performance_under_80", "Karnofsky performance status under 80"),
                bool_field("anaemia", "Haemoglobin below normal"),
                bool_field("hypercalcaemia", "Corrected calcium above normal"),
                bool_field("neutrophilia", "Neutrophils above normal"),
                bool_field("thrombocytosis", "Platelets above normal"),
                bool_field("bone_mets", "Bone metastases"),
                bool_field("brain_mets", "Brain metastases"),
                bool_field("liver_mets", "Liver metastases"),
                bool_field(
                    "immunotherapy_contraindicated",
                    "Checkpoint inhibitors contraindicated",
                ),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Score(ScoreTable {
                factors: vec![
                    "interval_under_1yr".to_string(),
                    "performance_under_80".to_string(),
                    "anaemia".to_string(),
                    "hypercalcaemia".to_string(),
                    "neutrophilia".to_string(),
                    "thrombocytosis".to_string(),
                ],
                bands: vec![
                    ScoreBand {
                        min: 0,
                        max: 0,
                        category: risk("good", "Good prognosis", 0),
                    },
                    ScoreBand {
                        min: 1,
                        max: 2,
                        category: risk("intermediate", "Intermediate prognosis", 1),
                    },
                    ScoreBand {
                        min: 3,
                        max: 6,
                        category: risk("poor", "Poor prognosis", 2),
                    },
                ],
                fallback: risk("poor", "Poor prognosis", 2),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |p, c| c.is("good") && !p.flag("immunotherapy_contraindicated"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Pembrolizumab plus axitinib",
                    "immune-TKI doublets are standard across IMDC groups",
                ),
                opt(
                    |p, c| {
                        (c.is("intermediate") || c.is("poor"))
                            && !p.flag("immunotherapy_contraindicated")
                    },
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Ipilimumab plus nivolumab, or cabozantinib-based doublet",
                    "dual checkpoint blockade benefits intermediate- and poor-risk disease",
                ),
                opt(
                    |p, _| p.flag("immunotherapy_contraindicated"),
                    OptionTag::Alternative,
                    Some(Strength::Moderate),
                    "Single-agent TKI (sunitinib, pazopanib, or cabozantinib)",
                    "angiogenesis inhibition when checkpoint blockade is contraindicated",
                ),
                opt(
                    |p, c| c.is("good") && p.choice_is("histology", "clear_cell"),
                    OptionTag::Surgical,
                    Some(Strength::Weak),
                    "Consider cytoreductive nephrectomy",
                    "selected good-prognosis patients with limited metastatic burden",
                ),
                opt(
                    |p, _| p.choice_is("histology", "non_clear_cell"),
                    OptionTag::Alternative,
                    Some(Strength::Weak),
                    "Cabozantinib or clinical trial enrolment",
                    "non-clear-cell histology is under-represented in registration trials",
                ),
            ],
            follow_up: vec![text(
                |_, _| true,
                "Cross-sectional imaging every 3 months while on systemic therapy",
            )],
            notes: vec![
                text(
                    |p, _| p.flag("bone_mets"),
                    "Bone metastases: bone-protecting agent and orthopaedic review",
                ),
                text(
                    |p, _| p.flag("brain_mets"),
                    "Brain metastases: assess for stereotactic radiosurgery before systemic therapy",
                ),
            ],
            suppression: None,
        });
        &COMPOSER
    }
}

/// Renal mass biopsy indication.
pub struct KidneyBiopsy;

impl Pathway for KidneyBiopsy {
    fn id(&self) -> &str {
        "kidney_biopsy"
    }

    fn name(&self) -> &str {
        "Renal mass biopsy indication"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                int_field("size_mm", "Mass size (mm)", 1, 200),
                bool_field("cystic", "Cystic lesion"),
                bool_field("ablation_planned", "Ablation planned"),
                bool_field("surveillance_planned", "Active surveillance planned"),
                bool_field(
                    "metastatic_context",
                    "Systemic therapy planned without prior histology",
                ),
                bool_field("bleeding_risk", "Bleeding risk or anticoagulation"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                // A cystic lesion excludes biopsy even when a downstream
                // treatment would otherwise call for one; precedence is the
                // documented tie-break.
                rules: vec![
                    ClassifierRule {
                        when: |p| p.flag("cystic"),
                        category: risk("not_indicated", "Biopsy not indicated", 0),
                    },
                    ClassifierRule {
                        when: |p| {
                            p.flag("ablation_planned")
                                || p.flag("surveillance_planned")
                                || p.flag("metastatic_context")
                        },
                        category: risk("indicated", "Biopsy indicated", 2),
                    },
                ],
                fallback: risk("optional", "Biopsy optional", 1),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("indicated"),
                    OptionTag::Strategy,
                    Some(Strength::Strong),
                    "Percutaneous coaxial core biopsy",
                    "histology is required before ablation, surveillance, or systemic therapy",
                ),
                opt(
                    |_, c| c.is("optional"),
                    OptionTag::Strategy,
                    Some(Strength::Weak),
                    "Offer biopsy when histology would change management",
                    "surgery may proceed on imaging diagnosis alone",
                ),
                opt(
                    |_, c| c.is("not_indicated"),
                    OptionTag::Strategy,
                    Some(Strength::Moderate),
                    "No biopsy: manage on imaging diagnosis",
                    "cystic lesions risk seeding and false-negative sampling",
                ),
            ],
            follow_up: vec![text(
                |_, c| c.is("indicated"),
                "Review histology at the multidisciplinary meeting",
            )],
            notes: vec![text(
                |p, _| p.flag("bleeding_risk"),
                "Correct coagulation and pause antithrombotics before any biopsy",
            )],
            suppression: None,
        });
        &COMPOSER
    }
}
