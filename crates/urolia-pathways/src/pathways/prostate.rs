use std::sync::LazyLock;

use urolia_core::models::plan::{OptionTag, Strength};

use crate::Pathway;
use crate::fields::{
    DerivedSpec, FieldSpec, bool_field, choice_field, float_field, int_field, optional_float,
    ratio_metric,
};
use crate::pathways::{opt, risk, text};
use crate::rules::{Classifier, ClassifierRule, ComposerTable, RuleTable};

/// Localized prostate cancer, D'Amico risk groups.
pub struct ProstateLocalized;

impl Pathway for ProstateLocalized {
    fn id(&self) -> &str {
        "prostate_localized"
    }

    fn name(&self) -> &str {
        "Localized prostate cancer"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                float_field("psa", "PSA (ng/ml)", 0.0, 500.0),
                int_field("isup", "ISUP grade group", 1, 5),
                choice_field("stage", "Clinical stage", &["t1c", "t2a", "t2b", "t2c"]),
                int_field("age", "Age (years)", 40, 100),
                optional_float("prostate_volume_ml", "Prostate volume (ml)", 0.0, 300.0),
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
                        when: |p| {
                            p.num("psa") > 20.0 || p.num("isup") >= 4.0 || p.choice_is("stage", "t2c")
                        },
                        category: risk("high", "High risk", 2),
                    },
                    ClassifierRule {
                        when: |p| {
                            p.num("psa") >= 10.0
                                || p.num("isup") >= 2.0
                                || p.choice_is("stage", "t2b")
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
                    OptionTag::Strategy,
                    Some(Strength::Strong),
                    "Active surveillance",
                    "preferred for low-risk disease, with PSA monitoring and confirmatory biopsy",
                ),
                opt(
                    |_, c| !c.is("high"),
                    OptionTag::Surgical,
                    Some(Strength::Moderate),
                    "Radical prostatectomy",
                    "curative option for low- and intermediate-risk disease",
                ),
                opt(
                    |_, c| c.is("high"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Radical prostatectomy with extended lymph node dissection",
                    "nodal staging is part of surgery in high-risk disease",
                ),
                opt(
                    |_, c| c.is("intermediate"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "External beam radiotherapy with 6 months of androgen deprivation",
                    "short-course hormonal therapy improves outcomes at intermediate risk",
                ),
                opt(
                    |_, c| c.is("high"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "External beam radiotherapy with 18-36 months of androgen deprivation",
                    "long-course hormonal therapy is standard at high risk",
                ),
                opt(
                    |p, c| c.is("low") || (c.is("intermediate") && p.num("isup") <= 2.0),
                    OptionTag::FocalAblative,
                    Some(Strength::Moderate),
                    "Low-dose-rate brachytherapy",
                    "suitable for low- and favourable-intermediate-risk disease",
                ),
            ],
            follow_up: vec![
                text(
                    |_, c| c.is("low"),
                    "PSA every 6 months and confirmatory biopsy at 12 months under surveillance",
                ),
                text(
                    |_, c| !c.is("low"),
                    "PSA every 6 months after curative treatment",
                ),
            ],
            notes: vec![
                text(
                    |_, c| !c.is("low"),
                    "Complete staging with bone scan or PSMA PET before treatment",
                ),
                text(
                    |p, _| p.metric("psa_density").is_some_and(|d| d > 0.15),
                    "PSA density above 0.15 supports clinically significant disease",
                ),
                text(
                    |p, _| p.num("age") >= 75.0,
                    "Life expectancy under 10 years favours surveillance or radiotherapy over surgery",
                ),
            ],
            suppression: None,
        });
        &COMPOSER
    }
}

/// Biochemical recurrence after curative treatment of prostate cancer.
pub struct ProstateRecurrence;

impl Pathway for ProstateRecurrence {
    fn id(&self) -> &str {
        "prostate_recurrence"
    }

    fn name(&self) -> &str {
        "Prostate cancer biochemical recurrence"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                choice_field(
                    "prior_treatment",
                    "Primary treatment",
                    &["prostatectomy", "radiotherapy"],
                ),
                float_field("psa", "PSA (ng/ml)", 0.0, 500.0),
                int_field(
                    "psa_doubling_time_months",
                    "PSA doubling time (months)",
                    1,
                    120,
                ),
                int_field("isup", "ISUP grade group at diagnosis", 1, 5),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![ClassifierRule {
                    when: |p| p.num("psa_doubling_time_months") <= 12.0 || p.num("isup") >= 4.0,
                    category: risk("high_risk_bcr", "High-risk recurrence", 1),
                }],
                fallback: risk("low_risk_bcr", "Low-risk recurrence", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |p, c| c.is("high_risk_bcr") && p.choice_is("prior_treatment", "prostatectomy"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Salvage radiotherapy to the prostate bed with androgen deprivation",
                    "early salvage at fast PSA kinetics improves metastasis-free survival",
                ),
                opt(
                    |p, c| c.is("low_risk_bcr") && p.choice_is("prior_treatment", "prostatectomy"),
                    OptionTag::Medical,
                    Some(Strength::Moderate),
                    "Early salvage radiotherapy at confirmed PSA rise",
                    "treatment can be deferred while kinetics stay slow",
                ),
                opt(
                    |p, _| p.choice_is("prior_treatment", "radiotherapy"),
                    OptionTag::Surgical,
                    Some(Strength::Weak),
                    "Salvage prostatectomy in selected patients",
                    "morbidity is higher than in the primary setting",
                ),
                opt(
                    |p, _| p.choice_is("prior_treatment", "radiotherapy"),
                    OptionTag::FocalAblative,
                    Some(Strength::Weak),
                    "Salvage HIFU or cryotherapy",
                    "focal salvage for biopsy-proven local recurrence",
                ),
                opt(
                    |_, c| c.is("low_risk_bcr"),
                    OptionTag::Strategy,
                    Some(Strength::Moderate),
                    "Surveillance with serial PSA",
                    "slow kinetics allow deferred salvage",
                ),
            ],
            follow_up: vec![text(
                |_, _| true,
                "PSA every 3 months until the trend is established",
            )],
            notes: vec![text(
                |_, _| true,
                "PSMA PET-CT before any salvage treatment",
            )],
            suppression: None,
        });
        &COMPOSER
    }
}

/// Metastatic prostate cancer: volume-stratified hormone-sensitive
/// disease and castration resistance.
pub struct ProstateMetastatic;

impl Pathway for ProstateMetastatic {
    fn id(&self) -> &str {
        "prostate_metastatic"
    }

    fn name(&self) -> &str {
        "Metastatic prostate cancer"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                int_field("bone_mets_count", "Number of bone metastases", 0, 50),
                bool_field("visceral_mets", "Visceral metastases"),
                bool_field("de_novo", "De novo metastatic presentation"),
                bool_field("docetaxel_fit", "Fit for docetaxel"),
                bool_field("castration_resistant", "Castration-resistant"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| p.flag("castration_resistant"),
                        category: risk("castration_resistant", "Castration-resistant", 2),
                    },
                    ClassifierRule {
                        when: |p| p.num("bone_mets_count") >= 4.0 || p.flag("visceral_mets"),
                        category: risk("high_volume", "High-volume hormone-sensitive", 1),
                    },
                ],
                fallback: risk("low_volume", "Low-volume hormone-sensitive", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| !c.is("castration_resistant"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Continuous androgen deprivation therapy",
                    "backbone of systemic treatment for hormone-sensitive disease",
                ),
                opt(
                    |_, c| !c.is("castration_resistant"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Add an androgen receptor pathway inhibitor",
                    "doublet therapy improves survival over castration alone",
                ),
                opt(
                    |p, c| c.is("high_volume") && p.flag("docetaxel_fit"),
                    OptionTag::Medical,
                    Some(Strength::Moderate),
                    "Triplet therapy: castration plus docetaxel plus darolutamide",
                    "benefit is concentrated in fit patients with high-volume de novo disease",
                ),
                opt(
                    |p, c| c.is("low_volume") && p.flag("de_novo"),
                    OptionTag::Medical,
                    Some(Strength::Moderate),
                    "Prostate radiotherapy",
                    "treating the primary improves survival in low-burden metastatic disease",
                ),
                opt(
                    |_, c| c.is("castration_resistant"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Next line by prior exposure: ARPI switch, docetaxel, cabazitaxel, or PSMA radioligand",
                    "sequence depends on previously received agents",
                ),
            ],
            follow_up: vec![
                text(|_, _| true, "PSA and testosterone every 3 months"),
                text(|_, _| true, "Imaging at progression or new symptoms"),
            ],
            notes: vec![
                text(
                    |p, _| p.num("bone_mets_count") >= 1.0,
                    "Bone-protecting agent and calcium-vitamin D supplementation",
                ),
                text(
                    |_, c| c.is("castration_resistant"),
                    "Maintain castration while adding next-line therapy",
                ),
            ],
            suppression: None,
        });
        &COMPOSER
    }
}
