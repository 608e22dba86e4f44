//! Urinary tract infections: cystitis, pyelonephritis, pregnancy, and
//! acute prostatitis.

use std::sync::LazyLock;

use urolia_core::models::plan::{OptionTag, Strength};

use crate::Pathway;
use crate::fields::{FieldSpec, bool_field, choice_field, int_field};
use crate::pathways::{opt, risk, text};
use crate::rules::{Classifier, ClassifierRule, ComposerTable, RuleTable, SuppressionPolicy};

pub struct Cystitis;

impl Pathway for Cystitis {
    fn id(&self) -> &str {
        "cystitis"
    }

    fn name(&self) -> &str {
        "Acute cystitis"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                bool_field(
                    "risk_factors",
                    "Risk factors (abnormal tract, immunosuppression, renal failure)",
                ),
                bool_field("recurrent", "Four or more episodes per year"),
                bool_field("fever", "Fever or flank pain"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| p.flag("risk_factors"),
                        category: risk("at_risk", "Cystitis at risk of complication", 2),
                    },
                    ClassifierRule {
                        when: |p| p.flag("recurrent"),
                        category: risk("recurrent", "Recurrent cystitis", 1),
                    },
                ],
                fallback: risk("simple", "Simple cystitis", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("simple") || c.is("recurrent"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Fosfomycin-trometamol single dose",
                    "first-line; no urine culture needed in simple cystitis",
                ),
                opt(
                    |_, c| c.is("simple") || c.is("recurrent"),
                    OptionTag::Alternative,
                    Some(Strength::Moderate),
                    "Pivmecillinam for 5 days",
                    "second-line when fosfomycin is unavailable",
                ),
                opt(
                    |_, c| c.is("at_risk"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Urine culture, then an adapted 7-day regimen",
                    "empirical nitrofurantoin while awaiting susceptibility",
                ),
                opt(
                    |_, c| c.is("recurrent"),
                    OptionTag::Strategy,
                    Some(Strength::Moderate),
                    "Prevention: hydration, behavioural measures, postcoital or continuous prophylaxis",
                    "prophylaxis is chosen with the patient after simple measures fail",
                ),
                opt(
                    |_, c| c.is("recurrent"),
                    OptionTag::Strategy,
                    Some(Strength::Weak),
                    "Urological workup with cystoscopy and imaging",
                    "exclude an underlying cause of recurrence",
                ),
            ],
            follow_up: vec![
                text(
                    |_, c| c.is("at_risk"),
                    "Control culture only if symptoms persist",
                ),
                text(
                    |_, c| c.is("recurrent"),
                    "Review the episode diary at 6 months",
                ),
            ],
            notes: vec![text(
                |p, _| p.flag("fever"),
                "Fever or flank pain suggests pyelonephritis rather than cystitis",
            )],
            suppression: None,
        });
        &COMPOSER
    }
}

pub struct Pyelonephritis;

impl Pathway for Pyelonephritis {
    fn id(&self) -> &str {
        "pyelonephritis"
    }

    fn name(&self) -> &str {
        "Acute pyelonephritis"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                bool_field("sepsis", "Sepsis or septic shock"),
                bool_field("obstruction", "Obstructed urinary tract"),
                bool_field(
                    "risk_factors",
                    "Risk factors (abnormal tract, immunosuppression, renal failure)",
                ),
                bool_field("oral_intolerance", "Unable to take oral treatment"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| p.flag("sepsis") || p.flag("obstruction"),
                        category: risk("severe", "Severe pyelonephritis", 2),
                    },
                    ClassifierRule {
                        when: |p| p.flag("risk_factors") || p.flag("oral_intolerance"),
                        category: risk("at_risk", "Pyelonephritis at risk of complication", 1),
                    },
                ],
                fallback: risk("simple", "Simple pyelonephritis", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("simple"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Ceftriaxone, then an oral fluoroquinolone for 7 days",
                    "short adapted courses are standard in simple pyelonephritis",
                ),
                opt(
                    |p, _| !p.flag("sepsis") && !p.flag("oral_intolerance"),
                    OptionTag::Strategy,
                    Some(Strength::Moderate),
                    "Outpatient management",
                    "expected to be afebrile within 72 hours in uncomplicated cases",
                ),
                opt(
                    |_, c| c.is("at_risk"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Admission with IV third-generation cephalosporin, 10-14 days total",
                    "risk factors or oral intolerance preclude outpatient care",
                ),
                opt(
                    |_, c| c.is("severe"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Hospitalization with IV third-generation cephalosporin plus amikacin",
                    "severity signs call for broad empirical cover",
                ),
                opt(
                    |p, _| p.flag("obstruction"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Urgent drainage of the obstructed kidney (JJ stent or nephrostomy)",
                    "obstructive pyelonephritis is a urological emergency",
                ),
            ],
            follow_up: vec![text(
                |_, _| true,
                "Clinical review at 72 hours; imaging if fever persists",
            )],
            notes: vec![
                text(|_, _| true, "Renal ultrasound within 24 hours"),
                text(
                    |p, _| p.flag("oral_intolerance"),
                    "Switch to oral therapy once tolerated and afebrile",
                ),
            ],
            suppression: Some(SuppressionPolicy {
                indication: |p, _| p.flag("obstruction"),
                feasible: |_| true,
                suppressed_when_feasible: vec![OptionTag::Strategy],
                retained_when_infeasible: vec![OptionTag::Surgical, OptionTag::Medical],
            }),
        });
        &COMPOSER
    }
}

pub struct UtiPregnancy;

impl Pathway for UtiPregnancy {
    fn id(&self) -> &str {
        "uti_pregnancy"
    }

    fn name(&self) -> &str {
        "Urinary infection in pregnancy"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                choice_field(
                    "presentation",
                    "Presentation",
                    &["bacteriuria", "cystitis", "pyelonephritis"],
                ),
                bool_field("fever", "Fever"),
                int_field("trimester", "Trimester", 1, 3),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| p.choice_is("presentation", "pyelonephritis") || p.flag("fever"),
                        category: risk("gravid_pyelonephritis", "Pyelonephritis in pregnancy", 2),
                    },
                    ClassifierRule {
                        when: |p| p.choice_is("presentation", "cystitis"),
                        category: risk("gravid_cystitis", "Cystitis in pregnancy", 1),
                    },
                ],
                fallback: risk("asymptomatic_bacteriuria", "Asymptomatic bacteriuria", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("asymptomatic_bacteriuria"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Treat by susceptibility (amoxicillin first choice) for 7 days",
                    "asymptomatic bacteriuria is always treated in pregnancy",
                ),
                opt(
                    |_, c| c.is("gravid_cystitis"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Fosfomycin-trometamol single dose, then adapt to culture",
                    "empirical treatment must not wait for susceptibility results",
                ),
                opt(
                    |_, c| c.is("gravid_pyelonephritis"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Hospitalization with IV third-generation cephalosporin",
                    "pyelonephritis in pregnancy threatens mother and fetus",
                ),
                opt(
                    |_, c| c.is("gravid_pyelonephritis"),
                    OptionTag::Strategy,
                    Some(Strength::Strong),
                    "Obstetric assessment and fetal monitoring",
                    "uterine contractions and fetal wellbeing must be checked",
                ),
            ],
            follow_up: vec![text(
                |_, _| true,
                "Urine culture 8-10 days after treatment, then monthly until delivery",
            )],
            notes: vec![text(
                |_, _| true,
                "Fluoroquinolones and cotrimoxazole are avoided throughout pregnancy",
            )],
            suppression: None,
        });
        &COMPOSER
    }
}

pub struct Prostatitis;

impl Pathway for Prostatitis {
    fn id(&self) -> &str {
        "prostatitis"
    }

    fn name(&self) -> &str {
        "Acute bacterial prostatitis"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                bool_field("sepsis", "Sepsis or septic shock"),
                bool_field("abscess", "Prostatic abscess"),
                bool_field("urinary_retention", "Acute urinary retention"),
            ]
        });
        &FIELDS
    }

    fn classifier(&self) -> &Classifier {
        static CLASSIFIER: LazyLock<Classifier> = LazyLock::new(|| {
            Classifier::Rules(RuleTable {
                rules: vec![
                    ClassifierRule {
                        when: |p| p.flag("sepsis") || p.flag("abscess"),
                        category: risk("severe", "Severe prostatitis", 2),
                    },
                    ClassifierRule {
                        when: |p| p.flag("urinary_retention"),
                        category: risk("with_retention", "Prostatitis with retention", 1),
                    },
                ],
                fallback: risk("uncomplicated", "Uncomplicated prostatitis", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("uncomplicated") || c.is("with_retention"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Oral fluoroquinolone for 14 days",
                    "prostatic diffusion drives the choice and the duration",
                ),
                opt(
                    |_, c| c.is("severe"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Hospitalization with IV third-generation cephalosporin, aminoglycoside if septic",
                    "severity signs call for parenteral treatment",
                ),
                opt(
                    |p, _| p.flag("urinary_retention"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Suprapubic catheterization",
                    "urethral catheterization is avoided in acute prostatitis",
                ),
                opt(
                    |p, _| p.flag("abscess"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Drainage of the prostatic abscess",
                    "abscesses above 1 cm rarely resolve on antibiotics alone",
                ),
            ],
            follow_up: vec![text(
                |_, _| true,
                "Clinical review and urine culture at the end of treatment",
            )],
            notes: vec![text(
                |_, _| true,
                "Defer PSA testing for 6 months after the acute episode",
            )],
            suppression: None,
        });
        &COMPOSER
    }
}
