use std::sync::LazyLock;

use urolia_core::models::plan::{OptionTag, Strength};

use crate::Pathway;
use crate::fields::{FieldSpec, bool_field, choice_field, int_field};
use crate::pathways::{opt, risk, text};
use crate::rules::{Classifier, ClassifierRule, ComposerTable, RuleTable, SuppressionPolicy};

/// Urinary stone disease: emergency triage, then modality selection by
/// size, location, and density.
pub struct Stones;

impl Pathway for Stones {
    fn id(&self) -> &str {
        "stones"
    }

    fn name(&self) -> &str {
        "Urinary stones"
    }

    fn fields(&self) -> &[FieldSpec] {
        static FIELDS: LazyLock<Vec<FieldSpec>> = LazyLock::new(|| {
            vec![
                int_field("size_mm", "Stone size (mm)", 1, 60),
                choice_field(
                    "location",
                    "Stone location",
                    &["kidney", "proximal_ureter", "distal_ureter"],
                ),
                int_field("density_hu", "Stone density (HU)", 100, 2000),
                bool_field("obstruction", "Obstruction on imaging"),
                bool_field("infection_signs", "Fever or infection signs"),
                bool_field("solitary_kidney", "Solitary kidney"),
                bool_field("renal_failure", "Acute renal failure"),
                bool_field("uncontrolled_pain", "Pain refractory to analgesia"),
                bool_field("recurrent", "Recurrent stone former"),
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
                            (p.flag("infection_signs") && p.flag("obstruction"))
                                || p.flag("renal_failure")
                                || (p.flag("obstruction") && p.flag("solitary_kidney"))
                                || p.flag("uncontrolled_pain")
                        },
                        category: risk("emergency", "Emergency", 2),
                    },
                    ClassifierRule {
                        when: |p| p.num("size_mm") >= 10.0 || p.flag("obstruction"),
                        category: risk("elective_intervention", "Elective intervention", 1),
                    },
                ],
                fallback: risk("conservative", "Conservative management", 0),
            })
        });
        &CLASSIFIER
    }

    fn composer(&self) -> &ComposerTable {
        static COMPOSER: LazyLock<ComposerTable> = LazyLock::new(|| ComposerTable {
            options: vec![
                opt(
                    |_, c| c.is("emergency"),
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Urgent decompression by JJ stent or percutaneous nephrostomy",
                    "obstruction with infection or renal compromise requires immediate drainage",
                ),
                opt(
                    |p, c| c.is("emergency") && p.flag("infection_signs"),
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "Empirical intravenous antibiotics after urine and blood cultures",
                    "sepsis control comes before definitive stone treatment",
                ),
                opt(
                    |_, _| true,
                    OptionTag::Medical,
                    Some(Strength::Strong),
                    "NSAID-based analgesia",
                    "first-line pain control in renal colic",
                ),
                opt(
                    |p, _| p.choice_is("location", "distal_ureter") && p.num("size_mm") <= 10.0,
                    OptionTag::Alternative,
                    Some(Strength::Moderate),
                    "Medical expulsive therapy with an alpha-blocker",
                    "distal stones up to 10 mm often pass spontaneously",
                ),
                opt(
                    |p, _| {
                        p.choice_is("location", "kidney")
                            && p.num("size_mm") <= 20.0
                            && p.num("density_hu") < 1000.0
                    },
                    OptionTag::FocalAblative,
                    Some(Strength::Moderate),
                    "Extracorporeal shockwave lithotripsy",
                    "effective for kidney stones up to 20 mm of moderate density",
                ),
                opt(
                    |p, c| !c.is("emergency") && p.num("size_mm") <= 20.0,
                    OptionTag::Surgical,
                    Some(Strength::Moderate),
                    "Flexible ureteroscopy with laser lithotripsy",
                    "first-line for ureteral stones and kidney stones up to 20 mm",
                ),
                opt(
                    |p, c| {
                        !c.is("emergency")
                            && p.choice_is("location", "kidney")
                            && p.num("size_mm") > 20.0
                    },
                    OptionTag::Surgical,
                    Some(Strength::Strong),
                    "Percutaneous nephrolithotomy",
                    "reference treatment for renal stones above 20 mm",
                ),
            ],
            follow_up: vec![
                text(
                    |_, c| c.is("conservative"),
                    "Repeat imaging at 2-4 weeks; intervene if the stone has not progressed",
                ),
                text(
                    |_, c| !c.is("conservative"),
                    "Imaging at 4-6 weeks to confirm stone clearance",
                ),
            ],
            notes: vec![
                text(
                    |p, _| p.flag("recurrent"),
                    "Metabolic workup (24-hour urine and stone analysis) after the acute episode",
                ),
                text(
                    |p, _| p.flag("solitary_kidney"),
                    "Solitary kidney: low threshold for drainage and early clearance",
                ),
            ],
            suppression: Some(SuppressionPolicy {
                // Drainage has no refusal branch; the infeasible arm is
                // never taken.
                indication: |_, c| c.is("emergency"),
                feasible: |_| true,
                suppressed_when_feasible: vec![OptionTag::FocalAblative, OptionTag::Alternative],
                retained_when_infeasible: vec![OptionTag::Surgical, OptionTag::Medical],
            }),
        });
        &COMPOSER
    }
}
