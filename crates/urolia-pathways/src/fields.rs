use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The canonical type of a normalized finding.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Truthy-ish input coerced to a canonical boolean.
    Bool,
    /// Whole-number finding within an inclusive range.
    Int { min: i64, max: i64 },
    /// Decimal finding within an inclusive range.
    Float { min: f64, max: f64 },
    /// One of a closed set of lowercase option identifiers.
    Choice { options: Vec<String> },
}

/// A named clinical finding a pathway reads.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

/// How a derived metric is computed from normalized findings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DerivedCompute {
    /// Guarded division: skipped with a note when the denominator is zero
    /// or either operand is absent.
    Ratio {
        numerator: String,
        denominator: String,
    },
}

/// A computed scalar attached to the parameter set during normalization.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DerivedSpec {
    pub id: String,
    pub label: String,
    pub compute: DerivedCompute,
}

/// Required boolean finding.
pub fn bool_field(id: &str, label: &str) -> FieldSpec {
    spec(id, label, FieldKind::Bool, true)
}

/// Optional boolean finding; absent reads `false`.
pub fn optional_bool(id: &str, label: &str) -> FieldSpec {
    spec(id, label, FieldKind::Bool, false)
}

/// Required whole-number finding.
pub fn int_field(id: &str, label: &str, min: i64, max: i64) -> FieldSpec {
    spec(id, label, FieldKind::Int { min, max }, true)
}

/// Required decimal finding.
pub fn float_field(id: &str, label: &str, min: f64, max: f64) -> FieldSpec {
    spec(id, label, FieldKind::Float { min, max }, true)
}

/// Optional decimal finding.
pub fn optional_float(id: &str, label: &str, min: f64, max: f64) -> FieldSpec {
    spec(id, label, FieldKind::Float { min, max }, false)
}

/// Required enumerated finding; `options` are the canonical lowercase ids.
pub fn choice_field(id: &str, label: &str, options: &[&str]) -> FieldSpec {
    spec(
        id,
        label,
        FieldKind::Choice {
            options: options.iter().map(|o| o.to_string()).collect(),
        },
        true,
    )
}

/// Derived ratio metric (density, concentration ratio).
pub fn ratio_metric(id: &str, label: &str, numerator: &str, denominator: &str) -> DerivedSpec {
    DerivedSpec {
        id: id.to_string(),
        label: label.to_string(),
        compute: DerivedCompute::Ratio {
            numerator: numerator.to_string(),
            denominator: denominator.to_string(),
        },
    }
}

fn spec(id: &str, label: &str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        required,
    }
}
