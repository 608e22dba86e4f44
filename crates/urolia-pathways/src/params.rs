use std::collections::BTreeMap;

/// A normalized finding value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Choice(String),
}

impl Value {
    /// Human-readable rendition used for the report's findings echo.
    pub fn display(&self) -> String {
        match self {
            Value::Bool(true) => "yes".to_string(),
            Value::Bool(false) => "no".to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format!("{v}"),
            Value::Choice(v) => v.clone(),
        }
    }
}

/// An immutable set of normalized findings plus derived metrics.
///
/// Built once by [`crate::normalize::normalize`] and never mutated
/// afterwards. Accessors are total: an absent flag reads `false`, an
/// absent number reads `0.0`. Numeric fields that rules compare against
/// are always marked required in their pathway's field specs.
#[derive(Debug, Clone)]
pub struct ParameterSet {
    values: BTreeMap<String, Value>,
    metrics: BTreeMap<String, f64>,
    notes: Vec<String>,
    findings: Vec<String>,
}

impl ParameterSet {
    pub(crate) fn new(
        values: BTreeMap<String, Value>,
        metrics: BTreeMap<String, f64>,
        notes: Vec<String>,
        findings: Vec<String>,
    ) -> Self {
        Self {
            values,
            metrics,
            notes,
            findings,
        }
    }

    /// Canonical boolean finding; absent reads `false`.
    pub fn flag(&self, id: &str) -> bool {
        matches!(self.values.get(id), Some(Value::Bool(true)))
    }

    /// Numeric finding as `f64`; absent reads `0.0`.
    pub fn num(&self, id: &str) -> f64 {
        match self.values.get(id) {
            Some(Value::Int(v)) => *v as f64,
            Some(Value::Float(v)) => *v,
            _ => 0.0,
        }
    }

    /// True when the enumerated finding equals the given canonical option.
    pub fn choice_is(&self, id: &str, option: &str) -> bool {
        matches!(self.values.get(id), Some(Value::Choice(v)) if v == option)
    }

    /// The enumerated finding's canonical option, if present.
    pub fn choice(&self, id: &str) -> Option<&str> {
        match self.values.get(id) {
            Some(Value::Choice(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// A derived metric; `None` when its computation was guarded out.
    pub fn metric(&self, id: &str) -> Option<f64> {
        self.metrics.get(id).copied()
    }

    /// Notes produced during normalization (e.g. a skipped metric).
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Ordered human-readable echo of the normalized findings.
    pub fn findings(&self) -> &[String] {
        &self.findings
    }
}
