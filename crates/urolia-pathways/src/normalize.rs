use std::collections::BTreeMap;

use serde_json::Value as Json;
use urolia_core::error::InvalidInputError;

use crate::fields::{DerivedCompute, DerivedSpec, FieldKind, FieldSpec};
use crate::params::{ParameterSet, Value};

/// Coerce a raw findings record into a frozen [`ParameterSet`].
///
/// Fails with [`InvalidInputError`] before any rule runs; a partially
/// normalized set is never returned. Unknown keys in `raw` are ignored.
pub fn normalize(
    fields: &[FieldSpec],
    derived: &[DerivedSpec],
    raw: &Json,
) -> Result<ParameterSet, InvalidInputError> {
    let record = raw.as_object().ok_or(InvalidInputError::NotAnObject)?;

    let mut values = BTreeMap::new();
    let mut findings = Vec::new();
    for field in fields {
        let Some(entry) = record.get(&field.id).filter(|v| !v.is_null()) else {
            if field.required {
                return Err(InvalidInputError::MissingField(field.id.clone()));
            }
            continue;
        };
        let value = coerce(field, entry)?;
        findings.push(format!("{}: {}", field.label, value.display()));
        values.insert(field.id.clone(), value);
    }

    let mut metrics = BTreeMap::new();
    let mut notes = Vec::new();
    for spec in derived {
        match &spec.compute {
            DerivedCompute::Ratio {
                numerator,
                denominator,
            } => match (numeric(&values, numerator), numeric(&values, denominator)) {
                (Some(n), Some(d)) if d > 0.0 => {
                    metrics.insert(spec.id.clone(), n / d);
                }
                (Some(_), Some(_)) => {
                    notes.push(format!("{} not computed: denominator is zero", spec.label));
                }
                (Some(_), None) => {
                    notes.push(format!("{} not computed: denominator missing", spec.label));
                }
                // Numerator never entered: the metric simply does not apply.
                (None, _) => {}
            },
        }
    }

    Ok(ParameterSet::new(values, metrics, notes, findings))
}

fn numeric(values: &BTreeMap<String, Value>, id: &str) -> Option<f64> {
    match values.get(id) {
        Some(Value::Int(v)) => Some(*v as f64),
        Some(Value::Float(v)) => Some(*v),
        _ => None,
    }
}

fn coerce(field: &FieldSpec, raw: &Json) -> Result<Value, InvalidInputError> {
    match &field.kind {
        FieldKind::Bool => coerce_bool(field, raw),
        FieldKind::Int { min, max } => {
            let v = raw
                .as_i64()
                .ok_or_else(|| invalid(field, "expected a whole number"))?;
            if v < *min || v > *max {
                return Err(invalid(field, &format!("value {v} is outside [{min}, {max}]")));
            }
            Ok(Value::Int(v))
        }
        FieldKind::Float { min, max } => {
            let v = raw
                .as_f64()
                .ok_or_else(|| invalid(field, "expected a number"))?;
            if v < *min || v > *max {
                return Err(invalid(field, &format!("value {v} is outside [{min}, {max}]")));
            }
            Ok(Value::Float(v))
        }
        FieldKind::Choice { options } => {
            let s = raw
                .as_str()
                .ok_or_else(|| invalid(field, "expected a text option"))?;
            let lowered = s.trim().to_lowercase();
            options
                .iter()
                .find(|option| **option == lowered)
                .map(|option| Value::Choice(option.clone()))
                .ok_or_else(|| invalid(field, &format!("'{s}' is not a recognized option")))
        }
    }
}

fn coerce_bool(field: &FieldSpec, raw: &Json) -> Result<Value, InvalidInputError> {
    let flag = match raw {
        Json::Bool(b) => Some(*b),
        Json::Number(n) => match n.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Json::String(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "true" | "1" => Some(true),
            "no" | "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    };
    flag.map(Value::Bool)
        .ok_or_else(|| invalid(field, "unrecognized boolean value"))
}

fn invalid(field: &FieldSpec, reason: &str) -> InvalidInputError {
    InvalidInputError::InvalidValue {
        field: field.id.clone(),
        reason: reason.to_string(),
    }
}
