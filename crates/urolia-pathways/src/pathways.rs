//! Clinical pathway rule tables, one module per organ system.

pub mod bladder;
pub mod bph;
pub mod infection;
pub mod kidney;
pub mod prostate;
pub mod stones;
pub mod utuc;

use urolia_core::models::plan::{OptionTag, RiskCategory, Strength};

use crate::rules::{OptionPredicate, OptionRule, OptionTemplate, TextRule};

pub(crate) fn risk(id: &str, label: &str, rank: u8) -> RiskCategory {
    RiskCategory::new(id, label, rank)
}

pub(crate) fn opt(
    when: OptionPredicate,
    tag: OptionTag,
    strength: Option<Strength>,
    label: &str,
    rationale: &str,
) -> OptionRule {
    OptionRule {
        when,
        template: OptionTemplate {
            label: label.to_string(),
            tag,
            strength,
            rationale: rationale.to_string(),
        },
    }
}

pub(crate) fn text(when: OptionPredicate, content: &str) -> TextRule {
    TextRule {
        when,
        text: content.to_string(),
    }
}
