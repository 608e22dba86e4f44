//! Data-only rule tables shared by every pathway: ordered classifier
//! rules, prognostic score bands, and option composition with suppression.

use urolia_core::models::plan::{
    Classification, OptionTag, RecommendationOption, RecommendationPlan, RiskCategory,
    ScoringResult, Strength,
};

use crate::params::ParameterSet;

/// Predicate over normalized findings.
pub type ParamPredicate = fn(&ParameterSet) -> bool;

/// Predicate over findings plus the classification result.
pub type OptionPredicate = fn(&ParameterSet, &Classification) -> bool;

/// One ordered (predicate, category) classification rule.
pub struct ClassifierRule {
    pub when: ParamPredicate,
    pub category: RiskCategory,
}

/// Priority-ordered classification rules.
///
/// Rules are tried top-down and the first match wins. More severe
/// categories are always listed first, so a case matching several rules is
/// classified at the worse one; this is the documented tie-break for
/// contradictory findings. The fallback makes classification total.
pub struct RuleTable {
    pub rules: Vec<ClassifierRule>,
    pub fallback: RiskCategory,
}

impl RuleTable {
    pub fn classify(&self, params: &ParameterSet) -> RiskCategory {
        self.rules
            .iter()
            .find(|rule| (rule.when)(params))
            .map(|rule| rule.category.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Inclusive score band mapped to a category.
pub struct ScoreBand {
    pub min: u32,
    pub max: u32,
    pub category: RiskCategory,
}

/// Prognostic index: count the true factor flags, then map the score
/// through fixed, non-overlapping bands covering the whole range.
pub struct ScoreTable {
    pub factors: Vec<String>,
    pub bands: Vec<ScoreBand>,
    pub fallback: RiskCategory,
}

impl ScoreTable {
    pub fn score(&self, params: &ParameterSet) -> ScoringResult {
        let score = self.factors.iter().filter(|f| params.flag(f)).count() as u32;
        let category = self
            .bands
            .iter()
            .find(|band| band.min <= score && score <= band.max)
            .map(|band| band.category.clone())
            .unwrap_or_else(|| self.fallback.clone());
        ScoringResult {
            score,
            max: self.factors.len() as u32,
            category,
        }
    }
}

/// Per-pathway classifier: an ordered rule list or a prognostic score.
pub enum Classifier {
    Rules(RuleTable),
    Score(ScoreTable),
}

impl Classifier {
    /// Pure, deterministic, and total over well-formed parameter sets.
    pub fn classify(&self, params: &ParameterSet) -> Classification {
        match self {
            Classifier::Rules(table) => Classification::Risk(table.classify(params)),
            Classifier::Score(table) => Classification::Score(table.score(params)),
        }
    }
}

/// Candidate recommendation emitted when its predicate holds.
pub struct OptionTemplate {
    pub label: String,
    pub tag: OptionTag,
    pub strength: Option<Strength>,
    pub rationale: String,
}

pub struct OptionRule {
    pub when: OptionPredicate,
    pub template: OptionTemplate,
}

/// Conditional follow-up item or note.
pub struct TextRule {
    pub when: OptionPredicate,
    pub text: String,
}

/// Mutually-exclusive option handling for strict indications.
///
/// When the indication holds and the preferred action is feasible, options
/// whose tag is in `suppressed_when_feasible` are removed; when it is not
/// feasible (contraindication or refusal), only `retained_when_infeasible`
/// tags survive. Never both branches at once.
pub struct SuppressionPolicy {
    pub indication: OptionPredicate,
    pub feasible: ParamPredicate,
    pub suppressed_when_feasible: Vec<OptionTag>,
    pub retained_when_infeasible: Vec<OptionTag>,
}

/// Option, follow-up, and note rules for one pathway.
pub struct ComposerTable {
    pub options: Vec<OptionRule>,
    pub follow_up: Vec<TextRule>,
    pub notes: Vec<TextRule>,
    pub suppression: Option<SuppressionPolicy>,
}

impl ComposerTable {
    /// Compose the plan: filter option rules in table order, apply the
    /// suppression policy, then number the survivors from 1. Numbering
    /// happens only after every filtering step, so positions are always
    /// contiguous.
    pub fn compose(
        &self,
        params: &ParameterSet,
        classification: &Classification,
    ) -> RecommendationPlan {
        let mut kept: Vec<&OptionTemplate> = self
            .options
            .iter()
            .filter(|rule| (rule.when)(params, classification))
            .map(|rule| &rule.template)
            .collect();

        if let Some(policy) = &self.suppression
            && (policy.indication)(params, classification)
        {
            if (policy.feasible)(params) {
                kept.retain(|t| !policy.suppressed_when_feasible.contains(&t.tag));
            } else {
                kept.retain(|t| policy.retained_when_infeasible.contains(&t.tag));
            }
        }

        let options = kept
            .into_iter()
            .enumerate()
            .map(|(index, template)| RecommendationOption {
                position: index as u32 + 1,
                label: template.label.clone(),
                tag: template.tag,
                strength: template.strength,
                rationale: template.rationale.clone(),
            })
            .collect();

        let follow_up = collect_text(&self.follow_up, params, classification);
        let mut notes = params.notes().to_vec();
        notes.extend(collect_text(&self.notes, params, classification));

        RecommendationPlan {
            classification: classification.clone(),
            findings: params.findings().to_vec(),
            options,
            follow_up,
            notes,
        }
    }
}

fn collect_text(
    rules: &[TextRule],
    params: &ParameterSet,
    classification: &Classification,
) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.when)(params, classification))
        .map(|rule| rule.text.clone())
        .collect()
}
