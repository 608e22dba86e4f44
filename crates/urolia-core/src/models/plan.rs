use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One value of a pathway-specific ordered severity scale.
///
/// Higher `rank` means a worse category. Exactly one category is produced
/// per evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskCategory {
    pub id: String,
    pub label: String,
    pub rank: u8,
}

impl RiskCategory {
    pub fn new(id: &str, label: &str, rank: u8) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            rank,
        }
    }
}

/// A prognostic-index result: the raw score and the band it falls in.
/// Band boundaries are fixed thresholds over the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    pub score: u32,
    pub max: u32,
    pub category: RiskCategory,
}

/// The outcome of classification: a plain risk group, or a scored band for
/// prognostic-index pathways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Classification {
    Risk(RiskCategory),
    Score(ScoringResult),
}

impl Classification {
    pub fn category(&self) -> &RiskCategory {
        match self {
            Classification::Risk(category) => category,
            Classification::Score(result) => &result.category,
        }
    }

    /// True when the classified category has the given id.
    pub fn is(&self, id: &str) -> bool {
        self.category().id == id
    }
}

/// Broad class of a recommendation option; suppression policies act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OptionTag {
    Medical,
    Surgical,
    FocalAblative,
    Alternative,
    Palliative,
    Strategy,
}

/// Strength-of-recommendation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Strength::Strong => "strong",
            Strength::Moderate => "moderate",
            Strength::Weak => "weak",
        };
        f.write_str(text)
    }
}

/// An ordered recommendation item. Positions are 1-based and contiguous:
/// they are assigned only after every filtering step has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationOption {
    pub position: u32,
    pub label: String,
    pub tag: OptionTag,
    pub strength: Option<Strength>,
    pub rationale: String,
}

/// One evaluation's full output: the classification plus ordered option,
/// follow-up, and note lists. Frozen once composed; the `findings` echo
/// becomes the report's data section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationPlan {
    pub classification: Classification,
    pub findings: Vec<String>,
    pub options: Vec<RecommendationOption>,
    pub follow_up: Vec<String>,
    pub notes: Vec<String>,
}
