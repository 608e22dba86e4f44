//! urolia-pathways
//!
//! Clinical pathway definitions and the shared decision pipeline. Each
//! pathway supplies data-only rule tables (field specs, classifier rules,
//! option rules); the pipeline normalizes raw findings, classifies risk,
//! and composes the recommendation plan.

pub mod error;
pub mod fields;
pub mod normalize;
pub mod params;
pub mod pathways;
pub mod rules;

use serde_json::Value;
use tracing::debug;
use urolia_core::models::plan::RecommendationPlan;

use crate::error::PathwayError;
use crate::fields::{DerivedSpec, FieldSpec};
use crate::normalize::normalize;
use crate::rules::{Classifier, ComposerTable};

/// Trait implemented by each clinical pathway.
pub trait Pathway: Send + Sync {
    /// Unique identifier (e.g., "bladder_nmibc", "kidney_metastatic").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The findings this pathway reads.
    fn fields(&self) -> &[FieldSpec];

    /// Derived metrics computed during normalization.
    fn derived(&self) -> &[DerivedSpec] {
        &[]
    }

    /// Priority-ordered classification rules.
    fn classifier(&self) -> &Classifier;

    /// Option, follow-up, and note rules.
    fn composer(&self) -> &ComposerTable;

    /// Run the full pipeline: normalize, classify, compose.
    fn evaluate(&self, raw: &Value) -> Result<RecommendationPlan, PathwayError> {
        let params = normalize(self.fields(), self.derived(), raw)?;
        let classification = self.classifier().classify(&params);
        debug!(
            pathway = self.id(),
            category = classification.category().id.as_str(),
            "classified"
        );
        Ok(self.composer().compose(&params, &classification))
    }
}

/// Return all registered pathways.
pub fn all_pathways() -> Vec<Box<dyn Pathway>> {
    vec![
        Box::new(pathways::bladder::BladderNmibc),
        Box::new(pathways::bladder::BladderMibc),
        Box::new(pathways::bladder::BladderMetastatic),
        Box::new(pathways::kidney::KidneyLocalized),
        Box::new(pathways::kidney::KidneyMetastatic),
        Box::new(pathways::kidney::KidneyBiopsy),
        Box::new(pathways::prostate::ProstateLocalized),
        Box::new(pathways::prostate::ProstateRecurrence),
        Box::new(pathways::prostate::ProstateMetastatic),
        Box::new(pathways::bph::Bph),
        Box::new(pathways::stones::Stones),
        Box::new(pathways::infection::Cystitis),
        Box::new(pathways::infection::Pyelonephritis),
        Box::new(pathways::infection::UtiPregnancy),
        Box::new(pathways::infection::Prostatitis),
        Box::new(pathways::utuc::Utuc),
    ]
}

/// Look up a pathway by ID.
pub fn get_pathway(id: &str) -> Option<Box<dyn Pathway>> {
    all_pathways().into_iter().find(|p| p.id() == id)
}

/// Look up a pathway by ID, failing with [`PathwayError::UnknownPathway`].
pub fn require_pathway(id: &str) -> Result<Box<dyn Pathway>, PathwayError> {
    get_pathway(id).ok_or_else(|| PathwayError::UnknownPathway(id.to_string()))
}
