use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A labeled list of plain lines within a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportSection {
    pub label: String,
    pub items: Vec<String>,
}

/// The terminal artifact of an evaluation, handed to the rendering and
/// export collaborators. Sections with zero items never appear.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub generated_at: jiff::Timestamp,
    pub sections: Vec<ReportSection>,
}
