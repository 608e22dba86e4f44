use jiff::Timestamp;
use uuid::Uuid;

use crate::models::plan::{Classification, RecommendationOption, RecommendationPlan};
use crate::models::report::{Report, ReportSection};

/// Assemble a plan into a titled, timestamped report.
///
/// Formatting only: plan content and ordering pass through unchanged, and
/// empty lists produce no section at all.
pub fn assemble(plan: &RecommendationPlan, title: &str) -> Report {
    assemble_at(plan, title, Timestamp::now())
}

/// [`assemble`] with an explicit generation timestamp.
pub fn assemble_at(plan: &RecommendationPlan, title: &str, generated_at: Timestamp) -> Report {
    let mut sections = Vec::new();
    push_section(&mut sections, "Findings", plan.findings.clone());
    push_section(
        &mut sections,
        "Risk stratification",
        stratification_lines(&plan.classification),
    );
    push_section(
        &mut sections,
        "Treatment options",
        plan.options.iter().map(option_line).collect(),
    );
    push_section(&mut sections, "Follow-up", plan.follow_up.clone());
    push_section(&mut sections, "Notes", plan.notes.clone());

    Report {
        id: Uuid::new_v4(),
        title: title.to_string(),
        generated_at,
        sections,
    }
}

fn push_section(sections: &mut Vec<ReportSection>, label: &str, items: Vec<String>) {
    if !items.is_empty() {
        sections.push(ReportSection {
            label: label.to_string(),
            items,
        });
    }
}

fn stratification_lines(classification: &Classification) -> Vec<String> {
    match classification {
        Classification::Risk(category) => {
            vec![format!("Risk group: {}", category.label)]
        }
        Classification::Score(result) => vec![
            format!("Prognostic score: {}/{}", result.score, result.max),
            format!("Prognostic group: {}", result.category.label),
        ],
    }
}

fn option_line(option: &RecommendationOption) -> String {
    let mut line = format!("{}. {}", option.position, option.label);
    if !option.rationale.is_empty() {
        line.push_str(&format!(" - {}", option.rationale));
    }
    if let Some(strength) = option.strength {
        line.push_str(&format!(" ({strength} recommendation)"));
    }
    line
}
