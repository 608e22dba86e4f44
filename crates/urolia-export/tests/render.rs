use jiff::Timestamp;
use urolia_core::assemble::assemble_at;
use urolia_core::models::plan::{
    Classification, OptionTag, RecommendationOption, RecommendationPlan, RiskCategory, Strength,
};
use urolia_export::markdown::render_markdown;
use urolia_export::text::render_text;

fn sample_report() -> urolia_core::models::report::Report {
    let plan = RecommendationPlan {
        classification: Classification::Risk(RiskCategory::new("low", "Low risk", 0)),
        findings: vec!["Tumour stage: pta".to_string()],
        options: vec![RecommendationOption {
            position: 1,
            label: "Single mitomycin C instillation".to_string(),
            tag: OptionTag::Medical,
            strength: Some(Strength::Strong),
            rationale: "immediate instillation halves early recurrence".to_string(),
        }],
        follow_up: vec!["Cystoscopy at 3 months".to_string()],
        notes: vec![],
    };
    assemble_at(&plan, "Bladder recommendation", Timestamp::UNIX_EPOCH)
}

#[test]
fn plain_text_renders_title_sections_and_items() {
    let rendered = render_text(&sample_report());
    assert!(rendered.starts_with("Bladder recommendation\n======================\n"));
    assert!(rendered.contains("Generated: 1970-01-01T00:00:00Z"));
    assert!(rendered.contains("Treatment options\n-----------------\n"));
    assert!(rendered.contains("- Cystoscopy at 3 months"));
}

#[test]
fn markdown_renders_headings_and_bullets() {
    let rendered = render_markdown(&sample_report()).unwrap();
    assert!(rendered.starts_with("# Bladder recommendation"));
    assert!(rendered.contains("*Generated: 1970-01-01T00:00:00Z*"));
    assert!(rendered.contains("## Treatment options"));
    assert!(rendered.contains("- 1. Single mitomycin C instillation"));
}

#[test]
fn rendering_does_not_alter_section_order() {
    let report = sample_report();
    let rendered = render_text(&report);
    let findings_at = rendered.find("Findings").unwrap();
    let options_at = rendered.find("Treatment options").unwrap();
    let follow_up_at = rendered.find("Follow-up").unwrap();
    assert!(findings_at < options_at && options_at < follow_up_at);
}
