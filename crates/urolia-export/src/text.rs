use tracing::debug;

use urolia_core::models::report::Report;

/// Render a report as plain text for download or console display.
pub fn render_text(report: &Report) -> String {
    let mut output = format!("{}\n", report.title);
    output.push_str(&format!("{}\n", "=".repeat(report.title.chars().count())));
    output.push_str(&format!("Generated: {}\n", report.generated_at));

    for section in &report.sections {
        output.push('\n');
        output.push_str(&format!("{}\n", section.label));
        output.push_str(&format!("{}\n", "-".repeat(section.label.chars().count())));
        for item in &section.items {
            output.push_str(&format!("- {item}\n"));
        }
    }

    debug!(bytes = output.len(), "rendered text report");
    output
}
