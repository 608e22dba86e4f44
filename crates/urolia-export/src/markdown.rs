use tera::{Context, Tera};
use tracing::debug;

use urolia_core::models::report::Report;

use crate::error::ExportError;

const TEMPLATE: &str = "\
# {{ title }}

*Generated: {{ generated_at }}*

{% for section in sections %}## {{ section.label }}

{% for item in section.items %}- {{ item }}
{% endfor %}
{% endfor %}";

/// Render a report as a minimal Markdown document.
///
/// The report fields become the template context variables via
/// `serde_json`; section content passes through untouched.
pub fn render_markdown(report: &Report) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report.md", TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report.md", &context)?;
    debug!(sections = report.sections.len(), "rendered markdown report");
    Ok(rendered)
}
