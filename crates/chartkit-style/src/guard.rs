//! Style injection guard: the public entry point for chart stylesheets.
//!
//! The returned text is safe to place verbatim inside a `<style>` element.
//! The consumer must put the matching [`ChartScope::attribute`] on the chart
//! container so the generated custom properties apply to it.

use crate::assemble::assemble_collecting;
use crate::diagnostics::Diagnostic;
use crate::sanitize::sanitize_identifier;
use crate::theme::ThemeConfig;
use std::fmt;
use tracing::debug;

/// A sanitized, non-empty chart scope identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartScope(String);

impl ChartScope {
    /// Sanitize `raw`; `None` when nothing usable remains.
    pub fn new(raw: &str) -> Option<Self> {
        let id = sanitize_identifier(raw);
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `data-chart` attribute to set on the chart container.
    pub fn attribute(&self) -> String {
        format!("data-chart=\"{}\"", self.0)
    }
}

impl fmt::Display for ChartScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of one generation: the stylesheet (if any) and what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub scope: Option<ChartScope>,
    pub css: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Generate the stylesheet and collect diagnostics.
///
/// Every diagnostic is also emitted through `tracing`.
pub fn generate_report(raw_scope_id: &str, config: &ThemeConfig) -> GenerationReport {
    let mut report = GenerationReport::default();

    let Some(scope) = ChartScope::new(raw_scope_id) else {
        report.diagnostics.push(Diagnostic::InvalidIdentifier {
            raw: raw_scope_id.to_string(),
        });
        return finish(report);
    };

    if !config.has_colors() {
        report.diagnostics.push(Diagnostic::EmptyConfig);
    }

    report.css = assemble_collecting(scope.as_str(), config, &mut report.diagnostics);
    debug!(
        scope = scope.as_str(),
        entries = config.len(),
        generated = report.css.is_some(),
        "chart stylesheet generated"
    );
    report.scope = Some(scope);
    finish(report)
}

fn finish(report: GenerationReport) -> GenerationReport {
    for diagnostic in &report.diagnostics {
        diagnostic.emit();
    }
    report
}

/// Generate the stylesheet for a chart, or `None` if there is nothing to inject.
pub fn generate(raw_scope_id: &str, config: &ThemeConfig) -> Option<String> {
    generate_report(raw_scope_id, config).css
}

/// Generate a complete `<style>` element for a chart.
pub fn style_element(raw_scope_id: &str, config: &ThemeConfig) -> Option<String> {
    generate(raw_scope_id, config).map(|css| format!("<style>\n{css}\n</style>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeEntry;

    fn sample() -> ThemeConfig {
        ThemeConfig::new()
            .with("a", ThemeEntry::flat("#fff"))
            .with("b", ThemeEntry::per_mode("#111", "#eee"))
    }

    fn block<'a>(css: &'a str, header: &str) -> &'a str {
        let start = css.find(header).unwrap();
        let rest = &css[start..];
        &rest[..rest.find('}').unwrap() + 1]
    }

    #[test]
    fn end_to_end_light_and_dark() {
        let css = generate("chart1", &sample()).unwrap();

        let normal = block(&css, " [data-chart=chart1] {");
        assert!(css.starts_with(" [data-chart=chart1] {"));
        assert!(normal.contains("--color-a: #fff;"));
        assert!(normal.contains("--color-b: #111;"));
        assert!(!normal.contains("#eee"));

        let dark = block(&css, ".dark [data-chart=chart1] {");
        assert!(dark.contains("--color-b: #eee;"));
        assert!(!dark.contains("#111"));
    }

    #[test]
    fn inert_config_yields_none() {
        let config = ThemeConfig::new()
            .with("a", ThemeEntry::inert())
            .with("b", ThemeEntry::inert());
        let report = generate_report("chart1", &config);
        assert_eq!(report.css, None);
        assert_eq!(report.diagnostics, vec![Diagnostic::EmptyConfig]);
        assert_eq!(generate("chart1", &config), None);
    }

    #[test]
    fn hostile_scope_id_is_reduced_and_used() {
        let css = generate("chart1; } </style><script>", &sample()).unwrap();
        assert!(css.contains(" [data-chart=chart1stylescript] {"));
        assert!(css.contains(".dark [data-chart=chart1stylescript] {"));
        assert!(!css.contains('<'));
        assert_eq!(css.matches(';').count(), 4);
    }

    #[test]
    fn pathological_scope_id_aborts() {
        let report = generate_report("<>{}; \"'", &sample());
        assert_eq!(report.css, None);
        assert_eq!(report.scope, None);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::InvalidIdentifier {
                raw: "<>{}; \"'".into()
            }]
        );
    }

    #[test]
    fn empty_scope_id_aborts_before_assembly() {
        // Bad colors would otherwise produce RejectedColor diagnostics.
        let config = ThemeConfig::new().with("x", ThemeEntry::flat("url(javascript:x)"));
        let report = generate_report("", &config);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind(), "InvalidIdentifier");
    }

    #[test]
    fn report_records_rejected_colors() {
        let config = sample().with("evil", ThemeEntry::flat("</style><script>"));
        let report = generate_report("c", &config);
        assert!(report.css.is_some());
        assert_eq!(report.scope, ChartScope::new("c"));
        assert_eq!(report.diagnostics.len(), 2);
        assert!(report
            .diagnostics
            .iter()
            .all(|d| d.kind() == "RejectedColor"));
    }

    #[test]
    fn output_never_contains_markup() {
        let config = ThemeConfig::new()
            .with("a</style>", ThemeEntry::flat("red"))
            .with("b", ThemeEntry::per_mode("url(data:x)", "}<b>"))
            .with("c", ThemeEntry::flat("hsl(1 } x { y )"))
            .with("d", ThemeEntry::flat("var(--ok)"));
        let css = generate("id\"]{", &config).unwrap();
        assert_eq!(
            css,
            " [data-chart=id] {\n  --color-astyle: red;\n  --color-d: var(--ok);\n}\n\
             .dark [data-chart=id] {\n  --color-astyle: red;\n  --color-d: var(--ok);\n}"
        );
    }

    #[test]
    fn chart_scope_attribute() {
        let scope = ChartScope::new("chart 1").unwrap();
        assert_eq!(scope.as_str(), "chart1");
        assert_eq!(scope.attribute(), "data-chart=\"chart1\"");
        assert_eq!(scope.to_string(), "chart1");
        assert_eq!(ChartScope::new("!!!"), None);
    }

    #[test]
    fn style_element_wraps_css() {
        let config = ThemeConfig::new().with("a", ThemeEntry::flat("red"));
        let html = style_element("c", &config).unwrap();
        assert_eq!(
            html,
            "<style>\n [data-chart=c] {\n  --color-a: red;\n}\n.dark [data-chart=c] {\n  --color-a: red;\n}\n</style>"
        );
        assert_eq!(style_element("", &sample()), None);
    }
}
