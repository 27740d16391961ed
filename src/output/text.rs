use std::fmt::Write;

use crate::checker::{Report, Severity, Summary};
use crate::error::Result;

use super::OutputFormatter;

/// Human-readable output with severity glyphs, matching the layout this tool
/// has always printed: banner, per-file section (or a "looks good" line),
/// summary block, verdict.
pub struct TextFormatter;

impl TextFormatter {
    const fn severity_glyph(severity: Severity) -> &'static str {
        // Warning and info glyphs carry a trailing space so every message
        // lines up two columns after the emoji, like the original output.
        match severity {
            Severity::Critical => "❌",
            Severity::Warning => "⚠️ ",
            Severity::Info => "ℹ️ ",
        }
    }

    fn format_report(report: &Report, output: &mut String) {
        if report.is_clean() {
            let _ = writeln!(output, "✅ {} looks good!", report.target.label);
            return;
        }

        let _ = writeln!(output, "\n📋 {} Issues:", report.target.label);
        for finding in &report.findings {
            let glyph = Self::severity_glyph(finding.severity);
            let _ = writeln!(output, "  {glyph} {}", finding.message);
        }
    }

    fn format_summary(summary: &Summary, output: &mut String) {
        let _ = writeln!(output, "\n📊 Summary:");
        let _ = writeln!(output, "  Total issues: {}", summary.total_issues);
        let _ = writeln!(output, "  Critical issues: {}", summary.critical_issues);

        if summary.is_passing() {
            let _ = writeln!(output, "🎉 Dockerfiles are ready for deployment!");
        } else {
            let _ = writeln!(output, "⚠️  Please fix critical issues before deployment");
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[Report], summary: &Summary) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "🔍 Validating Dockerfile...");

        for report in reports {
            Self::format_report(report, &mut output);
        }

        Self::format_summary(summary, &mut output);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
