use serde::Serialize;

use crate::checker::{Finding, Report, Summary};
use crate::error::Result;

use super::OutputFormatter;

/// Machine-readable output for pipeline consumers.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    reports: Vec<FileReport<'a>>,
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: &'static str,
    label: &'static str,
    findings: &'a [Finding],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[Report], summary: &Summary) -> Result<String> {
        let output = JsonOutput {
            summary: *summary,
            reports: reports
                .iter()
                .map(|report| FileReport {
                    path: report.target.path,
                    label: report.target.label,
                    findings: &report.findings,
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&output)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
