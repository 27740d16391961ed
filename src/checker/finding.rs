use serde::Serialize;

use crate::Target;

/// Severity of a single finding.
///
/// The overall pass/fail decision depends only on `Critical`: a run fails
/// exactly when at least one critical finding exists across all targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// One reported issue. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// 1-based line number in the original newline split; `None` for
    /// whole-file findings.
    pub line: Option<usize>,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn critical(line: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            line,
            message: message.into(),
        }
    }

    /// Whole-file warning finding.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            line: None,
            message: message.into(),
        }
    }

    /// Whole-file informational finding.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            line: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self.severity, Severity::Critical)
    }
}

/// The ordered findings for one target file. Derived per run, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub target: Target,
    pub findings: Vec<Finding>,
}

impl Report {
    #[must_use]
    pub const fn new(target: Target, findings: Vec<Finding>) -> Self {
        Self { target, findings }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_critical()).count()
    }
}

/// Counts folded over all findings across all reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_issues: usize,
    pub critical_issues: usize,
}

impl Summary {
    #[must_use]
    pub fn from_reports(reports: &[Report]) -> Self {
        reports.iter().fold(Self::default(), |acc, report| Self {
            total_issues: acc.total_issues + report.findings.len(),
            critical_issues: acc.critical_issues + report.critical_count(),
        })
    }

    /// The binary outcome: passing exactly when no critical finding exists.
    #[must_use]
    pub const fn is_passing(&self) -> bool {
        self.critical_issues == 0
    }
}

#[cfg(test)]
#[path = "finding_tests.rs"]
mod tests;
