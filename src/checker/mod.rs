mod finding;
mod rules;

pub use finding::{Finding, Report, Severity, Summary};
pub use rules::{DEPRECATED_BASE_IMAGES, check_content};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::Target;

/// Evaluates one fixed target and pairs the findings with it.
#[must_use]
pub fn evaluate(target: Target) -> Report {
    Report::new(target, evaluate_path(Path::new(target.path)))
}

/// Evaluates the build file at `path`.
///
/// Never fails: a missing or unreadable file is folded into the finding
/// stream as a single critical finding, so it counts toward the critical
/// total exactly like a rule violation. File content is decoded
/// best-effort; binary files degrade to text that matches no rule.
#[must_use]
pub fn evaluate_path(path: &Path) -> Vec<Finding> {
    match fs::read(path) {
        Ok(bytes) => check_content(&String::from_utf8_lossy(&bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            vec![Finding::critical(
                None,
                format!("Dockerfile not found: {}", path.display()),
            )]
        }
        Err(_) => {
            vec![Finding::critical(
                None,
                format!("Dockerfile not readable: {}", path.display()),
            )]
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
