use super::finding::Finding;

/// Base images known to be broken or deprecated. Any `FROM` line containing
/// one of these emits a critical finding; entries overlap on purpose
/// (`openjdk:21-jre` also matches the `-slim` and `-alpine` tags), so a
/// single line can emit more than one finding.
pub const DEPRECATED_BASE_IMAGES: [&str; 3] = [
    "openjdk:21-jre-slim",
    "openjdk:21-jre",
    "openjdk:21-jre-alpine",
];

const FROM_PREFIX: &str = "FROM ";
const ROOT_USER: &str = "USER root";
const APT_UPDATE: &str = "RUN apt-get update";
const APT_CLEAN: &str = "RUN apt-get clean";
const HEALTHCHECK: &str = "HEALTHCHECK";
const EXPOSE: &str = "EXPOSE";

/// Runs every check against the given file content, concatenating findings
/// in fixed check order.
///
/// Matching is deliberately naive: raw trimmed lines, case-sensitive
/// substring tests, no comment stripping and no continuation-line joining.
/// Line numbers are 1-based positions in the plain newline split, which
/// keeps the trailing empty element after a final newline.
#[must_use]
pub fn check_content(content: &str) -> Vec<Finding> {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut findings = check_base_images(&lines);
    findings.extend(check_multi_stage(&lines));
    findings.extend(check_root_user(content));
    findings.extend(check_apt_cleanup(content));
    findings.extend(check_healthcheck(content));
    findings.extend(check_port_exposure(content));
    findings
}

fn check_base_images(lines: &[&str]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (number, line) in lines.iter().enumerate().map(|(i, l)| (i + 1, l)) {
        if !line.trim_start().starts_with(FROM_PREFIX) {
            continue;
        }
        for image in DEPRECATED_BASE_IMAGES {
            if line.contains(image) {
                findings.push(Finding::critical(
                    Some(number),
                    format!("Line {number}: Problematic base image '{image}' - may not exist"),
                ));
            }
        }
    }
    findings
}

fn check_multi_stage(lines: &[&str]) -> Option<Finding> {
    let from_count = lines
        .iter()
        .filter(|line| line.trim_start().starts_with(FROM_PREFIX))
        .count();
    (from_count < 2).then(|| {
        Finding::warning("Single-stage build detected - consider multi-stage for optimization")
    })
}

fn check_root_user(content: &str) -> Option<Finding> {
    content
        .contains(ROOT_USER)
        .then(|| Finding::warning("Running as root user - security risk"))
}

fn check_apt_cleanup(content: &str) -> Option<Finding> {
    (content.contains(APT_UPDATE) && !content.contains(APT_CLEAN))
        .then(|| Finding::warning("Missing apt-get clean - may increase image size"))
}

fn check_healthcheck(content: &str) -> Option<Finding> {
    (!content.contains(HEALTHCHECK))
        .then(|| Finding::info("No health check defined - consider adding one"))
}

fn check_port_exposure(content: &str) -> Option<Finding> {
    (!content.contains(EXPOSE))
        .then(|| Finding::info("No EXPOSE directive - consider adding port exposure"))
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
