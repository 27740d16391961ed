pub mod checker;
pub mod cli;
pub mod error;
pub mod output;

pub use error::{DockerfileGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CRITICAL_ISSUES: i32 = 1;

/// One of the fixed build files validated on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Target {
    /// Path relative to the working directory.
    pub path: &'static str,
    /// Display name used in report headers.
    pub label: &'static str,
}

/// The two build files checked by every invocation, in report order.
pub const TARGETS: [Target; 2] = [
    Target {
        path: "Dockerfile",
        label: "Main Dockerfile",
    },
    Target {
        path: "Dockerfile.alternative",
        label: "Alternative Dockerfile",
    },
];

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
