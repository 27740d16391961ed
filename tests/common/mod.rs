#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the dockerfile-guard binary.
#[macro_export]
macro_rules! dockerfile_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("dockerfile-guard"))
    };
}

/// Temporary working directory holding the fixed target files. The binary is
/// run with `current_dir` pointed here so the hardcoded relative paths
/// resolve inside the fixture.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes the primary target (`Dockerfile`).
    pub fn create_dockerfile(&self, content: &str) {
        self.create_file("Dockerfile", content);
    }

    /// Writes the secondary target (`Dockerfile.alternative`).
    pub fn create_alternative(&self, content: &str) {
        self.create_file("Dockerfile.alternative", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Dockerfile content that triggers no findings at all: multi-stage, no
/// deprecated image, non-root user, no apt-get update, health check and
/// exposed port declared.
pub const CLEAN_DOCKERFILE: &str = "\
FROM eclipse-temurin:21-jre AS build
FROM eclipse-temurin:21-jre
USER app
HEALTHCHECK CMD curl -f http://localhost:8080/health || exit 1
EXPOSE 8080
";

/// Content with warnings only: exits 0 but prints issue lines.
pub const WARNING_DOCKERFILE: &str = "\
FROM debian:bookworm-slim AS build
FROM debian:bookworm-slim
USER root
RUN apt-get update
HEALTHCHECK CMD true
EXPOSE 80
";

/// Content with a deny-listed base image: fails the run.
pub const DEPRECATED_DOCKERFILE: &str = "\
FROM openjdk:21-jre-slim
EXPOSE 8080
";
