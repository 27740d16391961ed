use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "dockerfile-guard")]
#[command(
    author,
    version,
    about = "Static Dockerfile validation without a container engine"
)]
#[command(long_about = "Heuristically validates the Dockerfile and Dockerfile.alternative files\n\
    in the current directory, without invoking a container engine.\n\n\
    Exit codes:\n  \
    0 - No critical issues found\n  \
    1 - Critical issues found (or a target file is missing)")]
pub struct Cli {
    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress output; communicate only through the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
