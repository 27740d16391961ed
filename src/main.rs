use clap::Parser;

use dockerfile_guard::checker::{self, Report, Summary};
use dockerfile_guard::cli::Cli;
use dockerfile_guard::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use dockerfile_guard::{EXIT_CRITICAL_ISSUES, EXIT_SUCCESS, TARGETS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let reports: Vec<Report> = TARGETS.iter().map(|target| checker::evaluate(*target)).collect();
    let summary = Summary::from_reports(&reports);

    match format_output(cli.format, &reports, &summary) {
        Ok(output) => {
            if !cli.quiet {
                print!("{output}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_CRITICAL_ISSUES;
        }
    }

    if summary.is_passing() {
        EXIT_SUCCESS
    } else {
        EXIT_CRITICAL_ISSUES
    }
}

fn format_output(
    format: OutputFormat,
    reports: &[Report],
    summary: &Summary,
) -> dockerfile_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter.format(reports, summary),
        OutputFormat::Json => JsonFormatter.format(reports, summary),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
