//! Lint command

use anyhow::{bail, Result};
use std::path::Path;

use super::project::load_project;
use crate::lint::run_linter_with;
use crate::models::{LintIssue, Severity};
use crate::reporters;

/// Run the lint command
pub fn run(path: &Path, format: Option<String>, fail_on: Option<String>) -> Result<()> {
    let (project, config) = load_project(path)?;
    let format = format
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());
    let fail_on = fail_on.or_else(|| config.defaults.fail_on.clone());

    let issues = run_linter_with(
        &project.nodes,
        &project.edges,
        &project.constraints,
        &config,
    );
    print!("{}", reporters::report_lint(&issues, &format)?);
    if format == "json" {
        println!();
    }

    check_fail_threshold(fail_on.as_deref(), &issues)
}

/// Exit with code 1 when an issue at or above the threshold exists
fn check_fail_threshold(fail_on: Option<&str>, issues: &[LintIssue]) -> Result<()> {
    let Some(threshold) = fail_on else {
        return Ok(());
    };
    let threshold: Severity = match threshold.parse() {
        Ok(severity) => severity,
        Err(e) => bail!("Invalid fail_on threshold: {}", e),
    };
    if exceeds_threshold(threshold, issues) {
        eprintln!("Failing due to --fail-on={} threshold", threshold);
        std::process::exit(1);
    }
    Ok(())
}

fn exceeds_threshold(threshold: Severity, issues: &[LintIssue]) -> bool {
    issues
        .iter()
        .any(|issue| issue.severity.rank() <= threshold.rank())
}
