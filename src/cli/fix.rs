//! Fix command implementation
//!
//! Applies rule-based remediations to the project graph. Without an output
//! path the change is only printed, so `fix` doubles as a dry run.

use anyhow::{bail, Context, Result};
use console::style;
use std::path::Path;

use super::project::{load_project, ProjectFile};
use crate::fixes::{apply_all_fixes, apply_auto_fix, can_auto_fix, GraphDelta};
use crate::lint::run_linter_with;

/// Run the fix command for one issue (1-based, as numbered by `lint`)
pub fn run(path: &Path, index: usize, output: Option<&Path>) -> Result<()> {
    let (mut project, config) = load_project(path)?;
    let issues = run_linter_with(
        &project.nodes,
        &project.edges,
        &project.constraints,
        &config,
    );

    if issues.is_empty() {
        println!("{} No issues to fix", style("✓").green());
        return Ok(());
    }
    if index == 0 || index > issues.len() {
        bail!(
            "Invalid issue index: {}. Valid range: 1-{}",
            index,
            issues.len()
        );
    }

    let issue = &issues[index - 1];
    if !can_auto_fix(issue) {
        bail!(
            "Issue #{} ({}) has no auto-fix. Suggested: {}",
            index,
            issue.rule_id,
            issue.suggested_fix.as_deref().unwrap_or("review manually")
        );
    }

    let Some(delta) = apply_auto_fix(issue, &project.nodes, &project.edges) else {
        eprintln!(
            "{} Issue #{} ({}) needs no change",
            style("✓").green(),
            index,
            issue.rule_id
        );
        return Ok(());
    };

    print_delta_summary(&delta);
    match output {
        Some(out_path) => {
            let (nodes, edges) = delta.apply(&project.nodes, &project.edges);
            project.nodes = nodes;
            project.edges = edges;
            write_project(&project, out_path)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&delta)?),
    }
    Ok(())
}

/// Run the fix command for every auto-fixable issue
pub fn run_all(path: &Path, output: Option<&Path>) -> Result<()> {
    let (mut project, config) = load_project(path)?;
    let issues = run_linter_with(
        &project.nodes,
        &project.edges,
        &project.constraints,
        &config,
    );

    let outcome = apply_all_fixes(&issues, &project.nodes, &project.edges);
    if outcome.fixed_count() == 0 {
        eprintln!("{} Nothing to fix", style("✓").green());
        return Ok(());
    }

    eprintln!(
        "{} Applied {} fix(es): {}",
        style("✓").green(),
        outcome.fixed_count(),
        outcome.message()
    );
    eprintln!(
        "  {} node(s) added, {} edge(s) added, {} edge(s) removed",
        outcome.added_node_ids.len(),
        outcome.added_edge_ids.len(),
        outcome.removed_edge_ids.len()
    );

    project.nodes = outcome.nodes;
    project.edges = outcome.edges;
    match output {
        Some(out_path) => write_project(&project, out_path)?,
        None => println!("{}", serde_json::to_string_pretty(&project)?),
    }
    Ok(())
}

fn print_delta_summary(delta: &GraphDelta) {
    eprintln!("{} {}", style("✓").green(), delta.message);
    for id in delta.added_node_ids() {
        eprintln!("  {} node {}", style("+").green(), style(id).cyan());
    }
    for id in delta.added_edge_ids() {
        eprintln!("  {} edge {}", style("+").green(), style(id).cyan());
    }
    for id in delta.removed_edge_ids() {
        eprintln!("  {} edge {}", style("-").red(), style(id).cyan());
    }
}

fn write_project(project: &ProjectFile, out_path: &Path) -> Result<()> {
    project
        .save(out_path)
        .with_context(|| "Failed to save fixed project")?;
    eprintln!(
        "{} Wrote {}",
        style("✓").green(),
        style(out_path.display()).cyan()
    );
    Ok(())
}
