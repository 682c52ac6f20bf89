//! Score command

use anyhow::Result;
use std::path::Path;

use super::project::load_project;
use crate::reporters;
use crate::scoring::score_architecture_with;

/// Run the score command
pub fn run(path: &Path, format: Option<String>) -> Result<()> {
    let (project, config) = load_project(path)?;
    let format = format
        .or_else(|| config.defaults.format.clone())
        .unwrap_or_else(|| "text".to_string());

    let result = score_architecture_with(
        &project.nodes,
        &project.edges,
        &project.constraints,
        &config,
    );
    print!("{}", reporters::report_score(&result, &format)?);
    if format == "json" {
        println!();
    }
    Ok(())
}
