//! Export command - Mermaid flowchart of the architecture

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use super::project::ProjectFile;
use crate::reporters::mermaid;

/// Run the export command
pub fn run(path: &Path, output: Option<&Path>) -> Result<()> {
    let project = ProjectFile::load(path)?;
    let diagram = mermaid::render(&project.nodes, &project.edges);

    match output {
        Some(out_path) => {
            std::fs::write(out_path, &diagram)
                .with_context(|| format!("Failed to write {}", out_path.display()))?;
            eprintln!(
                "{} Wrote {}",
                style("✓").green(),
                style(out_path.display()).cyan()
            );
        }
        None => print!("{}", diagram),
    }
    Ok(())
}
