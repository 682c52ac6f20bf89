//! Init command - write a starter preflight.toml

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use super::project::project_dir;
use crate::config::CONFIG_FILE_NAMES;

const DEFAULT_CONFIG: &str = r#"# PreFlight Configuration
# Lives next to the project file it applies to.

[scoring]
# Dollars per point subtracted from the estimatedCost score
cost_divisor = 20.0

# Monthly spend (USD) a low budget tolerates before it counts as exceeded
low_budget_ceiling = 50.0

# Tune or disable pattern rules by id
# [scoring.rules.llm-in-sync-path]
# adjustments = { cost = 35.0, scalability = -1.0 }
#
# [scoring.rules.minimal-stack]
# enabled = false

# Disable lint rules or change their severity (id or short code)
# [lint.rules.no-tls]
# enabled = false
#
# [lint.rules.P2]
# severity = "warning"

[defaults]
# Default output format (text, json)
format = "text"

# Exit with code 1 when lint finds issues at or above this severity
# fail_on = "error"
"#;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let dir = project_dir(path);
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    println!("\n{} Initializing PreFlight\n", style("✈").bold());

    let config_path = dir.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!(
        "\nNext: {}",
        style("preflight <project.json> lint").bold()
    );
    Ok(())
}
