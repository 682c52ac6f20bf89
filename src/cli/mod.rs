//! CLI command definitions and handlers

mod export;
mod fix;
mod init;
mod lint;
pub(crate) mod project;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use project::{load_project, project_dir, ProjectFile, ProjectFileError};

/// PreFlight - Architecture scoring and linting
///
/// Everything runs locally against a saved project file.
#[derive(Parser, Debug)]
#[command(name = "preflight")]
#[command(
    version,
    about = "Score, lint and auto-fix system architecture diagrams",
    long_about = "PreFlight reads an architecture diagram (components, connections and \
project constraints), scores it on eight dimensions, flags 29 common design \
gaps and can repair the ones with a known remediation.",
    after_help = "\
Examples:
  preflight arch.json score                 Score the architecture
  preflight arch.json lint --fail-on error  Exit code 1 on any error (CI mode)
  preflight arch.json fix 2                 Preview the fix for issue #2
  preflight arch.json fix --all -o out.json Apply every auto-fix
  preflight arch.json export > arch.mmd     Mermaid flowchart
  preflight . init                          Write a preflight.toml"
)]
pub struct Cli {
    /// Path to the project file (for `init`: the directory to write into)
    #[arg(default_value = "preflight.json")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the architecture on eight dimensions
    #[command(after_help = "\
Examples:
  preflight arch.json score                 Colored terminal report
  preflight arch.json score --format json   JSON output for scripting")]
    Score {
        /// Output format: text, json (default from preflight.toml, else text)
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,
    },

    /// List anti-patterns, most severe first
    #[command(after_help = "\
Examples:
  preflight arch.json lint                  Numbered issue list
  preflight arch.json lint --format json    JSON with a severity summary
  preflight arch.json lint --fail-on warning  Exit code 1 on warnings or errors")]
    Lint {
        /// Output format: text, json (default from preflight.toml, else text)
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Exit with code 1 if issues at or above this severity exist
        #[arg(long, value_parser = ["error", "warning", "info"])]
        fail_on: Option<String>,
    },

    /// Apply an auto-fix by issue number (see `lint`), or all of them
    #[command(after_help = "\
Examples:
  preflight arch.json fix 1                 Print the change for issue #1
  preflight arch.json fix 1 --in-place      Rewrite arch.json with the fix
  preflight arch.json fix --all -o out.json Write the fully fixed project")]
    Fix {
        /// Issue number from `lint` output (1-based)
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        index: Option<usize>,

        /// Apply every auto-fixable issue
        #[arg(long)]
        all: bool,

        /// Write the updated project to this file
        #[arg(long, short = 'o', conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the project file with the updated project
        #[arg(long)]
        in_place: bool,
    },

    /// Export the architecture as a Mermaid flowchart
    Export {
        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Initialize a preflight.toml config file with example settings
    Init,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score { format } => score::run(&cli.path, format),
        Commands::Lint { format, fail_on } => lint::run(&cli.path, format, fail_on),
        Commands::Fix {
            index,
            all,
            output,
            in_place,
        } => {
            let target = if in_place {
                Some(cli.path.clone())
            } else {
                output
            };
            if all {
                fix::run_all(&cli.path, target.as_deref())
            } else {
                fix::run(&cli.path, index.unwrap_or(0), target.as_deref())
            }
        }
        Commands::Export { output } => export::run(&cli.path, output.as_deref()),
        Commands::Init => init::run(&cli.path),
    }
}
