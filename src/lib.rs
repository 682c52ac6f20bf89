//! PreFlight - Architecture-graph scoring, lint and auto-fix engine
//!
//! Takes a component diagram (nodes, edges) plus project constraints and
//! - scores it on eight dimensions ([`score_architecture`]),
//! - reports anti-patterns ([`run_linter`]),
//! - computes graph deltas that repair fixable issues ([`apply_auto_fix`]).
//!
//! Every entry point is pure: inputs are borrowed, results are new values.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixes;
pub mod graph;
pub mod lint;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use config::{load_project_config, ProjectConfig};
pub use fixes::{apply_all_fixes, apply_auto_fix, can_auto_fix, FixAllOutcome, GraphDelta};
pub use lint::{run_linter, run_linter_with};
pub use models::{Constraints, LintIssue, RawEdge, RawNode, ScoreResult};
pub use scoring::{score_architecture, score_architecture_with};
