//! Lint execution
//!
//! Runs every enabled rule from [`LINT_RULES`] against a normalized graph,
//! turns each returned target into a [`LintIssue`] and orders the result by
//! severity. Rule failures are contained per rule.

use super::rules::{LintRule, LINT_RULES};
use crate::config::ProjectConfig;
use crate::error::run_guarded;
use crate::graph::{normalize, Graph};
use crate::models::{Constraints, LintIssue, LintTarget, RawEdge, RawNode};
use tracing::{debug, info};

/// Lint engine bound to a project configuration
pub struct Linter<'a> {
    config: &'a ProjectConfig,
}

impl<'a> Linter<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config }
    }

    /// Evaluate all enabled rules.
    ///
    /// Issues are ordered error, warning, info; within a tier they keep rule
    /// registration order and, per rule, target order.
    pub fn lint(&self, graph: &Graph, constraints: &Constraints) -> Vec<LintIssue> {
        let mut issues = Vec::new();

        for rule in LINT_RULES {
            let names = [rule.id, rule.code];
            if !self.config.is_lint_rule_enabled(&names) {
                debug!("Lint rule {} disabled by config", rule.id);
                continue;
            }
            let Some(targets) = run_guarded("Lint", rule.id, || (rule.predicate)(graph, constraints))
            else {
                continue;
            };
            if !targets.is_empty() {
                debug!("Lint rule {} produced {} issue(s)", rule.id, targets.len());
            }
            issues.extend(targets.into_iter().map(|t| self.issue(rule, t)));
        }

        // Stable: equal ranks keep registration order
        issues.sort_by_key(|issue| issue.severity.rank());

        info!("Lint found {} issue(s) in {} nodes", issues.len(), graph.len());
        issues
    }

    fn issue(&self, rule: &LintRule, target: LintTarget) -> LintIssue {
        let severity = self
            .config
            .severity_override(&[rule.id, rule.code])
            .unwrap_or(rule.severity);
        LintIssue {
            rule_id: rule.id.to_string(),
            severity,
            title: rule.title.to_string(),
            description: target.message.clone(),
            category: rule.category,
            targets: target,
            suggested_fix: rule.suggested_fix.map(str::to_string),
            auto_fixable: rule.auto_fixable,
        }
    }
}

/// Lint an architecture with default configuration
pub fn run_linter(nodes: &[RawNode], edges: &[RawEdge], constraints: &Constraints) -> Vec<LintIssue> {
    run_linter_with(nodes, edges, constraints, &ProjectConfig::default())
}

/// Lint an architecture with a project configuration
pub fn run_linter_with(
    nodes: &[RawNode],
    edges: &[RawEdge],
    constraints: &Constraints,
    config: &ProjectConfig,
) -> Vec<LintIssue> {
    let graph = normalize(nodes, edges);
    Linter::new(config).lint(&graph, constraints)
}
