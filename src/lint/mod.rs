//! Architecture linting
//!
//! Rules in [`rules`] detect anti-patterns in a component graph; the
//! [`engine`] runs them, applies configured overrides and sorts the issues.

mod engine;
mod rules;

pub use engine::{run_linter, run_linter_with, Linter};
pub use rules::{find_rule, LintPredicate, LintRule, LINT_RULES};
