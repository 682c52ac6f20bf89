//! Configuration module for PreFlight
//!
//! This module handles:
//! - Project-level configuration (preflight.toml)
//! - Pattern-rule tuning and scoring constants
//! - Lint rule enable/severity overrides
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_project_config, normalize_rule_name, CliDefaults, LintConfig, LintRuleOverride,
    PatternRuleOverride, ProjectConfig, ScoringConfig, CONFIG_FILE_NAMES, DEFAULT_COST_DIVISOR,
    DEFAULT_LOW_BUDGET_CEILING,
};
