//! Project-level configuration support
//!
//! Loads per-project configuration from `preflight.toml` or
//! `.preflightrc.json` next to the project file.
//!
//! # Configuration Format
//!
//! ```toml
//! # preflight.toml
//!
//! [scoring]
//! cost_divisor = 25.0          # dollars per score point of estimatedCost
//! low_budget_ceiling = 75.0    # monthly dollars before a low budget is exceeded
//!
//! [scoring.rules.llm-in-sync-path]
//! adjustments = { cost = 35.0, scalability = -1.0 }
//!
//! [scoring.rules.minimal-stack]
//! enabled = false
//!
//! [lint.rules.no-tls]
//! enabled = false
//!
//! [lint.rules.no-cdn]
//! severity = "warning"
//!
//! [defaults]
//! format = "json"
//! fail_on = "error"
//! ```

use crate::models::Severity;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Dollars per point subtracted from the cost score
pub const DEFAULT_COST_DIVISOR: f64 = 20.0;

/// Monthly spend a low budget tolerates
pub const DEFAULT_LOW_BUDGET_CEILING: f64 = 50.0;

/// Config file names, in lookup order
pub const CONFIG_FILE_NAMES: &[&str] = &["preflight.toml", ".preflightrc.json"];

/// Project-level configuration loaded from preflight.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Score engine tuning
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Lint rule overrides
    #[serde(default)]
    pub lint: LintConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Dollars per score point for estimatedCost (default: 20.0)
    #[serde(default = "default_cost_divisor")]
    pub cost_divisor: f64,

    /// Monthly cost above which a low budget counts as exceeded (default: 50.0)
    #[serde(default = "default_low_budget_ceiling")]
    pub low_budget_ceiling: f64,

    /// Per-pattern-rule overrides keyed by rule id
    #[serde(default)]
    pub rules: HashMap<String, PatternRuleOverride>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            cost_divisor: default_cost_divisor(),
            low_budget_ceiling: default_low_budget_ceiling(),
            rules: HashMap::new(),
        }
    }
}

fn default_cost_divisor() -> f64 {
    DEFAULT_COST_DIVISOR
}

fn default_low_budget_ceiling() -> f64 {
    DEFAULT_LOW_BUDGET_CEILING
}

impl ScoringConfig {
    /// The divisor must be a positive finite number
    pub fn is_valid(&self) -> bool {
        self.cost_divisor.is_finite()
            && self.cost_divisor > 0.0
            && self.low_budget_ceiling.is_finite()
    }

    /// Cost divisor, falling back to the default when misconfigured
    pub fn effective_cost_divisor(&self) -> f64 {
        if self.cost_divisor.is_finite() && self.cost_divisor > 0.0 {
            self.cost_divisor
        } else {
            warn!(
                "Invalid scoring.cost_divisor {}, using {}",
                self.cost_divisor, DEFAULT_COST_DIVISOR
            );
            DEFAULT_COST_DIVISOR
        }
    }
}

/// Override for one pattern rule
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PatternRuleOverride {
    /// Whether the rule runs (default: true)
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Replacement adjustments keyed by dimension name
    /// (buildSpeed, complexity, scalability, cost, opsBurden, lockIn, reliability, aiReadiness)
    #[serde(default)]
    pub adjustments: HashMap<String, f64>,
}

/// Lint configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LintConfig {
    /// Per-lint-rule overrides keyed by rule id or short code
    #[serde(default)]
    pub rules: HashMap<String, LintRuleOverride>,
}

/// Override for one lint rule
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LintRuleOverride {
    /// Whether the rule runs (default: true)
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Override the default severity (error, warning, info)
    #[serde(default)]
    pub severity: Option<String>,
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Fail-on severity threshold for CI
    #[serde(default)]
    pub fail_on: Option<String>,
}

/// Load project configuration from a directory.
///
/// Searches for configuration files in this order:
/// 1. `preflight.toml`
/// 2. `.preflightrc.json`
///
/// Returns default configuration if no config file is found or none parses.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    // Try TOML first (preferred format)
    let toml_path = dir.join(CONFIG_FILE_NAMES[0]);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = dir.join(CONFIG_FILE_NAMES[1]);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Find an override whose key matches any of `names` after normalization
fn find_override<'a, T>(map: &'a HashMap<String, T>, names: &[&str]) -> Option<&'a T> {
    names.iter().find_map(|name| {
        let wanted = normalize_rule_name(name);
        map.iter()
            .find(|(key, _)| normalize_rule_name(key) == wanted)
            .map(|(_, v)| v)
    })
}

impl ProjectConfig {
    /// Check if a pattern rule is enabled (defaults to true if not specified)
    pub fn is_pattern_rule_enabled(&self, id: &str) -> bool {
        find_override(&self.scoring.rules, &[id])
            .and_then(|o| o.enabled)
            .unwrap_or(true)
    }

    /// Adjustment overrides for a pattern rule, if any were configured
    pub fn pattern_adjustments(&self, id: &str) -> Option<&HashMap<String, f64>> {
        find_override(&self.scoring.rules, &[id])
            .map(|o| &o.adjustments)
            .filter(|a| !a.is_empty())
    }

    /// Check if a lint rule is enabled under any of its names
    pub fn is_lint_rule_enabled(&self, names: &[&str]) -> bool {
        find_override(&self.lint.rules, names)
            .and_then(|o| o.enabled)
            .unwrap_or(true)
    }

    /// Severity override for a lint rule (if any, and if it parses)
    pub fn severity_override(&self, names: &[&str]) -> Option<Severity> {
        let raw = find_override(&self.lint.rules, names)?.severity.as_deref()?;
        match raw.parse::<Severity>() {
            Ok(severity) => Some(severity),
            Err(e) => {
                warn!("Ignoring severity override for {}: {}", names.join("/"), e);
                None
            }
        }
    }
}

/// Normalize rule name for config lookup
/// Converts various formats to kebab-case for matching
pub fn normalize_rule_name(name: &str) -> String {
    // MissingAuth -> missing-auth
    // LLMSyncPath -> llm-sync-path
    // missing_auth -> missing-auth
    // S1 -> s1

    let mut result = String::new();
    let chars: Vec<char> = name.trim().chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_is_lower = i > 0 && chars[i - 1].is_lowercase();
            let is_acronym_end = i > 0
                && chars[i - 1].is_uppercase()
                && i + 1 < chars.len()
                && chars[i + 1].is_lowercase();

            if prev_is_lower || is_acronym_end {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else if *c == '_' || *c == ' ' {
            result.push('-');
        } else {
            result.push(*c);
        }
    }

    result.trim_end_matches("-rule").to_string()
}

#[cfg(test)]
mod tests;
