//! Output reporters for PreFlight results
//!
//! Supports these output formats for scores and lint reports:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//!
//! The architecture itself can be exported as a Mermaid flowchart via
//! [`mermaid::render`].

mod json;
pub mod mermaid;
mod text;

use crate::models::{LintIssue, ScoreResult};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a score result in the specified format
pub fn report_score(result: &ScoreResult, format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_score_with_format(result, fmt)
}

/// Render a score result using an OutputFormat enum
pub fn report_score_with_format(result: &ScoreResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_score(result),
        OutputFormat::Json => json::render_score(result),
    }
}

/// Render lint issues in the specified format
pub fn report_lint(issues: &[LintIssue], format: &str) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_lint_with_format(issues, fmt)
}

/// Render lint issues using an OutputFormat enum
pub fn report_lint_with_format(issues: &[LintIssue], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_lint(issues),
        OutputFormat::Json => json::render_lint(issues),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{
        CostScore, DimensionScore, Dimensions, LintCategory, LintTarget, Severity,
    };

    fn dim(score: f64, explanation: &str) -> DimensionScore {
        DimensionScore {
            score,
            explanation: explanation.into(),
            rule_hits: Vec::new(),
        }
    }

    /// Minimal ScoreResult for reporter tests
    pub(crate) fn test_score() -> ScoreResult {
        ScoreResult {
            overall: 7.5,
            dimensions: Dimensions {
                build_speed: dim(9.0, "Build speed is strong"),
                complexity: dim(7.0, "Moderate complexity"),
                scalability: dim(7.0, "Scales moderately"),
                estimated_cost: CostScore {
                    dimension: dim(9.3, "Estimated $15/mo"),
                    monthly_cost: 15.0,
                    adjusted_monthly_cost: 15.0,
                },
                ops_burden: dim(5.0, "Moderate ops burden"),
                lock_in_risk: dim(8.0, "Low lock-in"),
                reliability: dim(7.0, "Reliable"),
                ai_readiness: dim(8.0, "AI-ready"),
            },
            constraint_violations: Vec::new(),
        }
    }

    /// One fixable error and one informational issue
    pub(crate) fn test_issues() -> Vec<LintIssue> {
        vec![
            LintIssue {
                rule_id: "missing-auth".into(),
                severity: Severity::Error,
                title: "No authentication layer".into(),
                description: "Database is reachable without authentication".into(),
                category: LintCategory::Security,
                targets: LintTarget::new(vec!["db".into()], "Database is reachable without authentication"),
                suggested_fix: Some("Add an auth provider".into()),
                auto_fixable: true,
            },
            LintIssue {
                rule_id: "no-cdn".into(),
                severity: Severity::Info,
                title: "No CDN".into(),
                description: "Static assets are served without a CDN".into(),
                category: LintCategory::Performance,
                targets: LintTarget::global("Static assets are served without a CDN"),
                suggested_fix: None,
                auto_fixable: false,
            },
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_dispatch_by_name() {
        let json = report_score(&test_score(), "json").unwrap();
        assert!(json.contains("\"overall\": 7.5"));
        let text = report_lint(&test_issues(), "text").unwrap();
        assert!(text.contains("No authentication layer"));
        assert!(report_lint(&test_issues(), "yaml").is_err());
    }
}
