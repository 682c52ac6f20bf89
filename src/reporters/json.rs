//! JSON reporter
//!
//! Pretty-printed JSON for machine consumption, piping to jq, or feeding a
//! canvas UI. Field names follow the camelCase wire shape of the models.

use crate::models::{LintIssue, ScoreResult, Severity};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct LintReport<'a> {
    summary: LintSummary,
    issues: &'a [LintIssue],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LintSummary {
    total: usize,
    error: usize,
    warning: usize,
    info: usize,
    auto_fixable: usize,
}

/// Render a score result as JSON
pub fn render_score(result: &ScoreResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render lint issues with a severity summary
pub fn render_lint(issues: &[LintIssue]) -> Result<String> {
    let count = |s: Severity| issues.iter().filter(|i| i.severity == s).count();
    let report = LintReport {
        summary: LintSummary {
            total: issues.len(),
            error: count(Severity::Error),
            warning: count(Severity::Warning),
            info: count(Severity::Info),
            auto_fixable: issues.iter().filter(|i| i.auto_fixable).count(),
        },
        issues,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_issues, test_score};

    #[test]
    fn test_score_json_shape() {
        let json_str = render_score(&test_score()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["overall"], 7.5);
        assert_eq!(parsed["dimensions"]["estimatedCost"]["monthlyCost"], 15.0);
        assert!(parsed["dimensions"]["lockInRisk"]["ruleHits"].is_array());
        assert!(parsed["constraintViolations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_lint_json_summary() {
        let json_str = render_lint(&test_issues()).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["error"], 1);
        assert_eq!(parsed["summary"]["autoFixable"], 1);
        assert_eq!(parsed["issues"][0]["ruleId"], "missing-auth");
        assert_eq!(parsed["issues"][0]["targets"]["nodeIds"][0], "db");
    }
}
