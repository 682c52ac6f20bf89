//! Text (terminal) reporter with colors and formatting

use crate::models::{LintIssue, ScoreResult, Severity};
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";

const RULE: &str = "──────────────────────────────────────";

/// Severity colors
fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
        Severity::Info => BLUE,
    }
}

/// Severity tag
fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "[E]",
        Severity::Warning => "[W]",
        Severity::Info => "[I]",
    }
}

/// Score on the 1-10 scale, colored by band
fn format_score(score: f64) -> String {
    let color = if score >= 8.0 {
        GREEN
    } else if score >= 5.0 {
        YELLOW
    } else {
        RED
    };
    format!("{color}{:>4.1}{RESET}", score)
}

/// Render a score result as formatted terminal output
pub fn render_score(result: &ScoreResult) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}PreFlight Architecture Score{RESET}\n"));
    out.push_str(&format!("{DIM}{RULE}{RESET}\n"));
    out.push_str(&format!(
        "Overall: {BOLD}{}{RESET}/10   Est. cost: ~${}/mo\n\n",
        format_score(result.overall).trim_start(),
        result.dimensions.estimated_cost.monthly_cost
    ));

    out.push_str(&format!("{BOLD}DIMENSIONS{RESET}\n"));
    for (key, dim) in result.dimensions.iter() {
        out.push_str(&format!(
            "  {:<14} {}  {DIM}{}{RESET}\n",
            key,
            format_score(dim.score),
            dim.explanation
        ));
    }

    if !result.constraint_violations.is_empty() {
        out.push_str(&format!(
            "\n{BOLD}CONSTRAINT VIOLATIONS{RESET} ({})\n",
            result.constraint_violations.len()
        ));
        for violation in &result.constraint_violations {
            out.push_str(&format!("  {RED}✗{RESET} {}\n", violation));
        }
    }

    out.push('\n');
    Ok(out)
}

/// Render lint issues as a numbered table.
///
/// Numbers are 1-based and match what `preflight fix <n>` expects.
pub fn render_lint(issues: &[LintIssue]) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!("\n{BOLD}PreFlight Lint{RESET}\n"));
    out.push_str(&format!("{DIM}{RULE}{RESET}\n"));

    if issues.is_empty() {
        out.push_str(&format!("{GREEN}No issues found.{RESET}\n\n"));
        return Ok(out);
    }

    let count = |s: Severity| issues.iter().filter(|i| i.severity == s).count();
    let mut summary_parts = Vec::new();
    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        let n = count(severity);
        if n > 0 {
            summary_parts.push(format!("{}{} {}{RESET}", severity_color(severity), n, severity));
        }
    }
    out.push_str(&format!(
        "{BOLD}ISSUES{RESET} ({} total)  {}\n\n",
        issues.len(),
        summary_parts.join(" | ")
    ));

    for (i, issue) in issues.iter().enumerate() {
        let sev_c = severity_color(issue.severity);
        let fixable = if issue.auto_fixable {
            format!("  {GREEN}[fixable]{RESET}")
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {DIM}{:>3}{RESET}  {sev_c}{}{RESET}  {}  {DIM}({}){RESET}{}\n",
            i + 1,
            severity_tag(issue.severity),
            issue.title,
            issue.rule_id,
            fixable
        ));
        out.push_str(&format!("       {}", issue.description));
        if !issue.targets.node_ids.is_empty() {
            out.push_str(&format!(
                "  {DIM}[{}]{RESET}",
                issue.targets.node_ids.join(", ")
            ));
        }
        out.push('\n');
        if let Some(fix) = &issue.suggested_fix {
            out.push_str(&format!("       {DIM}→ {}{RESET}\n", fix));
        }
    }

    if issues.iter().any(|i| i.auto_fixable) {
        out.push_str(&format!(
            "\n{DIM}Run `preflight <project> fix <n>` or `fix --all` to apply auto-fixes.{RESET}\n"
        ));
    }
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{test_issues, test_score};

    #[test]
    fn test_score_render_lists_dimensions() {
        let out = render_score(&test_score()).expect("render score");
        assert!(out.contains("PreFlight Architecture Score"));
        assert!(out.contains("buildSpeed"));
        assert!(out.contains("lockInRisk"));
        assert!(out.contains("~$15/mo"));
        assert!(!out.contains("CONSTRAINT VIOLATIONS"));
    }

    #[test]
    fn test_lint_render_numbers_issues() {
        let out = render_lint(&test_issues()).expect("render lint");
        assert!(out.contains("  1"));
        assert!(out.contains("missing-auth"));
        assert!(out.contains("[fixable]"));
        assert!(out.contains("1 error"));
    }

    #[test]
    fn test_lint_render_empty() {
        let out = render_lint(&[]).expect("render lint");
        assert!(out.contains("No issues found."));
    }
}
