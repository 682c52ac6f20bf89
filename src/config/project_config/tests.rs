use super::*;

#[test]
fn test_normalize_rule_name() {
    assert_eq!(normalize_rule_name("MissingAuth"), "missing-auth");
    assert_eq!(normalize_rule_name("missing_auth"), "missing-auth");
    assert_eq!(normalize_rule_name("missing-auth"), "missing-auth");
    // Consecutive uppercase stays together: LLM -> llm
    assert_eq!(normalize_rule_name("LLMSyncPath"), "llm-sync-path");
    assert_eq!(normalize_rule_name("NoTlsRule"), "no-tls");
    assert_eq!(normalize_rule_name("ST3"), "st3");
}

#[test]
fn test_default_config() {
    let config = ProjectConfig::default();

    assert!(config.is_pattern_rule_enabled("minimal-stack"));
    assert!(config.is_lint_rule_enabled(&["missing-auth", "S1"]));
    assert!(config.severity_override(&["no-cdn"]).is_none());
    assert!(config.pattern_adjustments("llm-in-sync-path").is_none());

    assert!((config.scoring.cost_divisor - 20.0).abs() < 0.001);
    assert!((config.scoring.low_budget_ceiling - 50.0).abs() < 0.001);
    assert!(config.scoring.is_valid());
}

#[test]
fn test_parse_toml_config() {
    let toml_content = r#"
[scoring]
cost_divisor = 25.0

[scoring.rules.llm-in-sync-path]
adjustments = { cost = 35.0, scalability = -1.5 }

[scoring.rules.MinimalStack]
enabled = false

[lint.rules.no_tls]
enabled = false

[lint.rules.no-cdn]
severity = "warning"

[lint.rules.S2]
severity = "error"

[defaults]
format = "json"
fail_on = "warning"
"#;

    let config: ProjectConfig = toml::from_str(toml_content).expect("parse project config");

    assert!((config.scoring.cost_divisor - 25.0).abs() < 0.001);
    assert!((config.scoring.low_budget_ceiling - 50.0).abs() < 0.001);

    assert!(!config.is_pattern_rule_enabled("minimal-stack"));
    let adj = config.pattern_adjustments("llm-in-sync-path").unwrap();
    assert_eq!(adj.get("cost"), Some(&35.0));

    assert!(!config.is_lint_rule_enabled(&["no-tls", "S4"]));
    assert_eq!(config.severity_override(&["no-cdn", "P3"]), Some(Severity::Warning));
    // Short codes match too
    assert_eq!(
        config.severity_override(&["no-rate-limiting", "S2"]),
        Some(Severity::Error)
    );

    assert_eq!(config.defaults.format, Some("json".to_string()));
    assert_eq!(config.defaults.fail_on, Some("warning".to_string()));
}

#[test]
fn test_invalid_severity_override_ignored() {
    let config: ProjectConfig = toml::from_str(
        r#"
[lint.rules.no-cdn]
severity = "critical"
"#,
    )
    .unwrap();
    assert!(config.severity_override(&["no-cdn"]).is_none());
}

#[test]
fn test_invalid_cost_divisor_falls_back() {
    let config = ScoringConfig {
        cost_divisor: 0.0,
        ..Default::default()
    };
    assert!(!config.is_valid());
    assert_eq!(config.effective_cost_divisor(), DEFAULT_COST_DIVISOR);
}

#[test]
fn test_load_prefers_toml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("preflight.toml"),
        "[scoring]\ncost_divisor = 10.0\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(".preflightrc.json"),
        r#"{"scoring": {"cost_divisor": 40.0}}"#,
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert!((config.scoring.cost_divisor - 10.0).abs() < 0.001);
}

#[test]
fn test_load_json_and_broken_toml_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("preflight.toml"), "[scoring\nbroken").unwrap();
    std::fs::write(
        dir.path().join(".preflightrc.json"),
        r#"{"lint": {"rules": {"no-cicd": {"enabled": false}}}}"#,
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert!(!config.is_lint_rule_enabled(&["no-cicd"]));
}

#[test]
fn test_load_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_project_config(dir.path());
    assert!(config.lint.rules.is_empty());
    assert!((config.scoring.cost_divisor - DEFAULT_COST_DIVISOR).abs() < 0.001);
}
