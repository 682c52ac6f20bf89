//! Lint rule set
//!
//! Every rule is a static record: id, short code, default severity and a
//! predicate returning one [`LintTarget`] per issue. Order in [`LINT_RULES`]
//! is the order issues are reported within a severity tier.

use crate::catalog::{monthly_cost_of, Language};
use crate::config::{normalize_rule_name, DEFAULT_LOW_BUDGET_CEILING};
use crate::error::{RuleError, RuleResult};
use crate::graph::{find_cycles, Graph};
use crate::models::{
    BudgetLevel, Category, Constraints, DataSensitivity, LintCategory, LintTarget, Severity, TrafficLevel,
};
use serde_json::Value;

pub type LintPredicate = fn(&Graph, &Constraints) -> RuleResult<Vec<LintTarget>>;

pub struct LintRule {
    /// Stable kebab-case id, used as `LintIssue::rule_id`
    pub id: &'static str,
    /// Short code (S1, P2, ST3 ...)
    pub code: &'static str,
    pub severity: Severity,
    pub title: &'static str,
    pub category: LintCategory,
    pub predicate: LintPredicate,
    pub suggested_fix: Option<&'static str>,
    pub auto_fixable: bool,
}

impl std::fmt::Debug for LintRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LintRule")
            .field("id", &self.id)
            .field("code", &self.code)
            .field("severity", &self.severity)
            .finish()
    }
}

/// Hosts that terminate TLS for every deployment
const MANAGED_TLS_HOSTS: &[&str] = &["vercel", "netlify", "cloudrun", "railway", "render"];
const CDN_TYPES: &[&str] = &["cloudflare-cdn", "cloudfront"];
const POOLED_DATABASES: &[&str] = &["postgresql", "mysql"];
const EXPENSIVE_MODELS: &[&str] = &["gpt-4", "gpt-4-turbo", "claude-3-opus"];
const ENTERPRISE_TYPES: &[&str] = &["kafka", "elasticsearch", "datadog", "aws-ec2"];
const BUNDLED_AUTH_TYPES: &[&str] = &["supabase"];
const SEPARATE_AUTH_TYPES: &[&str] = &["auth0", "clerk"];
const UPLOAD_RELATIONSHIP: &str = "uploads_to";

/// Node count from which infrastructure expectations (TLS, monitoring, CI/CD) apply
const MIN_INFRA_NODES: usize = 3;
const SOLO_MAX_NODES: usize = 6;
const SMALL_TEAM_SIZE: u32 = 4;

macro_rules! rule {
    (@build $id:literal, $code:literal, $sev:ident, $cat:ident, $title:literal, $pred:ident, $fix:expr, $auto:expr) => {
        LintRule {
            id: $id,
            code: $code,
            severity: Severity::$sev,
            title: $title,
            category: LintCategory::$cat,
            predicate: $pred,
            suggested_fix: $fix,
            auto_fixable: $auto,
        }
    };
    ($id:literal, $code:literal, $sev:ident, $cat:ident, $title:literal, $pred:ident) => {
        rule!(@build $id, $code, $sev, $cat, $title, $pred, None, false)
    };
    ($id:literal, $code:literal, $sev:ident, $cat:ident, $title:literal, $pred:ident, $fix:literal) => {
        rule!(@build $id, $code, $sev, $cat, $title, $pred, Some($fix), false)
    };
    ($id:literal, $code:literal, $sev:ident, $cat:ident, $title:literal, $pred:ident, $fix:literal, fixable) => {
        rule!(@build $id, $code, $sev, $cat, $title, $pred, Some($fix), true)
    };
}

pub static LINT_RULES: &[LintRule] = &[
    // Security
    rule!("missing-auth", "S1", Error, Security, "No authentication for user-facing app",
        missing_auth, "Add an auth provider (Clerk, Auth0, or NextAuth)", fixable),
    rule!("no-rate-limiting", "S2", Warning, Security, "No rate limiting on public API",
        no_rate_limiting, "Add rate limiting middleware"),
    rule!("unencrypted-sensitive-data", "S3", Error, Security, "High-sensitivity data without encryption",
        unencrypted_sensitive_data, "Enable encryption at rest"),
    rule!("no-tls", "S4", Warning, Security, "No HTTPS/TLS mentioned", no_tls),
    // Performance
    rule!("missing-cache", "P1", Warning, Performance, "No caching layer",
        missing_cache, "Add Redis or CDN caching", fixable),
    rule!("llm-sync-path", "P2", Error, Performance, "LLM in synchronous request path",
        llm_sync_path, "Add queue or background action for LLM calls"),
    rule!("no-cdn", "P3", Info, Performance, "No CDN for static assets",
        no_cdn, "Add Cloudflare CDN for edge caching", fixable),
    rule!("no-connection-pooling", "P4", Warning, Performance, "Database without connection pooling",
        no_connection_pooling),
    rule!("long-task-without-queue", "P5", Warning, Performance, "Long-running task without queue",
        long_task_without_queue, "Add SQS or message queue for async tasks", fixable),
    // Reliability
    rule!("missing-monitoring", "R1", Warning, Reliability, "No monitoring or observability",
        missing_monitoring, "Add Sentry or Prometheus", fixable),
    rule!("single-region-high-uptime", "R2", Error, Reliability, "Single region with high uptime target",
        single_region_high_uptime),
    rule!("no-cicd", "R3", Info, Reliability, "No CI/CD pipeline",
        no_cicd, "Add GitHub Actions for automated deployment", fixable),
    rule!("no-backup", "R4", Warning, Reliability, "No backup strategy", no_backup),
    rule!("no-error-handling", "R5", Warning, Reliability, "No error handling strategy",
        no_error_handling),
    // AI
    rule!("ai-from-frontend", "A1", Error, Ai, "AI called directly from frontend",
        ai_from_frontend, "Route AI calls through backend API", fixable),
    rule!("vector-search-without-embeddings", "A2", Warning, Ai, "Vector search without embeddings",
        vector_search_without_embeddings),
    rule!("no-fallback-model", "A3", Info, Ai, "No fallback AI model", no_fallback_model),
    rule!("expensive-model-hot-path", "A4", Warning, Ai, "Expensive model on hot path",
        expensive_model_hot_path),
    // Structural
    rule!("disconnected-node", "ST1", Warning, Structural, "Disconnected component",
        disconnected_node, "Auto-connect to nearest logical layer", fixable),
    rule!("duplicate-role", "ST2", Info, Structural, "Duplicate component role", duplicate_role),
    rule!("frontend-direct-db", "ST3", Error, Structural, "Frontend directly accessing database",
        frontend_direct_db, "Route through a backend API layer", fixable),
    rule!("circular-dependency", "ST4", Warning, Structural, "Circular dependency",
        circular_dependency),
    rule!("no-backend", "ST5", Info, Structural, "No backend layer",
        no_backend, "Add a backend (FastAPI, Express) between frontend and services", fixable),
    // Cost
    rule!("over-budget", "C1", Warning, Cost, "Architecture cost exceeds budget", over_budget),
    rule!("redundant-paid-services", "C2", Info, Cost, "Potentially redundant paid services",
        redundant_paid_services),
    rule!("over-provisioned", "C3", Warning, Cost, "Over-provisioned for current scale",
        over_provisioned),
    // DX
    rule!("multiple-languages", "DX1", Info, Dx, "Multiple programming languages",
        multiple_languages),
    rule!("solo-dev-complex-stack", "DX2", Warning, Dx, "Complex stack for solo dev",
        solo_dev_complex_stack),
    rule!("mixed-python-typescript", "DX3", Info, Dx, "Consider type-safe stack",
        mixed_python_typescript),
];

/// Find a rule by id or short code, in any casing (`missing-auth`, `MissingAuth`, `s1`)
pub fn find_rule(name: &str) -> Option<&'static LintRule> {
    let wanted = normalize_rule_name(name);
    LINT_RULES
        .iter()
        .find(|r| r.id == wanted || r.code.eq_ignore_ascii_case(&wanted))
}

fn none() -> RuleResult<Vec<LintTarget>> {
    Ok(Vec::new())
}

fn one(target: LintTarget) -> RuleResult<Vec<LintTarget>> {
    Ok(vec![target])
}

// ── Security ──

fn missing_auth(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    let user_facing = g.has(Category::Frontend) || g.has(Category::Backend);
    if user_facing && g.has(Category::Database) && !g.has(Category::Auth) {
        return one(LintTarget::new(
            g.ids_in(Category::Database),
            "Add authentication to protect user data",
        ));
    }
    none()
}

fn no_rate_limiting(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    let backends: Vec<_> = g.by_category(Category::Backend).collect();
    if g.has(Category::Frontend)
        && !backends.is_empty()
        && !backends.iter().any(|b| b.config_flag("rateLimiting"))
    {
        return one(LintTarget::new(
            backends.iter().map(|b| b.id.clone()).collect(),
            "API endpoints exposed without rate limiting",
        ));
    }
    none()
}

fn unencrypted_sensitive_data(g: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.data_sensitivity != DataSensitivity::High {
        return none();
    }
    Ok(g
        .by_category(Category::Database)
        .filter(|d| !d.config_flag("encryptionAtRest"))
        .map(|d| {
            LintTarget::new(vec![d.id.clone()], "Enable encryption at rest for sensitive data")
        })
        .collect())
}

fn no_tls(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.len() < MIN_INFRA_NODES || g.has_type(MANAGED_TLS_HOSTS) {
        return none();
    }
    one(LintTarget::global("Ensure TLS/HTTPS for all public endpoints"))
}

// ── Performance ──

fn missing_cache(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.has(Category::Database) && !g.has(Category::Cache) && g.len() > 3 {
        return one(LintTarget::new(
            g.ids_in(Category::Database),
            "No caching layer detected -- reads may bottleneck",
        ));
    }
    none()
}

fn llm_sync_path(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    let mut targets = Vec::new();
    for ai in g.by_category(Category::Ml) {
        let sync_edges: Vec<String> = g
            .incoming(&ai.id)
            .filter(|e| e.is_sync())
            .map(|e| e.id.clone())
            .collect();
        if !sync_edges.is_empty() {
            targets.push(
                LintTarget::new(vec![ai.id.clone()], "LLM calls are slow (1-30s). Use async path.")
                    .with_edges(sync_edges),
            );
        }
    }
    Ok(targets)
}

fn no_cdn(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.has(Category::Frontend) && !g.has_type(CDN_TYPES) && !g.has_type(&["vercel"]) {
        return one(LintTarget::global("Consider a CDN for static assets"));
    }
    none()
}

fn no_connection_pooling(g: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.traffic_expectation == TrafficLevel::Low {
        return none();
    }
    Ok(g
        .nodes()
        .iter()
        .filter(|n| n.is_type(POOLED_DATABASES) && !n.config_flag("connectionPooling"))
        .map(|d| {
            LintTarget::new(
                vec![d.id.clone()],
                "Connection pooling recommended for medium+ traffic",
            )
        })
        .collect())
}

fn long_task_without_queue(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    let has_upload = g
        .edges()
        .iter()
        .any(|e| e.relationship.as_deref() == Some(UPLOAD_RELATIONSHIP));
    if (g.has(Category::Ml) || has_upload) && !g.has(Category::Queue) {
        return one(LintTarget::global("Long-running tasks need async processing"));
    }
    none()
}

// ── Reliability ──

fn missing_monitoring(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.len() >= MIN_INFRA_NODES && !g.has(Category::Monitoring) {
        return one(LintTarget::global("Add monitoring to detect issues"));
    }
    none()
}

fn single_region_high_uptime(_: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.region_count <= 1 && c.uptime_target >= 99.9 {
        return one(LintTarget::global("99.9%+ uptime requires multi-region deployment"));
    }
    none()
}

fn no_cicd(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.len() >= MIN_INFRA_NODES && !g.has(Category::Cicd) {
        return one(LintTarget::global("CI/CD ensures safe deployments"));
    }
    none()
}

fn no_backup(g: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.is_hackathon() {
        return none();
    }
    match g.by_category(Category::Database).next() {
        Some(db) if !db.config_flag("backupEnabled") => one(LintTarget::new(
            vec![db.id.clone()],
            "Primary database should have automated backups",
        )),
        _ => none(),
    }
}

fn no_error_handling(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.has(Category::Backend)
        && !g.has(Category::Monitoring)
        && !g.has(Category::Queue)
        && g.len() > 4
    {
        return one(LintTarget::global("No visible error handling or retry strategy"));
    }
    none()
}

// ── AI ──

fn ai_from_frontend(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    Ok(g
        .by_category(Category::Ml)
        .filter(|ai| {
            g.incoming(&ai.id)
                .any(|e| g.category_of(&e.source) == Some(Category::Frontend))
        })
        .map(|ai| {
            LintTarget::new(
                vec![ai.id.clone()],
                "AI provider should be called from backend, not frontend",
            )
        })
        .collect())
}

fn vector_search_without_embeddings(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    let has_search = g
        .nodes()
        .iter()
        .any(|n| n.is(Category::Search) || n.config_flag("vectorSearch"));
    if has_search && !g.has(Category::Ml) {
        return one(LintTarget::new(
            g.ids_in(Category::Search),
            "Vector search needs an embeddings provider",
        ));
    }
    none()
}

fn no_fallback_model(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    let models = g.ids_in(Category::Ml);
    if models.len() == 1 {
        return one(LintTarget::new(models, "Consider a fallback model for reliability"));
    }
    none()
}

fn expensive_model_hot_path(g: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.traffic_expectation == TrafficLevel::Low {
        return none();
    }
    let mut targets = Vec::new();
    for node in g.by_category(Category::Ml) {
        let model = match node.config_value("model") {
            None | Some(Value::Null) => continue,
            Some(Value::String(model)) => model,
            Some(_) => {
                return Err(RuleError::InvalidConfig {
                    node: node.id.clone(),
                    field: "model",
                    expected: "a model name string",
                })
            }
        };
        if EXPENSIVE_MODELS.contains(&model.as_str()) {
            targets.push(LintTarget::new(
                vec![node.id.clone()],
                format!("{} is expensive at scale", model),
            ));
        }
    }
    Ok(targets)
}

// ── Structural ──

fn disconnected_node(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.len() <= 1 {
        return none();
    }
    Ok(g
        .nodes()
        .iter()
        .filter(|n| !g.is_connected(&n.id))
        .map(|n| {
            let name = if n.component_type.is_empty() {
                "Component"
            } else {
                n.component_type.as_str()
            };
            LintTarget::new(
                vec![n.id.clone()],
                format!("{} is not connected to anything", name),
            )
        })
        .collect())
}

fn duplicate_role(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    let mut seen: Vec<Category> = Vec::new();
    let mut duplicated: Vec<Category> = Vec::new();
    for category in g.nodes().iter().filter_map(|n| n.category) {
        if seen.contains(&category) {
            if !duplicated.contains(&category) {
                duplicated.push(category);
            }
        } else {
            seen.push(category);
        }
    }
    Ok(duplicated
        .into_iter()
        .map(|cat| {
            LintTarget::new(
                g.ids_in(cat),
                format!("Multiple {} services -- intentional?", cat),
            )
        })
        .collect())
}

fn frontend_direct_db(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    Ok(g
        .edges()
        .iter()
        .filter(|e| {
            g.category_of(&e.source) == Some(Category::Frontend)
                && g.category_of(&e.target) == Some(Category::Database)
        })
        .map(|e| {
            LintTarget::new(
                vec![e.source.clone(), e.target.clone()],
                "Frontend should not directly access database",
            )
            .with_edges(vec![e.id.clone()])
        })
        .collect())
}

fn circular_dependency(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    Ok(find_cycles(g)
        .into_iter()
        .map(|members| LintTarget::new(members, "Circular dependency between services"))
        .collect())
}

fn no_backend(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.has(Category::Frontend) && !g.has(Category::Backend) && g.len() > 1 {
        return one(LintTarget::global(
            "No backend layer -- consider adding one for security and business logic",
        ));
    }
    none()
}

// ── Cost ──

fn over_budget(g: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.budget_level != BudgetLevel::Low {
        return none();
    }
    let total: f64 = g
        .nodes()
        .iter()
        .map(|n| monthly_cost_of(&n.component_type))
        .sum();
    if total > DEFAULT_LOW_BUDGET_CEILING {
        return one(LintTarget::global(format!(
            "~${}/mo exceeds low-budget target",
            total
        )));
    }
    none()
}

fn redundant_paid_services(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if g.has_type(BUNDLED_AUTH_TYPES) && g.has_type(SEPARATE_AUTH_TYPES) {
        let ids = g
            .nodes()
            .iter()
            .filter(|n| n.is_type(BUNDLED_AUTH_TYPES) || n.is_type(SEPARATE_AUTH_TYPES))
            .map(|n| n.id.clone())
            .collect();
        return one(LintTarget::new(
            ids,
            "Supabase includes auth -- separate auth service may be redundant",
        ));
    }
    none()
}

fn over_provisioned(g: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.traffic_expectation != TrafficLevel::Low {
        return none();
    }
    Ok(g
        .nodes()
        .iter()
        .filter(|n| n.is_type(ENTERPRISE_TYPES))
        .map(|n| {
            LintTarget::new(
                vec![n.id.clone()],
                format!(
                    "{} is enterprise-grade -- overkill for low traffic",
                    n.component_type
                ),
            )
        })
        .collect())
}

// ── DX ──

fn multiple_languages(g: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.team_size >= SMALL_TEAM_SIZE {
        return none();
    }
    let langs = g.languages();
    if langs.len() > 2 {
        let names: Vec<String> = langs.iter().map(ToString::to_string).collect();
        return one(LintTarget::global(format!(
            "Uses {} -- consider consolidating for small team",
            names.join(", ")
        )));
    }
    none()
}

fn solo_dev_complex_stack(g: &Graph, c: &Constraints) -> RuleResult<Vec<LintTarget>> {
    if c.team_size <= 1 && g.len() > SOLO_MAX_NODES {
        return one(LintTarget::global("7+ services is challenging for one person"));
    }
    none()
}

fn mixed_python_typescript(g: &Graph, _: &Constraints) -> RuleResult<Vec<LintTarget>> {
    let langs = g.languages();
    if langs.contains(&Language::Python) && langs.contains(&Language::TypeScript) {
        return one(LintTarget::global(
            "Mixed Python/TS stack -- consider using TypeScript everywhere for type safety",
        ));
    }
    none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::normalize;
    use crate::models::{RawEdge, RawNode, SyncMode};
    use serde_json::json;

    fn targets(id: &str, g: &Graph, c: &Constraints) -> Vec<LintTarget> {
        (find_rule(id).unwrap().predicate)(g, c).unwrap()
    }

    #[test]
    fn test_ids_and_codes_unique() {
        let mut ids: Vec<_> = LINT_RULES.iter().map(|r| r.id).collect();
        let mut codes: Vec<_> = LINT_RULES.iter().map(|r| r.code).collect();
        ids.sort_unstable();
        ids.dedup();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(ids.len(), LINT_RULES.len());
        assert_eq!(codes.len(), LINT_RULES.len());
    }

    #[test]
    fn test_find_rule_by_id_or_code() {
        assert_eq!(find_rule("missing-auth").unwrap().code, "S1");
        assert_eq!(find_rule("S1").unwrap().id, "missing-auth");
        assert_eq!(find_rule("st3").unwrap().id, "frontend-direct-db");
        assert_eq!(find_rule("MissingCache").unwrap().id, "missing-cache");
        assert!(find_rule("nope").is_none());
    }

    #[test]
    fn test_missing_auth_targets_databases() {
        let g = normalize(
            &[
                RawNode::component("be", "fastapi", Category::Backend),
                RawNode::component("db", "postgresql", Category::Database),
                RawNode::component("db2", "mongodb", Category::Database),
            ],
            &[],
        );
        let t = targets("missing-auth", &g, &Constraints::default());
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].node_ids, vec!["db", "db2"]);

        let g = normalize(
            &[
                RawNode::component("be", "fastapi", Category::Backend),
                RawNode::component("db", "postgresql", Category::Database),
                RawNode::component("auth", "clerk", Category::Auth),
            ],
            &[],
        );
        assert!(targets("missing-auth", &g, &Constraints::default()).is_empty());
    }

    #[test]
    fn test_llm_sync_path_collects_edges() {
        let g = normalize(
            &[
                RawNode::component("be", "fastapi", Category::Backend),
                RawNode::component("w", "celery", Category::Backend),
                RawNode::component("ai", "openai", Category::Ml),
            ],
            &[
                RawEdge::new("e1", "be", "ai"),
                RawEdge::new("e2", "w", "ai").with_sync_async(SyncMode::Async),
            ],
        );
        let t = targets("llm-sync-path", &g, &Constraints::default());
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].edge_ids, vec!["e1"]);
    }

    #[test]
    fn test_expensive_model_requires_string() {
        let nodes = vec![RawNode::component("ai", "openai", Category::Ml)
            .with_config("model", json!("gpt-4"))];
        let g = normalize(&nodes, &[]);
        let t = targets("expensive-model-hot-path", &g, &Constraints::default());
        assert_eq!(t[0].message, "gpt-4 is expensive at scale");

        let nodes = vec![RawNode::component("ai", "openai", Category::Ml)
            .with_config("model", json!(4))];
        let g = normalize(&nodes, &[]);
        let rule = find_rule("expensive-model-hot-path").unwrap();
        assert!(matches!(
            (rule.predicate)(&g, &Constraints::default()),
            Err(RuleError::InvalidConfig { field: "model", .. })
        ));
    }

    #[test]
    fn test_disconnected_and_direct_db() {
        let g = normalize(
            &[
                RawNode::component("fe", "nextjs", Category::Frontend),
                RawNode::component("db", "postgresql", Category::Database),
                RawNode::new("lonely"),
            ],
            &[RawEdge::new("e1", "fe", "db")],
        );
        let c = Constraints::default();
        let t = targets("disconnected-node", &g, &c);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].message, "Component is not connected to anything");

        let t = targets("frontend-direct-db", &g, &c);
        assert_eq!(t[0].node_ids, vec!["fe", "db"]);
        assert_eq!(t[0].edge_ids, vec!["e1"]);
    }

    #[test]
    fn test_duplicate_role_per_category() {
        let g = normalize(
            &[
                RawNode::component("a", "fastapi", Category::Backend),
                RawNode::component("d1", "postgresql", Category::Database),
                RawNode::component("b", "express", Category::Backend),
                RawNode::component("d2", "mongodb", Category::Database),
            ],
            &[],
        );
        let t = targets("duplicate-role", &g, &Constraints::default());
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].message, "Multiple backend services -- intentional?");
        assert_eq!(t[0].node_ids, vec!["a", "b"]);
    }

    #[test]
    fn test_languages_rules() {
        let g = normalize(
            &[
                RawNode::component("fe", "nextjs", Category::Frontend),
                RawNode::component("a", "fastapi", Category::Backend),
                RawNode::component("b", "go", Category::Backend),
            ],
            &[],
        );
        let c = Constraints::default();
        let t = targets("multiple-languages", &g, &c);
        assert_eq!(
            t[0].message,
            "Uses TypeScript, Python, Go -- consider consolidating for small team"
        );
        assert_eq!(targets("mixed-python-typescript", &g, &c).len(), 1);

        let big_team = Constraints {
            team_size: 5,
            ..Default::default()
        };
        assert!(targets("multiple-languages", &g, &big_team).is_empty());
    }

    #[test]
    fn test_over_budget_message() {
        let g = normalize(
            &[
                RawNode::component("be", "fastapi", Category::Backend),
                RawNode::component("ai", "anthropic", Category::Ml),
            ],
            &[],
        );
        let low = Constraints {
            budget_level: BudgetLevel::Low,
            ..Default::default()
        };
        let t = targets("over-budget", &g, &low);
        assert_eq!(t[0].message, "~$75/mo exceeds low-budget target");
        assert!(targets("over-budget", &g, &Constraints::default()).is_empty());
    }
}
