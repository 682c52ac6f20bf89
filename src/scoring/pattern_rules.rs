//! Pattern rules
//!
//! Structural heuristics that nudge the raw dimension aggregates. Each rule
//! is a plain value: a predicate over the normalized graph and constraints,
//! a list of additive adjustments, and the sentence appended to every
//! adjusted dimension's rule hits when it fires. Rules run in the order they
//! appear in [`PATTERN_RULES`].

use super::dimensions::Dimension;
use crate::error::RuleResult;
use crate::graph::Graph;
use crate::models::{Category, Constraints};

/// Penalty, in dollars per month, for model calls on a synchronous path
pub const SYNC_LLM_COST_PENALTY: f64 = 20.0;

/// Backend types treated as fully managed/serverless
pub const SERVERLESS_TYPES: &[&str] = &["vercel", "cloudrun", "netlify", "railway", "render"];

/// Component types that can serve vector search
pub const VECTOR_CAPABLE_TYPES: &[&str] = &["mongodb", "supabase", "postgresql"];

pub type PatternCheck = fn(&Graph, &Constraints) -> RuleResult<bool>;

pub struct PatternRule {
    pub id: &'static str,
    pub check: PatternCheck,
    pub adjustments: &'static [(Dimension, f64)],
    pub explanation: &'static str,
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("id", &self.id)
            .field("adjustments", &self.adjustments)
            .finish()
    }
}

use Dimension::*;

pub static PATTERN_RULES: &[PatternRule] = &[
    // Build speed
    PatternRule {
        id: "too-many-services",
        check: too_many_services,
        adjustments: &[(BuildSpeed, -2.0), (Complexity, 2.0)],
        explanation: "Large number of services increases build time and complexity",
    },
    PatternRule {
        id: "minimal-stack",
        check: minimal_stack,
        adjustments: &[(BuildSpeed, 2.0), (Complexity, -1.0)],
        explanation: "Minimal stack enables rapid development",
    },
    PatternRule {
        id: "overkill-for-mvp",
        check: overkill_for_mvp,
        adjustments: &[(BuildSpeed, -3.0)],
        explanation: "Too many services for a hackathon timeline",
    },
    // Scalability
    PatternRule {
        id: "no-cache-read-heavy",
        check: no_cache_read_heavy,
        adjustments: &[(Scalability, -3.0)],
        explanation: "Architecture without caching will bottleneck at scale",
    },
    PatternRule {
        id: "has-queue",
        check: has_queue,
        adjustments: &[(Scalability, 2.0), (Reliability, 1.0)],
        explanation: "Message queue enables async processing and fault tolerance",
    },
    PatternRule {
        id: "single-db-multi-backend",
        check: single_db_multi_backend,
        adjustments: &[(Scalability, -2.0)],
        explanation: "Multiple backends sharing a single database creates a bottleneck",
    },
    // Reliability
    PatternRule {
        id: "no-monitoring",
        check: no_monitoring,
        adjustments: &[(Reliability, -2.0)],
        explanation: "No monitoring means you won't know when things break",
    },
    PatternRule {
        id: "single-region-high-uptime",
        check: single_region_high_uptime,
        adjustments: &[(Reliability, -3.0)],
        explanation: "99.9%+ uptime is extremely difficult with single-region deployment",
    },
    // Cost
    PatternRule {
        id: "llm-in-sync-path",
        check: llm_in_sync_path,
        adjustments: &[(Cost, SYNC_LLM_COST_PENALTY), (Scalability, -1.0)],
        explanation: "Synchronous LLM calls on request path increases cost and latency",
    },
    // Ops burden
    PatternRule {
        id: "all-serverless",
        check: all_serverless,
        adjustments: &[(OpsBurden, -3.0)],
        explanation: "Fully serverless/managed stack = minimal ops burden",
    },
    // AI readiness
    PatternRule {
        id: "has-vector-capable",
        check: has_vector_capable,
        adjustments: &[(AiReadiness, 1.0)],
        explanation: "Database supports vector search for RAG patterns",
    },
    PatternRule {
        id: "no-async-for-ai",
        check: no_async_for_ai,
        adjustments: &[(AiReadiness, -2.0)],
        explanation: "AI features without async processing risk timeouts",
    },
    // Lock-in
    PatternRule {
        id: "multi-cloud",
        check: multi_cloud,
        adjustments: &[(LockIn, -2.0)],
        explanation: "Multi-provider architecture reduces vendor lock-in",
    },
    PatternRule {
        id: "single-vendor",
        check: single_vendor,
        adjustments: &[(LockIn, 3.0)],
        explanation: "Single-vendor stack maximizes lock-in risk",
    },
];

/// Look up a rule by id
pub fn pattern_rule(id: &str) -> Option<&'static PatternRule> {
    PATTERN_RULES.iter().find(|r| r.id == id)
}

fn too_many_services(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g.len() > 8)
}

fn minimal_stack(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(!g.is_empty() && g.len() <= 4)
}

fn overkill_for_mvp(g: &Graph, c: &Constraints) -> RuleResult<bool> {
    Ok(c.is_hackathon() && g.len() > 6)
}

fn no_cache_read_heavy(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g.has(Category::Database) && !g.has(Category::Cache) && g.len() > 3)
}

fn has_queue(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g.has(Category::Queue))
}

fn single_db_multi_backend(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g.count(Category::Database) == 1 && g.count(Category::Backend) > 1)
}

fn no_monitoring(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g.len() > 2 && !g.has(Category::Monitoring))
}

fn single_region_high_uptime(_: &Graph, c: &Constraints) -> RuleResult<bool> {
    Ok(c.region_count <= 1 && c.uptime_target >= 99.9)
}

fn llm_in_sync_path(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g
        .by_category(Category::Ml)
        .any(|ai| g.incoming(&ai.id).any(|e| e.is_sync())))
}

fn all_serverless(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    let mut backends = g.by_category(Category::Backend).peekable();
    if backends.peek().is_none() {
        return Ok(false);
    }
    Ok(backends.all(|b| b.is_type(SERVERLESS_TYPES)))
}

fn has_vector_capable(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g
        .nodes()
        .iter()
        .any(|n| n.is_type(VECTOR_CAPABLE_TYPES) || n.is(Category::Search)))
}

fn no_async_for_ai(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g.has(Category::Ml) && !g.has(Category::Queue))
}

fn multi_cloud(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g.providers().len() >= 3)
}

fn single_vendor(g: &Graph, _: &Constraints) -> RuleResult<bool> {
    Ok(g.providers().len() == 1 && g.len() > 2)
}
