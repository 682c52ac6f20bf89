//! Per-rule remediation plans
//!
//! A handler inspects the current graph and either returns `None`, when the
//! condition behind the issue no longer holds, or a [`FixPlan`] naming the
//! component types to insert and the edges to add or remove. Handlers never
//! allocate ids; new nodes are referenced through [`NodeRef::New`].

use crate::graph::Graph;
use crate::models::{Category, LintIssue};
use std::fmt;

/// Prefix of the symbolic id a plan uses for a node it inserts
pub const PLACEHOLDER_PREFIX: &str = "__NEW__";

/// Edge endpoint in a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRef {
    /// A node already in the graph
    Existing(String),
    /// The node the plan inserts for this component type
    New(&'static str),
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Existing(id) => f.write_str(id),
            NodeRef::New(component_type) => write!(f, "{}{}", PLACEHOLDER_PREFIX, component_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRequest {
    pub source: NodeRef,
    pub target: NodeRef,
}

impl EdgeRequest {
    fn new(source: NodeRef, target: NodeRef) -> Self {
        Self { source, target }
    }

    fn from_existing(source: &str, target: NodeRef) -> Self {
        Self::new(NodeRef::Existing(source.to_string()), target)
    }

    fn to_existing(source: NodeRef, target: &str) -> Self {
        Self::new(source, NodeRef::Existing(target.to_string()))
    }
}

/// What a handler wants changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixPlan {
    pub add_nodes: Vec<&'static str>,
    pub add_edges: Vec<EdgeRequest>,
    pub remove_edge_ids: Vec<String>,
    pub message: String,
}

const CDN_TYPES: &[&str] = &["cloudflare-cdn", "cloudfront"];

const AUTH_PROVIDER: &str = "clerk";
const CACHE_PROVIDER: &str = "redis-cache";
const CDN_PROVIDER: &str = "cloudflare-cdn";
const QUEUE_PROVIDER: &str = "sqs";
const MONITORING_PROVIDER: &str = "sentry";
const CICD_PROVIDER: &str = "github-actions";
const BACKEND_PROVIDER: &str = "fastapi";

/// Rules with a remediation handler
pub const FIXABLE_RULES: &[&str] = &[
    "missing-auth",
    "missing-cache",
    "no-cdn",
    "long-task-without-queue",
    "missing-monitoring",
    "no-cicd",
    "disconnected-node",
    "frontend-direct-db",
    "no-backend",
    "ai-from-frontend",
];

pub fn has_handler(rule_id: &str) -> bool {
    FIXABLE_RULES.contains(&rule_id)
}

/// Plan the fix for `issue`, whose rule id has already been resolved to `rule_id`
pub fn plan_fix(rule_id: &str, issue: &LintIssue, graph: &Graph) -> Option<FixPlan> {
    match rule_id {
        "missing-auth" => fix_missing_auth(graph),
        "missing-cache" => fix_missing_cache(graph),
        "no-cdn" => fix_no_cdn(graph),
        "long-task-without-queue" => fix_long_task_without_queue(graph),
        "missing-monitoring" => fix_missing_monitoring(graph),
        "no-cicd" => fix_no_cicd(graph),
        "disconnected-node" => fix_disconnected_node(issue, graph),
        "frontend-direct-db" => fix_frontend_direct_db(issue, graph),
        "no-backend" => fix_no_backend(graph),
        "ai-from-frontend" => fix_ai_from_frontend(issue, graph),
        _ => None,
    }
}

fn ids(graph: &Graph, category: Category) -> Vec<String> {
    graph.ids_in(category)
}

fn fix_missing_auth(graph: &Graph) -> Option<FixPlan> {
    if graph.has(Category::Auth) {
        return None;
    }
    let backends = ids(graph, Category::Backend);
    let sources = if backends.is_empty() {
        ids(graph, Category::Frontend)
    } else {
        backends
    };
    Some(FixPlan {
        add_nodes: vec![AUTH_PROVIDER],
        add_edges: sources
            .iter()
            .map(|s| EdgeRequest::from_existing(s, NodeRef::New(AUTH_PROVIDER)))
            .collect(),
        message: "Added Clerk for authentication and connected to your backend".into(),
        ..Default::default()
    })
}

fn fix_missing_cache(graph: &Graph) -> Option<FixPlan> {
    if graph.has(Category::Cache) {
        return None;
    }
    let backends = ids(graph, Category::Backend);
    let message: String = if backends.is_empty() {
        "Added Redis cache layer -- add a backend to connect it".into()
    } else {
        "Added Redis cache layer and connected to your backend".into()
    };
    Some(FixPlan {
        add_nodes: vec![CACHE_PROVIDER],
        add_edges: backends
            .iter()
            .map(|be| EdgeRequest::from_existing(be, NodeRef::New(CACHE_PROVIDER)))
            .collect(),
        message,
        ..Default::default()
    })
}

fn fix_no_cdn(graph: &Graph) -> Option<FixPlan> {
    if graph.has_type(CDN_TYPES) {
        return None;
    }
    Some(FixPlan {
        add_nodes: vec![CDN_PROVIDER],
        add_edges: ids(graph, Category::Frontend)
            .iter()
            .map(|fe| EdgeRequest::to_existing(NodeRef::New(CDN_PROVIDER), fe))
            .collect(),
        message: "Added Cloudflare CDN for static assets, connected to frontend".into(),
        ..Default::default()
    })
}

fn fix_long_task_without_queue(graph: &Graph) -> Option<FixPlan> {
    if graph.has(Category::Queue) {
        return None;
    }
    let mut edges: Vec<EdgeRequest> = ids(graph, Category::Backend)
        .iter()
        .map(|be| EdgeRequest::from_existing(be, NodeRef::New(QUEUE_PROVIDER)))
        .collect();
    edges.extend(
        ids(graph, Category::Ml)
            .iter()
            .map(|ml| EdgeRequest::to_existing(NodeRef::New(QUEUE_PROVIDER), ml)),
    );
    Some(FixPlan {
        add_nodes: vec![QUEUE_PROVIDER],
        add_edges: edges,
        message: "Added SQS queue for async processing, connected between backend and ML".into(),
        ..Default::default()
    })
}

fn fix_missing_monitoring(graph: &Graph) -> Option<FixPlan> {
    if graph.has(Category::Monitoring) {
        return None;
    }
    let mut sources = ids(graph, Category::Backend);
    sources.extend(ids(graph, Category::Frontend));
    Some(FixPlan {
        add_nodes: vec![MONITORING_PROVIDER],
        add_edges: sources
            .iter()
            .map(|s| EdgeRequest::from_existing(s, NodeRef::New(MONITORING_PROVIDER)))
            .collect(),
        message: "Added Sentry for error monitoring, connected to frontend and backend".into(),
        ..Default::default()
    })
}

fn fix_no_cicd(graph: &Graph) -> Option<FixPlan> {
    if graph.has(Category::Cicd) {
        return None;
    }
    Some(FixPlan {
        add_nodes: vec![CICD_PROVIDER],
        add_edges: ids(graph, Category::Hosting)
            .iter()
            .map(|h| EdgeRequest::to_existing(NodeRef::New(CICD_PROVIDER), h))
            .collect(),
        message: "Added GitHub Actions CI/CD, connected to hosting".into(),
        ..Default::default()
    })
}

/// Neighbour categories an isolated node should attach to, most preferred first
fn connection_targets(category: Category) -> &'static [Category] {
    use Category::*;
    match category {
        Frontend => &[Backend, Auth, Hosting],
        Backend => &[Database, Cache, Ml, Queue],
        Database | Cache | Queue | Storage | Search => &[Backend],
        Auth => &[Backend, Frontend],
        Ml => &[Backend, Queue],
        Monitoring => &[Backend, Frontend],
        Hosting => &[Frontend, Backend],
        Cicd => &[Hosting],
    }
}

/// Categories whose isolated nodes call out rather than get called
fn initiates_edges(category: Category) -> bool {
    matches!(
        category,
        Category::Frontend | Category::Backend | Category::Cicd | Category::Monitoring
    )
}

fn fix_disconnected_node(issue: &LintIssue, graph: &Graph) -> Option<FixPlan> {
    let node = graph.node(issue.targets.node_ids.first()?)?;
    if graph.is_connected(&node.id) {
        return None;
    }
    let category = node.category?;

    let neighbour = connection_targets(category).iter().find_map(|&cat| {
        graph
            .by_category(cat)
            .find(|candidate| candidate.id != node.id)
    })?;

    let edge = if initiates_edges(category) {
        EdgeRequest::from_existing(&node.id, NodeRef::Existing(neighbour.id.clone()))
    } else {
        EdgeRequest::from_existing(&neighbour.id, NodeRef::Existing(node.id.clone()))
    };
    let name = node.label.as_deref().unwrap_or("component");

    Some(FixPlan {
        add_edges: vec![edge],
        message: format!("Connected {} to the architecture", name),
        ..Default::default()
    })
}

fn fix_frontend_direct_db(issue: &LintIssue, graph: &Graph) -> Option<FixPlan> {
    let offending: Vec<String> = graph
        .edges()
        .iter()
        .filter(|e| issue.targets.edge_ids.contains(&e.id))
        .filter(|e| {
            graph.category_of(&e.source) == Some(Category::Frontend)
                && graph.category_of(&e.target) == Some(Category::Database)
        })
        .map(|e| e.id.clone())
        .collect();
    if offending.is_empty() {
        return None;
    }

    if graph.has(Category::Backend) {
        return Some(FixPlan {
            remove_edge_ids: offending,
            message: "Removed direct frontend→database edge -- route through your backend instead"
                .into(),
            ..Default::default()
        });
    }

    let backend = NodeRef::New(BACKEND_PROVIDER);
    let mut edges: Vec<EdgeRequest> = ids(graph, Category::Frontend)
        .iter()
        .map(|fe| EdgeRequest::from_existing(fe, backend.clone()))
        .collect();
    edges.extend(
        ids(graph, Category::Database)
            .iter()
            .map(|db| EdgeRequest::to_existing(backend.clone(), db)),
    );
    Some(FixPlan {
        add_nodes: vec![BACKEND_PROVIDER],
        add_edges: edges,
        remove_edge_ids: offending,
        message: "Added FastAPI backend between frontend and database, removed direct connection"
            .into(),
    })
}

fn fix_no_backend(graph: &Graph) -> Option<FixPlan> {
    if graph.has(Category::Backend) {
        return None;
    }
    let backend = NodeRef::New(BACKEND_PROVIDER);
    let mut edges: Vec<EdgeRequest> = ids(graph, Category::Frontend)
        .iter()
        .map(|fe| EdgeRequest::from_existing(fe, backend.clone()))
        .collect();
    for category in [
        Category::Database,
        Category::Auth,
        Category::Cache,
        Category::Ml,
        Category::Storage,
    ] {
        edges.extend(
            ids(graph, category)
                .iter()
                .map(|t| EdgeRequest::to_existing(backend.clone(), t)),
        );
    }
    Some(FixPlan {
        add_nodes: vec![BACKEND_PROVIDER],
        add_edges: edges,
        message: "Added FastAPI backend, connected to frontend and all downstream services".into(),
        ..Default::default()
    })
}

fn fix_ai_from_frontend(issue: &LintIssue, graph: &Graph) -> Option<FixPlan> {
    let ai = graph.node(issue.targets.node_ids.first()?)?;
    let direct: Vec<String> = graph
        .incoming(&ai.id)
        .filter(|e| graph.category_of(&e.source) == Some(Category::Frontend))
        .map(|e| e.id.clone())
        .collect();
    if direct.is_empty() {
        return None;
    }

    if let Some(backend) = graph.by_category(Category::Backend).next() {
        return Some(FixPlan {
            add_edges: vec![EdgeRequest::from_existing(
                &backend.id,
                NodeRef::Existing(ai.id.clone()),
            )],
            remove_edge_ids: direct,
            message: "Routed AI calls through backend instead of frontend".into(),
            ..Default::default()
        });
    }

    let backend = NodeRef::New(BACKEND_PROVIDER);
    let mut edges: Vec<EdgeRequest> = ids(graph, Category::Frontend)
        .iter()
        .map(|fe| EdgeRequest::from_existing(fe, backend.clone()))
        .collect();
    edges.push(EdgeRequest::to_existing(backend, &ai.id));
    Some(FixPlan {
        add_nodes: vec![BACKEND_PROVIDER],
        add_edges: edges,
        remove_edge_ids: direct,
        message: "Added FastAPI backend to proxy AI calls, removed direct frontend→AI edge".into(),
    })
}
