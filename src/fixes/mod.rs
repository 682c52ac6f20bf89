//! Auto-fix resolver
//!
//! Turns a fixable [`LintIssue`] into a [`GraphDelta`] in two passes:
//!
//! 1. **Materialize** every component the handler's plan asks for: look it
//!    up in the [`Catalog`], give it the id `<type>-<n>` (smallest unused
//!    `n >= 1`) and a position in its category row.
//! 2. **Resolve edges**: replace `__NEW__<type>` placeholders with the ids
//!    from pass 1, drop self-loops and pairs that already exist once the
//!    requested removals are applied, and name each edge
//!    `e-<source>-<target>`.
//!
//! Handlers check their own precondition, so re-running a fix on the graph
//! it produced yields `None`.

mod delta;
mod handlers;
mod layout;

pub use delta::GraphDelta;
pub use handlers::{has_handler, EdgeRequest, FixPlan, NodeRef, FIXABLE_RULES, PLACEHOLDER_PREFIX};
pub use layout::{layer_row, LayoutSlots, LAYOUT_ORIGIN_X, LAYOUT_SLOT_WIDTH};

use crate::catalog::{BuiltinCatalog, Catalog, CatalogEntry};
use crate::graph::{normalize, Graph};
use crate::lint::find_rule;
use crate::models::{LintIssue, NodeData, Position, RawEdge, RawNode};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

/// `type` given to every node and edge the resolver creates
pub const INSERTED_ELEMENT_TYPE: &str = "custom";

/// Whether a remediation handler exists for the issue's rule
pub fn can_auto_fix(issue: &LintIssue) -> bool {
    find_rule(&issue.rule_id)
        .map(|rule| has_handler(rule.id))
        .unwrap_or(false)
}

/// Compute the fix for `issue` using the built-in component catalog
pub fn apply_auto_fix(issue: &LintIssue, nodes: &[RawNode], edges: &[RawEdge]) -> Option<GraphDelta> {
    apply_auto_fix_with(&BuiltinCatalog, issue, nodes, edges)
}

/// Compute the fix for `issue`, taking display metadata from `catalog`.
///
/// Returns `None` when no handler exists, the precondition no longer holds,
/// or the catalog does not know a component the fix needs.
pub fn apply_auto_fix_with(
    catalog: &dyn Catalog,
    issue: &LintIssue,
    nodes: &[RawNode],
    edges: &[RawEdge],
) -> Option<GraphDelta> {
    let rule = find_rule(&issue.rule_id)?;
    let graph = normalize(nodes, edges);
    let plan = match handlers::plan_fix(rule.id, issue, &graph) {
        Some(plan) => plan,
        None => {
            debug!("No fix needed for {} ({})", rule.id, issue.description);
            return None;
        }
    };
    debug!(
        "Fix plan for {}: {} node(s), {} edge(s), {} removal(s)",
        rule.id,
        plan.add_nodes.len(),
        plan.add_edges.len(),
        plan.remove_edge_ids.len()
    );
    resolve(catalog, plan, &graph, nodes, edges)
}

fn resolve(
    catalog: &dyn Catalog,
    plan: FixPlan,
    graph: &Graph,
    nodes: &[RawNode],
    edges: &[RawEdge],
) -> Option<GraphDelta> {
    // Pass 1: materialize
    let mut taken_node_ids: FxHashSet<String> = nodes.iter().map(|n| n.id.clone()).collect();
    let mut placeholders: FxHashMap<&'static str, String> = FxHashMap::default();
    let mut slots = LayoutSlots::from_graph(graph);
    let mut add_nodes = Vec::with_capacity(plan.add_nodes.len());

    for component_type in plan.add_nodes {
        if placeholders.contains_key(component_type) {
            continue;
        }
        let Some(entry) = catalog.lookup(component_type) else {
            debug!("Catalog has no '{}', fix abandoned", component_type);
            return None;
        };
        let id = next_node_id(component_type, &taken_node_ids);
        taken_node_ids.insert(id.clone());
        let position = slots.place(entry.category);
        add_nodes.push(inserted_node(&id, entry, position));
        placeholders.insert(component_type, id);
    }

    // Pass 2: removals, then edges
    let existing_edge_ids: FxHashSet<&str> = edges.iter().map(|e| e.id.as_str()).collect();
    let mut remove_edge_ids: Vec<String> = Vec::new();
    for id in plan.remove_edge_ids {
        if existing_edge_ids.contains(id.as_str()) && !remove_edge_ids.contains(&id) {
            remove_edge_ids.push(id);
        }
    }

    let mut pairs: FxHashSet<(String, String)> = edges
        .iter()
        .filter(|e| !remove_edge_ids.contains(&e.id))
        .map(|e| (e.source.clone(), e.target.clone()))
        .collect();
    let mut taken_edge_ids: FxHashSet<String> = edges.iter().map(|e| e.id.clone()).collect();
    let mut add_edges = Vec::with_capacity(plan.add_edges.len());

    for request in plan.add_edges {
        let (Some(source), Some(target)) = (
            resolve_ref(&request.source, &placeholders, &taken_node_ids),
            resolve_ref(&request.target, &placeholders, &taken_node_ids),
        ) else {
            debug!("Dropping unresolved edge request {} -> {}", request.source, request.target);
            continue;
        };
        if source == target || pairs.contains(&(source.clone(), target.clone())) {
            continue;
        }
        let id = next_edge_id(&source, &target, &taken_edge_ids);
        taken_edge_ids.insert(id.clone());
        pairs.insert((source.clone(), target.clone()));
        add_edges.push(inserted_edge(id, source, target));
    }

    let delta = GraphDelta {
        add_nodes,
        add_edges,
        remove_edge_ids,
        message: plan.message,
    };
    info!(
        "{} (+{} nodes, +{} edges, -{} edges)",
        delta.message,
        delta.add_nodes.len(),
        delta.add_edges.len(),
        delta.remove_edge_ids.len()
    );
    Some(delta)
}

fn resolve_ref(
    node: &NodeRef,
    placeholders: &FxHashMap<&'static str, String>,
    known: &FxHashSet<String>,
) -> Option<String> {
    match node {
        NodeRef::New(component_type) => placeholders.get(component_type).cloned(),
        NodeRef::Existing(id) if known.contains(id) => Some(id.clone()),
        NodeRef::Existing(_) => None,
    }
}

/// `<type>-<n>` with the smallest `n >= 1` not already used
fn next_node_id(component_type: &str, taken: &FxHashSet<String>) -> String {
    (1..)
        .map(|n| format!("{}-{}", component_type, n))
        .find(|id| !taken.contains(id))
        .unwrap_or_else(|| component_type.to_string())
}

/// `e-<source>-<target>`, suffixed `-2`, `-3`, ... when taken
fn next_edge_id(source: &str, target: &str, taken: &FxHashSet<String>) -> String {
    let base = format!("e-{}-{}", source, target);
    if !taken.contains(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|id| !taken.contains(id))
        .unwrap_or_else(|| base.clone())
}

fn inserted_node(id: &str, entry: CatalogEntry, position: Position) -> RawNode {
    RawNode {
        id: id.to_string(),
        node_type: Some(INSERTED_ELEMENT_TYPE.to_string()),
        config: (!entry.default_config.is_empty()).then_some(entry.default_config),
        position: Some(position),
        data: Some(NodeData {
            component_id: Some(entry.component_type),
            category: Some(entry.category.as_str().to_string()),
            label: Some(entry.label),
            icon: Some(entry.icon),
            color: Some(entry.color),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn inserted_edge(id: String, source: String, target: String) -> RawEdge {
    let mut edge = RawEdge::new(id, source, target);
    edge.extra.insert(
        "type".to_string(),
        Value::String(INSERTED_ELEMENT_TYPE.to_string()),
    );
    edge
}

/// Result of fixing every auto-fixable issue in one go
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixAllOutcome {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
    pub added_node_ids: Vec<String>,
    pub added_edge_ids: Vec<String>,
    pub removed_edge_ids: Vec<String>,
    /// Rule ids of the fixes that changed the graph, in application order
    pub applied: Vec<String>,
    pub messages: Vec<String>,
}

impl FixAllOutcome {
    pub fn message(&self) -> String {
        self.messages.join(". ")
    }

    pub fn fixed_count(&self) -> usize {
        self.applied.len()
    }
}

/// Apply every auto-fixable issue in order, threading the graph through
pub fn apply_all_fixes(issues: &[LintIssue], nodes: &[RawNode], edges: &[RawEdge]) -> FixAllOutcome {
    apply_all_fixes_with(&BuiltinCatalog, issues, nodes, edges)
}

pub fn apply_all_fixes_with(
    catalog: &dyn Catalog,
    issues: &[LintIssue],
    nodes: &[RawNode],
    edges: &[RawEdge],
) -> FixAllOutcome {
    let mut outcome = FixAllOutcome {
        nodes: nodes.to_vec(),
        edges: edges.to_vec(),
        ..Default::default()
    };

    for issue in issues.iter().filter(|i| can_auto_fix(i)) {
        let Some(delta) = apply_auto_fix_with(catalog, issue, &outcome.nodes, &outcome.edges)
        else {
            continue;
        };
        let (next_nodes, next_edges) = delta.apply(&outcome.nodes, &outcome.edges);
        outcome.nodes = next_nodes;
        outcome.edges = next_edges;
        outcome
            .added_node_ids
            .extend(delta.add_nodes.iter().map(|n| n.id.clone()));
        outcome
            .added_edge_ids
            .extend(delta.add_edges.iter().map(|e| e.id.clone()));
        outcome
            .removed_edge_ids
            .extend(delta.remove_edge_ids.iter().cloned());
        outcome.applied.push(issue.rule_id.clone());
        outcome.messages.push(delta.message);
    }

    info!("Applied {} fix(es)", outcome.fixed_count());
    outcome
}
