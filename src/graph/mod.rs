//! Normalized architecture graph
//!
//! Producers disagree on where a node keeps its component type and category:
//! canvas exports put them in a `data` sub-object (`data.componentId`,
//! `data.category`), generated plans use top-level `type`/`category`. The
//! normalizer resolves both into a [`CanonicalNode`], preferring the most
//! specific source, and drops edges whose endpoints do not resolve. It never
//! fails; anything it cannot interpret becomes an empty type or `None`
//! category and is ignored by the weight aggregation downstream.

mod cycles;

pub use cycles::find_cycles;

use crate::catalog::{language_for, provider_for, Language, SELF_MANAGED};
use crate::models::{Category, ConfigMap, RawEdge, RawNode, SyncMode};
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::debug;

/// A node with its type and category resolved
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalNode {
    pub id: String,
    /// Component type, empty when no producer field carried one
    pub component_type: String,
    pub category: Option<Category>,
    pub label: Option<String>,
    pub config: ConfigMap,
}

impl CanonicalNode {
    pub fn is(&self, category: Category) -> bool {
        self.category == Some(category)
    }

    pub fn is_type(&self, types: &[&str]) -> bool {
        types.contains(&self.component_type.as_str())
    }

    pub fn config_value(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// Whether a config flag is set to a truthy value
    pub fn config_flag(&self, key: &str) -> bool {
        self.config.get(key).map(is_truthy).unwrap_or(false)
    }

    /// Human-facing name: label, then component type, then id
    pub fn display_name(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ if !self.component_type.is_empty() => &self.component_type,
            _ => &self.id,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An edge whose endpoints both resolve to nodes
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub relationship: Option<String>,
    pub mode: Option<SyncMode>,
}

impl CanonicalEdge {
    /// Unflagged edges count as synchronous
    pub fn is_sync(&self) -> bool {
        self.mode != Some(SyncMode::Async)
    }
}

/// Normalized view of an architecture graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<CanonicalNode>,
    edges: Vec<CanonicalEdge>,
    index: FxHashMap<String, usize>,
}

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.trim().is_empty())
}

fn normalize_node(raw: &RawNode) -> CanonicalNode {
    let data = raw.data.as_ref();
    let component_type = first_non_empty(&[
        data.and_then(|d| d.component_id.as_deref()),
        data.and_then(|d| d.node_type.as_deref()),
        raw.node_type.as_deref(),
    ])
    .unwrap_or_default()
    .trim()
    .to_string();
    let category = first_non_empty(&[
        data.and_then(|d| d.category.as_deref()),
        raw.category.as_deref(),
    ])
    .and_then(Category::parse);

    CanonicalNode {
        id: raw.id.clone(),
        component_type,
        category,
        label: data.and_then(|d| d.label.clone()),
        config: raw.config.clone().unwrap_or_default(),
    }
}

fn normalize_edge(raw: &RawEdge) -> CanonicalEdge {
    let data = raw.data.as_ref();
    let relationship = first_non_empty(&[
        data.and_then(|d| d.relationship.as_deref()),
        raw.relationship.as_deref(),
    ])
    .map(str::to_string);
    let mode = first_non_empty(&[
        data.and_then(|d| d.sync_async.as_deref()),
        raw.sync_async.as_deref(),
    ])
    .and_then(SyncMode::parse);

    CanonicalEdge {
        id: raw.id.clone(),
        source: raw.source.clone(),
        target: raw.target.clone(),
        relationship,
        mode,
    }
}

/// Resolve raw producer shapes into a [`Graph`]
pub fn normalize(nodes: &[RawNode], edges: &[RawEdge]) -> Graph {
    let mut index = FxHashMap::default();
    let mut canonical = Vec::with_capacity(nodes.len());
    for raw in nodes {
        if index.contains_key(&raw.id) {
            debug!("Duplicate node id '{}', keeping first occurrence", raw.id);
            continue;
        }
        index.insert(raw.id.clone(), canonical.len());
        canonical.push(normalize_node(raw));
    }

    let mut kept = Vec::with_capacity(edges.len());
    for raw in edges {
        if !index.contains_key(&raw.source) || !index.contains_key(&raw.target) {
            debug!(
                "Ignoring dangling edge '{}' ({} -> {})",
                raw.id, raw.source, raw.target
            );
            continue;
        }
        kept.push(normalize_edge(raw));
    }

    Graph {
        nodes: canonical,
        edges: kept,
        index,
    }
}

impl Graph {
    pub fn nodes(&self) -> &[CanonicalNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[CanonicalEdge] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&CanonicalNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Position of a node in input order
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CanonicalNode> {
        self.nodes.iter().filter(move |n| n.is(category))
    }

    pub fn ids_in(&self, category: Category) -> Vec<String> {
        self.by_category(category).map(|n| n.id.clone()).collect()
    }

    pub fn count(&self, category: Category) -> usize {
        self.by_category(category).count()
    }

    pub fn has(&self, category: Category) -> bool {
        self.nodes.iter().any(|n| n.is(category))
    }

    /// Whether any node has one of the given component types
    pub fn has_type(&self, types: &[&str]) -> bool {
        self.nodes.iter().any(|n| n.is_type(types))
    }

    pub fn incoming<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a CanonicalEdge> {
        self.edges.iter().filter(move |e| e.target == id)
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == source && e.target == target)
    }

    /// Whether any edge touches the node
    pub fn is_connected(&self, id: &str) -> bool {
        self.edges.iter().any(|e| e.source == id || e.target == id)
    }

    /// Category of an edge endpoint
    pub fn category_of(&self, id: &str) -> Option<Category> {
        self.node(id).and_then(|n| n.category)
    }

    /// Distinct hosted vendors in the graph, self-managed components excluded
    pub fn providers(&self) -> Vec<&'static str> {
        let mut providers: Vec<&'static str> = self
            .nodes
            .iter()
            .map(|n| provider_for(&n.component_type))
            .filter(|p| *p != SELF_MANAGED)
            .collect();
        providers.sort_unstable();
        providers.dedup();
        providers
    }

    /// Distinct implementation languages, in first-seen order
    pub fn languages(&self) -> Vec<Language> {
        let mut langs = Vec::new();
        for lang in self.nodes.iter().filter_map(|n| language_for(&n.component_type)) {
            if !langs.contains(&lang) {
                langs.push(lang);
            }
        }
        langs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EdgeData, NodeData};
    use serde_json::json;

    #[test]
    fn test_prefers_data_fields() {
        let raw = RawNode {
            id: "n1".into(),
            node_type: Some("custom".into()),
            category: Some("frontend".into()),
            data: Some(NodeData {
                component_id: Some("fastapi".into()),
                category: Some("backend".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let g = normalize(&[raw], &[]);
        let node = &g.nodes()[0];
        assert_eq!(node.component_type, "fastapi");
        assert_eq!(node.category, Some(Category::Backend));
    }

    #[test]
    fn test_falls_back_to_direct_fields() {
        let raw = RawNode {
            id: "db".into(),
            node_type: Some("postgresql".into()),
            category: Some("database".into()),
            ..Default::default()
        };
        let g = normalize(&[raw], &[]);
        assert_eq!(g.nodes()[0].component_type, "postgresql");
        assert!(g.nodes()[0].is(Category::Database));
    }

    #[test]
    fn test_missing_fields_normalize_to_empty() {
        let g = normalize(&[RawNode::new("x")], &[]);
        assert_eq!(g.nodes()[0].component_type, "");
        assert_eq!(g.nodes()[0].category, None);

        let odd = RawNode {
            id: "y".into(),
            category: Some("payments".into()),
            ..Default::default()
        };
        let g = normalize(&[odd], &[]);
        assert_eq!(g.nodes()[0].category, None);
    }

    #[test]
    fn test_dangling_edges_dropped() {
        let nodes = vec![
            RawNode::component("a", "react", Category::Frontend),
            RawNode::component("b", "fastapi", Category::Backend),
        ];
        let edges = vec![
            RawEdge::new("e1", "a", "b"),
            RawEdge::new("e2", "a", "ghost"),
            RawEdge::new("e3", "ghost", "b"),
        ];
        let g = normalize(&nodes, &edges);
        assert_eq!(g.edges().len(), 1);
        assert_eq!(g.edges()[0].id, "e1");
    }

    #[test]
    fn test_edge_mode_from_data() {
        let nodes = vec![
            RawNode::component("a", "fastapi", Category::Backend),
            RawNode::component("b", "openai", Category::Ml),
        ];
        let mut edge = RawEdge::new("e1", "a", "b");
        edge.data = Some(EdgeData {
            sync_async: Some("async".into()),
            ..Default::default()
        });
        let g = normalize(&nodes, &[edge, RawEdge::new("e2", "b", "a")]);
        assert!(!g.edges()[0].is_sync());
        assert!(g.edges()[1].is_sync());
    }

    #[test]
    fn test_config_flags() {
        let node = RawNode::component("db", "postgresql", Category::Database)
            .with_config("backupEnabled", json!(true))
            .with_config("encryptionAtRest", json!(""))
            .with_config("replicas", json!(0));
        let g = normalize(&[node], &[]);
        let db = &g.nodes()[0];
        assert!(db.config_flag("backupEnabled"));
        assert!(!db.config_flag("encryptionAtRest"));
        assert!(!db.config_flag("replicas"));
        assert!(!db.config_flag("missing"));
    }

    #[test]
    fn test_providers_and_languages() {
        let nodes = vec![
            RawNode::component("fe", "nextjs", Category::Frontend),
            RawNode::component("be", "fastapi", Category::Backend),
            RawNode::component("be2", "django", Category::Backend),
            RawNode::component("q", "sqs", Category::Queue),
            RawNode::component("db", "postgresql", Category::Database),
        ];
        let g = normalize(&nodes, &[]);
        assert_eq!(g.providers(), vec!["aws", "vercel"]);
        assert_eq!(g.languages(), vec![Language::TypeScript, Language::Python]);
    }
}
