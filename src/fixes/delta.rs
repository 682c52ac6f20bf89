//! Graph changes proposed by an auto-fix

use crate::models::{RawEdge, RawNode};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Nodes and edges to add, edge ids to remove, and a summary.
///
/// The engine never mutates the caller's graph; [`GraphDelta::apply`]
/// produces the updated copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDelta {
    pub add_nodes: Vec<RawNode>,
    pub add_edges: Vec<RawEdge>,
    pub remove_edge_ids: Vec<String>,
    pub message: String,
}

impl GraphDelta {
    pub fn added_node_ids(&self) -> Vec<&str> {
        self.add_nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn added_edge_ids(&self) -> Vec<&str> {
        self.add_edges.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn removed_edge_ids(&self) -> &[String] {
        &self.remove_edge_ids
    }

    pub fn is_empty(&self) -> bool {
        self.add_nodes.is_empty() && self.add_edges.is_empty() && self.remove_edge_ids.is_empty()
    }

    /// The graph after this delta: removals first, then additions appended
    pub fn apply(&self, nodes: &[RawNode], edges: &[RawEdge]) -> (Vec<RawNode>, Vec<RawEdge>) {
        let removed: FxHashSet<&str> = self.remove_edge_ids.iter().map(String::as_str).collect();

        let mut new_nodes = nodes.to_vec();
        new_nodes.extend(self.add_nodes.iter().cloned());

        let mut new_edges: Vec<RawEdge> = edges
            .iter()
            .filter(|e| !removed.contains(e.id.as_str()))
            .cloned()
            .collect();
        new_edges.extend(self.add_edges.iter().cloned());

        (new_nodes, new_edges)
    }
}
