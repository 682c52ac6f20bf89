//! Dependency cycle detection
//!
//! Uses Tarjan's SCC algorithm: every strongly connected component with
//! more than one node is a cycle, and so is any node with a self-edge.

use super::Graph;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

/// Node-id groups that form dependency cycles.
///
/// Each group lists its members in input order; groups are ordered by their
/// first member's input position, so the result is stable across runs.
pub fn find_cycles(graph: &Graph) -> Vec<Vec<String>> {
    let mut pg: DiGraph<usize, ()> = DiGraph::new();
    let mut by_id: FxHashMap<&str, NodeIndex> = FxHashMap::default();

    for (i, node) in graph.nodes().iter().enumerate() {
        by_id.insert(node.id.as_str(), pg.add_node(i));
    }

    let mut self_loops = Vec::new();
    for edge in graph.edges() {
        let (Some(&from), Some(&to)) = (by_id.get(edge.source.as_str()), by_id.get(edge.target.as_str()))
        else {
            continue;
        };
        if from == to {
            self_loops.push(pg[from]);
        } else {
            pg.add_edge(from, to, ());
        }
    }

    let mut cycles: Vec<Vec<usize>> = tarjan_scc(&pg)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            let mut members: Vec<usize> = scc.iter().map(|&ix| pg[ix]).collect();
            members.sort_unstable();
            members
        })
        .collect();

    self_loops.sort_unstable();
    self_loops.dedup();
    for pos in self_loops {
        // Already reported as part of a larger cycle
        if cycles.iter().any(|c| c.contains(&pos)) {
            continue;
        }
        cycles.push(vec![pos]);
    }

    cycles.sort_by_key(|c| c[0]);
    cycles
        .into_iter()
        .map(|c| c.into_iter().map(|i| graph.nodes()[i].id.clone()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::normalize;
    use crate::models::{Category, RawEdge, RawNode};

    fn nodes(ids: &[&str]) -> Vec<RawNode> {
        ids.iter()
            .map(|id| RawNode::component(*id, "fastapi", Category::Backend))
            .collect()
    }

    #[test]
    fn test_no_cycles_in_dag() {
        let g = normalize(
            &nodes(&["a", "b", "c"]),
            &[RawEdge::new("1", "a", "b"), RawEdge::new("2", "b", "c")],
        );
        assert!(find_cycles(&g).is_empty());
    }

    #[test]
    fn test_simple_cycle() {
        let g = normalize(
            &nodes(&["a", "b", "c", "d"]),
            &[
                RawEdge::new("1", "a", "b"),
                RawEdge::new("2", "b", "c"),
                RawEdge::new("3", "c", "a"),
                RawEdge::new("4", "c", "d"),
            ],
        );
        assert_eq!(find_cycles(&g), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_self_loop_and_separate_cycles() {
        let g = normalize(
            &nodes(&["a", "b", "c", "d"]),
            &[
                RawEdge::new("1", "c", "d"),
                RawEdge::new("2", "d", "c"),
                RawEdge::new("3", "a", "a"),
            ],
        );
        assert_eq!(find_cycles(&g), vec![vec!["a"], vec!["c", "d"]]);
    }
}
