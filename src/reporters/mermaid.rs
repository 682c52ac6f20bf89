//! Mermaid flowchart export
//!
//! Renders the architecture as a `graph TD` diagram that can be pasted into
//! Markdown. Node shapes follow the component category, async links are
//! dashed and relationships become edge labels.

use crate::graph::{normalize, CanonicalNode};
use crate::models::{Category, RawEdge, RawNode, SyncMode};

const EMPTY_DIAGRAM: &str = "graph TD\n  Empty[No components]\n";

/// Mermaid-safe node id
fn safe_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn shape(category: Option<Category>) -> (&'static str, &'static str) {
    match category {
        Some(Category::Frontend) => ("[", "]"),
        Some(Category::Backend) => ("((", "))"),
        Some(Category::Database) => ("[(", ")]"),
        Some(Category::Ml) => ("{", "}"),
        Some(Category::Auth) => ("[/", "/]"),
        _ => ("[", "]"),
    }
}

fn label(node: &CanonicalNode) -> String {
    let text = match node.label.as_deref() {
        Some(label) if !label.is_empty() => label,
        _ if !node.component_type.is_empty() => node.component_type.as_str(),
        _ => "Unknown",
    };
    text.replace('"', "#quot;")
}

/// Render nodes and edges as a Mermaid flowchart
pub fn render(nodes: &[RawNode], edges: &[RawEdge]) -> String {
    let graph = normalize(nodes, edges);
    if graph.is_empty() {
        return EMPTY_DIAGRAM.to_string();
    }

    let mut out = String::from("graph TD\n");
    for node in graph.nodes() {
        let (open, close) = shape(node.category);
        out.push_str(&format!(
            "  {}{}\"{}\"{}\n",
            safe_id(&node.id),
            open,
            label(node),
            close
        ));
    }

    out.push('\n');
    for edge in graph.edges() {
        let arrow = if edge.mode == Some(SyncMode::Async) {
            "-.->"
        } else {
            "-->"
        };
        let text = edge
            .relationship
            .as_deref()
            .map(|r| format!("|{}|", r))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {} {}{} {}\n",
            safe_id(&edge.source),
            arrow,
            text,
            safe_id(&edge.target)
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_placeholder() {
        assert_eq!(render(&[], &[]), "graph TD\n  Empty[No components]\n");
    }

    #[test]
    fn test_shapes_and_edges() {
        let nodes = vec![
            RawNode::component("web-app", "nextjs", Category::Frontend),
            RawNode::component("api", "fastapi", Category::Backend),
            RawNode::component("db", "postgresql", Category::Database),
        ];
        let edges = vec![
            RawEdge::new("e1", "web-app", "api").with_relationship("calls"),
            RawEdge::new("e2", "api", "db").with_sync_async(SyncMode::Async),
            RawEdge::new("e3", "api", "missing"),
        ];
        let out = render(&nodes, &edges);
        assert!(out.starts_with("graph TD\n"));
        assert!(out.contains("  web_app[\"nextjs\"]\n"));
        assert!(out.contains("  api((\"fastapi\"))\n"));
        assert!(out.contains("  db[(\"postgresql\")]\n"));
        assert!(out.contains("  web_app -->|calls| api\n"));
        assert!(out.contains("  api -.-> db\n"));
        assert!(!out.contains("missing"));
    }
}
