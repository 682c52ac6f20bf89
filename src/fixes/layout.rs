//! Placement of inserted nodes
//!
//! Each category owns a horizontal row; new nodes take the next free slot in
//! their row, counting the nodes already on the canvas.

use crate::graph::Graph;
use crate::models::{Category, Position};
use rustc_hash::FxHashMap;

pub const LAYOUT_ORIGIN_X: f64 = 180.0;
pub const LAYOUT_SLOT_WIDTH: f64 = 260.0;

/// Canvas row of a category
pub fn layer_row(category: Category) -> f64 {
    match category {
        Category::Frontend => 80.0,
        Category::Auth => 230.0,
        Category::Backend | Category::Ml => 380.0,
        Category::Queue | Category::Cache => 530.0,
        Category::Database | Category::Storage | Category::Search => 680.0,
        Category::Monitoring | Category::Hosting | Category::Cicd => 830.0,
    }
}

/// Per-category slot counters
#[derive(Debug, Default)]
pub struct LayoutSlots {
    used: FxHashMap<Category, usize>,
}

impl LayoutSlots {
    /// Seed counters from the nodes already in `graph`
    pub fn from_graph(graph: &Graph) -> Self {
        let mut used = FxHashMap::default();
        for category in graph.nodes().iter().filter_map(|n| n.category) {
            *used.entry(category).or_insert(0) += 1;
        }
        Self { used }
    }

    /// Claim the next slot in `category`'s row
    pub fn place(&mut self, category: Category) -> Position {
        let slot = self.used.entry(category).or_insert(0);
        let x = LAYOUT_ORIGIN_X + *slot as f64 * LAYOUT_SLOT_WIDTH;
        *slot += 1;
        Position {
            x,
            y: layer_row(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::normalize;
    use crate::models::RawNode;

    #[test]
    fn test_slots_count_existing_and_new() {
        let g = normalize(
            &[
                RawNode::component("a", "fastapi", Category::Backend),
                RawNode::component("b", "express", Category::Backend),
            ],
            &[],
        );
        let mut slots = LayoutSlots::from_graph(&g);
        assert_eq!(slots.place(Category::Backend), Position { x: 700.0, y: 380.0 });
        assert_eq!(slots.place(Category::Backend), Position { x: 960.0, y: 380.0 });
        assert_eq!(slots.place(Category::Auth), Position { x: 180.0, y: 230.0 });
    }
}
