//! Component catalog
//!
//! The auto-fix resolver needs display metadata (label, category, icon,
//! colour) for every node it inserts. It asks a [`Catalog`] for it, so a
//! host application can plug in its own component library; the engine ships
//! [`BuiltinCatalog`] backed by the static component table.

mod providers;
mod weights;

pub use providers::{language_for, provider_for, Language, SELF_MANAGED};
pub use weights::{
    component_spec, monthly_cost_of, weights_for, ComponentSpec, ComponentWeights, COMPONENTS,
};

use crate::models::{Category, ConfigMap};

/// Display metadata for a component type
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub component_type: String,
    pub label: String,
    pub category: Category,
    pub icon: String,
    pub color: String,
    /// Initial `config` for inserted nodes
    pub default_config: ConfigMap,
}

/// Source of component metadata for inserted nodes
pub trait Catalog: Send + Sync {
    /// Metadata for `component_type`, or `None` if the catalog does not know it
    fn lookup(&self, component_type: &str) -> Option<CatalogEntry>;
}

/// Catalog backed by the built-in component table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

const ICON_CDN: &str = "https://cdn.simpleicons.org";

impl Catalog for BuiltinCatalog {
    fn lookup(&self, component_type: &str) -> Option<CatalogEntry> {
        let spec = component_spec(component_type)?;
        Some(CatalogEntry {
            component_type: spec.component_type.to_string(),
            label: spec.label.to_string(),
            category: spec.category,
            icon: format!("{}/{}", ICON_CDN, spec.component_type),
            color: spec.color.to_string(),
            default_config: ConfigMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let entry = BuiltinCatalog.lookup("clerk").unwrap();
        assert_eq!(entry.label, "Clerk");
        assert_eq!(entry.category, Category::Auth);
        assert!(entry.icon.ends_with("/clerk"));
        assert!(BuiltinCatalog.lookup("not-a-component").is_none());
    }
}
