//! Leaf enumeration over the Composite tree.

use super::{ComponentItemConfig, ItemConfig, LayoutConfig};
use crate::element::ElementConfig;

impl ItemConfig {
    /// Collect all component leaves in depth-first, left-to-right order.
    pub fn components(&self) -> Vec<&ComponentItemConfig> {
        let mut out = Vec::new();
        self.collect_components_into(&mut out);
        out
    }

    fn collect_components_into<'a>(&'a self, out: &mut Vec<&'a ComponentItemConfig>) {
        match self {
            ItemConfig::Component(component) => out.push(component),
            _ => {
                for child in self.content().unwrap_or_default() {
                    child.collect_components_into(out);
                }
            }
        }
    }

    pub fn component_count(&self) -> usize {
        match self {
            ItemConfig::Component(_) => 1,
            _ => self
                .content()
                .unwrap_or_default()
                .iter()
                .map(ItemConfig::component_count)
                .sum(),
        }
    }
}

impl LayoutConfig {
    pub fn components(&self) -> Vec<&ComponentItemConfig> {
        self.root
            .as_ref()
            .map(ItemConfig::components)
            .unwrap_or_default()
    }

    /// Element configs for every leaf whose state can be read. Leaves with
    /// missing or malformed state are skipped.
    pub fn element_configs(&self) -> Vec<ElementConfig> {
        self.components()
            .into_iter()
            .filter_map(ElementConfig::from_component)
            .collect()
    }

    pub fn ref_ids(&self) -> Vec<String> {
        self.element_configs()
            .into_iter()
            .map(|config| config.ref_id)
            .collect()
    }

    /// Whether `has` reports every leaf's ref id as available.
    pub fn is_satisfied_by(&self, mut has: impl FnMut(&str) -> bool) -> bool {
        self.element_configs()
            .iter()
            .all(|config| has(&config.ref_id))
    }
}
