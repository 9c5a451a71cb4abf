//! The engine's fully resolved layout form and its conversion back into
//! a loadable [`LayoutConfig`].

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{
    ComponentItemConfig, ContainerItemConfig, DimensionSettings, HeaderSettings, HeaderShow,
    ItemConfig, LayoutConfig, StackItemConfig,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHeader {
    pub show: HeaderShow,
    pub maximise: bool,
    pub popout: bool,
}

impl Default for ResolvedHeader {
    fn default() -> Self {
        Self {
            show: HeaderShow::Top,
            maximise: true,
            popout: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDimensions {
    pub border_width: f64,
}

impl Default for ResolvedDimensions {
    fn default() -> Self {
        Self { border_width: 5.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedComponentItemConfig {
    pub component_type: String,
    pub component_state: Option<JsonValue>,
    pub title: String,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContainerItemConfig {
    pub content: Vec<ResolvedItemConfig>,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStackItemConfig {
    pub content: Vec<ResolvedItemConfig>,
    pub size: f64,
    pub active_item_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedItemConfig {
    Row(ResolvedContainerItemConfig),
    Column(ResolvedContainerItemConfig),
    Stack(ResolvedStackItemConfig),
    Component(ResolvedComponentItemConfig),
}

/// What the engine hands out on save and what persistence stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLayoutConfig {
    pub root: Option<ResolvedItemConfig>,
    #[serde(default)]
    pub header: ResolvedHeader,
    #[serde(default)]
    pub dimensions: ResolvedDimensions,
}

impl From<&ResolvedComponentItemConfig> for ComponentItemConfig {
    fn from(item: &ResolvedComponentItemConfig) -> Self {
        ComponentItemConfig {
            component_type: item.component_type.clone(),
            component_state: item.component_state.clone(),
            title: item.title.clone(),
            size: Some(item.size),
        }
    }
}

impl From<&ResolvedItemConfig> for ItemConfig {
    fn from(item: &ResolvedItemConfig) -> Self {
        let children = |content: &[ResolvedItemConfig]| -> Vec<ItemConfig> {
            content.iter().map(ItemConfig::from).collect()
        };
        match item {
            ResolvedItemConfig::Row(c) => ItemConfig::Row(ContainerItemConfig {
                content: children(&c.content),
                size: Some(c.size),
            }),
            ResolvedItemConfig::Column(c) => ItemConfig::Column(ContainerItemConfig {
                content: children(&c.content),
                size: Some(c.size),
            }),
            ResolvedItemConfig::Stack(s) => ItemConfig::Stack(StackItemConfig {
                content: children(&s.content),
                size: Some(s.size),
                active_item_index: Some(s.active_item_index),
            }),
            ResolvedItemConfig::Component(c) => ItemConfig::Component(c.into()),
        }
    }
}

impl LayoutConfig {
    /// Turn a saved, resolved layout back into something the engine can load.
    pub fn from_resolved(resolved: &ResolvedLayoutConfig) -> Self {
        LayoutConfig {
            root: resolved.root.as_ref().map(ItemConfig::from),
            header: Some(HeaderSettings {
                show: Some(resolved.header.show),
                maximise: Some(resolved.header.maximise),
                popout: Some(resolved.header.popout),
            }),
            dimensions: Some(DimensionSettings {
                border_width: Some(resolved.dimensions.border_width),
            }),
        }
    }
}
