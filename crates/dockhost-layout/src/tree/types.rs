//! Core types for the persisted layout tree.
//!
//! The tree is a Composite: rows, columns and stacks hold child items,
//! and component items are the leaves that each carry one panel.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Where a stack's header (tab strip) is drawn, or `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderShow {
    Hidden,
    Top,
    Left,
    Right,
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<HeaderShow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximise: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popout: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

/// A leaf: one panel, identified through its opaque `component_state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentItemConfig {
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_state: Option<JsonValue>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Children of a row or column, laid out along one axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerItemConfig {
    #[serde(default)]
    pub content: Vec<ItemConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Children sharing one slot as tabs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackItemConfig {
    #[serde(default)]
    pub content: Vec<ItemConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_item_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemConfig {
    Row(ContainerItemConfig),
    Column(ContainerItemConfig),
    Stack(StackItemConfig),
    Component(ComponentItemConfig),
}

impl ItemConfig {
    pub fn row(content: Vec<ItemConfig>) -> Self {
        ItemConfig::Row(ContainerItemConfig {
            content,
            size: None,
        })
    }

    pub fn column(content: Vec<ItemConfig>) -> Self {
        ItemConfig::Column(ContainerItemConfig {
            content,
            size: None,
        })
    }

    pub fn stack(content: Vec<ItemConfig>) -> Self {
        ItemConfig::Stack(StackItemConfig {
            content,
            size: None,
            active_item_index: None,
        })
    }

    /// Child items, or `None` for a leaf.
    pub fn content(&self) -> Option<&[ItemConfig]> {
        match self {
            ItemConfig::Row(c) | ItemConfig::Column(c) => Some(&c.content),
            ItemConfig::Stack(s) => Some(&s.content),
            ItemConfig::Component(_) => None,
        }
    }

    pub fn content_mut(&mut self) -> Option<&mut Vec<ItemConfig>> {
        match self {
            ItemConfig::Row(c) | ItemConfig::Column(c) => Some(&mut c.content),
            ItemConfig::Stack(s) => Some(&mut s.content),
            ItemConfig::Component(_) => None,
        }
    }
}

/// A loadable layout: an optional root item plus display settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<ItemConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<DimensionSettings>,
}

impl LayoutConfig {
    /// A config with no root item; loading it leaves the engine empty but ready.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_root(root: ItemConfig) -> Self {
        Self {
            root: Some(root),
            ..Self::default()
        }
    }
}
