//! Panel configs and their mapping onto layout leaves.

use dockhost_common::LayoutError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::tree::ComponentItemConfig;

/// What the host needs to materialize one panel's element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementConfig {
    /// Stable identity across save/load cycles.
    pub ref_id: String,
    /// Panel kind selector.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Opaque payload for the content renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<JsonValue>,
}

impl ElementConfig {
    pub fn new(ref_id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            kind: kind.into(),
            title: None,
            props: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_props(mut self, props: JsonValue) -> Self {
        self.props = Some(props);
        self
    }

    /// The leaf config the engine gets when this panel is added.
    pub fn to_component_config(&self) -> ComponentItemConfig {
        ComponentItemConfig {
            component_type: self.kind.clone(),
            component_state: Some(component_state(&self.ref_id, self.props.as_ref())),
            title: self.title.clone().unwrap_or_default(),
            size: None,
        }
    }

    /// Rebuild a panel config from a stored leaf. `None` when the leaf's
    /// state is not an object carrying a string `refId`.
    pub fn from_component(item: &ComponentItemConfig) -> Option<Self> {
        let state = item.component_state.as_ref()?.as_object()?;
        let ref_id = state.get("refId")?.as_str()?;
        Some(Self {
            ref_id: ref_id.to_string(),
            kind: item.component_type.clone(),
            title: Some(item.title.clone()),
            props: state.get("props").filter(|p| !p.is_null()).cloned(),
        })
    }
}

/// The opaque per-leaf state: `{ refId, props }`.
pub fn component_state(ref_id: &str, props: Option<&JsonValue>) -> JsonValue {
    json!({ "refId": ref_id, "props": props })
}

/// Pull the ref id out of a leaf's opaque state.
pub fn ref_id_from_state(state: Option<&JsonValue>) -> Result<String, LayoutError> {
    state
        .and_then(JsonValue::as_object)
        .and_then(|obj| obj.get("refId"))
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or(LayoutError::MissingRefId)
}

/// A panel kind offered to the user, e.g. in an "add panel" menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelKind {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

impl PanelKind {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
