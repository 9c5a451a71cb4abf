//! Test doubles: elements that record their styles and an engine that
//! lays leaves out in a single row and binds them synchronously.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use dockhost_common::{LayoutError, Rect};
use dockhost_layout::{
    ref_id_from_state, ComponentItemConfig, ItemConfig, LayoutConfig,
    ResolvedComponentItemConfig, ResolvedItemConfig, ResolvedLayoutConfig,
};
use dockhost_layout::tree::{
    ResolvedContainerItemConfig, ResolvedDimensions, ResolvedHeader, ResolvedStackItemConfig,
};
use serde_json::Value as JsonValue;

use crate::element::{ElementRef, PanelElement, StyleProperty};
use crate::engine::{
    ComponentContainer, LayoutHost, LogicalZIndex, VirtualComponent, VirtualLayoutEngine,
};

pub(crate) struct FakeElement {
    rect: Cell<Rect>,
    styles: RefCell<HashMap<StyleProperty, String>>,
}

impl FakeElement {
    pub(crate) fn new(rect: Rect) -> Rc<Self> {
        Rc::new(Self {
            rect: Cell::new(rect),
            styles: RefCell::new(HashMap::new()),
        })
    }

    pub(crate) fn set_rect(&self, rect: Rect) {
        self.rect.set(rect);
    }

    pub(crate) fn style(&self, property: StyleProperty) -> Option<String> {
        self.styles.borrow().get(&property).cloned()
    }
}

impl PanelElement for FakeElement {
    fn bounding_rect(&self) -> Rect {
        self.rect.get()
    }

    fn set_style(&self, property: StyleProperty, value: &str) {
        self.styles.borrow_mut().insert(property, value.to_string());
    }
}

struct FakeContainer {
    rect: Cell<Rect>,
    state: Option<JsonValue>,
}

impl ComponentContainer for FakeContainer {
    fn element_rect(&self) -> Rect {
        self.rect.get()
    }

    fn state(&self) -> Option<&JsonValue> {
        self.state.as_ref()
    }
}

struct Leaf {
    ref_id: String,
    container: FakeContainer,
    component: Box<dyn VirtualComponent>,
}

/// Everything the fake engine was asked to do.
#[derive(Debug, Default)]
pub(crate) struct EngineLog {
    pub loads: Vec<LayoutConfig>,
    pub adds: usize,
    pub clears: usize,
    pub sizes: Vec<(f64, f64)>,
    pub destroyed: bool,
    /// Fail every `load_layout` call.
    pub reject_loads: bool,
}

pub(crate) struct FakeEngine {
    root_element: ElementRef,
    host: Rc<dyn LayoutHost>,
    tree: Option<ItemConfig>,
    leaves: Vec<Leaf>,
    size: (f64, f64),
    log: Rc<RefCell<EngineLog>>,
}

pub(crate) type FakeFactory = Box<dyn FnMut(ElementRef, Rc<dyn LayoutHost>) -> FakeEngine>;

/// A factory that builds [`FakeEngine`]s sharing `log`.
pub(crate) fn fake_factory(log: Rc<RefCell<EngineLog>>) -> FakeFactory {
    Box::new(move |root_element: ElementRef, host: Rc<dyn LayoutHost>| FakeEngine {
        root_element,
        host,
        tree: None,
        leaves: Vec::new(),
        size: (0.0, 0.0),
        log: Rc::clone(&log),
    })
}

impl FakeEngine {
    pub(crate) fn tree(&self) -> Option<&ItemConfig> {
        self.tree.as_ref()
    }

    /// RefIds of the tree's leaves, depth-first.
    pub(crate) fn leaf_ref_ids(&self) -> Vec<String> {
        self.tree
            .as_ref()
            .map(|root| {
                root.components()
                    .into_iter()
                    .filter_map(|c| ref_id_from_state(c.component_state.as_ref()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Simulate the user closing a tab.
    pub(crate) fn close(&mut self, ref_id: &str) -> Result<(), LayoutError> {
        if let Some(root) = self.tree.as_mut() {
            remove_leaf(root, ref_id);
            if root.component_count() == 0 {
                self.tree = None;
            }
        }
        if let Some(pos) = self.leaves.iter().position(|leaf| leaf.ref_id == ref_id) {
            let leaf = self.leaves.remove(pos);
            self.host.unbind_component(&leaf.container)?;
        }
        self.reflow();
        Ok(())
    }

    /// Simulate the engine hiding a leaf, e.g. an inactive tab.
    pub(crate) fn hide(&self, ref_id: &str) {
        if let Some(leaf) = self.leaves.iter().find(|leaf| leaf.ref_id == ref_id) {
            leaf.component.visibility_required(false);
        }
    }

    /// Simulate a drag lifting a leaf.
    pub(crate) fn raise(&self, ref_id: &str, default_z_index: &str) {
        if let Some(leaf) = self.leaves.iter().find(|leaf| leaf.ref_id == ref_id) {
            leaf.component
                .z_index_required(LogicalZIndex::Drag, default_z_index);
        }
    }

    fn bind(&mut self, item: &ComponentItemConfig) -> Result<(), LayoutError> {
        let resolved = ResolvedComponentItemConfig {
            component_type: item.component_type.clone(),
            component_state: item.component_state.clone(),
            title: item.title.clone(),
            size: item.size.unwrap_or(100.0),
        };
        let container = FakeContainer {
            rect: Cell::new(Rect::default()),
            state: item.component_state.clone(),
        };
        let component = self.host.bind_component(&container, &resolved)?;
        let ref_id = ref_id_from_state(container.state())?;
        self.leaves.push(Leaf {
            ref_id,
            container,
            component,
        });
        Ok(())
    }

    fn unbind_all(&mut self) -> Result<(), LayoutError> {
        for leaf in std::mem::take(&mut self.leaves) {
            self.host.unbind_component(&leaf.container)?;
        }
        Ok(())
    }

    /// Split the root evenly into one column per leaf.
    fn reflow(&self) {
        if self.leaves.is_empty() {
            return;
        }
        self.host.before_virtual_rect();
        let origin = self.root_element.bounding_rect();
        let width = self.size.0 / self.leaves.len() as f64;
        let height = self.size.1;
        for (i, leaf) in self.leaves.iter().enumerate() {
            leaf.container.rect.set(Rect::new(
                origin.x + width * i as f64,
                origin.y,
                width,
                height,
            ));
            leaf.component.rect_required(&leaf.container, width, height);
            leaf.component.visibility_required(true);
            leaf.component.z_index_required(LogicalZIndex::Base, "auto");
        }
    }

    fn resolve(&self, item: &ItemConfig) -> ResolvedItemConfig {
        let children = |content: &[ItemConfig]| -> Vec<ResolvedItemConfig> {
            content.iter().map(|child| self.resolve(child)).collect()
        };
        match item {
            ItemConfig::Row(c) => ResolvedItemConfig::Row(ResolvedContainerItemConfig {
                content: children(&c.content),
                size: c.size.unwrap_or(100.0),
            }),
            ItemConfig::Column(c) => ResolvedItemConfig::Column(ResolvedContainerItemConfig {
                content: children(&c.content),
                size: c.size.unwrap_or(100.0),
            }),
            ItemConfig::Stack(s) => ResolvedItemConfig::Stack(ResolvedStackItemConfig {
                content: children(&s.content),
                size: s.size.unwrap_or(100.0),
                active_item_index: s.active_item_index.unwrap_or(0),
            }),
            ItemConfig::Component(c) => {
                let state = ref_id_from_state(c.component_state.as_ref())
                    .ok()
                    .and_then(|id| self.leaves.iter().find(|leaf| leaf.ref_id == id))
                    .map(|leaf| leaf.component.state_requested())
                    .or_else(|| c.component_state.clone());
                ResolvedItemConfig::Component(ResolvedComponentItemConfig {
                    component_type: c.component_type.clone(),
                    component_state: state,
                    title: c.title.clone(),
                    size: c.size.unwrap_or(100.0),
                })
            }
        }
    }
}

fn remove_leaf(item: &mut ItemConfig, ref_id: &str) {
    if let Some(content) = item.content_mut() {
        content.retain(|child| match child {
            ItemConfig::Component(c) => {
                ref_id_from_state(c.component_state.as_ref()).ok().as_deref() != Some(ref_id)
            }
            _ => true,
        });
        for child in content.iter_mut() {
            remove_leaf(child, ref_id);
        }
    }
}

impl VirtualLayoutEngine for FakeEngine {
    fn load_layout(&mut self, config: LayoutConfig) -> Result<(), LayoutError> {
        self.log.borrow_mut().loads.push(config.clone());
        if self.log.borrow().reject_loads {
            return Err(LayoutError::ElementNotFound("rejected load".into()));
        }
        self.unbind_all()?;
        self.tree = config.root;
        let items: Vec<ComponentItemConfig> = self
            .tree
            .as_ref()
            .map(|root| root.components().into_iter().cloned().collect())
            .unwrap_or_default();
        for item in &items {
            self.bind(item)?;
        }
        self.reflow();
        Ok(())
    }

    fn save_layout(&self) -> ResolvedLayoutConfig {
        ResolvedLayoutConfig {
            root: self.tree.as_ref().map(|root| self.resolve(root)),
            header: ResolvedHeader::default(),
            dimensions: ResolvedDimensions::default(),
        }
    }

    fn add_item(&mut self, item: ComponentItemConfig) -> Result<(), LayoutError> {
        self.log.borrow_mut().adds += 1;
        let leaf = ItemConfig::Component(item.clone());
        self.tree = Some(match self.tree.take() {
            None => leaf,
            Some(ItemConfig::Component(existing)) => {
                ItemConfig::row(vec![ItemConfig::Component(existing), leaf])
            }
            Some(mut parent) => {
                if let Some(content) = parent.content_mut() {
                    content.push(leaf);
                }
                parent
            }
        });
        self.bind(&item)?;
        self.reflow();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), LayoutError> {
        self.log.borrow_mut().clears += 1;
        self.unbind_all()?;
        self.tree = None;
        Ok(())
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.log.borrow_mut().sizes.push((width, height));
        self.size = (width, height);
        self.reflow();
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().destroyed = true;
        self.leaves.clear();
        self.tree = None;
    }
}
