//! The coordinator's side of the engine callbacks.
//!
//! The engine calls in here re-entrantly from inside `load_layout`,
//! `add_item` and `clear`, so all shared state sits behind short-lived
//! `RefCell` borrows that are never held across a call out.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use dockhost_common::{LayoutError, Rect};
use dockhost_layout::{
    component_state, ref_id_from_state, ElementConfig, ResolvedComponentItemConfig,
};
use serde_json::Value as JsonValue;
use tracing::{debug, error};

use crate::element::{px, ElementItem, ElementRef, StyleProperty};
use crate::engine::{ComponentContainer, LayoutHost, LogicalZIndex, VirtualComponent};

pub(crate) type ClosedHandler = Box<dyn FnMut(&str)>;

#[derive(Default)]
struct HostState {
    root: Option<ElementRef>,
    root_rect: Rect,
    elements: Vec<ElementItem>,
    /// RefIds the engine currently holds a live container for.
    bound: HashSet<String>,
}

impl HostState {
    fn find(&self, ref_id: &str) -> Option<&ElementItem> {
        self.elements.iter().find(|item| item.ref_id() == ref_id)
    }
}

pub(crate) struct CoordinatorHost {
    state: Rc<RefCell<HostState>>,
    on_closed: RefCell<ClosedHandler>,
}

impl CoordinatorHost {
    pub(crate) fn new(on_closed: ClosedHandler) -> Self {
        Self {
            state: Rc::new(RefCell::new(HostState::default())),
            on_closed: RefCell::new(on_closed),
        }
    }

    pub(crate) fn set_root(&self, root: Option<ElementRef>) {
        self.state.borrow_mut().root = root;
    }

    pub(crate) fn root_rect(&self) -> Rect {
        self.state.borrow().root_rect
    }

    pub(crate) fn set_root_rect(&self, rect: Rect) {
        self.state.borrow_mut().root_rect = rect;
    }

    pub(crate) fn replace_elements(&self, elements: Vec<ElementItem>) {
        self.state.borrow_mut().elements = elements;
    }

    pub(crate) fn element_count(&self) -> usize {
        self.state.borrow().elements.len()
    }

    pub(crate) fn has_element(&self, ref_id: &str) -> bool {
        self.state.borrow().find(ref_id).is_some()
    }

    pub(crate) fn is_bound(&self, ref_id: &str) -> bool {
        self.state.borrow().bound.contains(ref_id)
    }

    pub(crate) fn bound_ref_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.state.borrow().bound.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Configs for elements the engine has no container for yet, in list order.
    pub(crate) fn unbound_configs(&self) -> Vec<ElementConfig> {
        let state = self.state.borrow();
        state
            .elements
            .iter()
            .filter(|item| !state.bound.contains(item.ref_id()))
            .map(|item| item.config.clone())
            .collect()
    }

    fn element_for(&self, ref_id: &str) -> Option<ElementRef> {
        self.state
            .borrow()
            .find(ref_id)
            .map(|item| Rc::clone(&item.element))
    }
}

impl LayoutHost for CoordinatorHost {
    fn bind_component(
        &self,
        _container: &dyn ComponentContainer,
        item: &ResolvedComponentItemConfig,
    ) -> Result<Box<dyn VirtualComponent>, LayoutError> {
        let ref_id = ref_id_from_state(item.component_state.as_ref()).inspect_err(|_| {
            error!(component_type = %item.component_type, "leaf has no ref id");
        })?;
        let element = self.element_for(&ref_id).ok_or_else(|| {
            error!(ref_id = %ref_id, "no element for bound leaf");
            LayoutError::ElementNotFound(ref_id.clone())
        })?;
        self.state.borrow_mut().bound.insert(ref_id.clone());
        debug!(ref_id = %ref_id, "component bound");

        Ok(Box::new(BoundPanel {
            ref_id,
            element,
            state: Rc::clone(&self.state),
        }))
    }

    fn unbind_component(&self, container: &dyn ComponentContainer) -> Result<(), LayoutError> {
        let ref_id = ref_id_from_state(container.state())?;
        self.state.borrow_mut().bound.remove(&ref_id);
        debug!(ref_id = %ref_id, "component unbound");
        (&mut *self.on_closed.borrow_mut())(ref_id.as_str());
        Ok(())
    }

    fn before_virtual_rect(&self) {
        let root = self.state.borrow().root.clone();
        if let Some(root) = root {
            self.set_root_rect(root.bounding_rect());
        }
    }
}

/// Writes engine geometry onto one panel element.
struct BoundPanel {
    ref_id: String,
    element: ElementRef,
    state: Rc<RefCell<HostState>>,
}

impl VirtualComponent for BoundPanel {
    fn rect_required(&self, container: &dyn ComponentContainer, width: f64, height: f64) {
        let (left, top) = container.element_rect().offset_from(&self.state.borrow().root_rect);
        self.element.set_style(StyleProperty::Left, &px(left));
        self.element.set_style(StyleProperty::Top, &px(top));
        self.element.set_style(StyleProperty::Width, &px(width));
        self.element.set_style(StyleProperty::Height, &px(height));
    }

    fn visibility_required(&self, visible: bool) {
        let display = if visible { "" } else { "none" };
        self.element.set_style(StyleProperty::Display, display);
    }

    fn z_index_required(&self, _logical: LogicalZIndex, default_z_index: &str) {
        self.element.set_style(StyleProperty::ZIndex, default_z_index);
    }

    fn state_requested(&self) -> JsonValue {
        let state = self.state.borrow();
        let props = state.find(&self.ref_id).and_then(|item| item.config.props.as_ref());
        component_state(&self.ref_id, props)
    }
}
