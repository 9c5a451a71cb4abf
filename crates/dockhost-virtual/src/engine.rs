//! The seam between the coordinator and an external virtual layout engine.
//!
//! The engine owns the layout tree and computes geometry; it never renders
//! panel content. Whenever a leaf appears or disappears it calls back into
//! its [`LayoutHost`] synchronously, from inside whichever engine operation
//! caused it.

use std::rc::Rc;

use dockhost_common::{LayoutError, Rect};
use dockhost_layout::{
    ComponentItemConfig, LayoutConfig, ResolvedComponentItemConfig, ResolvedLayoutConfig,
};
use serde_json::Value as JsonValue;

use crate::element::ElementRef;

/// Stacking layers the engine asks a component to be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalZIndex {
    Base,
    Drag,
    StackMaximised,
}

/// The engine's per-leaf container, as seen by the host.
pub trait ComponentContainer {
    /// Bounding rectangle of the container in page coordinates.
    fn element_rect(&self) -> Rect;

    /// The leaf's opaque state, as it was when the leaf was created.
    fn state(&self) -> Option<&JsonValue>;
}

/// Host-side handler for one bound leaf.
pub trait VirtualComponent {
    fn rect_required(&self, container: &dyn ComponentContainer, width: f64, height: f64);
    fn visibility_required(&self, visible: bool);
    fn z_index_required(&self, logical: LogicalZIndex, default_z_index: &str);

    /// Current opaque state, read when the engine saves the layout.
    fn state_requested(&self) -> JsonValue;
}

/// Callbacks the engine makes into the host.
pub trait LayoutHost {
    fn bind_component(
        &self,
        container: &dyn ComponentContainer,
        item: &ResolvedComponentItemConfig,
    ) -> Result<Box<dyn VirtualComponent>, LayoutError>;

    fn unbind_component(&self, container: &dyn ComponentContainer) -> Result<(), LayoutError>;

    /// Called before the engine reports new rectangles to components.
    fn before_virtual_rect(&self);
}

/// Operations the coordinator drives on the engine. Anything that binds or
/// unbinds leaves propagates the host's errors.
pub trait VirtualLayoutEngine {
    fn load_layout(&mut self, config: LayoutConfig) -> Result<(), LayoutError>;
    fn save_layout(&self) -> ResolvedLayoutConfig;
    fn add_item(&mut self, item: ComponentItemConfig) -> Result<(), LayoutError>;
    fn clear(&mut self) -> Result<(), LayoutError>;
    fn set_size(&mut self, width: f64, height: f64);
    fn destroy(&mut self);
}

/// Builds the engine once the root element exists.
pub trait EngineFactory {
    type Engine: VirtualLayoutEngine;

    fn construct(&mut self, root: ElementRef, host: Rc<dyn LayoutHost>) -> Self::Engine;
}

impl<F, E> EngineFactory for F
where
    F: FnMut(ElementRef, Rc<dyn LayoutHost>) -> E,
    E: VirtualLayoutEngine,
{
    type Engine = E;

    fn construct(&mut self, root: ElementRef, host: Rc<dyn LayoutHost>) -> E {
        self(root, host)
    }
}
