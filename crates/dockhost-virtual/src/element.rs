//! Live panel elements and the style properties the coordinator writes.

use std::fmt;
use std::rc::Rc;

use dockhost_common::Rect;
use dockhost_layout::ElementConfig;

/// Inline style properties written onto a panel element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Left,
    Top,
    Width,
    Height,
    Display,
    ZIndex,
}

impl StyleProperty {
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::Left => "left",
            StyleProperty::Top => "top",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::Display => "display",
            StyleProperty::ZIndex => "z-index",
        }
    }
}

/// A host-owned element that renders a panel's content (or the layout root).
///
/// Implementations are handles onto platform objects and use interior
/// mutability, so every method takes `&self`.
pub trait PanelElement {
    /// Current bounding rectangle in page coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Set one inline style property. An empty `value` clears it.
    fn set_style(&self, property: StyleProperty, value: &str);
}

pub type ElementRef = Rc<dyn PanelElement>;

/// Whether two handles point at the same element.
pub fn same_element(a: &ElementRef, b: &ElementRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

/// A panel config together with the element the host materialized for it.
#[derive(Clone)]
pub struct ElementItem {
    pub config: ElementConfig,
    pub element: ElementRef,
}

impl ElementItem {
    pub fn new(config: ElementConfig, element: ElementRef) -> Self {
        Self { config, element }
    }

    pub fn ref_id(&self) -> &str {
        &self.config.ref_id
    }
}

impl fmt::Debug for ElementItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementItem")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
