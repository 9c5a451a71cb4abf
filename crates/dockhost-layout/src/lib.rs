//! Persisted layout model for virtual docking layouts.
//!
//! Provides:
//! - The Composite layout tree (`ItemConfig`) and its resolved form
//! - Depth-first leaf enumeration
//! - Conversion between panel configs and layout leaves
//! - The display policy applied before a layout is loaded

pub mod display;
pub mod element;
pub mod tree;

pub use display::DisplayPolicy;
pub use element::{component_state, ref_id_from_state, ElementConfig, PanelKind};
pub use tree::{
    ComponentItemConfig, HeaderShow, ItemConfig, LayoutConfig, ResolvedComponentItemConfig,
    ResolvedItemConfig, ResolvedLayoutConfig,
};
