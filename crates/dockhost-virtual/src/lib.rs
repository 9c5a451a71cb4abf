//! Virtual docking layout coordination.
//!
//! An external engine computes the docking geometry, while panel content
//! lives in host-owned elements that are positioned over the engine's
//! containers. This crate provides:
//! - The coordinator that binds the host's element list to the engine
//! - Deferred restore of saved layouts
//! - Frame-debounced resize watching of the layout root
//! - A panel registry for host UIs
//! - JSON layout persistence

pub mod coordinator;
pub mod element;
pub mod engine;
pub mod persist;
pub mod platform;
pub mod registry;
pub mod resize_watcher;

#[cfg(test)]
mod testing;

pub use coordinator::VirtualLayoutCoordinator;
pub use element::{ElementItem, ElementRef, PanelElement, StyleProperty};
pub use engine::{
    ComponentContainer, EngineFactory, LayoutHost, LogicalZIndex, VirtualComponent,
    VirtualLayoutEngine,
};
pub use persist::{JsonFilePersistence, LayoutPersistence, MemoryPersistence};
pub use platform::{FrameId, FrameQueue, FrameScheduler, ResizeNotifier, ResizeSource};
pub use registry::{create_element_config, PanelBoard};
pub use resize_watcher::ResizeWatcher;
