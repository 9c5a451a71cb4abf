//! Storage for saved layouts, keyed by a single storage key.
//!
//! Layouts are stored as the engine's resolved form, serialized as JSON.

mod file;
mod memory;

use std::rc::Rc;

use dockhost_common::PersistError;
use dockhost_layout::ResolvedLayoutConfig;

pub use file::JsonFilePersistence;
pub use memory::MemoryPersistence;

/// Where saved layouts live.
pub trait LayoutPersistence {
    /// Store `layout`, replacing whatever was stored before.
    fn patch(&self, layout: &ResolvedLayoutConfig) -> Result<(), PersistError>;

    /// The stored layout, or `None` when nothing has been saved.
    fn load(&self) -> Result<Option<ResolvedLayoutConfig>, PersistError>;

    /// Forget the stored layout. Removing nothing is not an error.
    fn remove(&self) -> Result<(), PersistError>;
}

impl<T: LayoutPersistence + ?Sized> LayoutPersistence for Rc<T> {
    fn patch(&self, layout: &ResolvedLayoutConfig) -> Result<(), PersistError> {
        (**self).patch(layout)
    }

    fn load(&self) -> Result<Option<ResolvedLayoutConfig>, PersistError> {
        (**self).load()
    }

    fn remove(&self) -> Result<(), PersistError> {
        (**self).remove()
    }
}

pub(crate) fn encode(layout: &ResolvedLayoutConfig) -> Result<String, PersistError> {
    serde_json::to_string_pretty(layout).map_err(|e| PersistError::Serialize(e.to_string()))
}

pub(crate) fn decode(raw: &str) -> Result<ResolvedLayoutConfig, PersistError> {
    serde_json::from_str(raw).map_err(|e| PersistError::Deserialize(e.to_string()))
}
