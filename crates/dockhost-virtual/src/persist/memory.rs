use std::cell::RefCell;
use std::rc::Rc;

use dockhost_common::PersistError;
use dockhost_layout::ResolvedLayoutConfig;

use super::{decode, encode, LayoutPersistence};

/// In-process store holding the serialized layout, like a browser's
/// local storage slot. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Replace the stored text verbatim.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.slot.borrow_mut() = Some(raw.into());
    }
}

impl LayoutPersistence for MemoryPersistence {
    fn patch(&self, layout: &ResolvedLayoutConfig) -> Result<(), PersistError> {
        let raw = encode(layout)?;
        *self.slot.borrow_mut() = Some(raw);
        Ok(())
    }

    fn load(&self) -> Result<Option<ResolvedLayoutConfig>, PersistError> {
        self.slot.borrow().as_deref().map(decode).transpose()
    }

    fn remove(&self) -> Result<(), PersistError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}
