//! Saving, restoring and resetting the layout.

use dockhost_common::Result;
use dockhost_layout::{ElementConfig, LayoutConfig};
use tracing::{debug, info};

use crate::engine::{EngineFactory, VirtualLayoutEngine};
use crate::persist::LayoutPersistence;

use super::{PendingLayout, VirtualLayoutCoordinator};

impl<F, P> VirtualLayoutCoordinator<F, P>
where
    F: EngineFactory,
    P: LayoutPersistence,
{
    /// Persist the engine's current layout. Does nothing before mount.
    pub fn save_layout(&self) -> Result<()> {
        let slot = self.engine.borrow();
        let Some(engine) = slot.as_ref() else {
            debug!("save skipped, not mounted");
            return Ok(());
        };
        let resolved = engine.save_layout();
        drop(slot);
        self.persist.patch(&resolved)?;
        info!("layout saved");
        Ok(())
    }

    /// Read the stored layout and park it until its elements exist.
    ///
    /// Returns the panel configs the host must materialize, in depth-first
    /// leaf order, or `None` when nothing usable is stored. A mounted
    /// engine is cleared first.
    pub fn load_layout(&mut self) -> Result<Option<Vec<ElementConfig>>> {
        let Some(resolved) = self.persist.load()? else {
            debug!("no stored layout");
            return Ok(None);
        };
        let config = LayoutConfig::from_resolved(&resolved);
        if config.root.is_none() {
            debug!("stored layout has no root");
            return Ok(None);
        }

        if let Some(engine) = self.engine.borrow_mut().as_mut() {
            engine.clear()?;
        }

        let configs = config.element_configs();
        info!(panels = configs.len(), "stored layout loaded, waiting for elements");
        self.pending = PendingLayout::Awaiting(config);
        Ok(Some(configs))
    }

    /// Empty the engine and drop any pending restored layout. Does nothing
    /// before mount.
    pub fn reset(&mut self) -> Result<()> {
        let mut slot = self.engine.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return Ok(());
        };
        engine.clear()?;
        self.pending = PendingLayout::Idle;
        info!("layout reset");
        Ok(())
    }
}
