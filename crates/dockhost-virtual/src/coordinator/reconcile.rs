//! Keeping the engine's leaves in step with the element list.

use dockhost_common::Result;
use tracing::{debug, info};

use crate::element::ElementItem;
use crate::engine::{EngineFactory, VirtualLayoutEngine};
use crate::persist::LayoutPersistence;

use super::{PendingLayout, VirtualLayoutCoordinator};

impl<F, P> VirtualLayoutCoordinator<F, P>
where
    F: EngineFactory,
    P: LayoutPersistence,
{
    /// Replace the element list and reconcile.
    pub fn set_elements(&mut self, elements: Vec<ElementItem>) -> Result<()> {
        self.host.replace_elements(elements);
        self.reconcile()
    }

    /// Bring the engine in line with the element list.
    ///
    /// With a restored tree pending, the tree is loaded whole once every
    /// panel it names has an element, and nothing happens before that.
    /// Otherwise each element without a live container is appended.
    /// Running it again with nothing changed does nothing.
    pub fn reconcile(&mut self) -> Result<()> {
        if !self.ready {
            return Ok(());
        }
        let mut slot = self.engine.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return Ok(());
        };

        if let PendingLayout::Awaiting(config) = &self.pending {
            if !config.is_satisfied_by(|ref_id| self.host.has_element(ref_id)) {
                debug!(
                    needed = config.ref_ids().len(),
                    present = self.host.element_count(),
                    "restored layout still waiting for elements"
                );
                return Ok(());
            }
            if let PendingLayout::Awaiting(config) = std::mem::take(&mut self.pending) {
                info!(panels = config.ref_ids().len(), "applying restored layout");
                engine.load_layout(self.policy.apply(config))?;
            }
            return Ok(());
        }

        for config in self.host.unbound_configs() {
            // an earlier add in this pass may have bound a duplicate refId
            if self.host.is_bound(&config.ref_id) {
                continue;
            }
            debug!(ref_id = %config.ref_id, kind = %config.kind, "appending panel");
            engine.add_item(config.to_component_config())?;
        }
        Ok(())
    }
}
