//! Mount and unmount.

use std::rc::Rc;

use dockhost_common::Result;
use dockhost_layout::LayoutConfig;
use tracing::{debug, error, info};

use crate::element::{ElementRef, PanelElement};
use crate::engine::{EngineFactory, LayoutHost, VirtualLayoutEngine};
use crate::persist::LayoutPersistence;
use crate::platform::{FrameScheduler, ResizeSource};
use crate::resize_watcher::ResizeWatcher;

use super::VirtualLayoutCoordinator;

impl<F, P> VirtualLayoutCoordinator<F, P>
where
    F: EngineFactory,
    F::Engine: 'static,
    P: LayoutPersistence,
{
    /// Attach to `root`: start watching its size, construct the engine,
    /// load an empty layout and reconcile the current element list.
    ///
    /// Mounting again first unmounts.
    pub fn mount(
        &mut self,
        root: ElementRef,
        frames: Rc<dyn FrameScheduler>,
        resize: Rc<dyn ResizeSource>,
    ) -> Result<()> {
        if self.engine.borrow().is_some() {
            debug!("already mounted, remounting");
            self.unmount();
        }
        self.host.set_root(Some(Rc::clone(&root)));

        let on_resize = {
            let host = Rc::clone(&self.host);
            let engine = Rc::clone(&self.engine);
            move |element: &dyn PanelElement| {
                let rect = element.bounding_rect();
                host.set_root_rect(rect);
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.set_size(rect.width, rect.height);
                }
            }
        };
        self.watcher = Some(ResizeWatcher::new(
            Rc::clone(&root),
            frames,
            resize,
            on_resize,
        ));

        let host: Rc<dyn LayoutHost> = self.host.clone();
        let mut engine = self.factory.construct(root, host);
        let size = self.host.root_rect();
        engine.set_size(size.width, size.height);
        if let Err(e) = engine.load_layout(self.policy.apply(LayoutConfig::empty())) {
            error!(error = %e, "initial layout load failed");
            engine.destroy();
            self.teardown();
            return Err(e.into());
        }
        *self.engine.borrow_mut() = Some(engine);

        self.ready = true;
        info!(
            width = size.width,
            height = size.height,
            "virtual layout mounted"
        );
        self.reconcile()
    }

    /// Destroy the engine and stop watching the root. A pending restored
    /// layout survives and is applied on the next mount.
    pub fn unmount(&mut self) {
        if self.teardown() {
            info!("virtual layout unmounted");
        }
    }
}

impl<F: EngineFactory, P> VirtualLayoutCoordinator<F, P> {
    /// Returns whether there was anything to tear down.
    pub(super) fn teardown(&mut self) -> bool {
        let engine = self.engine.borrow_mut().take();
        let had_engine = engine.is_some();
        if let Some(mut engine) = engine {
            engine.destroy();
        }
        if let Some(mut watcher) = self.watcher.take() {
            watcher.dispose();
        }
        self.host.set_root(None);
        self.ready = false;
        had_engine
    }
}
