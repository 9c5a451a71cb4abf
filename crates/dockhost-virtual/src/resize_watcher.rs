//! Frame-debounced resize watching for a single element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

use crate::element::{ElementRef, PanelElement};
use crate::platform::{FrameId, FrameScheduler, ResizeSource};

type ResizeCallback = Rc<RefCell<Box<dyn FnMut(&dyn PanelElement)>>>;

/// Calls back with the watched element at most once per frame, no matter
/// how many resize notifications arrive in between.
///
/// The callback also runs once, synchronously, when the watcher is created.
/// Dropping the watcher disposes it.
pub struct ResizeWatcher {
    element: ElementRef,
    frames: Rc<dyn FrameScheduler>,
    source: Rc<dyn ResizeSource>,
    pending: Rc<Cell<Option<FrameId>>>,
    disposed: bool,
}

impl ResizeWatcher {
    pub fn new(
        element: ElementRef,
        frames: Rc<dyn FrameScheduler>,
        source: Rc<dyn ResizeSource>,
        callback: impl FnMut(&dyn PanelElement) + 'static,
    ) -> Self {
        let callback: ResizeCallback = Rc::new(RefCell::new(Box::new(callback)));
        (&mut *callback.borrow_mut())(element.as_ref());

        let pending: Rc<Cell<Option<FrameId>>> = Rc::new(Cell::new(None));
        let on_resize = {
            let element = Rc::clone(&element);
            let frames = Rc::clone(&frames);
            let pending = Rc::clone(&pending);
            move || {
                if let Some(id) = pending.take() {
                    frames.cancel_frame(id);
                }
                let own_id: Rc<Cell<Option<FrameId>>> = Rc::new(Cell::new(None));
                let fire = {
                    let element = Rc::clone(&element);
                    let pending = Rc::clone(&pending);
                    let callback = Rc::clone(&callback);
                    let own_id = Rc::clone(&own_id);
                    move || {
                        if pending.get() == own_id.get() {
                            pending.set(None);
                        }
                        (&mut *callback.borrow_mut())(element.as_ref());
                    }
                };
                let id = frames.request_frame(Box::new(fire));
                own_id.set(Some(id));
                pending.set(Some(id));
            }
        };
        source.observe(&element, Rc::new(on_resize));
        debug!("resize watcher attached");

        Self {
            element,
            frames,
            source,
            pending,
            disposed: false,
        }
    }

    /// Whether a callback is scheduled for the next frame.
    pub fn has_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Cancel any scheduled callback and stop observing. Safe to call twice.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(id) = self.pending.take() {
            self.frames.cancel_frame(id);
        }
        self.source.unobserve(&self.element);
        self.disposed = true;
        debug!("resize watcher disposed");
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.dispose();
    }
}
