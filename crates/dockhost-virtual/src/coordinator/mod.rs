//! Binds the host's reactive element list to a virtual layout engine.
//!
//! The coordinator owns the engine and keeps three things in step:
//! - the elements the host has materialized
//! - the leaves the engine holds live containers for
//! - a restored layout that is waiting for its elements to exist
//!
//! Restores are deferred: [`VirtualLayoutCoordinator::load_layout`] parks
//! the stored tree and reports which panels it needs, and the tree is only
//! handed to the engine once every one of them has an element.

mod host;
mod lifecycle;
mod persistence;
mod reconcile;


use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use dockhost_layout::{DisplayPolicy, LayoutConfig};

use crate::engine::EngineFactory;
use crate::resize_watcher::ResizeWatcher;

use self::host::CoordinatorHost;

/// A restored tree either waits for its elements or there is none.
#[derive(Debug, Default)]
enum PendingLayout {
    #[default]
    Idle,
    Awaiting(LayoutConfig),
}

pub struct VirtualLayoutCoordinator<F: EngineFactory, P> {
    factory: F,
    persist: P,
    policy: DisplayPolicy,
    host: Rc<CoordinatorHost>,
    engine: Rc<RefCell<Option<F::Engine>>>,
    watcher: Option<ResizeWatcher>,
    pending: PendingLayout,
    ready: bool,
}

impl<F: EngineFactory, P> VirtualLayoutCoordinator<F, P> {
    /// `on_closed` runs with the panel's refId whenever the engine drops a
    /// leaf. It must not call back into the coordinator.
    pub fn new(
        factory: F,
        persist: P,
        policy: DisplayPolicy,
        on_closed: impl FnMut(&str) + 'static,
    ) -> Self {
        Self {
            factory,
            persist,
            policy,
            host: Rc::new(CoordinatorHost::new(Box::new(on_closed))),
            engine: Rc::new(RefCell::new(None)),
            watcher: None,
            pending: PendingLayout::Idle,
            ready: false,
        }
    }

    /// True between the initial empty load on mount and unmount.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn has_pending_layout(&self) -> bool {
        matches!(self.pending, PendingLayout::Awaiting(_))
    }

    /// RefIds with a live engine container, sorted.
    pub fn bound_ref_ids(&self) -> Vec<String> {
        self.host.bound_ref_ids()
    }

    pub fn element_count(&self) -> usize {
        self.host.element_count()
    }

    pub fn policy(&self) -> DisplayPolicy {
        self.policy
    }

    pub fn persistence(&self) -> &P {
        &self.persist
    }

    /// The engine, while mounted.
    pub fn engine(&self) -> Option<Ref<'_, F::Engine>> {
        Ref::filter_map(self.engine.borrow(), |engine| engine.as_ref()).ok()
    }

    /// Mutable access to the engine, while mounted. Engine calls made
    /// through this bypass reconciliation.
    pub fn engine_mut(&self) -> Option<RefMut<'_, F::Engine>> {
        RefMut::filter_map(self.engine.borrow_mut(), |engine| engine.as_mut()).ok()
    }
}

impl<F: EngineFactory, P> Drop for VirtualLayoutCoordinator<F, P> {
    fn drop(&mut self) {
        self.teardown();
    }
}
