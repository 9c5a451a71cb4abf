use std::cell::RefCell;
use std::rc::Rc;

use crate::element::{same_element, ElementRef};

/// Reports size changes of observed elements.
pub trait ResizeSource {
    /// Call `notify` whenever `target` changes size, until unobserved.
    fn observe(&self, target: &ElementRef, notify: Rc<dyn Fn()>);

    /// Stop all notifications for `target`.
    fn unobserve(&self, target: &ElementRef);
}

/// Resize notifications fanned out by the host after it detects a size
/// change (for example on a window resize event).
///
/// Cloning yields another handle onto the same observer list.
#[derive(Clone, Default)]
pub struct ResizeNotifier {
    observers: Rc<RefCell<Vec<(ElementRef, Rc<dyn Fn()>)>>>,
}

impl ResizeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that `target` changed size. Returns whether anyone observes it.
    pub fn notify(&self, target: &ElementRef) -> bool {
        let matching: Vec<Rc<dyn Fn()>> = self
            .observers
            .borrow()
            .iter()
            .filter(|(element, _)| same_element(element, target))
            .map(|(_, notify)| Rc::clone(notify))
            .collect();
        for notify in &matching {
            notify();
        }
        !matching.is_empty()
    }

    /// Report a size change for every observed element.
    pub fn notify_all(&self) {
        let all: Vec<Rc<dyn Fn()>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, notify)| Rc::clone(notify))
            .collect();
        for notify in all {
            notify();
        }
    }

    pub fn observed_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl ResizeSource for ResizeNotifier {
    fn observe(&self, target: &ElementRef, notify: Rc<dyn Fn()>) {
        self.observers
            .borrow_mut()
            .push((Rc::clone(target), notify));
    }

    fn unobserve(&self, target: &ElementRef) {
        self.observers
            .borrow_mut()
            .retain(|(element, _)| !same_element(element, target));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use dockhost_common::Rect;

    use super::*;
    use crate::testing::FakeElement;

    #[test]
    fn notifies_only_matching_observers() {
        let notifier = ResizeNotifier::new();
        let a: ElementRef = FakeElement::new(Rect::default());
        let b: ElementRef = FakeElement::new(Rect::default());
        let hits = Rc::new(Cell::new(0));
        {
            let hits = Rc::clone(&hits);
            notifier.observe(&a, Rc::new(move || hits.set(hits.get() + 1)));
        }

        assert!(notifier.notify(&a));
        assert!(!notifier.notify(&b));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unobserve_stops_notifications() {
        let notifier = ResizeNotifier::new();
        let a: ElementRef = FakeElement::new(Rect::default());
        let hits = Rc::new(Cell::new(0));
        {
            let hits = Rc::clone(&hits);
            notifier.observe(&a, Rc::new(move || hits.set(hits.get() + 1)));
        }
        notifier.unobserve(&a);
        assert_eq!(notifier.observed_count(), 0);
        notifier.notify_all();
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn observer_may_unobserve_while_notified() {
        let notifier = ResizeNotifier::new();
        let a: ElementRef = FakeElement::new(Rect::default());
        {
            let inner = notifier.clone();
            let target = Rc::clone(&a);
            notifier.observe(&a, Rc::new(move || inner.unobserve(&target)));
        }
        assert!(notifier.notify(&a));
        assert_eq!(notifier.observed_count(), 0);
    }
}
