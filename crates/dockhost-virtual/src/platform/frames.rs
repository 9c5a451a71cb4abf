use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

/// Handle for a requested frame, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(u64);

/// Runs a callback once, just before the host's next redraw.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FrameId;

    /// Drop a requested callback. Unknown or already-run ids are ignored.
    fn cancel_frame(&self, id: FrameId);
}

#[derive(Default)]
struct QueueState {
    next_id: u64,
    pending: Vec<(FrameId, Box<dyn FnOnce()>)>,
}

/// Frame callbacks held until the host calls [`FrameQueue::run_frame`].
///
/// Cloning yields another handle onto the same queue.
#[derive(Clone, Default)]
pub struct FrameQueue {
    state: Rc<RefCell<QueueState>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    /// Run every callback queued so far. Callbacks requested while the
    /// frame runs wait for the following frame, and callbacks cancelled
    /// by an earlier one in the same frame are skipped. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let due: Vec<FrameId> = self.state.borrow().pending.iter().map(|(id, _)| *id).collect();
        let mut count = 0;
        for id in due {
            let callback = {
                let mut state = self.state.borrow_mut();
                match state.pending.iter().position(|(pending, _)| *pending == id) {
                    Some(index) => state.pending.remove(index).1,
                    None => continue,
                }
            };
            callback();
            count += 1;
        }
        if count > 0 {
            trace!(count, "frame callbacks run");
        }
        count
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> FrameId {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let id = FrameId(state.next_id);
        state.pending.push((id, callback));
        id
    }

    fn cancel_frame(&self, id: FrameId) {
        self.state
            .borrow_mut()
            .pending
            .retain(|(pending, _)| *pending != id);
    }
}
