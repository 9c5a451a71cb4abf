//! Host platform seams: frame scheduling and element resize notification.
//!
//! Each seam is a trait plus a queue-backed implementation that a host
//! drives from its own event loop (and that tests drive by hand).

mod frames;
mod resize;

pub use frames::{FrameId, FrameQueue, FrameScheduler};
pub use resize::{ResizeNotifier, ResizeSource};
