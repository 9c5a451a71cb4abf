use serde::{Deserialize, Serialize};

/// A bounding rectangle in CSS pixels, as reported by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Position of this rect's top-left corner relative to `origin`'s.
    pub fn offset_from(&self, origin: &Rect) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}
