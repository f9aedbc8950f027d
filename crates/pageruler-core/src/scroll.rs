//! Scroll offset for converting viewport rectangles into document space.

use kurbo::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// How far the page is scrolled.
///
/// Element rectangles come from the host relative to the viewport; adding
/// the offset places them in document space, where overlay elements live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    /// Vertical scroll in pixels.
    pub top: f64,
    /// Horizontal scroll in pixels.
    pub left: f64,
}

impl ScrollOffset {
    /// Create a new offset.
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Offset as a translation vector.
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Convert a viewport rectangle to document coordinates.
    ///
    /// Width and height are preserved.
    pub fn to_document(&self, rect: Rect) -> Rect {
        rect + self.delta()
    }
}
