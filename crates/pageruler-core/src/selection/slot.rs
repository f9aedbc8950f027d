//! A single position in the selection cycle.

use crate::geometry::ORIGIN_RECT;
use kurbo::Rect;

/// Number of slots in one selection cycle.
pub const SLOT_COUNT: usize = 3;

/// A slot optionally bound to a page element and its document rectangle.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    target: Option<T>,
    rect: Rect,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            target: None,
            rect: ORIGIN_RECT,
        }
    }
}

impl<T: PartialEq> Slot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the slot to a target.
    pub fn hold(&mut self, target: T, rect: Rect) {
        self.target = Some(target);
        self.rect = rect;
    }

    /// Replace the stored rectangle of the bound target.
    pub fn refresh(&mut self, rect: Rect) {
        if self.target.is_some() {
            self.rect = rect;
        }
    }

    /// Unbind the slot.
    pub fn clear(&mut self) {
        self.target = None;
        self.rect = ORIGIN_RECT;
    }

    pub fn is_holding(&self) -> bool {
        self.target.is_some()
    }

    /// Check if the slot is bound to exactly this target.
    pub fn is_target(&self, target: &T) -> bool {
        self.target.as_ref() == Some(target)
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Rectangle of the bound target, or [`ORIGIN_RECT`] when empty.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}
