//! Seams between the selection cycle and the page it runs in.

use crate::annotate::{DistanceAnnotation, InfoAnnotation, StyleEntry};
use crate::scroll::ScrollOffset;
use kurbo::Rect;

/// Read access to the page: element geometry, computed styles and scroll.
pub trait Page {
    /// Opaque handle to an element on the page.
    type Target: Clone + PartialEq;

    /// Bounding rectangle of `target` relative to the viewport.
    fn client_rect(&self, target: &Self::Target) -> Rect;

    /// Resolved values for the named style properties, in the same order.
    fn computed_style(&self, target: &Self::Target, properties: &[String]) -> Vec<StyleEntry>;

    /// Current scroll position of the document.
    fn scroll_offset(&self) -> ScrollOffset;
}

/// Visual output for each slot: its outline box and any annotation.
///
/// Rectangles and annotations arrive in document space.
pub trait Overlay<T> {
    /// Move the slot's outline box.
    fn place_box(&mut self, slot: usize, rect: Rect);

    /// Show a style listing next to the slot's box.
    fn show_info(&mut self, slot: usize, info: &InfoAnnotation);

    /// Show distance lines in the slot's overlay.
    fn show_distances(&mut self, slot: usize, distances: &DistanceAnnotation);

    /// Collapse the slot's box and remove its annotations.
    fn clear(&mut self, slot: usize);

    /// Check if `target` is one of the elements the slot's overlay is drawn with.
    fn owns(&self, slot: usize, target: &T) -> bool;
}
