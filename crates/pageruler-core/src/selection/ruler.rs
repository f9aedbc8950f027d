//! The selection cycle: hover to pick, click to confirm, three picks per cycle.

use super::host::{Overlay, Page};
use super::slot::{SLOT_COUNT, Slot};
use crate::annotate::{self, DistanceAnnotation, InfoAnnotation, LabelFormat};
use crate::config::RulerConfig;
use crate::scroll::ScrollOffset;
use kurbo::Rect;

/// Slots whose overlays and targets never get picked up by hovering,
/// in addition to the active slot.
const GUARDED_SLOTS: [usize; 2] = [0, 2];

/// Annotation produced by a confirm.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Info(InfoAnnotation),
    Distances(DistanceAnnotation),
}

/// Outcome of a confirm event.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirm {
    /// Detached, or the active slot holds nothing.
    Ignored,
    /// The cursor moved from `from` to `to` (0 after a full cycle).
    Advanced {
        from: usize,
        to: usize,
        annotation: Option<Annotation>,
    },
}

impl Confirm {
    /// Whether the host should suppress the event's default action and propagation.
    pub fn consumed(&self) -> bool {
        matches!(self, Confirm::Advanced { .. })
    }
}

/// Tracks up to three picked elements and drives the overlay.
pub struct Ruler<P: Page, O: Overlay<P::Target>> {
    page: P,
    overlay: O,
    attached: bool,
    cursor: usize,
    slots: [Slot<P::Target>; SLOT_COUNT],
    scroll: ScrollOffset,
    style_properties: Vec<String>,
    label_format: LabelFormat,
}

impl<P: Page, O: Overlay<P::Target>> Ruler<P, O> {
    /// Create a detached ruler.
    pub fn new(page: P, overlay: O, config: &RulerConfig) -> Self {
        Self {
            page,
            overlay,
            attached: false,
            cursor: 0,
            slots: std::array::from_fn(|_| Slot::default()),
            scroll: ScrollOffset::default(),
            style_properties: config.style_properties.clone(),
            label_format: config.label_format(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Index of the slot hovering currently feeds.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slot(&self, index: usize) -> Option<&Slot<P::Target>> {
        self.slots.get(index)
    }

    pub fn scroll(&self) -> ScrollOffset {
        self.scroll
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut O {
        &mut self.overlay
    }

    /// Start tracking. Returns the new attachment flag.
    pub fn attach(&mut self) -> bool {
        if !self.attached {
            log::info!("Ruler attached");
        }
        self.attached = true;
        self.scroll = self.page.scroll_offset();
        self.attached
    }

    /// Stop tracking and clear every slot. Returns the new attachment flag.
    pub fn detach(&mut self) -> bool {
        if self.attached {
            log::info!("Ruler detached");
        }
        self.attached = false;
        self.reset();
        self.attached
    }

    /// Attach if detached, detach otherwise.
    pub fn toggle(&mut self) -> bool {
        if self.attached {
            self.detach()
        } else {
            self.attach()
        }
    }

    /// Re-read the document scroll position.
    pub fn on_scroll(&mut self) {
        if self.attached {
            self.scroll = self.page.scroll_offset();
        }
    }

    /// Bind the active slot to the element under the pointer.
    ///
    /// Returns whether the active slot was rebound.
    pub fn on_pointer_move(&mut self, target: P::Target) -> bool {
        if !self.attached {
            return false;
        }
        let active = self.cursor;
        if self.claims(active, &target) || GUARDED_SLOTS.iter().any(|&i| self.claims(i, &target)) {
            return false;
        }

        let rect = self.document_rect(&target);
        self.slots[active].hold(target, rect);
        self.overlay.place_box(active, rect);
        true
    }

    /// Confirm the active slot and advance the cursor.
    pub fn on_confirm(&mut self) -> Confirm {
        if !self.attached || !self.slots[self.cursor].is_holding() {
            return Confirm::Ignored;
        }

        let from = self.cursor;
        let annotation = match from {
            0 => self.show_info(0).map(Annotation::Info),
            1 => Some(Annotation::Distances(self.show_distances(0, 1))),
            // The third slot only holds a tag-along element.
            _ => None,
        };

        self.cursor += 1;
        if self.cursor >= SLOT_COUNT {
            log::debug!("Selection cycle complete, resetting");
            self.reset();
        }
        log::debug!("Cursor {} -> {}", from, self.cursor);

        Confirm::Advanced {
            from,
            to: self.cursor,
            annotation,
        }
    }

    fn reset(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            slot.clear();
            self.overlay.clear(index);
        }
        self.cursor = 0;
    }

    /// Check if the slot is bound to `target` or draws with it.
    fn claims(&self, slot: usize, target: &P::Target) -> bool {
        self.slots[slot].is_target(target) || self.overlay.owns(slot, target)
    }

    fn document_rect(&self, target: &P::Target) -> Rect {
        self.scroll.to_document(self.page.client_rect(target))
    }

    /// Recompute the slot's rectangle from the page.
    fn refresh(&mut self, slot: usize) -> Rect {
        let rect = match self.slots[slot].target() {
            Some(target) => self.document_rect(target),
            None => return self.slots[slot].rect(),
        };
        self.slots[slot].refresh(rect);
        rect
    }

    fn show_info(&mut self, slot: usize) -> Option<InfoAnnotation> {
        let rect = self.refresh(slot);
        let target = self.slots[slot].target()?;
        let styles = self.page.computed_style(target, &self.style_properties);
        let info = annotate::info(rect, styles);
        self.overlay.show_info(slot, &info);
        Some(info)
    }

    fn show_distances(&mut self, first: usize, second: usize) -> DistanceAnnotation {
        let a = self.refresh(first);
        let b = self.refresh(second);
        let distances = annotate::distances(a, b, &self.label_format);
        log::debug!(
            "Measured {:?} between slots {} and {}: {} line(s)",
            distances.mode,
            first,
            second,
            distances.distances.len()
        );
        self.overlay.show_distances(first, &distances);
        distances
    }
}
