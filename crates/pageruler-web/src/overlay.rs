//! DOM overlay: an outline box, an info listing and four distance lines per slot.

use crate::dom::dom_error;
use kurbo::Rect;
use pageruler_core::geometry::{Axis, ORIGIN_RECT};
use pageruler_core::{DistanceAnnotation, InfoAnnotation, Overlay, RulerError, RulerResult, SLOT_COUNT};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

/// Class names the page stylesheet hooks into.
const BORDER_CLASS: &str = "ruler-selecting-box";
const INFO_CLASS: &str = "ruler-info-box";
const DISTANCE_CLASS: &str = "ruler-distance-box";

fn create_element(
    document: &Document,
    name: &str,
    class: Option<&str>,
    parent: &Node,
) -> RulerResult<HtmlElement> {
    let element = document
        .create_element(name)
        .map_err(|e| dom_error("createElement", e))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| RulerError::Dom(format!("<{}> is not an HtmlElement", name)))?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    parent
        .append_child(&element)
        .map_err(|e| dom_error("appendChild", e))?;
    Ok(element)
}

fn set_px(element: &HtmlElement, property: &str, value: f64) {
    if let Err(e) = element.style().set_property(property, &format!("{}px", value)) {
        log::warn!("{}", dom_error(property, e));
    }
}

/// Overlay elements for one slot.
struct SelectingBox {
    document: Document,
    root: HtmlElement,
    /// Top, right, bottom, left.
    borders: [HtmlElement; 4],
    info: HtmlElement,
    distances: [HtmlElement; 4],
}

impl SelectingBox {
    fn new(document: &Document, parent: &Node) -> RulerResult<Self> {
        let root = create_element(document, "div", None, parent)?;
        let border = || create_element(document, "div", Some(BORDER_CLASS), &root);
        let borders = [border()?, border()?, border()?, border()?];
        let info = create_element(document, "div", Some(INFO_CLASS), &root)?;
        let distance = || create_element(document, "div", Some(DISTANCE_CLASS), &root);
        let distances = [distance()?, distance()?, distance()?, distance()?];
        Ok(Self {
            document: document.clone(),
            root,
            borders,
            info,
            distances,
        })
    }

    fn place(&self, rect: Rect) {
        for (i, border) in self.borders.iter().enumerate() {
            set_px(border, "top", rect.y0);
            set_px(border, "left", rect.x0);
            if i % 2 == 0 {
                set_px(border, "width", rect.width());
            } else {
                set_px(border, "height", rect.height());
            }
        }
        set_px(&self.borders[1], "left", rect.x1);
        set_px(&self.borders[2], "top", rect.y1);

        set_px(&self.info, "top", rect.y1);
        set_px(&self.info, "left", rect.x1);
    }

    fn show_info(&self, info: &InfoAnnotation) {
        self.info.set_inner_html("");
        set_px(&self.info, "top", info.anchor.y);
        set_px(&self.info, "left", info.anchor.x);
        for entry in &info.entries {
            match create_element(&self.document, "div", None, &self.info) {
                Ok(line) => line.set_text_content(Some(&format!("{}: {}", entry.name, entry.value))),
                Err(e) => log::warn!("{}", e),
            }
        }
    }

    fn show_distances(&self, annotation: &DistanceAnnotation) {
        for distance in &annotation.distances {
            let element = &self.distances[distance.kind.element_index()];
            let segment = distance.segment;
            let origin = segment.origin();
            let length = segment.length();
            set_px(element, "top", origin.y);
            set_px(element, "left", origin.x);
            match segment.axis() {
                Axis::Vertical => {
                    set_px(element, "height", length);
                    set_px(element, "width", 0.0);
                }
                Axis::Horizontal => {
                    set_px(element, "height", 0.0);
                    set_px(element, "width", length);
                }
            }
            element.set_inner_html("");
            match create_element(&self.document, "span", None, element) {
                Ok(label) => label.set_text_content(Some(&distance.label)),
                Err(e) => log::warn!("{}", e),
            }
        }
    }

    fn clear(&self) {
        self.place(ORIGIN_RECT);
        for element in &self.distances {
            for property in ["top", "left", "width", "height"] {
                set_px(element, property, 0.0);
            }
            element.set_inner_html("");
        }
        self.info.set_inner_html("");
    }

    fn contains(&self, target: &Element) -> bool {
        let node: &Node = target;
        self.root.contains(Some(node))
    }
}

/// Overlay boxes for all slots, appended to the document body.
pub struct DomOverlay {
    boxes: [SelectingBox; SLOT_COUNT],
}

impl DomOverlay {
    pub fn new(document: &Document) -> RulerResult<Self> {
        let body = document
            .body()
            .ok_or_else(|| RulerError::Dom("no body".to_string()))?;
        let make = || SelectingBox::new(document, &body);
        Ok(Self {
            boxes: [make()?, make()?, make()?],
        })
    }
}

impl Overlay<Element> for DomOverlay {
    fn place_box(&mut self, slot: usize, rect: Rect) {
        self.boxes[slot].place(rect);
    }

    fn show_info(&mut self, slot: usize, info: &InfoAnnotation) {
        self.boxes[slot].show_info(info);
    }

    fn show_distances(&mut self, slot: usize, distances: &DistanceAnnotation) {
        self.boxes[slot].show_distances(distances);
    }

    fn clear(&mut self, slot: usize) {
        self.boxes[slot].clear();
    }

    fn owns(&self, slot: usize, target: &Element) -> bool {
        self.boxes[slot].contains(target)
    }
}
