//! Page access through the browser DOM.

use kurbo::Rect;
use pageruler_core::{Page, RulerError, RulerResult, ScrollOffset, StyleEntry};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

/// Convert a JS exception into a ruler error.
pub fn dom_error(context: &str, err: JsValue) -> RulerError {
    let message = match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    };
    RulerError::Dom(format!("{}: {}", context, message))
}

/// The current browser window and document.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new() -> RulerResult<Self> {
        let window = web_sys::window().ok_or_else(|| RulerError::Dom("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| RulerError::Dom("no document".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for DomPage {
    type Target = Element;

    fn client_rect(&self, target: &Element) -> Rect {
        let rect = target.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    }

    fn computed_style(&self, target: &Element, properties: &[String]) -> Vec<StyleEntry> {
        let style = match self.window.get_computed_style(target) {
            Ok(Some(style)) => style,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("{}", dom_error("getComputedStyle", e));
                return Vec::new();
            }
        };
        properties
            .iter()
            .map(|name| {
                let value = style.get_property_value(name).unwrap_or_default();
                StyleEntry::new(name.clone(), value)
            })
            .collect()
    }

    fn scroll_offset(&self) -> ScrollOffset {
        // Quirks-mode pages scroll the body, standards-mode pages the root element.
        let mut top = 0;
        let mut left = 0;
        if let Some(body) = self.document.body() {
            top += body.scroll_top();
            left += body.scroll_left();
        }
        if let Some(root) = self.document.document_element() {
            top += root.scroll_top();
            left += root.scroll_left();
        }
        ScrollOffset::new(f64::from(top), f64::from(left))
    }
}
