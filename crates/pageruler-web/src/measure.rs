//! Measure two rectangles described in JSON.
//!
//! Input: `{"a": {"top", "left", "width", "height"}, "b": {...}, "label_decimals": 0}`.
//! Output: the distance annotation between `a` and `b`.

use kurbo::Rect;
use pageruler_core::annotate::{self, DistanceAnnotation, LabelFormat};
use pageruler_core::geometry::rect_from_edges;
use pageruler_core::{RulerConfig, RulerError, RulerResult};
use serde::Deserialize;

/// A rectangle in document space, given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectInput {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl RectInput {
    /// Convert to a rectangle, rejecting negative or non-finite input.
    pub fn to_rect(&self) -> RulerResult<Rect> {
        let values = [self.top, self.left, self.width, self.height];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(RulerError::InvalidRect(format!("non-finite value in {:?}", self)));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(RulerError::InvalidRect(format!("negative size in {:?}", self)));
        }
        Ok(rect_from_edges(self.top, self.left, self.width, self.height))
    }
}

/// A measuring request.
#[derive(Debug, Clone, Deserialize)]
pub struct MeasureInput {
    pub a: RectInput,
    pub b: RectInput,
    #[serde(default)]
    pub label_decimals: u32,
}

/// Measure the distances described by a JSON request.
pub fn measure(json: &str) -> RulerResult<DistanceAnnotation> {
    let input: MeasureInput = serde_json::from_str(json)?;
    if input.label_decimals > RulerConfig::MAX_LABEL_DECIMALS {
        return Err(RulerError::Config(format!(
            "label_decimals must be at most {}",
            RulerConfig::MAX_LABEL_DECIMALS
        )));
    }
    let a = input.a.to_rect()?;
    let b = input.b.to_rect()?;
    log::debug!("Measuring {:?} against {:?}", a, b);
    Ok(annotate::distances(a, b, &LabelFormat::new(input.label_decimals)))
}

/// Measure and render the result as pretty JSON.
pub fn measure_to_json(json: &str) -> RulerResult<String> {
    let annotation = measure(json)?;
    Ok(serde_json::to_string_pretty(&annotation)?)
}
