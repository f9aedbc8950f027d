//! Annotations produced on confirm: style info for one rectangle, distance
//! lines between two.

use crate::geometry::{Axis, Segment, contains, x_shortest, y_shortest};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Computed-style properties shown for the first selected element.
pub const INTERESTING_STYLES: [&str; 11] = [
    "border",
    "display",
    "float",
    "height",
    "line-height",
    "margin",
    "max-width",
    "min-width",
    "padding",
    "position",
    "width",
];

/// How pixel lengths are turned into labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelFormat {
    decimals: u32,
}

impl LabelFormat {
    pub fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    /// Round to the configured precision, dropping trailing zeros.
    pub fn number(&self, value: f64) -> String {
        let factor = 10f64.powi(self.decimals as i32);
        let rounded = (value * factor).round() / factor;
        // Avoid printing "-0".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        format!("{}", rounded)
    }

    /// Absolute length with a `px` suffix.
    pub fn pixels(&self, length: f64) -> String {
        format!("{}px", self.number(length.abs()))
    }
}

/// One resolved style property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub name: String,
    pub value: String,
}

impl StyleEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Key/value listing for a single selected element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoAnnotation {
    /// Where the listing is placed: the rectangle's bottom-right corner.
    pub anchor: Point,
    pub entries: Vec<StyleEntry>,
}

/// Build the info listing: size first, then the computed styles in order.
///
/// The size is shown unrounded, as the page reports it.
pub fn info(rect: Rect, styles: Vec<StyleEntry>) -> InfoAnnotation {
    let mut entries = Vec::with_capacity(styles.len() + 2);
    entries.push(StyleEntry::new("width", rect.width().to_string()));
    entries.push(StyleEntry::new("height", rect.height().to_string()));
    entries.extend(styles);
    InfoAnnotation {
        anchor: Point::new(rect.x1, rect.y1),
        entries,
    }
}

/// Edge of the inner rectangle an inset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// What a distance line measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceKind {
    /// Inner edge to the matching edge of the enclosing rectangle.
    Inset(Edge),
    /// Free space between two separate rectangles.
    Gap(Axis),
}

impl DistanceKind {
    /// Which of the four distance elements an overlay shows this in.
    pub fn element_index(self) -> usize {
        match self {
            DistanceKind::Inset(Edge::Top) | DistanceKind::Gap(Axis::Vertical) => 0,
            DistanceKind::Inset(Edge::Right) | DistanceKind::Gap(Axis::Horizontal) => 1,
            DistanceKind::Inset(Edge::Bottom) => 2,
            DistanceKind::Inset(Edge::Left) => 3,
        }
    }
}

/// A labelled distance line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub kind: DistanceKind,
    pub segment: Segment,
    pub label: String,
}

/// How the pair of rectangles was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMode {
    /// One rectangle strictly encloses the other.
    Containment,
    /// Separate or partially overlapping rectangles.
    Gap,
}

/// Every distance line for a pair of rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceAnnotation {
    pub mode: DistanceMode,
    pub distances: Vec<Distance>,
}

impl DistanceAnnotation {
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Find the line of a given kind.
    pub fn get(&self, kind: DistanceKind) -> Option<&Distance> {
        self.distances.iter().find(|d| d.kind == kind)
    }

    fn push(&mut self, kind: DistanceKind, p1: Point, p2: Point, format: &LabelFormat) {
        if let Some(segment) = Segment::new(p1, p2) {
            self.distances.push(Distance {
                kind,
                segment,
                label: format.pixels(segment.length()),
            });
        }
    }
}

/// Measure the distances between two rectangles.
///
/// Nested rectangles get four insets, always measured from the inner edge
/// out to the enclosing edge and placed through the inner rectangle's centre.
/// Otherwise the shortest horizontal and vertical gaps are reported, when
/// they exist.
pub fn distances(a: Rect, b: Rect, format: &LabelFormat) -> DistanceAnnotation {
    let nested = if contains(a, b) {
        Some((b, a))
    } else if contains(b, a) {
        Some((a, b))
    } else {
        None
    };

    match nested {
        Some((inner, outer)) => insets(inner, outer, format),
        None => gaps(a, b, format),
    }
}

fn insets(inner: Rect, outer: Rect, format: &LabelFormat) -> DistanceAnnotation {
    let center = inner.center();
    let mut annotation = DistanceAnnotation {
        mode: DistanceMode::Containment,
        distances: Vec::with_capacity(4),
    };
    annotation.push(
        DistanceKind::Inset(Edge::Top),
        Point::new(center.x, inner.y0),
        Point::new(center.x, outer.y0),
        format,
    );
    annotation.push(
        DistanceKind::Inset(Edge::Right),
        Point::new(inner.x1, center.y),
        Point::new(outer.x1, center.y),
        format,
    );
    annotation.push(
        DistanceKind::Inset(Edge::Bottom),
        Point::new(center.x, inner.y1),
        Point::new(center.x, outer.y1),
        format,
    );
    annotation.push(
        DistanceKind::Inset(Edge::Left),
        Point::new(inner.x0, center.y),
        Point::new(outer.x0, center.y),
        format,
    );
    annotation
}

fn gaps(a: Rect, b: Rect, format: &LabelFormat) -> DistanceAnnotation {
    let mut annotation = DistanceAnnotation {
        mode: DistanceMode::Gap,
        distances: Vec::with_capacity(2),
    };
    if let Some(line) = y_shortest(a, b) {
        annotation.push(DistanceKind::Gap(Axis::Vertical), line.p1, line.p2, format);
    }
    if let Some(line) = x_shortest(a, b) {
        annotation.push(DistanceKind::Gap(Axis::Horizontal), line.p1, line.p2, format);
    }
    annotation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, left: f64, right: f64, bottom: f64) -> Rect {
        Rect::new(left, top, right, bottom)
    }

    fn label(annotation: &DistanceAnnotation, kind: DistanceKind) -> &str {
        &annotation.get(kind).expect("distance present").label
    }

    #[test]
    fn test_label_format() {
        let whole = LabelFormat::default();
        assert_eq!(whole.pixels(50.0), "50px");
        assert_eq!(whole.pixels(-12.4), "12px");
        assert_eq!(whole.pixels(0.4), "0px");

        let fine = LabelFormat::new(2);
        assert_eq!(fine.pixels(10.256), "10.26px");
        assert_eq!(fine.pixels(10.5), "10.5px");
    }

    #[test]
    fn test_containment_insets() {
        let outer = rect(0.0, 0.0, 200.0, 200.0);
        let inner = rect(50.0, 50.0, 100.0, 100.0);
        let annotation = distances(outer, inner, &LabelFormat::default());

        assert_eq!(annotation.mode, DistanceMode::Containment);
        assert_eq!(annotation.distances.len(), 4);
        assert_eq!(label(&annotation, DistanceKind::Inset(Edge::Top)), "50px");
        assert_eq!(label(&annotation, DistanceKind::Inset(Edge::Left)), "50px");
        assert_eq!(label(&annotation, DistanceKind::Inset(Edge::Right)), "100px");
        assert_eq!(label(&annotation, DistanceKind::Inset(Edge::Bottom)), "100px");
    }

    #[test]
    fn test_containment_is_order_independent() {
        let outer = rect(0.0, 0.0, 200.0, 200.0);
        let inner = rect(50.0, 50.0, 100.0, 100.0);
        let format = LabelFormat::default();
        assert_eq!(distances(outer, inner, &format), distances(inner, outer, &format));
    }

    #[test]
    fn test_insets_run_through_inner_center() {
        let outer = rect(0.0, 0.0, 200.0, 200.0);
        let inner = rect(50.0, 50.0, 100.0, 100.0);
        let annotation = distances(inner, outer, &LabelFormat::default());

        let top = annotation.get(DistanceKind::Inset(Edge::Top)).unwrap();
        assert_eq!(top.segment.p1, Point::new(75.0, 50.0));
        assert_eq!(top.segment.p2, Point::new(75.0, 0.0));

        let left = annotation.get(DistanceKind::Inset(Edge::Left)).unwrap();
        assert_eq!(left.segment.p1, Point::new(50.0, 75.0));
        assert_eq!(left.segment.p2, Point::new(0.0, 75.0));
    }

    #[test]
    fn test_flush_edge_has_no_inset() {
        // A shared top edge still counts as nested.
        let outer = rect(0.0, 0.0, 200.0, 200.0);
        let inner = rect(0.0, 50.0, 100.0, 100.0);
        let annotation = distances(outer, inner, &LabelFormat::default());

        assert_eq!(annotation.mode, DistanceMode::Containment);
        assert!(annotation.get(DistanceKind::Inset(Edge::Top)).is_none());
        assert_eq!(annotation.distances.len(), 3);
    }

    #[test]
    fn test_gap_side_by_side() {
        let a = rect(0.0, 0.0, 100.0, 50.0);
        let b = rect(0.0, 150.0, 200.0, 50.0);
        let annotation = distances(a, b, &LabelFormat::default());

        assert_eq!(annotation.mode, DistanceMode::Gap);
        assert_eq!(annotation.distances.len(), 1);
        let line = annotation.get(DistanceKind::Gap(Axis::Horizontal)).unwrap();
        assert_eq!(line.label, "50px");
        assert_eq!(line.segment.origin(), Point::new(100.0, 25.0));
    }

    #[test]
    fn test_gap_diagonal_is_empty() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(200.0, 150.0, 250.0, 260.0);
        let annotation = distances(a, b, &LabelFormat::default());
        assert_eq!(annotation.mode, DistanceMode::Gap);
        assert!(annotation.is_empty());
    }

    #[test]
    fn test_gap_overlapping_is_empty() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(50.0, 50.0, 150.0, 150.0);
        assert!(distances(a, b, &LabelFormat::default()).is_empty());
    }

    #[test]
    fn test_element_index() {
        assert_eq!(DistanceKind::Gap(Axis::Vertical).element_index(), 0);
        assert_eq!(DistanceKind::Gap(Axis::Horizontal).element_index(), 1);
        assert_eq!(DistanceKind::Inset(Edge::Bottom).element_index(), 2);
        assert_eq!(DistanceKind::Inset(Edge::Left).element_index(), 3);
    }

    #[test]
    fn test_info_lists_size_then_styles() {
        let styles = vec![
            StyleEntry::new("display", "block"),
            StyleEntry::new("position", "static"),
        ];
        let info = info(rect(10.0, 20.0, 120.0, 60.0), styles);

        assert_eq!(info.anchor, Point::new(120.0, 60.0));
        assert_eq!(info.entries.len(), 4);
        assert_eq!(info.entries[0], StyleEntry::new("width", "100"));
        assert_eq!(info.entries[1], StyleEntry::new("height", "50"));
        assert_eq!(info.entries[2].name, "display");
        assert_eq!(info.entries[3].value, "static");
    }

    #[test]
    fn test_info_size_is_not_rounded() {
        let info = info(rect(0.0, 0.0, 100.5, 20.25), Vec::new());
        assert_eq!(info.entries[0], StyleEntry::new("width", "100.5"));
        assert_eq!(info.entries[1], StyleEntry::new("height", "20.25"));
    }
}
