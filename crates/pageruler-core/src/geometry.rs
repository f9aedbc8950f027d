//! Spatial relationships between axis-aligned rectangles.
//!
//! Rectangles are `kurbo::Rect` values in document space, read as
//! `x0 = left`, `y0 = top`, `x1 = right`, `y1 = bottom`. Every function here is
//! pure and total: absence is reported as `None`, never as an error.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Degenerate rectangle standing in for "no target".
pub const ORIGIN_RECT: Rect = Rect::ZERO;

/// Build a rectangle from its top-left corner and size.
pub fn rect_from_edges(top: f64, left: f64, width: f64, height: f64) -> Rect {
    Rect::new(left, top, left + width, top + height)
}

/// Axis of a segment or a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Runs along x (constant y).
    Horizontal,
    /// Runs along y (constant x).
    Vertical,
}

/// Overlap of two projections on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// An axis-aligned connector between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    /// Connect two points.
    ///
    /// Returns `None` when the points coincide (nothing to measure) or when
    /// they are not on a common horizontal or vertical line.
    pub fn new(p1: Point, p2: Point) -> Option<Self> {
        if p1 == p2 {
            return None;
        }
        if p1.x == p2.x || p1.y == p2.y {
            Some(Self { p1, p2 })
        } else {
            None
        }
    }

    pub fn axis(&self) -> Axis {
        if self.p1.x == self.p2.x {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    pub fn length(&self) -> f64 {
        match self.axis() {
            Axis::Vertical => (self.p1.y - self.p2.y).abs(),
            Axis::Horizontal => (self.p1.x - self.p2.x).abs(),
        }
    }

    /// Top-most or left-most end, where an overlay element is anchored.
    pub fn origin(&self) -> Point {
        Point::new(self.p1.x.min(self.p2.x), self.p1.y.min(self.p2.y))
    }
}

/// Check if `v` lies between `start` and `end`, in either order.
///
/// This is the exclusive-or of two strict comparisons, so it is true for
/// `v == start` when `start < end` and false for `v == end`. Every predicate
/// below is built on it.
pub fn between(v: f64, start: f64, end: f64) -> bool {
    (v < start) ^ (v < end)
}

/// Check if r1 contains r2 in terms of their projections onto the x-axis.
pub fn x_contains(r1: Rect, r2: Rect) -> bool {
    between(r2.x0, r1.x0, r1.x1) && between(r2.x1, r1.x0, r1.x1)
}

/// Check if r1 contains r2 in terms of their projections onto the y-axis.
pub fn y_contains(r1: Rect, r2: Rect) -> bool {
    between(r2.y0, r1.y0, r1.y1) && between(r2.y1, r1.y0, r1.y1)
}

/// Check if r1 contains r2 on both axes.
pub fn contains(r1: Rect, r2: Rect) -> bool {
    x_contains(r1, r2) && y_contains(r1, r2)
}

/// Check if exactly one x-edge of r2 falls inside r1's x-projection.
pub fn x_crosses(r1: Rect, r2: Rect) -> bool {
    between(r2.x0, r1.x0, r1.x1) ^ between(r2.x1, r1.x0, r1.x1)
}

/// Check if exactly one y-edge of r2 falls inside r1's y-projection.
pub fn y_crosses(r1: Rect, r2: Rect) -> bool {
    between(r2.y0, r1.y0, r1.y1) ^ between(r2.y1, r1.y0, r1.y1)
}

/// Check if two projections share a stretch of positive length.
///
/// Projections that only meet at an endpoint do not overlap.
fn spans_overlap(start1: f64, end1: f64, start2: f64, end2: f64) -> bool {
    start1.max(start2) < end1.min(end2)
}

fn x_overlaps(r1: Rect, r2: Rect) -> bool {
    x_contains(r1, r2) || x_contains(r2, r1) || spans_overlap(r1.x0, r1.x1, r2.x0, r2.x1)
}

fn y_overlaps(r1: Rect, r2: Rect) -> bool {
    y_contains(r1, r2) || y_contains(r2, r1) || spans_overlap(r1.y0, r1.y1, r2.y0, r2.y1)
}

/// Check if the footprints of r1 and r2 overlap.
///
/// On each axis the projections must nest or share a stretch of positive
/// length, so touching edges do not count. The result does not depend on
/// argument order.
pub fn crosses(r1: Rect, r2: Rect) -> bool {
    x_overlaps(r1, r2) && y_overlaps(r1, r2)
}

/// Shared x-range of the two rectangles, if their x-projections overlap.
pub fn x_intersect(r1: Rect, r2: Rect) -> Option<Interval> {
    x_overlaps(r1, r2).then(|| Interval::new(r1.x0.max(r2.x0), r1.x1.min(r2.x1)))
}

/// Shared y-range of the two rectangles, if their y-projections overlap.
pub fn y_intersect(r1: Rect, r2: Rect) -> Option<Interval> {
    y_overlaps(r1, r2).then(|| Interval::new(r1.y0.max(r2.y0), r1.y1.min(r2.y1)))
}

/// Shortest horizontal line between two rectangles.
///
/// Placed at the middle of the vertical band both rectangles share. `None` if
/// the rectangles overlap, share no vertical band, or touch.
pub fn x_shortest(r1: Rect, r2: Rect) -> Option<Segment> {
    if crosses(r1, r2) {
        return None;
    }
    let band = y_intersect(r1, r2)?;
    let y = band.midpoint();
    Segment::new(
        Point::new(r1.x1.min(r2.x1), y),
        Point::new(r1.x0.max(r2.x0), y),
    )
}

/// Shortest vertical line between two rectangles.
///
/// Placed at the middle of the horizontal band both rectangles share. `None`
/// if the rectangles overlap, share no horizontal band, or touch.
pub fn y_shortest(r1: Rect, r2: Rect) -> Option<Segment> {
    if crosses(r1, r2) {
        return None;
    }
    let band = x_intersect(r1, r2)?;
    let x = band.midpoint();
    Segment::new(
        Point::new(x, r1.y1.min(r2.y1)),
        Point::new(x, r1.y0.max(r2.y0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64, left: f64, right: f64, bottom: f64) -> Rect {
        Rect::new(left, top, right, bottom)
    }

    fn samples() -> Vec<Rect> {
        vec![
            rect(0.0, 0.0, 100.0, 100.0),
            rect(200.0, 150.0, 250.0, 260.0),
            rect(0.0, 150.0, 200.0, 50.0),
            rect(50.0, 50.0, 100.0, 100.0),
            rect(25.0, 40.0, 60.0, 75.0),
            rect(-30.0, 20.0, 80.0, 10.0),
            rect(120.0, -50.0, 30.0, 140.0),
            rect(10.0, 10.0, 10.0, 10.0),
        ]
    }

    #[test]
    fn test_between_is_order_independent() {
        assert!(between(5.0, 0.0, 10.0));
        assert!(between(5.0, 10.0, 0.0));
        assert!(!between(15.0, 0.0, 10.0));
        assert!(!between(-1.0, 10.0, 0.0));
    }

    #[test]
    fn test_between_boundaries() {
        assert!(between(0.0, 0.0, 10.0));
        assert!(!between(10.0, 0.0, 10.0));
        assert!(!between(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_rect_from_edges() {
        let r = rect_from_edges(10.0, 20.0, 30.0, 40.0);
        assert!((r.x1 - 50.0).abs() < f64::EPSILON);
        assert!((r.y1 - 50.0).abs() < f64::EPSILON);
        assert!((r.width() - 30.0).abs() < f64::EPSILON);
        assert!((r.height() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rect_never_contains_itself() {
        for r in samples() {
            assert!(!contains(r, r), "{:?} contains itself", r);
        }
    }

    #[test]
    fn test_contains_nested() {
        let outer = rect(0.0, 0.0, 200.0, 200.0);
        let inner = rect(50.0, 50.0, 100.0, 100.0);
        assert!(contains(outer, inner));
        assert!(!contains(inner, outer));
    }

    #[test]
    fn test_crossing_is_not_containment() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(50.0, 50.0, 150.0, 150.0);
        assert!(x_crosses(a, b));
        assert!(y_crosses(a, b));
        assert!(crosses(a, b));
        assert!(!contains(a, b));
        assert!(!contains(b, a));
    }

    #[test]
    fn test_relationships_are_exclusive() {
        let rects = samples();
        for &a in &rects {
            for &b in &rects {
                if a == b {
                    continue;
                }
                let forward = contains(a, b);
                let backward = contains(b, a);
                assert!(!(forward && backward), "{:?} and {:?} contain each other", a, b);
                if forward || backward {
                    assert!(crosses(a, b), "nested {:?} {:?} should overlap", a, b);
                }
            }
        }
    }

    #[test]
    fn test_pairs_fall_in_exactly_one_relationship() {
        let rects: Vec<Rect> = samples().into_iter().filter(|r| r.area() > 0.0).collect();
        for &a in &rects {
            for &b in &rects {
                if a == b {
                    continue;
                }
                let nested = contains(a, b) || contains(b, a);
                let classes = [
                    contains(a, b),
                    contains(b, a),
                    crosses(a, b) && !nested,
                    !crosses(a, b),
                ];
                let count = classes.iter().filter(|&&c| c).count();
                assert_eq!(count, 1, "{:?} vs {:?}: {:?}", a, b, classes);
            }
        }
    }

    #[test]
    fn test_crosses_is_symmetric() {
        let rects = samples();
        for &a in &rects {
            for &b in &rects {
                assert_eq!(crosses(a, b), crosses(b, a), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_shortest_is_none_when_crossing() {
        let rects = samples();
        for &a in &rects {
            for &b in &rects {
                if crosses(a, b) {
                    assert!(x_shortest(a, b).is_none());
                    assert!(y_shortest(a, b).is_none());
                }
            }
        }
    }

    #[test]
    fn test_x_shortest_is_symmetric() {
        let rects = samples();
        for &a in &rects {
            for &b in &rects {
                let forward = x_shortest(a, b);
                let backward = x_shortest(b, a);
                match (forward, backward) {
                    (None, None) => {}
                    (Some(f), Some(g)) => {
                        assert!((f.length() - g.length()).abs() < f64::EPSILON);
                        assert_eq!(f.origin(), g.origin());
                    }
                    _ => panic!("asymmetric x_shortest for {:?} and {:?}", a, b),
                }
            }
        }
    }

    #[test]
    fn test_diagonal_rects_have_no_line() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(200.0, 150.0, 250.0, 260.0);
        assert!(!crosses(a, b));
        assert!(x_intersect(a, b).is_none());
        assert!(y_intersect(a, b).is_none());
        assert!(x_shortest(a, b).is_none());
        assert!(y_shortest(a, b).is_none());
    }

    #[test]
    fn test_side_by_side_horizontal_gap() {
        let a = rect(0.0, 0.0, 100.0, 50.0);
        let b = rect(0.0, 150.0, 200.0, 50.0);

        let line = x_shortest(a, b).expect("horizontal gap");
        assert_eq!(line.axis(), Axis::Horizontal);
        assert_eq!(line.p1, Point::new(100.0, 25.0));
        assert_eq!(line.p2, Point::new(150.0, 25.0));
        assert!((line.length() - 50.0).abs() < f64::EPSILON);
        assert!(y_shortest(a, b).is_none());
    }

    #[test]
    fn test_stacked_vertical_gap() {
        let a = rect(0.0, 0.0, 100.0, 40.0);
        let b = rect(100.0, 20.0, 60.0, 180.0);

        let line = y_shortest(a, b).expect("vertical gap");
        assert_eq!(line.axis(), Axis::Vertical);
        assert_eq!(line.origin(), Point::new(40.0, 40.0));
        assert!((line.length() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_touching_rects_have_no_line() {
        let a = rect(0.0, 0.0, 100.0, 50.0);
        let b = rect(0.0, 100.0, 200.0, 50.0);
        assert!(!crosses(a, b));
        assert!(!crosses(b, a));
        assert!(x_shortest(a, b).is_none());
        assert!(x_shortest(b, a).is_none());
    }

    #[test]
    fn test_corner_touching_rects_have_no_line() {
        let c = rect(0.0, 0.0, 100.0, 50.0);
        let d = rect(100.0, 100.0, 200.0, 150.0);
        for (a, b) in [(c, d), (d, c)] {
            assert!(!crosses(a, b));
            assert!(x_intersect(a, b).is_none());
            assert!(y_intersect(a, b).is_none());
            assert!(x_shortest(a, b).is_none());
            assert!(y_shortest(a, b).is_none());
        }
    }

    #[test]
    fn test_edge_touching_projections_do_not_overlap() {
        let c = rect(0.0, 0.0, 100.0, 50.0);
        let d = rect(80.0, 100.0, 200.0, 120.0);
        assert!(x_crosses(d, c));
        assert!(x_intersect(c, d).is_none());
        assert!(x_intersect(d, c).is_none());
        assert!(y_shortest(c, d).is_none());
    }

    #[test]
    fn test_degenerate_rects_are_handled() {
        let point = rect(10.0, 10.0, 10.0, 10.0);
        let other = rect(0.0, 50.0, 80.0, 20.0);
        assert!(!contains(point, point));
        let line = x_shortest(point, other).expect("gap from a point");
        assert!((line.length() - 40.0).abs() < f64::EPSILON);
        assert!(!contains(ORIGIN_RECT, ORIGIN_RECT));
        assert!(x_shortest(ORIGIN_RECT, ORIGIN_RECT).is_none());
    }

    #[test]
    fn test_segment_rejects_degenerate_and_diagonal() {
        let p = Point::new(1.0, 2.0);
        assert!(Segment::new(p, p).is_none());
        assert!(Segment::new(p, Point::new(3.0, 4.0)).is_none());
        let s = Segment::new(Point::new(5.0, 9.0), Point::new(5.0, 2.0)).unwrap();
        assert_eq!(s.axis(), Axis::Vertical);
        assert_eq!(s.origin(), Point::new(5.0, 2.0));
        assert!((s.length() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interval_midpoint() {
        let band = Interval::new(10.0, 30.0);
        assert!((band.midpoint() - 20.0).abs() < f64::EPSILON);
    }
}
