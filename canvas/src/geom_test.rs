#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_is_finite_rejects_nan_and_infinity() {
    assert!(Point::new(0.0, -4.5).is_finite());
    assert!(!Point::new(f64::NAN, 0.0).is_finite());
    assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    assert!(!Point::new(f64::NEG_INFINITY, f64::NAN).is_finite());
}

#[test]
fn point_distance_is_euclidean() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    assert_eq!(Point::new(2.0, 2.0).distance(Point::new(2.0, 2.0)), 0.0);
}

#[test]
fn distance_to_segment_projects_onto_interior() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert_eq!(Point::new(5.0, 3.0).distance_to_segment(a, b), 3.0);
}

#[test]
fn distance_to_segment_clamps_to_endpoints() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert_eq!(Point::new(-3.0, 4.0).distance_to_segment(a, b), 5.0);
    assert_eq!(Point::new(13.0, 4.0).distance_to_segment(a, b), 5.0);
}

#[test]
fn distance_to_degenerate_segment_is_point_distance() {
    let a = Point::new(1.0, 1.0);
    assert_eq!(Point::new(4.0, 5.0).distance_to_segment(a, a), 5.0);
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn bounds_from_corners_normalizes_order() {
    let b = Bounds::from_corners(Point::new(100.0, 50.0), Point::new(0.0, 0.0));
    assert_eq!(b.min, Point::new(0.0, 0.0));
    assert_eq!(b.max, Point::new(100.0, 50.0));
    assert_eq!(b.width(), 100.0);
    assert_eq!(b.height(), 50.0);
}

#[test]
fn bounds_inflate_grows_and_shrinks() {
    let b = Bounds::from_corners(Point::new(10.0, 10.0), Point::new(20.0, 20.0));
    let grown = b.inflate(2.0);
    assert_eq!(grown.min, Point::new(8.0, 8.0));
    assert_eq!(grown.max, Point::new(22.0, 22.0));
    let shrunk = b.inflate(-2.0);
    assert_eq!(shrunk.width(), 6.0);
}

#[test]
fn bounds_contains_is_inclusive_and_strict_is_not() {
    let b = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let edge = Point::new(10.0, 5.0);
    assert!(b.contains(edge));
    assert!(!b.contains_strict(edge));
    assert!(b.contains_strict(Point::new(5.0, 5.0)));
    assert!(!b.contains(Point::new(11.0, 5.0)));
}

#[test]
fn clip_segment_keeps_inside_segment_unchanged() {
    let b = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let (a, c) = (Point::new(2.0, 3.0), Point::new(8.0, 7.0));
    assert_eq!(b.clip_segment(a, c), Some((a, c)));
}

#[test]
fn clip_segment_cuts_at_edges() {
    let b = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let clipped = b.clip_segment(Point::new(-10.0, 5.0), Point::new(20.0, 5.0));
    assert_eq!(clipped, Some((Point::new(0.0, 5.0), Point::new(10.0, 5.0))));
}

#[test]
fn clip_segment_misses_outside_segment() {
    let b = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert_eq!(b.clip_segment(Point::new(-5.0, -5.0), Point::new(-1.0, 20.0)), None);
    assert_eq!(b.clip_segment(Point::new(-5.0, 12.0), Point::new(15.0, 12.0)), None);
}

#[test]
fn clip_segment_handles_huge_finite_endpoints() {
    let b = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let clipped = b.clip_segment(Point::new(-1e200, 5.0), Point::new(1e200, 5.0));
    assert_eq!(clipped, Some((Point::new(0.0, 5.0), Point::new(10.0, 5.0))));
    let far = b.clip_segment(Point::new(-f64::MAX, 5.0), Point::new(f64::MAX, 5.0));
    assert_eq!(far, Some((Point::new(0.0, 5.0), Point::new(10.0, 5.0))));
}
