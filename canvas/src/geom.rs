#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in surface-local device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite. Anything else is a malformed point.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Distance from this point to the segment `a`–`b`.
    #[must_use]
    pub fn distance_to_segment(self, a: Point, b: Point) -> f64 {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.distance(a);
        }
        let t = (((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
        self.distance(Point::new(a.x + t * dx, a.y + t * dy))
    }
}

/// Axis-aligned rectangle normalized so `min` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Rectangle spanned by two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Grow (or shrink, for negative `by`) every side by `by`.
    #[must_use]
    pub fn inflate(&self, by: f64) -> Self {
        Self {
            min: Point::new(self.min.x - by, self.min.y - by),
            max: Point::new(self.max.x + by, self.max.y + by),
        }
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clip the segment `a`–`b` to this rectangle (Liang–Barsky).
    ///
    /// Returns `None` when the segment misses the rectangle. Works for any
    /// finite endpoints: deltas are taken on halved coordinates so they
    /// cannot overflow, and a clipped end takes the crossed edge's
    /// coordinate exactly instead of interpolating it.
    #[must_use]
    pub fn clip_segment(&self, a: Point, b: Point) -> Option<(Point, Point)> {
        let dx = b.x / 2.0 - a.x / 2.0;
        let dy = b.y / 2.0 - a.y / 2.0;
        let edges = [
            (-dx, a.x / 2.0 - self.min.x / 2.0, Edge::X(self.min.x)),
            (dx, self.max.x / 2.0 - a.x / 2.0, Edge::X(self.max.x)),
            (-dy, a.y / 2.0 - self.min.y / 2.0, Edge::Y(self.min.y)),
            (dy, self.max.y / 2.0 - a.y / 2.0, Edge::Y(self.max.y)),
        ];
        let at = |t: f64, edge: Edge| match edge {
            Edge::X(x) => Point::new(x, a.y + (dy * t) * 2.0),
            Edge::Y(y) => Point::new(a.x + (dx * t) * 2.0, y),
        };

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        let (mut start, mut end) = (a, b);
        for (p, q, edge) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                    start = at(r, edge);
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                    end = at(r, edge);
                }
            }
        }
        Some((self.clamp(start), self.clamp(end)))
    }

    fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(self.min.x, self.max.x), p.y.clamp(self.min.y, self.max.y))
    }

    /// Strict containment test; points on an edge are outside.
    #[must_use]
    pub fn contains_strict(&self, p: Point) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// Rectangle edge crossed by a clipped segment, with its fixed coordinate.
#[derive(Clone, Copy)]
enum Edge {
    X(f64),
    Y(f64),
}
