//! Raster surface: the fixed-size RGBA buffer strokes are painted onto.
//!
//! Painting is coverage-by-pixel-centre: a pixel takes the stroke colour when
//! its centre `(x + 0.5, y + 0.5)` falls inside the stroked region. No
//! anti-aliasing is applied, which keeps replay and undo/redo bit-exact.
//! Every painter clips to the surface; coordinates outside it are legal.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::ops::Range;

use image::{Rgba, RgbaImage};

use crate::consts::MIN_HALF_WIDTH;
use crate::geom::{Bounds, Point};
use crate::input::PreviewShape;
use crate::style::{Rgb, StrokeStyle};

/// Immutable copy of a surface's pixels, taken at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Box<[u8]>,
}

impl Snapshot {
    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Size of the snapshot in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }
}

/// The live drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Create a surface filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, Rgba(background.to_rgba())) }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// A surface with no pixels cannot be rendered or exported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Colour at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image.get_pixel_checked(x, y).map(|p| Rgb::new(p[0], p[1], p[2]))
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Paint every pixel with `color`.
    pub fn fill(&mut self, color: Rgb) {
        let px = Rgba(color.to_rgba());
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width(),
            height: self.height(),
            pixels: self.image.as_raw().clone().into_boxed_slice(),
        }
    }

    /// Replace the surface contents with `snapshot`.
    ///
    /// Returns `false` and leaves the surface untouched if the snapshot was
    /// taken from a surface of different dimensions.
    pub fn restore(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.width != self.width() || snapshot.height != self.height() {
            return false;
        }
        let raw: &mut [u8] = &mut self.image;
        raw.copy_from_slice(&snapshot.pixels);
        true
    }

    // =============================================================
    // Painters
    // =============================================================

    /// Stroke the segment `a`–`b` with round caps.
    pub fn stroke_segment(&mut self, a: Point, b: Point, style: StrokeStyle) {
        let half = half_width(style.width);
        // Only the part of the segment near the surface can cover a pixel centre.
        let reach = self.bounds().inflate(half + 1.0);
        let Some((a, b)) = reach.clip_segment(a, b) else {
            return;
        };
        let area = Bounds::from_corners(a, b).inflate(half);
        self.paint_where(area, style.color, |c| c.distance_to_segment(a, b) <= half);
    }

    /// Stroke the outline of an axis-aligned rectangle with square corners.
    pub fn stroke_rect(&mut self, rect: Bounds, style: StrokeStyle) {
        let half = half_width(style.width);
        let outer = rect.inflate(half);
        let inner = rect.inflate(-half);
        self.paint_where(outer, style.color, |c| outer.contains(c) && !inner.contains_strict(c));
    }

    /// Stroke the outline of a circle.
    pub fn stroke_circle(&mut self, center: Point, radius: f64, style: StrokeStyle) {
        let half = half_width(style.width);
        let area = Bounds::from_corners(center, center).inflate(radius + half);
        self.paint_where(area, style.color, |c| (c.distance(center) - radius).abs() <= half);
    }

    /// Stroke a committed preview shape.
    pub fn stroke_shape(&mut self, shape: &PreviewShape, style: StrokeStyle) {
        match *shape {
            PreviewShape::Rect { anchor, corner } => self.stroke_rect(Bounds::from_corners(anchor, corner), style),
            PreviewShape::Circle { center, radius } => self.stroke_circle(center, radius, style),
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_corners(Point::new(0.0, 0.0), Point::new(f64::from(self.width()), f64::from(self.height())))
    }

    fn paint_where<F>(&mut self, area: Bounds, color: Rgb, covers: F)
    where
        F: Fn(Point) -> bool,
    {
        let px = Rgba(color.to_rgba());
        let xs = pixel_range(area.min.x, area.max.x, self.width());
        let ys = pixel_range(area.min.y, area.max.y, self.height());
        for y in ys {
            for x in xs.clone() {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if covers(center) {
                    self.image.put_pixel(x, y, px);
                }
            }
        }
    }
}

fn half_width(width: u32) -> f64 {
    (f64::from(width) / 2.0).max(MIN_HALF_WIDTH)
}

/// Pixel indices whose centres may fall in `[lo, hi]`, clipped to `0..limit`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_range(lo: f64, hi: f64, limit: u32) -> Range<u32> {
    let start = lo.floor().max(0.0);
    let end = hi.ceil().min(f64::from(limit));
    if end <= start {
        return 0..0;
    }
    start as u32..end as u32
}
