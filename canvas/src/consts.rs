//! Shared numeric constants for the canvas crate.

use crate::style::Rgb;

// ── Surface ─────────────────────────────────────────────────────

/// Default surface width in device pixels.
pub const DEFAULT_WIDTH: u32 = 600;

/// Default surface height in device pixels.
pub const DEFAULT_HEIGHT: u32 = 600;

/// Colour the surface is filled with on open and on clear.
pub const BACKGROUND: Rgb = Rgb::WHITE;

// ── Stroke style ────────────────────────────────────────────────

/// Initial pencil colour.
pub const DEFAULT_COLOR: Rgb = Rgb::BLACK;

/// Initial stroke width in pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Smallest accepted stroke width.
pub const MIN_STROKE_WIDTH: u32 = 1;

/// Largest accepted stroke width.
pub const MAX_STROKE_WIDTH: u32 = 20;

/// The eraser paints this many times wider than the selected width.
pub const ERASER_WIDTH_FACTOR: u32 = 2;

// ── Rasterization ───────────────────────────────────────────────

/// Lower bound on a stroke's half-width. Must exceed half a pixel diagonal
/// (~0.707) so a 1px dot always covers the pixel that contains it.
pub const MIN_HALF_WIDTH: f64 = 0.75;
