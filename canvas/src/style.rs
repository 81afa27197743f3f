//! Stroke colour and width.
//!
//! [`Rgb`] round-trips through the `#rrggbb` form an HTML colour input
//! produces. [`StrokeStyle`] is the user's selection; the eraser derives its
//! effective style from it rather than overwriting it, so switching back to
//! the pencil restores the last chosen colour.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::consts::{DEFAULT_COLOR, DEFAULT_STROKE_WIDTH, ERASER_WIDTH_FACTOR, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};

/// An opaque 8-bit-per-channel colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// RGBA bytes with full opacity.
    #[must_use]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

/// Error returned when a string is not a `#rrggbb` colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour `{0}` (expected #rrggbb)")]
pub struct ParseRgbError(pub String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Colour and width applied to strokes and shape outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Rgb,
    /// Width in pixels, always within `MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH`
    /// for a user-selected style.
    pub width: u32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { color: DEFAULT_COLOR, width: DEFAULT_STROKE_WIDTH }
    }
}

impl StrokeStyle {
    /// Whether `width` is an accepted user selection.
    #[must_use]
    pub fn width_in_range(width: u32) -> bool {
        (MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&width)
    }

    /// Style the eraser paints with: background colour, widened.
    #[must_use]
    pub fn eraser(self, background: Rgb) -> Self {
        Self { color: background, width: self.width * ERASER_WIDTH_FACTOR }
    }
}
