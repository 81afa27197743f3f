use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::*;
use crate::geom::Point;
use crate::style::{Rgb, StrokeStyle};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn png_starts_with_signature() {
    let surface = Surface::new(16, 16, Rgb::WHITE);
    let png = to_png(&surface).unwrap_or_default();
    assert!(png.starts_with(&PNG_SIGNATURE));
}

#[test]
fn png_decodes_back_to_surface_pixels() {
    let mut surface = Surface::new(32, 24, Rgb::WHITE);
    surface.stroke_segment(Point::new(2.0, 2.0), Point::new(28.0, 20.0), StrokeStyle::default());
    let png = to_png(&surface).unwrap_or_default();
    let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png).map(|img| img.to_rgba8());
    let Ok(decoded) = decoded else {
        panic!("exported png did not decode");
    };
    assert_eq!(decoded.dimensions(), (32, 24));
    assert_eq!(decoded.as_raw(), surface.as_bytes());
}

#[test]
fn export_does_not_mutate_surface() {
    let surface = Surface::new(8, 8, Rgb::new(1, 2, 3));
    let before = surface.snapshot();
    let first = to_png(&surface).unwrap_or_default();
    let second = to_png(&surface).unwrap_or_default();
    assert_eq!(surface.snapshot(), before);
    assert_eq!(first, second);
}

#[test]
fn empty_surface_fails_cleanly() {
    let surface = Surface::new(0, 0, Rgb::WHITE);
    assert!(matches!(to_png(&surface), Err(ExportError::EmptySurface { width: 0, height: 0 })));
    assert!(to_data_uri(&surface).is_err());
}

#[test]
fn data_uri_wraps_base64_png() {
    let surface = Surface::new(4, 4, Rgb::WHITE);
    let uri = to_data_uri(&surface).unwrap_or_default();
    let Some(payload) = uri.strip_prefix("data:image/png;base64,") else {
        panic!("unexpected data uri prefix: {uri}");
    };
    let bytes = STANDARD.decode(payload).unwrap_or_default();
    assert_eq!(bytes, to_png(&surface).unwrap_or_default());
}
