//! PNG export of the live surface.
//!
//! Export is a pure read. Failure is reported as [`ExportError`]; the browser
//! wrapper turns it into an empty result because a download click has no
//! retry path.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

use crate::surface::Surface;

/// MIME type of exported images.
pub const PNG_MIME: &str = "image/png";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("surface has no pixels ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Encode `surface` as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError::EmptySurface`] for a zero-sized surface and
/// [`ExportError::Encode`] if the encoder rejects the buffer.
pub fn to_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
    if surface.is_empty() {
        return Err(ExportError::EmptySurface { width: surface.width(), height: surface.height() });
    }
    let mut out = Cursor::new(Vec::new());
    surface.image().write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Encode `surface` as a `data:image/png;base64,...` URI.
///
/// # Errors
///
/// Same as [`to_png`].
pub fn to_data_uri(surface: &Surface) -> Result<String, ExportError> {
    let png = to_png(surface)?;
    Ok(format!("data:{PNG_MIME};base64,{}", STANDARD.encode(png)))
}
