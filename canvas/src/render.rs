//! Rendering: blits the surface and draws the preview overlay to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the surface and gesture state and produces
//! pixels; it does not mutate any session state. The preview is drawn by the
//! browser on top of the blitted surface and is never written into it.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

use crate::geom::Bounds;
use crate::input::{InputState, PreviewShape};
use crate::style::StrokeStyle;
use crate::surface::Surface;

/// Draw the full scene: surface pixels, then the preview outline.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, surface: &Surface, input: &InputState) -> Result<(), JsValue> {
    if surface.is_empty() {
        return Ok(());
    }

    // Layer 1: committed and in-progress freehand pixels.
    let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(surface.as_bytes()), surface.width(), surface.height())?;
    ctx.put_image_data(&image, 0.0, 0.0)?;

    // Layer 2: shape preview.
    if let (Some(preview), Some(style)) = (input.preview(), input.style()) {
        draw_preview(ctx, preview, style)?;
    }

    Ok(())
}

fn draw_preview(ctx: &CanvasRenderingContext2d, preview: &PreviewShape, style: StrokeStyle) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_stroke_style_str(&style.color.to_string());
    ctx.set_line_width(f64::from(style.width));
    ctx.set_line_join("miter");

    match *preview {
        PreviewShape::Rect { anchor, corner } => {
            let b = Bounds::from_corners(anchor, corner);
            ctx.stroke_rect(b.min.x, b.min.y, b.width(), b.height());
        }
        PreviewShape::Circle { center, radius } => {
            ctx.begin_path();
            ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
            ctx.stroke();
        }
    }

    ctx.restore();
    Ok(())
}
