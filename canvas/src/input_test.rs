#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_pencil() {
    assert_eq!(Tool::default(), Tool::Pencil);
}

#[test]
fn tool_families_are_disjoint() {
    for tool in [Tool::Pencil, Tool::Eraser, Tool::Rectangle, Tool::Circle] {
        assert_ne!(tool.is_freehand(), tool.is_shape(), "{tool:?}");
    }
    assert!(Tool::Eraser.is_freehand());
    assert!(Tool::Circle.is_shape());
}

#[test]
fn tool_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Tool::Rectangle).unwrap_or_default(), "\"rectangle\"");
    let parsed: Result<Tool, _> = serde_json::from_str("\"eraser\"");
    assert_eq!(parsed.ok(), Some(Tool::Eraser));
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
    assert!(!m.command());
}

#[test]
fn command_accepts_ctrl_or_meta() {
    assert!(Modifiers { ctrl: true, ..Default::default() }.command());
    assert!(Modifiers { meta: true, ..Default::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Default::default() }.command());
}

// =============================================================
// PreviewShape
// =============================================================

#[test]
fn rectangle_drag_uses_opposite_corners() {
    let shape = PreviewShape::from_drag(Tool::Rectangle, pt(0.0, 0.0), pt(100.0, 50.0));
    assert_eq!(shape, Some(PreviewShape::Rect { anchor: pt(0.0, 0.0), corner: pt(100.0, 50.0) }));
}

#[test]
fn circle_drag_uses_anchor_as_center() {
    let shape = PreviewShape::from_drag(Tool::Circle, pt(10.0, 10.0), pt(13.0, 14.0));
    assert_eq!(shape, Some(PreviewShape::Circle { center: pt(10.0, 10.0), radius: 5.0 }));
}

#[test]
fn freehand_tools_have_no_preview() {
    assert!(PreviewShape::from_drag(Tool::Pencil, pt(0.0, 0.0), pt(1.0, 1.0)).is_none());
    assert!(PreviewShape::from_drag(Tool::Eraser, pt(0.0, 0.0), pt(1.0, 1.0)).is_none());
}

#[test]
fn zero_size_shapes_are_degenerate() {
    let p = pt(5.0, 5.0);
    assert!(PreviewShape::Rect { anchor: p, corner: p }.is_degenerate());
    assert!(PreviewShape::Circle { center: p, radius: 0.0 }.is_degenerate());
    assert!(!PreviewShape::Rect { anchor: p, corner: pt(5.0, 9.0) }.is_degenerate());
    assert!(!PreviewShape::Circle { center: p, radius: 0.5 }.is_degenerate());
}

// =============================================================
// UiState
// =============================================================

#[test]
fn effective_style_for_pencil_is_chosen_style() {
    let ui = UiState { tool: Tool::Pencil, style: StrokeStyle { color: Rgb::new(9, 9, 9), width: 3 } };
    assert_eq!(ui.effective_style(Rgb::WHITE), ui.style);
}

#[test]
fn effective_style_for_eraser_is_background() {
    let ui = UiState { tool: Tool::Eraser, style: StrokeStyle { color: Rgb::new(9, 9, 9), width: 3 } };
    let style = ui.effective_style(Rgb::WHITE);
    assert_eq!(style.color, Rgb::WHITE);
    assert_eq!(style.width, 6);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert!(state.preview().is_none());
    assert!(state.style().is_none());
}

#[test]
fn only_previewing_exposes_a_preview() {
    let style = StrokeStyle::default();
    let anchored = InputState::Anchored { tool: Tool::Circle, anchor: pt(1.0, 1.0), style };
    assert!(anchored.preview().is_none());
    assert_eq!(anchored.style(), Some(style));

    let preview = PreviewShape::Circle { center: pt(1.0, 1.0), radius: 2.0 };
    let previewing = InputState::Previewing { tool: Tool::Circle, anchor: pt(1.0, 1.0), preview, style };
    assert_eq!(previewing.preview(), Some(&preview));
}

// =============================================================
// HostEvent wire format
// =============================================================

#[test]
fn pointer_down_defaults_to_primary_button() {
    let ev: Result<HostEvent, _> = serde_json::from_str(r#"{"type":"pointer_down","x":10,"y":12.5}"#);
    assert_eq!(ev.ok(), Some(HostEvent::PointerDown { x: 10.0, y: 12.5, button: Button::Primary }));
}

#[test]
fn unit_events_parse_from_type_only() {
    let ev: Result<HostEvent, _> = serde_json::from_str(r#"{"type":"pointer_leave"}"#);
    assert_eq!(ev.ok(), Some(HostEvent::PointerLeave));
    let ev: Result<HostEvent, _> = serde_json::from_str(r#"{"type":"undo"}"#);
    assert_eq!(ev.ok(), Some(HostEvent::Undo));
}

#[test]
fn set_color_parses_hex() {
    let ev: Result<HostEvent, _> = serde_json::from_str(r##"{"type":"set_color","color":"#ff0000"}"##);
    assert_eq!(ev.ok(), Some(HostEvent::SetColor { color: Rgb::new(255, 0, 0) }));
}

#[test]
fn key_down_modifiers_are_optional() {
    let ev: Result<HostEvent, _> =
        serde_json::from_str(r#"{"type":"key_down","key":"z","modifiers":{"ctrl":true}}"#);
    assert_eq!(
        ev.ok(),
        Some(HostEvent::KeyDown { key: Key("z".into()), modifiers: Modifiers { ctrl: true, ..Default::default() } })
    );
    let ev: Result<HostEvent, _> = serde_json::from_str(r#"{"type":"key_down","key":"Escape"}"#);
    assert_eq!(ev.ok(), Some(HostEvent::KeyDown { key: Key("Escape".into()), modifiers: Modifiers::default() }));
}

#[test]
fn unknown_event_type_is_rejected() {
    assert!(serde_json::from_str::<HostEvent>(r#"{"type":"zoom"}"#).is_err());
}
