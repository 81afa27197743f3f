//! Input model: tools, modifier keys, host events, and the gesture state machine.
//!
//! This module defines the types consumed by the session controller. `Tool`
//! and `StrokeStyle` capture the user's intent; `HostEvent` is everything the
//! host UI can send. `InputState` is the active gesture being tracked between
//! pointer-down and pointer-up. Each variant carries exactly the context its
//! stage needs, so a preview without an anchor cannot be represented.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::style::{Rgb, StrokeStyle};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand stroke in the chosen colour (default).
    #[default]
    Pencil,
    /// Freehand stroke in the background colour.
    Eraser,
    /// Outlined rectangle dragged corner to corner.
    Rectangle,
    /// Outlined circle dragged from its centre.
    Circle,
}

impl Tool {
    /// Whether this tool paints while the pointer moves.
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pencil | Self::Eraser)
    }

    /// Whether this tool previews a shape and paints only on release.
    #[must_use]
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle)
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button, pen contact, or single-finger touch.
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"z"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub String);

/// Transient shape outline shown while a shape tool is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PreviewShape {
    /// `anchor` and `corner` are opposite corners.
    Rect { anchor: Point, corner: Point },
    /// Centred on the drag anchor; radius reaches the pointer.
    Circle { center: Point, radius: f64 },
}

impl PreviewShape {
    /// Shape produced by dragging `tool` from `anchor` to `current`.
    /// `None` for freehand tools.
    #[must_use]
    pub fn from_drag(tool: Tool, anchor: Point, current: Point) -> Option<Self> {
        match tool {
            Tool::Rectangle => Some(Self::Rect { anchor, corner: current }),
            Tool::Circle => Some(Self::Circle { center: anchor, radius: anchor.distance(current) }),
            Tool::Pencil | Tool::Eraser => None,
        }
    }

    /// A zero-size shape paints nothing worth keeping.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        match *self {
            Self::Rect { anchor, corner } => anchor == corner,
            Self::Circle { radius, .. } => radius <= 0.0,
        }
    }
}

/// Persistent UI state visible to the host toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The user's chosen colour and width. The eraser derives from this
    /// rather than overwriting it.
    pub style: StrokeStyle,
}

impl UiState {
    /// Style a gesture started now would paint with.
    #[must_use]
    pub fn effective_style(&self, background: Rgb) -> StrokeStyle {
        match self.tool {
            Tool::Eraser => self.style.eraser(background),
            _ => self.style,
        }
    }
}

/// Internal state for the gesture state machine.
///
/// Freehand: `Idle → Drawing → Idle`.
/// Shapes: `Idle → Anchored → Previewing → Idle`.
/// Each active variant captures the tool and style at pointer-down, so
/// toolbar changes mid-gesture apply to the next gesture only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A freehand stroke is painting.
    Drawing {
        /// Pencil or eraser.
        tool: Tool,
        /// End of the previous segment; the next segment starts here.
        last: Point,
        /// Style captured at pointer-down.
        style: StrokeStyle,
    },
    /// A shape tool is pressed but the pointer has not moved yet.
    Anchored {
        /// Rectangle or circle.
        tool: Tool,
        /// Where the drag started.
        anchor: Point,
        /// Style captured at pointer-down.
        style: StrokeStyle,
    },
    /// A shape tool is being dragged; `preview` follows the pointer.
    Previewing {
        /// Rectangle or circle.
        tool: Tool,
        /// Where the drag started.
        anchor: Point,
        /// Outline derived from `anchor` and the latest pointer position.
        preview: PreviewShape,
        /// Style captured at pointer-down.
        style: StrokeStyle,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The preview outline, if a shape is being dragged.
    #[must_use]
    pub fn preview(&self) -> Option<&PreviewShape> {
        match self {
            Self::Previewing { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// Style of the gesture in progress.
    #[must_use]
    pub fn style(&self) -> Option<StrokeStyle> {
        match *self {
            Self::Idle => None,
            Self::Drawing { style, .. } | Self::Anchored { style, .. } | Self::Previewing { style, .. } => Some(style),
        }
    }
}

/// Everything the host UI can send to the controller.
///
/// Serialized with a `type` tag so a session can be recorded and replayed as
/// JSON lines, e.g. `{"type":"pointer_down","x":10,"y":10}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    /// The release position; the gesture is extended to it before ending.
    PointerUp {
        x: f64,
        y: f64,
    },
    PointerLeave,
    SelectTool {
        tool: Tool,
    },
    SetColor {
        color: Rgb,
    },
    SetWidth {
        width: u32,
    },
    Clear,
    Undo,
    Redo,
    KeyDown {
        key: Key,
        #[serde(default)]
        modifiers: Modifiers,
    },
}
