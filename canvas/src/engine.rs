use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{BACKGROUND, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::export::{self, ExportError};
use crate::geom::Point;
use crate::history::History;
use crate::input::{Button, HostEvent, InputState, Key, Modifiers, PreviewShape, Tool, UiState};
use crate::render;
use crate::style::{Rgb, StrokeStyle};
use crate::surface::{Snapshot, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Surface pixels changed; redraw.
    RenderNeeded,
    /// The overlay outline changed. `None` removes it.
    PreviewChanged(Option<PreviewShape>),
    /// A commit, undo or redo moved the history cursor.
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// The active tool changed; update toolbar highlighting.
    ToolChanged(Tool),
}

/// Parameters fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Surface width in device pixels.
    pub width: u32,
    /// Surface height in device pixels.
    pub height: u32,
    /// Fill colour for a fresh or cleared surface; also the eraser colour.
    pub background: Rgb,
    /// Maximum number of history entries kept. `None` is unbounded.
    pub history_limit: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, background: BACKGROUND, history_limit: None }
    }
}

/// Canvas session controller: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Every operation is synchronous and infallible; calls that make no sense in
/// the current state are ignored and return no actions.
pub struct EngineCore {
    session: Uuid,
    config: SessionConfig,
    surface: Surface,
    history: History<Snapshot>,
    ui: UiState,
    input: InputState,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl EngineCore {
    /// Open a session: blank surface, history seeded with its snapshot.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let surface = Surface::new(config.width, config.height, config.background);
        let history = History::with_limit(surface.snapshot(), config.history_limit);
        let session = Uuid::new_v4();
        tracing::debug!(%session, width = config.width, height = config.height, "canvas session opened");
        Self { session, config, surface, history, ui: UiState::default(), input: InputState::Idle }
    }

    // --- Tool / style ---

    /// Set the active tool. History is untouched; a gesture already in
    /// progress keeps the tool it started with.
    pub fn select_tool(&mut self, tool: Tool) -> Vec<Action> {
        if self.ui.tool == tool {
            return Vec::new();
        }
        self.ui.tool = tool;
        tracing::debug!(session = %self.session, ?tool, "tool selected");
        vec![Action::ToolChanged(tool)]
    }

    /// Remember `color` as the chosen stroke colour. While the eraser is
    /// active it takes effect when the pencil or a shape tool is reselected.
    pub fn set_color(&mut self, color: Rgb) {
        self.ui.style.color = color;
    }

    /// Set the stroke width. Returns `false` and changes nothing when
    /// `width` is outside `1..=20`.
    pub fn set_width(&mut self, width: u32) -> bool {
        if !StrokeStyle::width_in_range(width) {
            tracing::debug!(session = %self.session, width, "stroke width out of range; ignored");
            return false;
        }
        self.ui.style.width = width;
        true
    }

    // --- Gestures ---

    /// Start a gesture at `point`. Ignored for a malformed point or while
    /// another gesture is in progress.
    pub fn begin_stroke(&mut self, point: Point) -> Vec<Action> {
        if !point.is_finite() {
            tracing::debug!(session = %self.session, "malformed point; begin ignored");
            return Vec::new();
        }
        if !self.input.is_idle() {
            tracing::debug!(session = %self.session, "gesture already in progress; begin ignored");
            return Vec::new();
        }

        let tool = self.ui.tool;
        let style = self.ui.effective_style(self.config.background);
        self.input = if tool.is_freehand() {
            InputState::Drawing { tool, last: point, style }
        } else {
            InputState::Anchored { tool, anchor: point, style }
        };
        Vec::new()
    }

    /// Continue the gesture to `point`. Freehand tools paint immediately;
    /// shape tools only update the preview.
    pub fn extend_stroke(&mut self, point: Point) -> Vec<Action> {
        if !point.is_finite() {
            tracing::debug!(session = %self.session, "malformed point; extend ignored");
            return Vec::new();
        }

        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { tool, last, style } => {
                self.surface.stroke_segment(last, point, style);
                self.input = InputState::Drawing { tool, last: point, style };
                vec![Action::RenderNeeded]
            }
            InputState::Anchored { tool, anchor, style } | InputState::Previewing { tool, anchor, style, .. } => {
                let Some(preview) = PreviewShape::from_drag(tool, anchor, point) else {
                    return Vec::new();
                };
                self.input = InputState::Previewing { tool, anchor, preview, style };
                vec![Action::PreviewChanged(Some(preview)), Action::RenderNeeded]
            }
        }
    }

    /// Finish the gesture. A freehand stroke is committed; a shape is painted
    /// and committed unless it never moved or has zero size.
    pub fn end_stroke(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle | InputState::Anchored { .. } => Vec::new(),
            InputState::Drawing { tool, .. } => {
                tracing::trace!(session = %self.session, ?tool, "stroke finished");
                vec![self.commit(), Action::RenderNeeded]
            }
            InputState::Previewing { tool, preview, style, .. } => {
                if preview.is_degenerate() {
                    tracing::debug!(session = %self.session, ?tool, "zero-size shape dropped");
                    return vec![Action::PreviewChanged(None), Action::RenderNeeded];
                }
                self.surface.stroke_shape(&preview, style);
                vec![Action::PreviewChanged(None), self.commit(), Action::RenderNeeded]
            }
        }
    }

    /// Abandon the gesture. A shape preview is discarded without painting.
    /// A freehand stroke has already painted, so it is committed as usual.
    pub fn cancel_stroke(&mut self) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Drawing { .. } => self.end_stroke(),
            InputState::Anchored { .. } => {
                self.input = InputState::Idle;
                Vec::new()
            }
            InputState::Previewing { .. } => {
                self.input = InputState::Idle;
                vec![Action::PreviewChanged(None), Action::RenderNeeded]
            }
        }
    }

    // --- Commands ---

    /// Fill the surface with the background colour and commit.
    pub fn clear(&mut self) -> Vec<Action> {
        let mut actions = self.end_stroke();
        self.surface.fill(self.config.background);
        actions.push(self.commit());
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Step back one committed state. No-op at the oldest entry.
    pub fn undo(&mut self) -> Vec<Action> {
        let mut actions = self.end_stroke();
        let Some(snapshot) = self.history.undo() else {
            return actions;
        };
        self.surface.restore(snapshot);
        tracing::debug!(session = %self.session, cursor = self.history.cursor(), "undo");
        actions.push(self.history_changed());
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Step forward one committed state. No-op at the newest entry.
    pub fn redo(&mut self) -> Vec<Action> {
        let mut actions = self.end_stroke();
        let Some(snapshot) = self.history.redo() else {
            return actions;
        };
        self.surface.restore(snapshot);
        tracing::debug!(session = %self.session, cursor = self.history.cursor(), "redo");
        actions.push(self.history_changed());
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Export ---

    /// Current surface as PNG bytes.
    ///
    /// # Errors
    ///
    /// Fails for a zero-sized surface or if encoding fails.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        export::to_png(&self.surface)
    }

    /// Current surface as a `data:image/png;base64,...` URI.
    ///
    /// # Errors
    ///
    /// Same as [`EngineCore::export_png`].
    pub fn export_data_uri(&self) -> Result<String, ExportError> {
        export::to_data_uri(&self.surface)
    }

    // --- Host events ---

    pub fn on_pointer_down(&mut self, point: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.begin_stroke(point)
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        self.extend_stroke(point)
    }

    /// Extend to the release point if the pointer moved since the last
    /// event, then end the gesture. A shape that was never dragged stays
    /// uncommitted.
    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Action> {
        let moved = match self.input {
            InputState::Drawing { last, .. } => last != point,
            InputState::Previewing { preview, .. } => Some(preview) != self.drag_preview(point),
            InputState::Idle | InputState::Anchored { .. } => false,
        };
        let mut actions = if moved { self.extend_stroke(point) } else { Vec::new() };
        actions.extend(self.end_stroke());
        actions
    }

    /// Leaving the drawable area ends the gesture, keeping partial work.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_stroke()
    }

    /// Ctrl/Cmd+Z undo, Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y redo, Escape cancel.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let name = key.0.as_str();
        if name == "Escape" {
            return self.cancel_stroke();
        }
        if !modifiers.command() {
            return Vec::new();
        }
        if name.eq_ignore_ascii_case("z") {
            if modifiers.shift { self.redo() } else { self.undo() }
        } else if name.eq_ignore_ascii_case("y") {
            self.redo()
        } else {
            Vec::new()
        }
    }

    /// Route a host event to its handler.
    pub fn dispatch(&mut self, event: &HostEvent) -> Vec<Action> {
        match event {
            HostEvent::PointerDown { x, y, button } => self.on_pointer_down(Point::new(*x, *y), *button),
            HostEvent::PointerMove { x, y } => self.on_pointer_move(Point::new(*x, *y)),
            HostEvent::PointerUp { x, y } => self.on_pointer_up(Point::new(*x, *y)),
            HostEvent::PointerLeave => self.on_pointer_leave(),
            HostEvent::SelectTool { tool } => self.select_tool(*tool),
            HostEvent::SetColor { color } => {
                self.set_color(*color);
                Vec::new()
            }
            HostEvent::SetWidth { width } => {
                self.set_width(*width);
                Vec::new()
            }
            HostEvent::Clear => self.clear(),
            HostEvent::Undo => self.undo(),
            HostEvent::Redo => self.redo(),
            HostEvent::KeyDown { key, modifiers } => self.on_key_down(key, *modifiers),
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Style the active tool paints with (background colour for the eraser).
    #[must_use]
    pub fn stroke_style(&self) -> StrokeStyle {
        self.ui.effective_style(self.config.background)
    }

    /// The user's chosen colour and width, independent of the active tool.
    #[must_use]
    pub fn chosen_style(&self) -> StrokeStyle {
        self.ui.style
    }

    #[must_use]
    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn preview(&self) -> Option<&PreviewShape> {
        self.input.preview()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Internals ---

    fn commit(&mut self) -> Action {
        let discarded = self.history.commit(self.surface.snapshot());
        tracing::debug!(
            session = %self.session,
            cursor = self.history.cursor(),
            entries = self.history.len(),
            discarded,
            "history commit"
        );
        self.history_changed()
    }

    fn history_changed(&self) -> Action {
        Action::HistoryChanged { can_undo: self.history.can_undo(), can_redo: self.history.can_redo() }
    }

    fn drag_preview(&self, point: Point) -> Option<PreviewShape> {
        match self.input {
            InputState::Anchored { tool, anchor, .. } | InputState::Previewing { tool, anchor, .. } => {
                PreviewShape::from_drag(tool, anchor, point)
            }
            InputState::Idle | InputState::Drawing { .. } => None,
        }
    }
}

/// The browser-facing engine. Wraps `EngineCore` and owns the canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Open a session bound to `canvas`, resizing the element's backing
    /// store to the configured surface size.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: SessionConfig) -> Self {
        canvas.set_width(config.width);
        canvas.set_height(config.height);
        Self { canvas, core: EngineCore::new(config) }
    }

    // --- Delegated input ---

    pub fn dispatch(&mut self, event: &HostEvent) -> Vec<Action> {
        self.core.dispatch(event)
    }

    pub fn on_pointer_down(&mut self, point: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(point, button)
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_move(point)
    }

    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_up(point)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_key_down(key, modifiers)
    }

    // --- Render ---

    /// Draw the surface and any preview overlay to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self.context()?;
        render::draw(&ctx, self.core.surface(), self.core.input_state())
    }

    // --- Export ---

    /// Data URI for a download link. Empty when export fails.
    #[must_use]
    pub fn export_data_uri(&self) -> String {
        match self.core.export_data_uri() {
            Ok(uri) => uri,
            Err(e) => {
                tracing::warn!(session = %self.core.session_id(), error = %e, "export failed");
                String::new()
            }
        }
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }
}
