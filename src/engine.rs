use tracing::{debug, trace};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::EngineConfig;
use crate::doc::{Drawing, Shape};
use crate::geometry::Point;
use crate::history::History;
use crate::hit;
use crate::input::{InputState, Key, Tool, ToolSettings};
use crate::render::{self, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A pen/shape drag or text entry has begun.
    DrawingStarted,
    /// A shape was added to the drawing and recorded in history.
    ShapeCommitted(Shape),
    /// `count` shapes were erased and the result recorded in history.
    ShapesErased { count: usize },
    /// The host should show a text input with its baseline at `anchor`.
    TextEditStarted { anchor: Point },
    /// The host should hide its text input.
    TextEditEnded,
    /// Drawing or preview changed; the host should call `render`.
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// The live drawing is always the snapshot under the history cursor.
pub struct EngineCore {
    pub config: EngineConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
    history: History,
    input: InputState,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config, viewport_width: 0.0, viewport_height: 0.0, history: History::new(), input: InputState::Idle }
    }

    /// A core whose viewport already matches a `width` x `height` pixel canvas.
    #[must_use]
    pub fn sized(config: EngineConfig, width: u32, height: u32) -> Self {
        let mut core = Self::with_config(config);
        core.set_viewport(f64::from(width), f64::from(height));
        core
    }

    // --- Lifecycle ---

    /// Start a fresh session: empty drawing, single-entry history.
    pub fn activate(&mut self) {
        self.reset();
        debug!("drawing surface activated");
    }

    /// End the session, discarding the drawing and its history.
    pub fn deactivate(&mut self) {
        self.reset();
        debug!("drawing surface deactivated");
    }

    /// Abandon everything, including any drag or open text entry.
    pub fn cancel(&mut self) -> Vec<Action> {
        let was_editing = matches!(self.input, InputState::TextEditing { .. });
        self.reset();
        debug!("drawing cancelled");
        let mut actions = Vec::new();
        if was_editing {
            actions.push(Action::TextEditEnded);
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn reset(&mut self) {
        self.history.reset();
        self.input = InputState::Idle;
    }

    /// Update the surface size used when clearing before a redraw.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    // --- Pointer input ---

    /// Begin a gesture at `pt` with the toolbar's current settings.
    ///
    /// The eraser acts immediately with no drag phase. Pointer-down during an
    /// unresolved drag is ignored.
    pub fn on_pointer_down(&mut self, pt: Point, settings: &ToolSettings) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.input {
            InputState::Drawing { .. } => {
                trace!("pointer down ignored; drag in progress");
                return actions;
            }
            InputState::TextEditing { .. } => {
                // A new click abandons the open label without committing it.
                self.input = InputState::Idle;
                actions.push(Action::TextEditEnded);
            }
            InputState::Idle => {}
        }

        match settings.tool {
            Tool::Eraser => actions.extend(self.erase_at(pt)),
            Tool::Text => {
                self.input = InputState::TextEditing { anchor: pt, buffer: String::new() };
                actions.push(Action::DrawingStarted);
                actions.push(Action::TextEditStarted { anchor: pt });
            }
            Tool::Unknown => trace!("pointer down ignored; unknown tool"),
            tool => {
                let path = vec![pt];
                // Only the pen has something to show before the pointer moves.
                let preview = if tool == Tool::Pen { build_preview(tool, pt, &path, pt, settings) } else { None };
                self.input = InputState::Drawing { tool, anchor: pt, path, preview };
                actions.push(Action::DrawingStarted);
                actions.push(Action::RenderNeeded);
            }
        }
        actions
    }

    /// Extend the current drag to `pt`, recomputing the preview.
    pub fn on_pointer_move(&mut self, pt: Point, settings: &ToolSettings) -> Vec<Action> {
        let InputState::Drawing { tool, anchor, path, preview } = &mut self.input else {
            return Vec::new();
        };
        if *tool == Tool::Pen {
            path.push(pt);
        }
        *preview = build_preview(*tool, *anchor, path, pt, settings);
        vec![Action::RenderNeeded]
    }

    /// Finish the current drag, committing its preview if there is one.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Drawing { preview: Some(shape), .. } => {
                vec![self.commit_shape(shape), Action::RenderNeeded]
            }
            InputState::Drawing { tool, preview: None, .. } => {
                trace!(?tool, "drag released without a shape");
                Vec::new()
            }
            other => {
                self.input = other;
                Vec::new()
            }
        }
    }

    /// The pointer left the surface; treated as a release so no drag gets stuck.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- Keyboard / text ---

    /// Handle a key while text entry is open: `Enter` commits, `Escape`
    /// cancels, `Backspace` deletes, printable characters append.
    pub fn on_key_down(&mut self, key: &Key, settings: &ToolSettings) -> Vec<Action> {
        let InputState::TextEditing { anchor, buffer } = &mut self.input else {
            return Vec::new();
        };

        if key.is_enter() {
            let anchor = *anchor;
            let text = std::mem::take(buffer);
            self.input = InputState::Idle;
            let mut actions = vec![Action::TextEditEnded];
            if text.trim().is_empty() {
                trace!("empty text discarded");
            } else {
                let label = Shape::Text { anchor, text, color: settings.color.clone(), font_size: self.config.text_font_size };
                actions.push(self.commit_shape(label));
                actions.push(Action::RenderNeeded);
            }
            actions
        } else if key.is_escape() {
            self.input = InputState::Idle;
            vec![Action::TextEditEnded]
        } else if key.is_backspace() {
            buffer.pop();
            Vec::new()
        } else if let Some(c) = key.printable() {
            buffer.push(c);
            Vec::new()
        } else {
            Vec::new()
        }
    }

    /// Replace the open text buffer wholesale (for hosts that own a native
    /// text input). Ignored when no text entry is open.
    pub fn set_text_buffer(&mut self, text: &str) {
        if let InputState::TextEditing { buffer, .. } = &mut self.input {
            text.clone_into(buffer);
        }
    }

    /// React to the toolbar switching tools.
    ///
    /// Open text entry is cancelled when switching away from the text tool.
    /// A drag in progress keeps the tool it started with until released.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if tool != Tool::Text && matches!(self.input, InputState::TextEditing { .. }) {
            self.input = InputState::Idle;
            debug!(?tool, "text entry cancelled by tool change");
            return vec![Action::TextEditEnded];
        }
        Vec::new()
    }

    // --- Erase ---

    /// Remove every shape hit at `pt`. Records history only if something was
    /// actually removed.
    pub fn erase_at(&mut self, pt: Point) -> Vec<Action> {
        let current = self.history.current();
        let next = hit::erase(pt, current, &self.config.hit_params());
        let count = current.len() - next.len();
        if count == 0 {
            trace!(x = pt.x, y = pt.y, "erase hit nothing");
            return Vec::new();
        }
        self.history.commit(next);
        debug!(count, remaining = self.history.current().len(), "shapes erased");
        vec![Action::ShapesErased { count }, Action::RenderNeeded]
    }

    fn commit_shape(&mut self, shape: Shape) -> Action {
        let mut next = self.history.current().clone();
        next.push(shape.clone());
        self.history.commit(next);
        debug!(kind = shape.kind(), count = self.history.current().len(), "shape committed");
        Action::ShapeCommitted(shape)
    }

    // --- History ---

    /// Step back one snapshot and return the resulting drawing.
    pub fn undo(&mut self) -> &Drawing {
        self.history.undo();
        debug!(cursor = self.history.cursor(), "undo");
        self.history.current()
    }

    /// Step forward one snapshot and return the resulting drawing.
    pub fn redo(&mut self) -> &Drawing {
        self.history.redo();
        debug!(cursor = self.history.cursor(), "redo");
        self.history.current()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Queries ---

    /// The committed drawing.
    #[must_use]
    pub fn drawing(&self) -> &Drawing {
        self.history.current()
    }

    /// Whether anything has been drawn (enables the host's finish button).
    #[must_use]
    pub fn has_drawings(&self) -> bool {
        !self.drawing().is_empty()
    }

    /// The live shape of the drag in progress, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&Shape> {
        self.input.preview()
    }

    /// The text typed so far, if text entry is open.
    #[must_use]
    pub fn text_buffer(&self) -> Option<&str> {
        match &self.input {
            InputState::TextEditing { buffer, .. } => Some(buffer),
            InputState::Idle | InputState::Drawing { .. } => None,
        }
    }

    #[must_use]
    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    // --- Render ---

    /// Draw the committed drawing and any preview onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a surface call fails.
    pub fn render_to<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, self.drawing(), self.preview(), self.viewport_width, self.viewport_height, &self.config)
    }
}

fn build_preview(tool: Tool, anchor: Point, path: &[Point], pos: Point, settings: &ToolSettings) -> Option<Shape> {
    let color = settings.color.clone();
    let stroke_width = settings.stroke_width();
    match tool {
        Tool::Pen => Some(Shape::Path { points: path.to_vec(), color, stroke_width }),
        Tool::Line => Some(Shape::Line { start: anchor, end: pos, color, stroke_width }),
        Tool::Rectangle => Some(Shape::rectangle_from_drag(anchor, pos, &color, stroke_width, settings.filled)),
        Tool::Circle => Some(Shape::circle_from_drag(anchor, pos, &color, stroke_width, settings.filled)),
        Tool::Arrow => Some(Shape::Arrow { start: anchor, end: pos, color, stroke_width }),
        Tool::Text | Tool::Eraser | Tool::Unknown => None,
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: EngineConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let core = EngineCore::sized(config, canvas.width(), canvas.height());
        Ok(Self { canvas, ctx, core })
    }

    /// The canvas the engine draws on; the host exports it when finished.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Lifecycle ---

    /// Resize the backing canvas (in pixels) and the core viewport to match.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.core.set_viewport(f64::from(width), f64::from(height));
    }

    pub fn activate(&mut self) {
        self.core.set_viewport(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        self.core.activate();
    }

    pub fn deactivate(&mut self) {
        self.core.deactivate();
    }

    pub fn cancel(&mut self) -> Vec<Action> {
        self.core.cancel()
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, pt: Point, settings: &ToolSettings) -> Vec<Action> {
        self.core.on_pointer_down(pt, settings)
    }

    pub fn on_pointer_move(&mut self, pt: Point, settings: &ToolSettings) -> Vec<Action> {
        self.core.on_pointer_move(pt, settings)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_key_down(&mut self, key: &Key, settings: &ToolSettings) -> Vec<Action> {
        self.core.on_key_down(key, settings)
    }

    pub fn set_text_buffer(&mut self, text: &str) {
        self.core.set_text_buffer(text);
    }

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    // --- Delegated history ---

    pub fn undo(&mut self) -> &Drawing {
        self.core.undo()
    }

    pub fn redo(&mut self) -> &Drawing {
        self.core.redo()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.core.render_to(&mut self.ctx)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn drawing(&self) -> &Drawing {
        self.core.drawing()
    }

    #[must_use]
    pub fn has_drawings(&self) -> bool {
        self.core.has_drawings()
    }
}
