use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::assets::decode::PreparedImage;
use crate::canvas::mapping::{Axis, CoordinateMapping};
use crate::driver::control::Control;
use crate::encode::screenshot::save_frame;
use crate::event::input::{Buttons, EventSnapshot, KeyEvent};
use crate::foundation::core::{Affine, Color, Point, Rect};
use crate::foundation::error::ProcResult;
use crate::foundation::math::Rng64;
use crate::path::outline::{fill_outline, stroke_outline};
use crate::path::segment::Segment;
use crate::render::backend::{
    BackendKind, CpuBackendOpts, FrameRGBA, RenderBackend, create_backend,
};
use crate::render::plan::{DrawOp, FramePlan, TextFont};
use crate::state::context::{Dash, GraphicsContext, StrokeCap, StrokeJoin, TextAlign};
use crate::state::stack::StateStack;
use crate::text::font::{FontBook, FontId};
use crate::transform::affine::TransformOp;

/// Seed used when `random_seed` was never called.
pub const DEFAULT_SEED: u64 = 1;

/// Default interval between frame ticks.
pub const DEFAULT_FRAME_PERIOD: Duration = Duration::from_millis(15);

/// An immediate-mode drawing processor.
///
/// Owns the logical-to-device mapping, the graphics state stack and the display
/// list of the frame being drawn. Drawing calls must not be issued concurrently;
/// only the [`Control`] flags are shared with other threads.
pub struct Proc {
    mapping: CoordinateMapping,
    stack: StateStack,
    plan: FramePlan,
    in_frame: bool,
    rng: Rng64,
    frame_count: u64,
    frame_period: Duration,
    control: Arc<Control>,
    events: EventSnapshot,
    fonts: FontBook,
    warned_no_font: bool,
    backend: Box<dyn RenderBackend>,
    last_frame: Option<FrameRGBA>,
}

impl Default for Proc {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Proc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proc")
            .field("mapping", &self.mapping)
            .field("depth", &self.stack.depth())
            .field("ops", &self.plan.len())
            .field("frame_count", &self.frame_count)
            .field("fonts", &self.fonts)
            .finish_non_exhaustive()
    }
}

impl Proc {
    /// A 400x400 pixel canvas with default attributes and the CPU backend.
    pub fn new() -> Self {
        let mapping = CoordinateMapping::default();
        let canvas = mapping.canvas();
        Self {
            mapping,
            stack: StateStack::new(GraphicsContext::default()),
            plan: FramePlan::new(canvas.width, canvas.height),
            in_frame: false,
            rng: Rng64::new(DEFAULT_SEED),
            frame_count: 0,
            frame_period: DEFAULT_FRAME_PERIOD,
            control: Arc::new(Control::new()),
            events: EventSnapshot::default(),
            fonts: FontBook::new(),
            warned_no_font: false,
            backend: create_backend(BackendKind::Cpu, CpuBackendOpts::default()),
            last_frame: None,
        }
    }

    /// Replace the rendering backend.
    pub fn with_backend(mut self, backend: Box<dyn RenderBackend>) -> Self {
        self.backend = backend;
        self
    }

    // --- canvas ---------------------------------------------------------------

    fn reset_canvas(&mut self, mapping: CoordinateMapping) {
        let canvas = mapping.canvas();
        tracing::debug!(width = canvas.width, height = canvas.height, "configure canvas");
        self.mapping = mapping;
        self.plan.width = canvas.width;
        self.plan.height = canvas.height;
        *self.stack.ctx_mut() = GraphicsContext::default();
    }

    /// Size the canvas in pixels with a 1:1 logical mapping.
    ///
    /// Drawing attributes of the current state are reset to their defaults.
    pub fn canvas(&mut self, width: u32, height: u32) -> ProcResult<()> {
        let mapping = CoordinateMapping::pixels(width, height)?;
        self.reset_canvas(mapping);
        Ok(())
    }

    /// Size the canvas in pixels and map `[xmin, xmax] x [ymin, ymax]` onto it.
    ///
    /// Drawing attributes of the current state are reset to their defaults.
    pub fn physical_canvas(
        &mut self,
        width: u32,
        height: u32,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    ) -> ProcResult<()> {
        let mapping = CoordinateMapping::physical(width, height, xmin, xmax, ymin, ymax)?;
        self.reset_canvas(mapping);
        Ok(())
    }

    /// Change the device size, keeping the logical intervals and attributes.
    pub fn resize(&mut self, width: u32, height: u32) -> ProcResult<()> {
        self.mapping = self.mapping.resized(width, height)?;
        self.plan.width = width;
        self.plan.height = height;
        Ok(())
    }

    /// Current coordinate mapping.
    pub fn mapping(&self) -> &CoordinateMapping {
        &self.mapping
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.mapping.canvas().width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.mapping.canvas().height
    }

    pub(crate) fn pt(&self, x: f64, y: f64) -> Point {
        self.mapping.to_device(x, y)
    }

    // --- attributes -----------------------------------------------------------

    /// Current drawing attributes.
    pub fn context(&self) -> &GraphicsContext {
        self.stack.ctx()
    }

    /// Set the background color and, while drawing, paint it over the whole canvas.
    pub fn background(&mut self, c: Color) {
        self.stack.ctx_mut().background = c;
        if !self.in_frame {
            return;
        }
        let canvas = self.mapping.canvas();
        let rect = Rect::new(0.0, 0.0, f64::from(canvas.width), f64::from(canvas.height));
        self.plan.push(DrawOp::Fill {
            outline: kurbo::Shape::to_path(&rect, 0.1),
            transform: Affine::IDENTITY,
            color: c,
        });
    }

    /// Fill subsequent shapes with `c`.
    pub fn fill(&mut self, c: Color) {
        self.stack.ctx_mut().fill = Some(c);
    }

    /// Disable filling.
    pub fn no_fill(&mut self) {
        self.stack.ctx_mut().fill = None;
    }

    /// Stroke subsequent shapes with `c`.
    pub fn stroke(&mut self, c: Color) {
        self.stack.ctx_mut().stroke.color = Some(c);
    }

    /// Disable stroking.
    pub fn no_stroke(&mut self) {
        self.stack.ctx_mut().stroke.color = None;
    }

    /// Stroke width in device pixels; `0` disables stroking.
    pub fn stroke_width(&mut self, w: f64) {
        self.stack.ctx_mut().stroke.width = w;
    }

    /// Stroke end cap.
    pub fn stroke_cap(&mut self, cap: StrokeCap) {
        self.stack.ctx_mut().stroke.cap = cap;
    }

    /// Stroke corner join.
    pub fn stroke_join(&mut self, join: StrokeJoin) {
        self.stack.ctx_mut().stroke.join = join;
    }

    /// Dash subsequent strokes with alternating on/off lengths (device pixels).
    pub fn stroke_dash(&mut self, offset: f64, pattern: &[f64]) {
        self.stack.ctx_mut().stroke.dash = Some(Dash {
            offset,
            pattern: pattern.to_vec(),
        });
    }

    /// Draw solid strokes.
    pub fn no_dash(&mut self) {
        self.stack.ctx_mut().stroke.dash = None;
    }

    /// Text size in pixels.
    pub fn text_size(&mut self, size: f64) {
        self.stack.ctx_mut().text.size = size;
    }

    /// Text alignment relative to the anchor point.
    pub fn text_align(&mut self, align: TextAlign) {
        self.stack.ctx_mut().text.align = align;
    }

    /// Text color.
    pub fn text_color(&mut self, c: Color) {
        self.stack.ctx_mut().text.color = c;
    }

    /// Select a font returned by [`Proc::load_font`]; unknown handles are ignored.
    pub fn text_font(&mut self, font: FontId) {
        if !self.fonts.contains(font) {
            tracing::warn!(?font, "text_font with a font this processor did not load");
            return;
        }
        self.stack.ctx_mut().text.font = Some(font);
    }

    /// Catmull-Rom tension used by [`Proc::curve`]; `0` is the classic spline.
    pub fn curve_tightness(&mut self, tension: f64) {
        self.stack.ctx_mut().curve_tension = tension;
    }

    // --- state stack and transforms -------------------------------------------

    /// Save the drawing attributes and the transform.
    pub fn push(&mut self) {
        self.stack.push();
    }

    /// Restore the state saved by the matching [`Proc::push`].
    ///
    /// # Panics
    /// Panics when there is no matching push.
    pub fn pop(&mut self) {
        self.stack.pop();
    }

    /// Number of pushes not yet popped.
    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Current device transform.
    pub fn transform(&self) -> Affine {
        self.stack.transform()
    }

    fn apply(&mut self, op: TransformOp) {
        let a = op.to_affine(&self.mapping);
        self.stack.apply(a);
    }

    /// Rotate by `angle` radians; positive turns counter-clockwise on screen.
    pub fn rotate(&mut self, angle: f64) {
        self.apply(TransformOp::Rotate(angle));
    }

    /// Scale about the device origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.apply(TransformOp::Scale(sx, sy));
    }

    /// Translate by a logical distance.
    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.apply(TransformOp::Translate(tx, ty));
    }

    /// Shear by angles (radians) along x and y.
    pub fn shear(&mut self, ax: f64, ay: f64) {
        self.apply(TransformOp::Shear(ax, ay));
    }

    /// Multiply by the canvas-style affine `[a b c d e f]`.
    pub fn matrix(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.apply(TransformOp::Matrix([a, b, c, d, e, f]));
    }

    /// Reset the transform of the current state to identity.
    pub fn reset_matrix(&mut self) {
        self.stack.set_transform(Affine::IDENTITY);
    }

    // --- painting -------------------------------------------------------------

    /// Paint `segs` with the current fill and stroke.
    pub(crate) fn paint_segments(&mut self, segs: &[Segment]) {
        if segs.is_empty() {
            return;
        }
        let transform = self.stack.transform();
        if let Some(color) = self.stack.ctx().fill {
            self.plan.push(DrawOp::Fill {
                outline: fill_outline(segs),
                transform,
                color,
            });
        }
        self.stroke_segments(segs);
    }

    /// Paint `segs` with the current stroke only.
    pub(crate) fn stroke_segments(&mut self, segs: &[Segment]) {
        let style = &self.stack.ctx().stroke;
        let Some(color) = style.color.filter(|_| style.is_active()) else {
            return;
        };
        if segs.is_empty() {
            return;
        }
        let outline = stroke_outline(segs, style);
        let transform = self.stack.transform();
        self.plan.push(DrawOp::Stroke {
            outline,
            transform,
            color,
        });
    }

    pub(crate) fn fill_active(&self) -> bool {
        self.stack.ctx().fill_active()
    }

    pub(crate) fn stroke_active(&self) -> bool {
        self.stack.ctx().stroke.is_active()
    }

    /// Logical length along `axis` in device pixels (always positive).
    pub(crate) fn device_len(&self, axis: Axis, len: f64) -> f64 {
        self.mapping.length_to_device(axis, len).abs()
    }

    // --- text and images ------------------------------------------------------

    /// Register a TrueType/OpenType font.
    pub fn load_font(&mut self, bytes: Vec<u8>) -> ProcResult<FontId> {
        self.fonts.load(bytes)
    }

    /// Draw `txt` with its baseline anchored at `(x, y)`.
    ///
    /// Skipped (with a warning) until a font has been loaded.
    pub fn text(&mut self, txt: &str, x: f64, y: f64) {
        let style = self.stack.ctx().text.clone();
        let Some(font) = self.fonts.resolve(style.font) else {
            if !self.warned_no_font {
                tracing::warn!(font = ?style.font, "no font available, text is not drawn");
                self.warned_no_font = true;
            }
            return;
        };
        let anchor = self.pt(x, y);
        self.plan.push(DrawOp::Text {
            text: txt.to_string(),
            font: TextFont(font),
            size: style.size,
            color: style.color,
            align: style.align,
            anchor,
            transform: self.stack.transform(),
        });
    }

    /// Draw `img` with its top-left corner at `(x, y)`.
    pub fn draw_image(&mut self, img: &PreparedImage, x: f64, y: f64) {
        let origin = self.pt(x, y);
        self.plan.push(DrawOp::Image {
            image: img.clone(),
            origin,
            transform: self.stack.transform(),
        });
    }

    // --- randomness -----------------------------------------------------------

    /// Re-seed the generator behind [`Proc::random`] and [`Proc::random_gaussian`].
    pub fn random_seed(&mut self, seed: u64) {
        self.rng = Rng64::new(seed);
    }

    /// Uniform sample in `[min, max)`; returns `min` when `min == max`.
    pub fn random(&mut self, min: f64, max: f64) -> f64 {
        if min == max {
            return min;
        }
        min + (max - min) * self.rng.next_f64_01()
    }

    /// Normal sample with the given mean and standard deviation.
    pub fn random_gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.rng.next_normal()
    }

    // --- input ----------------------------------------------------------------

    /// Input state as of the start of the current tick.
    pub fn events(&self) -> &EventSnapshot {
        &self.events
    }

    pub(crate) fn events_mut(&mut self) -> &mut EventSnapshot {
        &mut self.events
    }

    /// Pointer position in logical coordinates.
    pub fn mouse_position(&self) -> (f64, f64) {
        self.mapping.to_logical(self.events.mouse.position)
    }

    /// Pointer position before the last move, in logical coordinates.
    pub fn prev_mouse_position(&self) -> (f64, f64) {
        self.mapping.to_logical(self.events.mouse.prev_position)
    }

    /// Whether a pointer button is pressed.
    pub fn mouse_pressed(&self) -> bool {
        self.events.mouse.pressed
    }

    /// Buttons held during the latest pointer event.
    pub fn mouse_buttons(&self) -> Buttons {
        self.events.mouse.buttons
    }

    /// Latest key event.
    pub fn key(&self) -> Option<&KeyEvent> {
        self.events.key.current.as_ref()
    }

    /// Whether a key is held.
    pub fn key_is_pressed(&self) -> bool {
        self.events.key.is_pressed()
    }

    /// Whether the named key is held.
    pub fn key_is_down(&self, name: &str) -> bool {
        self.events.key_is_down(name)
    }

    // --- frame control --------------------------------------------------------

    /// Number of completed draws.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Stop drawing on ticks; the last frame stays on screen.
    pub fn no_loop(&mut self) {
        self.control.set_looping(false);
    }

    /// Resume drawing on ticks.
    pub fn start_loop(&mut self) {
        self.control.set_looping(true);
    }

    /// Whether ticks currently draw.
    pub fn is_looping(&self) -> bool {
        self.control.is_looping()
    }

    /// Interval between frame ticks.
    pub fn frame_rate(&mut self, period: Duration) {
        self.frame_period = period;
    }

    /// Current interval between frame ticks.
    pub fn frame_period(&self) -> Duration {
        self.frame_period
    }

    /// Flags shared with the frame driver and tick thread.
    pub fn control(&self) -> Arc<Control> {
        Arc::clone(&self.control)
    }

    /// Display list recorded so far (current frame, or the last one between frames).
    pub fn plan(&self) -> &FramePlan {
        &self.plan
    }

    /// Most recently rendered frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    /// Start recording a frame: clear to the background, reset the transform.
    pub fn begin_frame(&mut self) {
        let canvas = self.mapping.canvas();
        self.plan = FramePlan::new(canvas.width, canvas.height);
        self.stack.reset_transform();
        self.plan.push(DrawOp::Clear {
            color: self.stack.ctx().background,
        });
        self.in_frame = true;
    }

    /// Finish the frame started by [`Proc::begin_frame`] and render it.
    ///
    /// # Panics
    /// Panics when pushes and pops did not balance during the frame.
    pub fn end_frame(&mut self) -> ProcResult<&FrameRGBA> {
        assert_eq!(
            self.stack.depth(),
            0,
            "unbalanced push/pop: {} push(es) left at end of draw",
            self.stack.depth()
        );
        self.in_frame = false;
        // A failed render is not a completed frame.
        let frame = self.backend.render_plan(&self.plan)?;
        self.frame_count += 1;
        tracing::debug!(frame = self.frame_count, ops = self.plan.len(), "frame rendered");
        Ok(self.last_frame.insert(frame))
    }

    /// Record one frame with `draw` and render it.
    pub fn draw_frame(&mut self, draw: impl FnOnce(&mut Proc)) -> ProcResult<&FrameRGBA> {
        self.begin_frame();
        draw(self);
        self.end_frame()
    }

    /// Render what has been drawn so far.
    pub fn render(&mut self) -> ProcResult<FrameRGBA> {
        if !self.in_frame
            && let Some(frame) = &self.last_frame
        {
            return Ok(frame.clone());
        }
        self.backend.render_plan(&self.plan)
    }

    /// Save the canvas to `path`; the format comes from the extension (PNG fallback).
    pub fn screenshot(&mut self, path: impl AsRef<Path>) -> ProcResult<()> {
        let frame = self.render()?;
        save_frame(&frame, path.as_ref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/proc/processor.rs"]
mod tests;
