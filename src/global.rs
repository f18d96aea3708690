//! Free-function drawing API over one thread-local [`Proc`].
//!
//! Each thread owns an independent processor, created on first use with the same
//! defaults as [`Proc::new`]. Calls must not be nested: invoking a free function from
//! inside [`with`] panics on the reentrant borrow.
//!
//! ```no_run
//! use proc2d::global as p;
//! use proc2d::{Color, ChannelHost};
//!
//! let mut host = ChannelHost::new();
//! p::run(
//!     || p::canvas(200, 200).unwrap(),
//!     || {
//!         p::background(Color::gray(220));
//!         p::fill(Color::rgb(255, 0, 0));
//!         p::circle(100.0, 100.0, 50.0);
//!     },
//!     &mut host,
//! )
//! .unwrap();
//! ```

use std::cell::RefCell;
use std::path::Path as FsPath;
use std::time::Duration;

use crate::assets::decode::PreparedImage;
use crate::driver::frame::{FrameDriver, Sketch};
use crate::driver::host::Host;
use crate::event::input::Buttons;
use crate::foundation::core::Color;
use crate::foundation::error::ProcResult;
use crate::path::builder::Path;
use crate::proc::processor::Proc;
use crate::state::context::{StrokeCap, StrokeJoin, TextAlign};
use crate::text::font::FontId;

thread_local! {
    static GLOBAL: RefCell<Proc> = RefCell::new(Proc::new());
}

/// Run `f` against this thread's processor.
pub fn with<R>(f: impl FnOnce(&mut Proc) -> R) -> R {
    GLOBAL.with(|g| f(&mut g.borrow_mut()))
}

/// Replace this thread's processor, returning the previous one.
pub fn replace(p: Proc) -> Proc {
    GLOBAL.with(|g| std::mem::replace(&mut *g.borrow_mut(), p))
}

fn swap(p: &mut Proc) {
    GLOBAL.with(|g| std::mem::swap(&mut *g.borrow_mut(), p));
}

type Callback<'a> = Box<dyn FnMut() + 'a>;

/// Zero-argument callbacks making up a global-API program.
pub struct Program<'a> {
    setup: Option<Callback<'a>>,
    draw: Callback<'a>,
    mouse: Option<Callback<'a>>,
}

impl std::fmt::Debug for Program<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("setup", &self.setup.is_some())
            .field("mouse", &self.mouse.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> Program<'a> {
    /// A program that only draws.
    pub fn new(draw: impl FnMut() + 'a) -> Self {
        Self {
            setup: None,
            draw: Box::new(draw),
            mouse: None,
        }
    }

    /// Run `f` once before the first frame.
    pub fn with_setup(mut self, f: impl FnMut() + 'a) -> Self {
        self.setup = Some(Box::new(f));
        self
    }

    /// Run `f` after each pointer event.
    pub fn on_mouse(mut self, f: impl FnMut() + 'a) -> Self {
        self.mouse = Some(Box::new(f));
        self
    }
}

// The driver owns the processor while it runs; each callback lends it back to the
// thread-local slot for the duration of the call.
impl Sketch for Program<'_> {
    fn setup(&mut self, p: &mut Proc) {
        if let Some(f) = self.setup.as_mut() {
            swap(p);
            f();
            swap(p);
        }
    }

    fn draw(&mut self, p: &mut Proc) {
        swap(p);
        (self.draw)();
        swap(p);
    }

    fn mouse(&mut self, p: &mut Proc) {
        if let Some(f) = self.mouse.as_mut() {
            swap(p);
            f();
            swap(p);
        }
    }
}

/// Drive `program` on this thread's processor until `host` goes away.
pub fn run_program<H: Host + ?Sized>(mut program: Program<'_>, host: &mut H) -> ProcResult<()> {
    let mut p = replace(Proc::new());
    let res = FrameDriver::new().run(&mut p, &mut program, host);
    replace(p);
    res
}

/// Call `setup` once, then `draw` on every tick of `host`.
pub fn run<H: Host + ?Sized>(
    setup: impl FnMut(),
    draw: impl FnMut(),
    host: &mut H,
) -> ProcResult<()> {
    run_program(Program::new(draw).with_setup(setup), host)
}

/// Build a path with `f` and paint it.
pub fn with_path(f: impl FnOnce(&mut Path<'_>)) {
    with(|p| {
        let mut path = p.begin_path();
        f(&mut path);
        path.end();
    });
}

/// See [`Proc::canvas`].
pub fn canvas(width: u32, height: u32) -> ProcResult<()> {
    with(|p| p.canvas(width, height))
}

/// See [`Proc::physical_canvas`].
pub fn physical_canvas(
    width: u32,
    height: u32,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
) -> ProcResult<()> {
    with(|p| p.physical_canvas(width, height, xmin, xmax, ymin, ymax))
}

/// Canvas width in pixels.
pub fn width() -> u32 {
    with(|p| p.width())
}

/// Canvas height in pixels.
pub fn height() -> u32 {
    with(|p| p.height())
}

/// See [`Proc::background`].
pub fn background(c: Color) {
    with(|p| p.background(c));
}

/// See [`Proc::fill`].
pub fn fill(c: Color) {
    with(|p| p.fill(c));
}

/// See [`Proc::no_fill`].
pub fn no_fill() {
    with(|p| p.no_fill());
}

/// See [`Proc::stroke`].
pub fn stroke(c: Color) {
    with(|p| p.stroke(c));
}

/// See [`Proc::no_stroke`].
pub fn no_stroke() {
    with(|p| p.no_stroke());
}

/// See [`Proc::stroke_width`].
pub fn stroke_width(w: f64) {
    with(|p| p.stroke_width(w));
}

/// See [`Proc::stroke_cap`].
pub fn stroke_cap(cap: StrokeCap) {
    with(|p| p.stroke_cap(cap));
}

/// See [`Proc::stroke_join`].
pub fn stroke_join(join: StrokeJoin) {
    with(|p| p.stroke_join(join));
}

/// See [`Proc::stroke_dash`].
pub fn stroke_dash(offset: f64, pattern: &[f64]) {
    with(|p| p.stroke_dash(offset, pattern));
}

/// See [`Proc::no_dash`].
pub fn no_dash() {
    with(|p| p.no_dash());
}

/// See [`Proc::text_size`].
pub fn text_size(size: f64) {
    with(|p| p.text_size(size));
}

/// See [`Proc::text_align`].
pub fn text_align(align: TextAlign) {
    with(|p| p.text_align(align));
}

/// See [`Proc::text_color`].
pub fn text_color(c: Color) {
    with(|p| p.text_color(c));
}

/// See [`Proc::text_font`].
pub fn text_font(font: FontId) {
    with(|p| p.text_font(font));
}

/// See [`Proc::load_font`].
pub fn load_font(bytes: Vec<u8>) -> ProcResult<FontId> {
    with(|p| p.load_font(bytes))
}

/// See [`Proc::curve_tightness`].
pub fn curve_tightness(tension: f64) {
    with(|p| p.curve_tightness(tension));
}

/// See [`Proc::push`].
pub fn push() {
    with(|p| p.push());
}

/// See [`Proc::pop`].
pub fn pop() {
    with(|p| p.pop());
}

/// See [`Proc::rotate`].
pub fn rotate(angle: f64) {
    with(|p| p.rotate(angle));
}

/// See [`Proc::scale`].
pub fn scale(sx: f64, sy: f64) {
    with(|p| p.scale(sx, sy));
}

/// See [`Proc::translate`].
pub fn translate(tx: f64, ty: f64) {
    with(|p| p.translate(tx, ty));
}

/// See [`Proc::shear`].
pub fn shear(ax: f64, ay: f64) {
    with(|p| p.shear(ax, ay));
}

/// See [`Proc::matrix`].
pub fn matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
    with(|p| p.matrix(a, b, c, d, e, f));
}

/// See [`Proc::reset_matrix`].
pub fn reset_matrix() {
    with(|p| p.reset_matrix());
}

/// See [`Proc::ellipse`].
pub fn ellipse(x: f64, y: f64, w: f64, h: f64) {
    with(|p| p.ellipse(x, y, w, h));
}

/// See [`Proc::circle`].
pub fn circle(x: f64, y: f64, d: f64) {
    with(|p| p.circle(x, y, d));
}

/// See [`Proc::arc`].
pub fn arc(x: f64, y: f64, w: f64, h: f64, beg: f64, end: f64) {
    with(|p| p.arc(x, y, w, h, beg, end));
}

/// See [`Proc::line`].
pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) {
    with(|p| p.line(x1, y1, x2, y2));
}

/// See [`Proc::quad`].
#[allow(clippy::too_many_arguments)]
pub fn quad(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) {
    with(|p| p.quad(x1, y1, x2, y2, x3, y3, x4, y4));
}

/// See [`Proc::rect`].
pub fn rect(x: f64, y: f64, w: f64, h: f64) {
    with(|p| p.rect(x, y, w, h));
}

/// See [`Proc::square`].
pub fn square(x: f64, y: f64, s: f64) {
    with(|p| p.square(x, y, s));
}

/// See [`Proc::triangle`].
pub fn triangle(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
    with(|p| p.triangle(x1, y1, x2, y2, x3, y3));
}

/// See [`Proc::polygon`].
pub fn polygon(pts: &[(f64, f64)]) {
    with(|p| p.polygon(pts));
}

/// See [`Proc::bezier`].
#[allow(clippy::too_many_arguments)]
pub fn bezier(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) {
    with(|p| p.bezier(x1, y1, x2, y2, x3, y3, x4, y4));
}

/// See [`Proc::curve`].
#[allow(clippy::too_many_arguments)]
pub fn curve(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64, x4: f64, y4: f64) {
    with(|p| p.curve(x1, y1, x2, y2, x3, y3, x4, y4));
}

/// See [`Proc::text`].
pub fn text(txt: &str, x: f64, y: f64) {
    with(|p| p.text(txt, x, y));
}

/// See [`Proc::draw_image`].
pub fn draw_image(img: &PreparedImage, x: f64, y: f64) {
    with(|p| p.draw_image(img, x, y));
}

/// See [`Proc::random_seed`].
pub fn random_seed(seed: u64) {
    with(|p| p.random_seed(seed));
}

/// See [`Proc::random`].
pub fn random(min: f64, max: f64) -> f64 {
    with(|p| p.random(min, max))
}

/// See [`Proc::random_gaussian`].
pub fn random_gaussian(mean: f64, std_dev: f64) -> f64 {
    with(|p| p.random_gaussian(mean, std_dev))
}

/// See [`Proc::frame_count`].
pub fn frame_count() -> u64 {
    with(|p| p.frame_count())
}

/// See [`Proc::no_loop`].
pub fn no_loop() {
    with(|p| p.no_loop());
}

/// See [`Proc::start_loop`].
pub fn start_loop() {
    with(|p| p.start_loop());
}

/// See [`Proc::frame_rate`].
pub fn frame_rate(period: Duration) {
    with(|p| p.frame_rate(period));
}

/// See [`Proc::screenshot`].
pub fn screenshot(path: impl AsRef<FsPath>) -> ProcResult<()> {
    with(|p| p.screenshot(path))
}

/// See [`Proc::mouse_position`].
pub fn mouse_position() -> (f64, f64) {
    with(|p| p.mouse_position())
}

/// See [`Proc::prev_mouse_position`].
pub fn prev_mouse_position() -> (f64, f64) {
    with(|p| p.prev_mouse_position())
}

/// See [`Proc::mouse_pressed`].
pub fn mouse_pressed() -> bool {
    with(|p| p.mouse_pressed())
}

/// See [`Proc::mouse_buttons`].
pub fn mouse_buttons() -> Buttons {
    with(|p| p.mouse_buttons())
}

/// See [`Proc::key_is_pressed`].
pub fn key_is_pressed() -> bool {
    with(|p| p.key_is_pressed())
}

/// See [`Proc::key_is_down`].
pub fn key_is_down(name: &str) -> bool {
    with(|p| p.key_is_down(name))
}

#[cfg(test)]
#[path = "../tests/unit/global.rs"]
mod tests;
