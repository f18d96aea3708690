use std::path::{Path, PathBuf};

use crate::driver::host::Host;
use crate::event::input::{Event, KeyEvent, KeyState};
use crate::foundation::error::{ProcError, ProcResult};
use crate::proc::processor::Proc;

/// User program driven by a [`FrameDriver`].
///
/// Panics raised by any callback are not caught; they end the loop and the process.
pub trait Sketch {
    /// Called once before the first tick.
    fn setup(&mut self, _p: &mut Proc) {}

    /// Called once per executed frame.
    fn draw(&mut self, p: &mut Proc);

    /// Called after each pointer event.
    fn mouse(&mut self, _p: &mut Proc) {}

    /// Called after each key press.
    fn key_pressed(&mut self, _p: &mut Proc) {}

    /// Called after each key release.
    fn key_released(&mut self, _p: &mut Proc) {}
}

type Callback<'a> = Box<dyn FnMut(&mut Proc) + 'a>;

/// A [`Sketch`] assembled from closures.
pub struct FnSketch<'a> {
    setup: Option<Callback<'a>>,
    draw: Callback<'a>,
    mouse: Option<Callback<'a>>,
    key_pressed: Option<Callback<'a>>,
    key_released: Option<Callback<'a>>,
}

impl std::fmt::Debug for FnSketch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSketch")
            .field("setup", &self.setup.is_some())
            .field("mouse", &self.mouse.is_some())
            .field("key_pressed", &self.key_pressed.is_some())
            .field("key_released", &self.key_released.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> FnSketch<'a> {
    /// A sketch that only draws.
    pub fn new(draw: impl FnMut(&mut Proc) + 'a) -> Self {
        Self {
            setup: None,
            draw: Box::new(draw),
            mouse: None,
            key_pressed: None,
            key_released: None,
        }
    }

    /// Run `f` once before the first frame.
    pub fn with_setup(mut self, f: impl FnMut(&mut Proc) + 'a) -> Self {
        self.setup = Some(Box::new(f));
        self
    }

    /// Run `f` after each pointer event.
    pub fn on_mouse(mut self, f: impl FnMut(&mut Proc) + 'a) -> Self {
        self.mouse = Some(Box::new(f));
        self
    }

    /// Run `f` after each key press.
    pub fn on_key_pressed(mut self, f: impl FnMut(&mut Proc) + 'a) -> Self {
        self.key_pressed = Some(Box::new(f));
        self
    }

    /// Run `f` after each key release.
    pub fn on_key_released(mut self, f: impl FnMut(&mut Proc) + 'a) -> Self {
        self.key_released = Some(Box::new(f));
        self
    }
}

impl Sketch for FnSketch<'_> {
    fn setup(&mut self, p: &mut Proc) {
        if let Some(f) = self.setup.as_mut() {
            f(p);
        }
    }

    fn draw(&mut self, p: &mut Proc) {
        (self.draw)(p);
    }

    fn mouse(&mut self, p: &mut Proc) {
        if let Some(f) = self.mouse.as_mut() {
            f(p);
        }
    }

    fn key_pressed(&mut self, p: &mut Proc) {
        if let Some(f) = self.key_pressed.as_mut() {
            f(p);
        }
    }

    fn key_released(&mut self, p: &mut Proc) {
        if let Some(f) = self.key_released.as_mut() {
            f(p);
        }
    }
}

/// Lifecycle of a [`FrameDriver`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverState {
    /// Not started.
    #[default]
    Idle,
    /// Draining host events.
    Running,
    /// The host went away.
    Stopped,
}

/// Runs a [`Sketch`] against a [`Host`]: setup once, then one draw per tick while
/// looping is enabled.
#[derive(Debug)]
pub struct FrameDriver {
    state: DriverState,
    screenshot_dir: PathBuf,
    screenshots: u32,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    /// Idle driver saving key-bound screenshots in the working directory.
    pub fn new() -> Self {
        Self {
            state: DriverState::Idle,
            screenshot_dir: PathBuf::from("."),
            screenshots: 0,
        }
    }

    /// Save F11 screenshots under `dir`.
    pub fn with_screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = dir.into();
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Number of screenshots taken through the F11 binding.
    pub fn screenshots(&self) -> u32 {
        self.screenshots
    }

    /// Drive `sketch` until the host is destroyed or runs out of events.
    ///
    /// Render and present failures stop the loop and are returned. A driver runs once.
    pub fn run<S, H>(&mut self, proc: &mut Proc, sketch: &mut S, host: &mut H) -> ProcResult<()>
    where
        S: Sketch + ?Sized,
        H: Host + ?Sized,
    {
        if self.state != DriverState::Idle {
            return Err(ProcError::config(format!(
                "frame driver already used (state {:?})",
                self.state
            )));
        }

        sketch.setup(proc);

        let control = proc.control();
        control.set_running(true);
        self.state = DriverState::Running;
        tracing::debug!(period = ?proc.frame_period(), "frame driver running");
        host.start(proc.frame_period(), control.clone());

        let res = self.event_loop(proc, sketch, host);

        control.set_running(false);
        self.state = DriverState::Stopped;
        tracing::debug!(frames = proc.frame_count(), "frame driver stopped");
        res
    }

    fn event_loop<S, H>(&mut self, proc: &mut Proc, sketch: &mut S, host: &mut H) -> ProcResult<()>
    where
        S: Sketch + ?Sized,
        H: Host + ?Sized,
    {
        while let Some(event) = host.next_event() {
            match event {
                Event::Destroy => break,
                Event::Key(e) => {
                    proc.events_mut().apply_key(&e);
                    match e.state {
                        KeyState::Press => {
                            self.key_binding(proc, host, &e);
                            sketch.key_pressed(proc);
                        }
                        KeyState::Release => sketch.key_released(proc),
                    }
                }
                Event::Pointer(e) => {
                    proc.events_mut().apply_pointer(&e);
                    sketch.mouse(proc);
                }
                Event::FrameTick => self.tick(proc, sketch, host)?,
                Event::Resize { width, height } => {
                    proc.resize(width, height)?;
                    self.tick(proc, sketch, host)?;
                }
            }
        }
        Ok(())
    }

    fn key_binding<H: Host + ?Sized>(&mut self, proc: &mut Proc, host: &mut H, e: &KeyEvent) {
        match e.name.as_str() {
            KeyEvent::ESCAPE => {
                tracing::debug!("escape pressed, closing host");
                host.close();
            }
            KeyEvent::F11 => {
                let path = self.screenshot_path();
                if let Err(err) = proc.screenshot(&path) {
                    tracing::warn!(path = %path.display(), error = %err, "could not take screenshot");
                }
                self.screenshots += 1;
            }
            _ => {}
        }
    }

    fn screenshot_path(&self) -> PathBuf {
        Path::new(&self.screenshot_dir).join(format!("out-{:03}.png", self.screenshots))
    }

    fn tick<S, H>(&mut self, proc: &mut Proc, sketch: &mut S, host: &mut H) -> ProcResult<()>
    where
        S: Sketch + ?Sized,
        H: Host + ?Sized,
    {
        if !proc.is_looping() {
            return Ok(());
        }
        proc.begin_frame();
        sketch.draw(proc);
        let frame = proc.end_frame()?;
        host.present(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/frame.rs"]
mod tests;
