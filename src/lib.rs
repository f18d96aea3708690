//! proc2d is an immediate-mode 2D drawing library.
//!
//! A [`Proc`] records shapes in logical coordinates into a per-frame display list and
//! rasterizes it on the CPU:
//!
//! - Configure the canvas with [`Proc::canvas`] or [`Proc::physical_canvas`]
//! - Style with a save/restore graphics state ([`Proc::push`] / [`Proc::pop`])
//! - Draw shapes, paths, text and images, under a stacked transform
//! - Drive frames with a [`FrameDriver`] over any [`Host`], or render headlessly with
//!   [`Proc::draw_frame`]
//!
//! The [`global`] module wraps one thread-local processor in free functions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod canvas;
mod config;
mod driver;
mod encode;
mod event;
mod foundation;
mod path;
mod proc;
mod render;
mod shapes;
mod state;
mod text;
mod transform;

pub mod global;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Color, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{ProcError, ProcResult};

pub use crate::assets::decode::{PreparedImage, decode_image, read_image};
pub use crate::canvas::mapping::{Axis, CoordinateMapping, DEFAULT_SIZE, Interval};
pub use crate::config::proc_config::{FRAME_PERIOD_ENV, LogicalExtents, ProcConfig};
pub use crate::driver::control::Control;
pub use crate::driver::frame::{DriverState, FnSketch, FrameDriver, Sketch};
pub use crate::driver::host::{ChannelHost, Host, ScriptedHost};
pub use crate::driver::ticker::Ticker;
pub use crate::encode::screenshot::{ScreenshotFormat, save_frame};
pub use crate::event::input::{
    Buttons, Event, EventSnapshot, KeyEvent, KeyState, KeyboardState, MouseState, PointerEvent,
    PointerKind,
};
pub use crate::path::builder::Path;
pub use crate::path::segment::Segment;
pub use crate::proc::processor::{DEFAULT_FRAME_PERIOD, DEFAULT_SEED, Proc};
pub use crate::render::backend::{
    BackendKind, CpuBackendOpts, FrameRGBA, RenderBackend, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::plan::{DrawOp, FramePlan, TextFont};
pub use crate::state::context::{
    Dash, GraphicsContext, StrokeCap, StrokeJoin, StrokeStyle, TextAlign, TextStyle,
};
pub use crate::text::font::FontId;
pub use crate::transform::affine::{TransformOp, compose};
