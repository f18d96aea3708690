use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{ProcError, ProcResult};

/// A one-dimensional logical range.
///
/// `min` may exceed `max` (flipped axis) but the two are never equal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    /// Logical value mapped to device coordinate 0.
    pub min: f64,
    /// Logical value mapped to the device extent.
    pub max: f64,
}

impl Interval {
    /// Create a validated interval.
    pub fn new(min: f64, max: f64) -> ProcResult<Self> {
        let iv = Self { min, max };
        iv.validate()?;
        Ok(iv)
    }

    pub(crate) fn validate(&self) -> ProcResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ProcError::config(format!(
                "interval bounds must be finite (got [{}, {}])",
                self.min, self.max
            )));
        }
        if self.min == self.max {
            return Err(ProcError::config(format!(
                "interval must not be degenerate (min == max == {})",
                self.min
            )));
        }
        Ok(())
    }

    /// Signed length `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Which canvas axis a conversion applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// Bidirectional mapping between logical coordinates and device pixels.
///
/// Immutable once built; reconfiguring a canvas builds a new mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapping {
    x: Interval,
    y: Interval,
    canvas: Canvas,
}

/// Default canvas size in pixels.
pub const DEFAULT_SIZE: u32 = 400;

impl Default for CoordinateMapping {
    /// A 400x400 pixel canvas with a 1:1 logical mapping.
    fn default() -> Self {
        let side = f64::from(DEFAULT_SIZE);
        Self {
            x: Interval { min: 0.0, max: side },
            y: Interval { min: 0.0, max: side },
            canvas: Canvas {
                width: DEFAULT_SIZE,
                height: DEFAULT_SIZE,
            },
        }
    }
}

impl CoordinateMapping {
    /// Logical coordinates equal device pixels.
    pub fn pixels(width: u32, height: u32) -> ProcResult<Self> {
        let canvas = Canvas::new(width, height)?;
        Ok(Self {
            x: Interval::new(0.0, f64::from(width))?,
            y: Interval::new(0.0, f64::from(height))?,
            canvas,
        })
    }

    /// Logical coordinates in arbitrary physical units.
    pub fn physical(
        width: u32,
        height: u32,
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    ) -> ProcResult<Self> {
        Ok(Self {
            x: Interval::new(xmin, xmax)?,
            y: Interval::new(ymin, ymax)?,
            canvas: Canvas::new(width, height)?,
        })
    }

    /// Same logical intervals over a new device surface.
    pub fn resized(&self, width: u32, height: u32) -> ProcResult<Self> {
        Ok(Self {
            canvas: Canvas::new(width, height)?,
            ..*self
        })
    }

    /// Device surface.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Logical horizontal range.
    pub fn x_interval(&self) -> Interval {
        self.x
    }

    /// Logical vertical range.
    pub fn y_interval(&self) -> Interval {
        self.y
    }

    fn axis(&self, axis: Axis) -> (Interval, f64) {
        match axis {
            Axis::X => (self.x, f64::from(self.canvas.width)),
            Axis::Y => (self.y, f64::from(self.canvas.height)),
        }
    }

    /// Logical value to device pixels.
    pub fn user_to_system(&self, axis: Axis, v: f64) -> f64 {
        let (iv, extent) = self.axis(axis);
        (v - iv.min) / iv.span() * extent
    }

    /// Device pixels to logical value.
    pub fn system_to_user(&self, axis: Axis, v: f64) -> f64 {
        let (iv, extent) = self.axis(axis);
        v / extent * iv.span() + iv.min
    }

    /// Logical point to device point.
    pub fn to_device(&self, x: f64, y: f64) -> Point {
        Point::new(
            self.user_to_system(Axis::X, x),
            self.user_to_system(Axis::Y, y),
        )
    }

    /// Device point to logical point.
    pub fn to_logical(&self, p: Point) -> (f64, f64) {
        (
            self.system_to_user(Axis::X, p.x),
            self.system_to_user(Axis::Y, p.y),
        )
    }

    /// Device pixels per logical unit along an axis (signed).
    pub fn scale(&self, axis: Axis) -> f64 {
        let (iv, extent) = self.axis(axis);
        extent / iv.span()
    }

    /// Logical length to device length along an axis (signed).
    ///
    /// Unlike [`CoordinateMapping::user_to_system`] this ignores the interval origin.
    pub fn length_to_device(&self, axis: Axis, len: f64) -> f64 {
        len * self.scale(axis)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/mapping.rs"]
mod tests;
